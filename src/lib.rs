pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{InMemoryOrderRepository, InMemoryProductRepository, SessionCarts};
pub use config::StoreConfig;
pub use core::{
    admin::AdminService, catalog::CatalogService, checkout::CheckoutService,
    shopping::CartService,
};
pub use domain::cart::{Cart, CartLine};
pub use domain::model::{
    Order, OrderId, OrderLine, Product, ProductDraft, ProductId, SessionId, ShippingDetails,
};
pub use domain::money::Money;
pub use utils::error::{Result, StoreError};
