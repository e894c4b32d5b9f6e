pub mod admin;
pub mod catalog;
pub mod checkout;
pub mod shopping;

pub use crate::domain::model::{
    Order, OrderId, OrderLine, Product, ProductDraft, ProductId, SessionId, ShippingDetails,
};
pub use crate::domain::ports::{CartProvider, OrderRepository, ProductRepository, StoreSettings};
pub use crate::utils::error::Result;
