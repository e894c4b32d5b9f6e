// Adapters layer: in-memory implementations of the domain ports.

pub mod memory_catalog;
pub mod memory_orders;
pub mod session_carts;

pub use memory_catalog::InMemoryProductRepository;
pub use memory_orders::InMemoryOrderRepository;
pub use session_carts::SessionCarts;
