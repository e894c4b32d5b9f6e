use crate::domain::cart::Cart;
use crate::domain::model::{Order, OrderId, Product, ProductId, SessionId};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Hands out the cart belonging to a session.
///
/// Repeated calls with the same session id return the same cart. Holding the
/// returned mutex serializes concurrent requests of one session.
#[async_trait]
pub trait CartProvider: Send + Sync {
    async fn cart_for(&self, session: &SessionId) -> Arc<Mutex<Cart>>;
    async fn end_session(&self, session: &SessionId) -> bool;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn products(&self) -> Vec<Arc<Product>>;
    async fn find(&self, id: ProductId) -> Option<Arc<Product>>;
    /// Inserts when the id is unassigned, replaces otherwise.
    async fn save(&self, product: Product) -> Product;
    async fn delete(&self, id: ProductId) -> Option<Product>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save_order(&self, order: Order) -> Order;
    async fn orders(&self) -> Vec<Order>;
    async fn mark_shipped(&self, id: OrderId) -> bool;
    async fn reset_shipped(&self, id: OrderId) -> bool;
}

pub trait StoreSettings: Send + Sync {
    fn store_name(&self) -> &str;
    fn page_size(&self) -> usize;
}
