use crate::domain::cart::Cart;
use crate::domain::model::SessionId;
use crate::domain::ports::CartProvider;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// One cart per session id, created on first use.
#[derive(Debug, Default, Clone)]
pub struct SessionCarts {
    carts: Arc<RwLock<HashMap<SessionId, Arc<Mutex<Cart>>>>>,
}

impl SessionCarts {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn active_sessions(&self) -> usize {
        self.carts.read().await.len()
    }
}

#[async_trait]
impl CartProvider for SessionCarts {
    async fn cart_for(&self, session: &SessionId) -> Arc<Mutex<Cart>> {
        if let Some(cart) = self.carts.read().await.get(session) {
            return Arc::clone(cart);
        }

        let mut carts = self.carts.write().await;
        Arc::clone(carts.entry(session.clone()).or_insert_with(|| {
            tracing::debug!("Creating cart for session {}", session);
            Arc::new(Mutex::new(Cart::new()))
        }))
    }

    async fn end_session(&self, session: &SessionId) -> bool {
        let removed = self.carts.write().await.remove(session).is_some();
        if removed {
            tracing::debug!("Discarded cart for session {}", session);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Product, ProductId};
    use crate::domain::money::Money;

    fn ball() -> Arc<Product> {
        Arc::new(Product {
            id: ProductId(3),
            name: "Soccer Ball".to_string(),
            description: "FIFA-approved size and weight".to_string(),
            category: "Soccer".to_string(),
            price: Money::from_cents(1950),
        })
    }

    #[tokio::test]
    async fn test_same_session_gets_same_cart() {
        let carts = SessionCarts::new();
        let session = SessionId::new("alice");

        carts.cart_for(&session).await.lock().await.add_item(ball(), 1);
        let again = carts.cart_for(&session).await;

        assert_eq!(again.lock().await.lines().len(), 1);
        assert_eq!(carts.active_sessions().await, 1);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let carts = SessionCarts::new();
        carts
            .cart_for(&SessionId::new("alice"))
            .await
            .lock()
            .await
            .add_item(ball(), 2);

        let bob = carts.cart_for(&SessionId::new("bob")).await;
        assert!(bob.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_end_session_discards_cart() {
        let carts = SessionCarts::new();
        let session = SessionId::new("alice");
        carts.cart_for(&session).await.lock().await.add_item(ball(), 1);

        assert!(carts.end_session(&session).await);
        assert!(!carts.end_session(&session).await);
        assert!(carts.cart_for(&session).await.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_adds_in_one_session_serialize() {
        let carts = SessionCarts::new();
        let session = SessionId::new("busy");

        let mut handles = Vec::new();
        for _ in 0..16 {
            let carts = carts.clone();
            let session = session.clone();
            handles.push(tokio::spawn(async move {
                carts.cart_for(&session).await.lock().await.add_item(ball(), 1);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let cart = carts.cart_for(&session).await;
        let cart = cart.lock().await;
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 16);
    }
}
