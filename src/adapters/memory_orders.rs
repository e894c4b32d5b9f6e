use crate::domain::model::{Order, OrderId};
use crate::domain::ports::OrderRepository;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Inner {
    orders: BTreeMap<OrderId, Order>,
    next_id: u64,
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryOrderRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn set_shipped(&self, id: OrderId, shipped: bool) -> bool {
        match self.inner.write().await.orders.get_mut(&id) {
            Some(order) => {
                order.shipped = shipped;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save_order(&self, mut order: Order) -> Order {
        let mut inner = self.inner.write().await;

        if order.id.0 == 0 {
            inner.next_id += 1;
            order.id = OrderId(inner.next_id);
        } else {
            inner.next_id = inner.next_id.max(order.id.0);
        }

        inner.orders.insert(order.id, order.clone());
        order
    }

    async fn orders(&self) -> Vec<Order> {
        self.inner.read().await.orders.values().cloned().collect()
    }

    async fn mark_shipped(&self, id: OrderId) -> bool {
        self.set_shipped(id, true).await
    }

    async fn reset_shipped(&self, id: OrderId) -> bool {
        self.set_shipped(id, false).await
    }
}
