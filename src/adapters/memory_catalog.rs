use crate::domain::model::{Product, ProductId};
use crate::domain::ports::ProductRepository;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Inner {
    products: BTreeMap<ProductId, Arc<Product>>,
    next_id: u64,
}

/// Product store kept in process memory, ordered by id.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.products.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn products(&self) -> Vec<Arc<Product>> {
        self.inner.read().await.products.values().cloned().collect()
    }

    async fn find(&self, id: ProductId) -> Option<Arc<Product>> {
        self.inner.read().await.products.get(&id).cloned()
    }

    async fn save(&self, mut product: Product) -> Product {
        let mut inner = self.inner.write().await;

        if product.id.is_assigned() {
            inner.next_id = inner.next_id.max(product.id.0);
        } else {
            inner.next_id += 1;
            product.id = ProductId(inner.next_id);
        }

        tracing::debug!("Saving product {} ({})", product.id, product.name);
        // Carts holding the previous Arc keep the old snapshot.
        inner.products.insert(product.id, Arc::new(product.clone()));
        product
    }

    async fn delete(&self, id: ProductId) -> Option<Product> {
        let removed = self.inner.write().await.products.remove(&id)?;
        tracing::debug!("Deleted product {}", id);
        Some(Arc::unwrap_or_clone(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;

    fn draft(name: &str) -> Product {
        Product {
            id: ProductId::UNASSIGNED,
            name: name.to_string(),
            description: "desc".to_string(),
            category: "Soccer".to_string(),
            price: Money::from_cents(100),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();
        let a = repo.save(draft("A")).await;
        let b = repo.save(draft("B")).await;

        assert_eq!(a.id, ProductId(1));
        assert_eq!(b.id, ProductId(2));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_save_with_id_replaces_and_advances_counter() {
        let repo = InMemoryProductRepository::new();
        let mut explicit = draft("Explicit");
        explicit.id = ProductId(10);
        repo.save(explicit.clone()).await;

        explicit.name = "Renamed".to_string();
        repo.save(explicit).await;
        let next = repo.save(draft("Next")).await;

        assert_eq!(repo.find(ProductId(10)).await.unwrap().name, "Renamed");
        assert_eq!(next.id, ProductId(11));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryProductRepository::new();
        let saved = repo.save(draft("A")).await;

        assert_eq!(repo.delete(saved.id).await.map(|p| p.name), Some("A".to_string()));
        assert!(repo.delete(saved.id).await.is_none());
        assert!(repo.is_empty().await);
    }
}
