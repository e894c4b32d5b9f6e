use crate::core::{Order, OrderId, OrderRepository, Product, ProductDraft, ProductId, ProductRepository};
use crate::utils::error::{Result, StoreError};
use crate::utils::validation::{validate_non_empty_string, validate_positive_price, Validate};

impl Validate for ProductDraft {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_non_empty_string("description", &self.description)?;
        validate_non_empty_string("category", &self.category)?;
        validate_positive_price("price", self.price)?;
        Ok(())
    }
}

/// Product maintenance and order fulfilment for store administrators.
pub struct AdminService<P: ProductRepository, O: OrderRepository> {
    products: P,
    orders: O,
}

impl<P: ProductRepository, O: OrderRepository> AdminService<P, O> {
    pub fn new(products: P, orders: O) -> Self {
        Self { products, orders }
    }

    pub async fn create(&self, draft: ProductDraft) -> Result<Product> {
        draft.validate()?;
        let product = self
            .products
            .save(draft.into_product(ProductId::UNASSIGNED))
            .await;
        tracing::info!("Created product {} ({})", product.id, product.name);
        Ok(product)
    }

    pub async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product> {
        draft.validate()?;
        if self.products.find(id).await.is_none() {
            return Err(StoreError::ProductNotFound { id: id.0 });
        }
        let product = self.products.save(draft.into_product(id)).await;
        tracing::info!("Updated product {} ({})", product.id, product.name);
        Ok(product)
    }

    pub async fn delete(&self, id: ProductId) -> Result<Product> {
        let product = self
            .products
            .delete(id)
            .await
            .ok_or(StoreError::ProductNotFound { id: id.0 })?;
        tracing::info!("Deleted product {} ({})", product.id, product.name);
        Ok(product)
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.orders.orders().await
    }

    pub async fn mark_shipped(&self, id: OrderId) -> Result<()> {
        if !self.orders.mark_shipped(id).await {
            return Err(StoreError::OrderNotFound { id: id.0 });
        }
        tracing::info!("Order {} marked as shipped", id);
        Ok(())
    }

    pub async fn reset_shipped(&self, id: OrderId) -> Result<()> {
        if !self.orders.reset_shipped(id).await {
            return Err(StoreError::OrderNotFound { id: id.0 });
        }
        tracing::info!("Order {} returned to unshipped", id);
        Ok(())
    }
}
