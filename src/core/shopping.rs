use crate::core::{CartProvider, OrderLine, ProductId, ProductRepository, SessionId};
use crate::domain::cart::Cart;
use crate::domain::money::Money;
use crate::utils::error::{Result, StoreError};
use crate::utils::validation::validate_quantity;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<OrderLine>,
    pub item_count: i64,
    pub total: Money,
}

/// Cart operations as a request handler would drive them: product ids are
/// resolved through the catalog, and quantities and totals are checked
/// before the cart changes.
pub struct CartService<P: ProductRepository, C: CartProvider> {
    products: P,
    carts: C,
}

impl<P: ProductRepository, C: CartProvider> CartService<P, C> {
    pub fn new(products: P, carts: C) -> Self {
        Self { products, carts }
    }

    pub async fn add_to_cart(
        &self,
        session: &SessionId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<CartSummary> {
        validate_quantity("quantity", quantity)?;
        let product = self
            .products
            .find(product_id)
            .await
            .ok_or(StoreError::ProductNotFound { id: product_id.0 })?;

        let cart = self.carts.cart_for(session).await;
        let mut cart = cart.lock().await;

        let current = cart.quantity_of(product_id).unwrap_or(0);
        if current.checked_add(quantity).is_none() {
            return Err(StoreError::validation(
                "quantity",
                format!(
                    "Adding {} to the {} already in the cart exceeds the maximum of {}",
                    quantity,
                    current,
                    i32::MAX
                ),
            ));
        }

        let mut updated = cart.clone();
        updated.add_item(product, quantity);
        if updated.checked_total_value().is_none() {
            return Err(StoreError::validation(
                "quantity",
                "Cart total would exceed the largest representable amount",
            ));
        }
        *cart = updated;

        tracing::info!(
            "Session {} added {} x product {}",
            session,
            quantity,
            product_id
        );

        Ok(summarize(&cart))
    }

    /// Lines are matched by id, so products deleted from the catalog can still
    /// be removed. Ids unknown to both the cart and the catalog are rejected.
    pub async fn remove_from_cart(
        &self,
        session: &SessionId,
        product_id: ProductId,
    ) -> Result<CartSummary> {
        let cart = self.carts.cart_for(session).await;
        let mut cart = cart.lock().await;

        if !cart.remove_product_id(product_id) && self.products.find(product_id).await.is_none() {
            return Err(StoreError::ProductNotFound { id: product_id.0 });
        }
        tracing::info!("Session {} removed product {}", session, product_id);

        Ok(summarize(&cart))
    }

    pub async fn summary(&self, session: &SessionId) -> CartSummary {
        let cart = self.carts.cart_for(session).await;
        let cart = cart.lock().await;
        summarize(&cart)
    }
}

fn summarize(cart: &Cart) -> CartSummary {
    CartSummary {
        lines: cart.lines().iter().map(|line| line.to_order_line()).collect(),
        item_count: cart.item_count(),
        total: cart.compute_total_value(),
    }
}
