use crate::core::{CartProvider, Order, OrderId, OrderRepository, SessionId, ShippingDetails};
use crate::utils::error::{Result, StoreError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use chrono::Utc;

impl Validate for ShippingDetails {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_non_empty_string("line1", &self.line1)?;
        validate_non_empty_string("city", &self.city)?;
        validate_non_empty_string("state", &self.state)?;
        validate_non_empty_string("country", &self.country)?;
        Ok(())
    }
}

/// Turns a session's cart into a stored order.
pub struct CheckoutService<C: CartProvider, O: OrderRepository> {
    carts: C,
    orders: O,
}

impl<C: CartProvider, O: OrderRepository> CheckoutService<C, O> {
    pub fn new(carts: C, orders: O) -> Self {
        Self { carts, orders }
    }

    /// The cart is cleared only once the order has been saved.
    pub async fn checkout(&self, session: &SessionId, shipping: ShippingDetails) -> Result<Order> {
        let cart = self.carts.cart_for(session).await;
        let mut cart = cart.lock().await;

        if cart.is_empty() {
            tracing::warn!("Checkout attempted with an empty cart (session {})", session);
            return Err(StoreError::EmptyCart {
                session: session.to_string(),
            });
        }
        shipping.validate()?;

        let total = cart
            .checked_total_value()
            .ok_or_else(|| StoreError::validation("total", "Order total is out of range"))?;

        let order = Order {
            id: OrderId::default(),
            lines: cart.lines().iter().map(|line| line.to_order_line()).collect(),
            shipping,
            total,
            shipped: false,
            placed_at: Utc::now(),
        };

        let order = self.orders.save_order(order).await;
        cart.clear();

        tracing::info!(
            "Order {} placed for session {}: {} lines, total {}",
            order.id,
            session,
            order.lines.len(),
            order.total
        );
        Ok(order)
    }
}
