use crate::domain::model::{OrderLine, Product, ProductId};
use crate::domain::money::Money;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: Arc<Product>,
    pub quantity: i32,
}

impl CartLine {
    pub fn subtotal(&self) -> Money {
        self.product.price.times(self.quantity)
    }

    pub fn to_order_line(&self) -> OrderLine {
        OrderLine {
            product_id: self.product.id,
            product_name: self.product.name.clone(),
            unit_price: self.product.price,
            quantity: self.quantity,
        }
    }
}

/// Products a single session intends to buy.
///
/// Lines keep insertion order and hold at most one entry per product id.
/// Quantities are stored as given; callers reject non-positive values
/// before reaching the cart. Merged quantities and totals saturate at their
/// integer limits instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn add_item(&mut self, product: Arc<Product>, quantity: i32) {
        match self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine { product, quantity }),
        }
    }

    pub fn remove_line(&mut self, product: &Product) {
        self.remove_product_id(product.id);
    }

    /// Removes the line for `id`, returning whether one was present.
    pub fn remove_product_id(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product.id != id);
        self.lines.len() != before
    }

    pub fn quantity_of(&self, id: ProductId) -> Option<i32> {
        self.lines
            .iter()
            .find(|line| line.product.id == id)
            .map(|line| line.quantity)
    }

    pub fn compute_total_value(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Exact total, or `None` when it does not fit in `Money`.
    pub fn checked_total_value(&self) -> Option<Money> {
        self.lines.iter().try_fold(Money::zero(), |total, line| {
            total.checked_add(line.product.price.checked_times(line.quantity)?)
        })
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|line| i64::from(line.quantity)).sum()
    }
}
