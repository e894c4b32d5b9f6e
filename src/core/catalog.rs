use crate::core::{Product, ProductRepository, StoreSettings};
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagingInfo {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
}

impl PagingInfo {
    pub fn total_pages(&self) -> usize {
        if self.items_per_page == 0 {
            return 0;
        }
        self.total_items.div_ceil(self.items_per_page)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductPage {
    pub products: Vec<Arc<Product>>,
    pub paging: PagingInfo,
    pub current_category: Option<String>,
}

pub struct CatalogService<P: ProductRepository, S: StoreSettings> {
    products: P,
    settings: S,
}

impl<P: ProductRepository, S: StoreSettings> CatalogService<P, S> {
    pub fn new(products: P, settings: S) -> Self {
        Self { products, settings }
    }

    /// One page of products, optionally restricted to a category.
    ///
    /// Pages start at 1; page 0 is read as page 1.
    pub async fn list(&self, category: Option<&str>, page: usize) -> ProductPage {
        let page = page.max(1);
        let page_size = self.settings.page_size();

        let matching: Vec<Arc<Product>> = self
            .products
            .products()
            .await
            .into_iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .collect();
        let total_items = matching.len();

        let products = matching
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .collect::<Vec<_>>();

        tracing::debug!(
            "Catalog page {} (category: {:?}) -> {} of {} products",
            page,
            category,
            products.len(),
            total_items
        );

        ProductPage {
            products,
            paging: PagingInfo {
                current_page: page,
                items_per_page: page_size,
                total_items,
            },
            current_category: category.map(str::to_string),
        }
    }

    pub async fn categories(&self) -> Vec<String> {
        self.products
            .products()
            .await
            .iter()
            .map(|p| p.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
