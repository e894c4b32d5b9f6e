use crate::core::{ProductDraft, ProductId, ProductRepository};
use crate::domain::money::Money;
use crate::utils::error::Result;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CATALOG: &[(&str, &str, &str, i64)] = &[
    ("Kayak", "A boat for one person", "Watersports", 27500),
    ("Lifejacket", "Protective and fashionable", "Watersports", 4895),
    ("Soccer Ball", "FIFA-approved size and weight", "Soccer", 1950),
    ("Corner Flags", "Give your playing field a professional touch", "Soccer", 3495),
    ("Stadium", "Flat-packed 35,000-seat stadium", "Soccer", 7950000),
    ("Thinking Cap", "Improve brain efficiency by 75%", "Chess", 1600),
    ("Unsteady Chair", "Secretly give your opponent a disadvantage", "Chess", 2995),
    ("Human Chess Board", "A fun game for the family", "Chess", 7500),
    ("Bling-Bling King", "Gold-plated, diamond-studded King", "Chess", 120000),
];

pub fn default_products() -> Vec<ProductDraft> {
    DEFAULT_CATALOG
        .iter()
        .map(|&(name, description, category, cents)| ProductDraft {
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            price: Money::from_cents(cents),
        })
        .collect()
}

/// Stores `drafts` only when the repository holds no products yet.
/// Returns how many products were added.
pub async fn ensure_populated<P: ProductRepository>(repo: &P, drafts: Vec<ProductDraft>) -> usize {
    if !repo.products().await.is_empty() {
        tracing::debug!("Catalog already populated, skipping seed");
        return 0;
    }

    let count = drafts.len();
    for draft in drafts {
        repo.save(draft.into_product(ProductId::UNASSIGNED)).await;
    }
    tracing::info!("Seeded catalog with {} products", count);
    count
}

// csv infers numeric types for untagged fields, so prices are read as text.
#[derive(Debug, Deserialize)]
struct CsvProductRow {
    name: String,
    description: String,
    category: String,
    price: String,
}

/// Reads products from a CSV file with a `name,description,category,price` header.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<ProductDraft>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut drafts = Vec::new();
    for row in reader.deserialize::<CsvProductRow>() {
        let row = row?;
        drafts.push(ProductDraft {
            price: row.price.parse()?,
            name: row.name,
            description: row.description,
            category: row.category,
        });
    }

    tracing::debug!(
        "Loaded {} products from {}",
        drafts.len(),
        path.as_ref().display()
    );
    Ok(drafts)
}
