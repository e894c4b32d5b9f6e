use crate::config::seed;
use crate::core::{ProductDraft, StoreSettings};
use crate::utils::error::{Result, StoreError};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PAGE_SIZE: usize = 4;
const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub store: StoreSection,
    /// Seed catalog; takes precedence over `store.catalog_csv`.
    #[serde(default)]
    pub products: Vec<ProductDraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub name: String,
    pub page_size: usize,
    pub catalog_csv: Option<String>,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            name: "SportsStore".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            catalog_csv: None,
        }
    }
}

impl StoreSettings for StoreSection {
    fn store_name(&self) -> &str {
        &self.name
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}

impl StoreConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StoreError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after replacing `${VAR}` references with environment values.
    /// Unset variables are left as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| StoreError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StoreError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// The products a fresh store starts with: the inline list, else the CSV
    /// file, else the built-in catalog.
    pub fn seed_products(&self) -> Result<Vec<ProductDraft>> {
        if !self.products.is_empty() {
            return Ok(self.products.clone());
        }
        match &self.store.catalog_csv {
            Some(path) => {
                let drafts = seed::load_csv(path)?;
                drafts.iter().try_for_each(|draft| draft.validate())?;
                Ok(drafts)
            }
            None => Ok(seed::default_products()),
        }
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("store.name", &self.store.name)?;
        validate_range("store.page_size", self.store.page_size, 1, MAX_PAGE_SIZE)?;
        if let Some(path) = &self.store.catalog_csv {
            validate_path("store.catalog_csv", path)?;
        }
        for product in &self.products {
            product.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;

    #[test]
    fn test_defaults_when_empty() {
        let config = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(config.store.name, "SportsStore");
        assert_eq!(config.store.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.validate().is_ok());
        assert_eq!(config.seed_products().unwrap().len(), 9);
    }

    #[test]
    fn test_parse_inline_products() {
        let config = StoreConfig::from_toml_str(
            r#"
            [store]
            name = "Corner Shop"
            page_size = 2

            [[products]]
            name = "Kayak"
            description = "A boat for one person"
            category = "Watersports"
            price = "275.00"

            [[products]]
            name = "Thinking Cap"
            description = "Improve brain efficiency by 75%"
            category = "Chess"
            price = 16
            "#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.store.page_size(), 2);
        let seeds = config.seed_products().unwrap();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[1].price, Money::from_cents(1600));
    }

    #[test]
    fn test_float_prices_are_rejected() {
        let result = StoreConfig::from_toml_str(
            r#"
            [[products]]
            name = "Kayak"
            description = "A boat for one person"
            category = "Watersports"
            price = 275.5
            "#,
        );
        assert!(matches!(result, Err(StoreError::ConfigError { .. })));
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("SPORTS_STORE_TEST_NAME", "Env Store");
        let config = StoreConfig::from_toml_str(
            r#"
            [store]
            name = "${SPORTS_STORE_TEST_NAME}"
            catalog_csv = "${SPORTS_STORE_TEST_UNSET_DIR}/products.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.store.name, "Env Store");
        assert_eq!(
            config.store.catalog_csv.as_deref(),
            Some("${SPORTS_STORE_TEST_UNSET_DIR}/products.csv")
        );
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = StoreConfig::default();
        config.store.page_size = 0;
        assert!(config.validate().is_err());

        let mut config = StoreConfig::default();
        config.products.push(ProductDraft {
            name: "Free".to_string(),
            description: "Nothing".to_string(),
            category: "Misc".to_string(),
            price: Money::zero(),
        });
        assert!(config.validate().is_err());
    }
}
