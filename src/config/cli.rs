use crate::core::{ProductId, ShippingDetails};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::{Args, Parser};

/// A product id and quantity given on the command line as `ID[:QTY]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEntry {
    pub product_id: ProductId,
    pub quantity: i32,
}

pub fn parse_cart_entry(value: &str) -> std::result::Result<CartEntry, String> {
    let (id, quantity) = match value.split_once(':') {
        Some((id, quantity)) => (id, quantity),
        None => (value, "1"),
    };

    let product_id = id
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid product id '{}': {}", id, e))?;
    let quantity = quantity
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid quantity '{}': {}", quantity, e))?;

    Ok(CartEntry {
        product_id: ProductId(product_id),
        quantity,
    })
}

#[derive(Debug, Clone, Default, Args)]
pub struct ShippingArgs {
    #[arg(long = "ship-name")]
    pub name: Option<String>,

    #[arg(long = "ship-line1")]
    pub line1: Option<String>,

    #[arg(long = "ship-line2")]
    pub line2: Option<String>,

    #[arg(long = "ship-line3")]
    pub line3: Option<String>,

    #[arg(long = "ship-city")]
    pub city: Option<String>,

    #[arg(long = "ship-state")]
    pub state: Option<String>,

    #[arg(long = "ship-zip")]
    pub zip: Option<String>,

    #[arg(long = "ship-country")]
    pub country: Option<String>,

    #[arg(long, help = "Gift wrap the order")]
    pub gift_wrap: bool,
}

impl From<ShippingArgs> for ShippingDetails {
    fn from(args: ShippingArgs) -> Self {
        ShippingDetails {
            name: args.name.unwrap_or_default(),
            line1: args.line1.unwrap_or_default(),
            line2: args.line2,
            line3: args.line3,
            city: args.city.unwrap_or_default(),
            state: args.state.unwrap_or_default(),
            zip: args.zip,
            country: args.country.unwrap_or_default(),
            gift_wrap: args.gift_wrap,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "sports-store")]
#[command(about = "Browse the SportsStore catalog, fill a cart and check out")]
pub struct CliConfig {
    #[arg(long, help = "Store configuration file (TOML)")]
    pub config: Option<String>,

    #[arg(long, help = "Seed the catalog from a CSV file")]
    pub catalog_csv: Option<String>,

    #[arg(long, help = "Only list products in this category")]
    pub category: Option<String>,

    #[arg(long, default_value = "1")]
    pub page: usize,

    #[arg(long, default_value = "cli-session")]
    pub session: String,

    #[arg(long = "add", value_parser = parse_cart_entry, help = "Add ID[:QTY] to the cart")]
    pub add: Vec<CartEntry>,

    #[arg(long = "remove", help = "Remove a product id from the cart")]
    pub remove: Vec<u64>,

    #[arg(long, help = "Place an order with the cart contents")]
    pub checkout: bool,

    #[command(flatten)]
    pub shipping: ShippingArgs,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("session", &self.session)?;
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Some(path) = &self.catalog_csv {
            validate_path("catalog_csv", path)?;
        }
        if let Some(category) = &self.category {
            validate_non_empty_string("category", category)?;
        }
        Ok(())
    }
}
