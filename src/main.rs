use anyhow::Context;
use clap::Parser;
use sports_store::config::seed;
use sports_store::core::StoreSettings;
use sports_store::utils::error::ErrorSeverity;
use sports_store::utils::{logger, validation::Validate};
use sports_store::{
    CartService, CatalogService, CheckoutService, CliConfig, InMemoryOrderRepository,
    InMemoryProductRepository, ProductId, SessionCarts, SessionId, StoreConfig, StoreError,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting sports-store CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(cli).await {
        let Some(store_error) = e.downcast_ref::<StoreError>() else {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        };

        tracing::error!(
            "❌ {:#} (Category: {:?}, Severity: {:?})",
            e,
            store_error.category(),
            store_error.severity()
        );
        eprintln!("❌ {}", store_error.user_friendly_message());
        eprintln!("💡 {}", store_error.recovery_suggestion());

        let exit_code = match store_error.severity() {
            ErrorSeverity::Low => 4,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: CliConfig) -> anyhow::Result<()> {
    cli.validate()?;

    let mut config = match &cli.config {
        Some(path) => StoreConfig::from_file(path)
            .with_context(|| format!("loading store config from {}", path))?,
        None => StoreConfig::default(),
    };
    if let Some(csv) = &cli.catalog_csv {
        config.store.catalog_csv = Some(csv.clone());
    }
    config.validate()?;

    let products = InMemoryProductRepository::new();
    let orders = InMemoryOrderRepository::new();
    let carts = SessionCarts::new();
    seed::ensure_populated(&products, config.seed_products()?).await;

    println!("🏪 {}", config.store.store_name());

    let catalog = CatalogService::new(products.clone(), config.store.clone());
    let page = catalog.list(cli.category.as_deref(), cli.page).await;
    println!(
        "📦 Page {}/{} ({} products{})",
        page.paging.current_page,
        page.paging.total_pages(),
        page.paging.total_items,
        page.current_category
            .as_deref()
            .map(|c| format!(" in {}", c))
            .unwrap_or_default()
    );
    for product in &page.products {
        println!(
            "  #{:<3} {:<20} {:>10}  {}",
            product.id, product.name, product.price, product.category
        );
    }

    let session = SessionId::new(cli.session.clone());
    let shopping = CartService::new(products.clone(), carts.clone());
    for entry in &cli.add {
        shopping
            .add_to_cart(&session, entry.product_id, entry.quantity)
            .await?;
    }
    for id in &cli.remove {
        shopping.remove_from_cart(&session, ProductId(*id)).await?;
    }

    let summary = shopping.summary(&session).await;
    if !summary.lines.is_empty() || cli.checkout {
        println!("🛒 Cart ({} items)", summary.item_count);
        for line in &summary.lines {
            println!(
                "  {:>3} x {:<20} {:>10}",
                line.quantity,
                line.product_name,
                line.subtotal()
            );
        }
        println!("  Total: {}", summary.total);
    }

    if cli.checkout {
        let checkout = CheckoutService::new(carts.clone(), orders.clone());
        let order = checkout.checkout(&session, cli.shipping.into()).await?;
        println!("✅ Thanks! Order #{} placed", order.id);
        println!("{}", order.to_pretty_json()?);
    }

    Ok(())
}
