//! # Product Catalog Demo
//!
//! Starts the catalog against the configured database and walks through every
//! message pattern once: create, list, update, validate, remove.

use clap::Parser;
use product_catalog::config::CatalogConfig;
use product_catalog::lifecycle::{setup_tracing, CatalogSystem};
use product_catalog::model::{PaginationQuery, ProductCreate, ProductUpdate};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CatalogConfig::parse();
    setup_tracing(config.log_format);

    info!(database_url = %config.database_url, "Starting product catalog");
    let system = CatalogSystem::start(&config).await?;
    let client = system.client.clone();

    let span = tracing::info_span!("seeding");
    let ids = async {
        let mut ids = Vec::new();
        for (name, price) in [("Keyboard", 49.9), ("Mouse", 19.99), ("Monitor", 189.0)] {
            let product = client.create_product(ProductCreate::new(name, price)).await?;
            info!(product_id = product.id, name = %product.name, "Product created");
            ids.push(product.id);
        }
        Ok::<_, Box<dyn std::error::Error>>(ids)
    }
    .instrument(span)
    .await?;

    let page = client
        .find_all_products(PaginationQuery::new(1, 2).unwrap_or_default())
        .await?;
    info!(
        returned = page.data.len(),
        total = page.meta.total_pages,
        last_page = page.meta.last_page,
        "First page loaded"
    );

    let updated = client
        .update_product(ids[1], ProductUpdate::default().price(17.5))
        .await?;
    info!(product_id = updated.id, price = updated.price, "Price changed");

    let removed = client.remove_product(ids[0]).await?;
    info!(product_id = removed.id, available = removed.available, "Product removed");

    match client.find_one_product(ids[0]).await {
        Ok(product) => warn!(product_id = product.id, "Removed product still visible"),
        Err(e) => info!(error = %e, "Removed product is hidden"),
    }

    let mut requested = ids.clone();
    requested.push(ids[1]);
    let validated = client.validate_products(requested).await?;
    info!(validated = validated.len(), "Validation passed");

    if let Err(e) = client.validate_products(vec![ids[2], 9_999]).await {
        info!(error = %e, "Validation rejected unknown id");
    }

    drop(client);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
