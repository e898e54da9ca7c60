//! Bookshelf report
//!
//! Loads the configured dataset and prints the result of each catalog query.

use std::io::{self, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf::{config::AppConfig, services::report, Catalog};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("bookshelf={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting bookshelf report v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Catalog::load(&config.data)?;

    let mut out = io::stdout().lock();
    report::write_report(&catalog, &mut out)?;
    out.flush()?;

    Ok(())
}
