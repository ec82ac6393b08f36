//! Mintmark currency registry CLI
//!
//! Builds the registry from the built-in ISO 4217 table, refreshes it from the
//! official list (download, else local copy) and prints lookups as JSON.
//!
//! Usage:
//!   mintmark             - print every registered currency
//!   mintmark EUR 986 xyz - resolve each argument by code, then numeric code

mod lookup;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mintmark_core::CurrencyRegistry;
use mintmark_iso::{IsoSource, refresh};
use mintmark_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let registry = CurrencyRegistry::new();
    info!(currencies = registry.len(), "Currency registry ready");

    if config.refresh.enabled {
        let source = IsoSource::new(config.iso.clone())?;
        if let Err(e) = refresh(&registry, &source).await {
            warn!(
                error = %e,
                code = e.error_code(),
                transient = e.is_transient(),
                "ISO 4217 refresh failed, keeping built-in table"
            );
        }
    }

    let queries: Vec<String> = std::env::args().skip(1).collect();
    let output = if queries.is_empty() {
        serde_json::to_string_pretty(&registry.snapshot())?
    } else {
        let results: Vec<_> = queries
            .iter()
            .map(|q| lookup::lookup(&registry, q))
            .collect();
        serde_json::to_string_pretty(&results)?
    };
    println!("{output}");

    Ok(())
}
