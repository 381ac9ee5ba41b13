use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod console;
mod domain;
mod store;

use config::AppConfig;
use console::Session;
use domain::order::Order;
use store::OrderStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::default();

    // Logs go to stderr so they never interleave with the console on stdout.
    // Override with RUST_LOG, e.g. RUST_LOG=restaurant_orders=debug
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.default_log_filter)),
        )
        .init();

    tracing::info!("🍝 Starting restaurant order console");

    let menu = Arc::new(config.build_menu().context("Invalid menu")?);
    tracing::info!(dishes = menu.len(), "Loaded menu");

    // Without storage there is nothing useful to do, so startup failures are fatal.
    let store = OrderStore::connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to open order store at {}", config.database_url))?;
    store
        .initialize()
        .await
        .context("Failed to create the orders table")?;

    let mut session = Session::new(Order::new(menu), &store);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let result = session.run(stdin, tokio::io::stdout()).await;
    tracing::info!(line_items = session.order().len(), "Session ended");

    store.close().await;

    result
}
