//! Contact App - Main entry point

use anyhow::Result;
use contact_app::repositories::{
    ContactRepository, InMemoryContactRepository, SqliteContactRepository,
};
use contact_app::services::{ContactService, ContactServiceImpl};
use contact_app::{build_router, AppState, Config, FlashStore, Views};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first: LOG_LEVEL feeds the log filter
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize the contact store
    let repo: Arc<dyn ContactRepository> = if config.uses_in_memory_store() {
        info!("Using in-memory contact store");
        Arc::new(InMemoryContactRepository::new())
    } else {
        info!("Using SQLite contact store at {}", config.database);
        Arc::new(SqliteContactRepository::open(&config.database)?)
    };

    let service = Arc::new(ContactServiceImpl::new(repo)) as Arc<dyn ContactService>;

    // Flash messages, swept at the TTL interval
    let flash = FlashStore::new(config.flash_ttl());
    let _sweeper = flash.spawn_sweeper(config.flash_ttl());

    let views = Views::new()?;
    let app = build_router(AppState::new(service, flash, views));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    contact_app::server::run_server(listener, app).await?;

    Ok(())
}
