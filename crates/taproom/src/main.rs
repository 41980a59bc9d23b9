//! Taproom Beer Service
//!
//! A small CRUD HTTP resource server for beer records.

use clap::Parser;
use taproom_api::{ServerConfig, create_app_with_config, init_logging};
use taproom_store::MemoryStore;
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        "Starting Taproom beer service"
    );

    let store = MemoryStore::new();
    let app = create_app_with_config(store, config.clone());
    serve(app, &config).await
}
