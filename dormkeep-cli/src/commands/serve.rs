//! HTTP server command
//!
//! Opens the store (creating the schema if needed) and serves the API.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use dormkeep_server::{open_store, run_server, ServerConfig, StoreConfig};

use super::StoreArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "DORMKEEP_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store = StoreConfig::from(args.store);
    tracing::info!("Starting dormkeep server on {}", args.bind);

    let pool = open_store(&store)
        .await
        .with_context(|| format!("Failed to open store at {}", store.database_url))?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
