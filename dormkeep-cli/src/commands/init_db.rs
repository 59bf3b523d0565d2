//! Create the database schema without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use dormkeep_server::{open_store, StoreConfig};

use super::StoreArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let store = StoreConfig::from(args.store);

    let pool = open_store(&store)
        .await
        .with_context(|| format!("Failed to initialize store at {}", store.database_url))?;
    pool.close().await;

    println!("Schema ready at {}", store.database_url);
    Ok(())
}
