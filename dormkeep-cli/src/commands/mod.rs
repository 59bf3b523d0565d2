//! Command implementations for the dormkeep CLI

pub mod init_db;
pub mod serve;

pub use init_db::run_init_db;
pub use serve::run_serve;

use clap::Args;
use dormkeep_server::db::pool::{DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};
use dormkeep_server::StoreConfig;

/// Store options shared by every command that opens the database
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Database URL (e.g. sqlite://dormitory.db)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, env = "DORMKEEP_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl From<StoreArgs> for StoreConfig {
    fn from(args: StoreArgs) -> Self {
        Self {
            database_url: args.database_url,
            max_connections: args.max_connections,
        }
    }
}
