//! dormkeep-server: HTTP server for dormitory records
//!
//! Tracks rooms, students, utility bills and inventory in SQLite and
//! exposes create/list/get over JSON, plus booking a room for a student.

pub mod db;
pub mod http;

pub use db::{open_store, DbError, StoreConfig};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
