//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and conversions
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `store.rs`: CRUD surface over the pool

pub mod models;
pub mod schema;
pub mod store;

pub use models::{DbListing, DbSession, DbUser, NewListing};
pub use schema::SQLITE_INIT;
pub use store::{JourneyStore, SqlitePool};

use crate::error::JourneyError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Open the database behind `database_url`, creating the file if missing,
/// and run the bundled DDL.
pub async fn connect(database_url: &str) -> Result<JourneyStore, JourneyError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    let store = JourneyStore::new(pool);
    store.init_schema().await?;
    Ok(store)
}
