//! Database module: models and schema for the inventory store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{InventoryItem, User};
pub use schema::SQLITE_INIT;
pub use sqlite::{InventoryStore, SqlitePool};
