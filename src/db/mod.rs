//! Database module: models and schema for the work-log store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: the storage handle wrapping a sqlx pool

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DirectoryUser, NewWorkUpdate, User, WorkUpdate};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, WorklogStorage, connect};
