pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod service;

pub use error::WorklogError;
pub use service::auth::Authenticator;
pub use service::ledger::Ledger;
