pub mod auth;
pub mod ledger;

pub use auth::Authenticator;
pub use ledger::Ledger;
