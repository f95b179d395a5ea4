use crate::db::models::{DirectoryUser, User};
use crate::db::sqlite::WorklogStorage;
use crate::error::WorklogError;
use tracing::{info, warn};

/// Matches the hashing cost of the deployments this replaces, so existing
/// hashes keep verifying.
const BCRYPT_COST: u32 = 10;

const ROLE_EMPLOYEE: &str = "employee";
const ROLE_ADMIN: &str = "admin";

/// Result of a successful login: the account record plus whether the client
/// must still prompt for a one-time work-category selection.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub requires_type_selection: bool,
}

/// Owns the `users` table: verifies or auto-provisions credentials on login,
/// seeds the fixed demo accounts, and projects the user directory.
#[derive(Clone)]
pub struct Authenticator {
    storage: WorklogStorage,
}

impl Authenticator {
    pub fn new(storage: WorklogStorage) -> Self {
        Self { storage }
    }

    /// Insert-or-replace the two fixed demo accounts.
    pub async fn seed_defaults(&self) -> Result<(), WorklogError> {
        let seeds = [
            ("alice", "123", ROLE_EMPLOYEE, "Alice Smith"),
            ("admin", "admin", ROLE_ADMIN, "John Admin"),
        ];
        for (username, password, role, name) in seeds {
            let hash = bcrypt::hash(password, BCRYPT_COST)?;
            self.storage
                .upsert_user(username, &hash, role, name, "software")
                .await?;
        }
        info!("seeded default accounts");
        Ok(())
    }

    /// Verify credentials, or implicitly register an unknown username.
    ///
    /// An unknown username is treated as a first login: the account is
    /// created on the spot as an employee with no work category. Load-bearing
    /// behavior inherited from the system this replaces; clients rely on it.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, WorklogError> {
        match self.storage.find_user(username).await? {
            Some(user) => {
                let stored = user.password.as_deref().unwrap_or_default();
                if !bcrypt::verify(password, stored)? {
                    warn!(username, "login rejected: wrong password");
                    return Err(WorklogError::InvalidCredentials);
                }
                let requires_type_selection =
                    user.role == ROLE_EMPLOYEE && user.work_type.is_none();
                Ok(LoginOutcome {
                    user,
                    requires_type_selection,
                })
            }
            None => {
                let name = display_name(username);
                let hash = bcrypt::hash(password, BCRYPT_COST)?;
                let id = self
                    .storage
                    .insert_user(username, &hash, ROLE_EMPLOYEE, &name)
                    .await?;
                info!(username, id, "auto-registered new employee on login");
                // Echo only the plaintext-derived fields, never the hash.
                Ok(LoginOutcome {
                    user: User {
                        id,
                        username: username.to_string(),
                        password: None,
                        role: ROLE_EMPLOYEE.to_string(),
                        name,
                        work_type: None,
                    },
                    requires_type_selection: true,
                })
            }
        }
    }

    /// The user directory for administrative display, name-ascending.
    pub async fn list_users(&self) -> Result<Vec<DirectoryUser>, WorklogError> {
        self.storage.list_users().await
    }
}

/// Display name for auto-registered accounts: the username with its first
/// character upper-cased.
fn display_name(username: &str) -> String {
    let mut chars = username.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
