use crate::db::models::{NewWorkUpdate, WorkUpdate};
use crate::db::sqlite::WorklogStorage;
use crate::error::WorklogError;
use chrono::{SecondsFormat, Utc};
use tracing::info;

/// Category recorded on an update when its author has not selected one
/// (or no longer exists).
const DEFAULT_WORK_TYPE: &str = "software";

/// Owns the `work_updates` table: appends, lists, deletes. Rows are
/// immutable once written; there is no update operation.
#[derive(Clone)]
pub struct Ledger {
    storage: WorklogStorage,
}

impl Ledger {
    pub fn new(storage: WorklogStorage) -> Self {
        Self { storage }
    }

    /// Append a work update and return its generated id.
    ///
    /// The author's current work category is looked up and frozen into the
    /// row; later changes to the account never rewrite history.
    pub async fn submit(&self, update: NewWorkUpdate) -> Result<i64, WorklogError> {
        let user_type = self
            .storage
            .user_type(&update.username)
            .await?
            .flatten()
            .unwrap_or_else(|| DEFAULT_WORK_TYPE.to_string());
        // RFC 3339 UTC with millisecond precision; doubles as the sort key.
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let id = self
            .storage
            .insert_update(&update, &user_type, &timestamp)
            .await?;
        info!(username = %update.username, id, "work update recorded");
        Ok(id)
    }

    /// Snapshot of one user's updates, newest first.
    pub async fn list_by_user(&self, username: &str) -> Result<Vec<WorkUpdate>, WorklogError> {
        self.storage.updates_for_user(username).await
    }

    /// Snapshot of every user's updates, newest first.
    pub async fn list_all(&self) -> Result<Vec<WorkUpdate>, WorklogError> {
        self.storage.all_updates().await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), WorklogError> {
        if self.storage.delete_update(id).await? == 0 {
            return Err(WorklogError::NotFound);
        }
        info!(id, "work update deleted");
        Ok(())
    }
}
