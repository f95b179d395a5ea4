use serde::{Deserialize, Serialize};

/// A `users` row. The bcrypt hash rides along as `password`; the login
/// response for an existing account serializes it too, matching the wire
/// format of the original backend. Auto-registration responses leave it out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: String,
    pub name: String,
    #[serde(rename = "type")]
    pub work_type: Option<String>,
}

/// Projection of `users` for the directory endpoint; never carries the hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectoryUser {
    pub username: String,
    pub name: String,
    pub role: String,
    #[serde(rename = "type")]
    pub work_type: Option<String>,
}

/// A `work_updates` row as stored and served.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkUpdate {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub user_type: String,
    pub date: String,
    pub project_type: String,
    pub project_name: String,
    pub work_done: String,
    pub task: String,
    pub help_taken: String,
    pub status: String,
    pub timestamp: String,
}

/// Caller-supplied fields of a submission. `userType` and `timestamp` are
/// assigned by the ledger at write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkUpdate {
    pub username: String,
    pub name: String,
    pub date: String,
    pub project_type: String,
    pub project_name: String,
    pub work_done: String,
    pub task: String,
    pub help_taken: String,
    pub status: String,
}
