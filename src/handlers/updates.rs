use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::db::models::{DirectoryUser, NewWorkUpdate, WorkUpdate};
use crate::{WorklogError, router::AppState};

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// POST /work-update — append one entry to the ledger.
pub async fn submit_update(
    State(state): State<AppState>,
    Json(update): Json<NewWorkUpdate>,
) -> Result<Json<SubmitResponse>, WorklogError> {
    let id = state.ledger.submit(update).await?;
    Ok(Json(SubmitResponse { success: true, id }))
}

/// GET /work-updates/{username} — one user's entries, newest first.
pub async fn list_updates_for_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<WorkUpdate>>, WorklogError> {
    let updates = state.ledger.list_by_user(&username).await?;
    Ok(Json(updates))
}

/// DELETE /work-update/{id}
pub async fn delete_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, WorklogError> {
    state.ledger.delete_by_id(id).await?;
    Ok(Json(DeleteResponse {
        success: true,
        message: "Deleted successfully".to_string(),
    }))
}

/// GET /all-work-updates — every user's entries, newest first. No role
/// check, same as the backend this replaces; see DESIGN.md.
pub async fn list_all_updates(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkUpdate>>, WorklogError> {
    let updates = state.ledger.list_all().await?;
    Ok(Json(updates))
}

/// GET /all-users — the user directory, name-ascending, hashes excluded.
pub async fn list_all_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<DirectoryUser>>, WorklogError> {
    let users = state.auth.list_users().await?;
    Ok(Json(users))
}
