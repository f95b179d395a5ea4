use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::db::models::User;
use crate::{WorklogError, router::AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: User,
    #[serde(rename = "requiresTypeSelection")]
    pub requires_type_selection: bool,
}

/// POST /login — verify credentials, or auto-register an unknown username.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, WorklogError> {
    let outcome = state.auth.login(&req.username, &req.password).await?;
    Ok(Json(LoginResponse {
        success: true,
        user: outcome.user,
        requires_type_selection: outcome.requires_type_selection,
    }))
}
