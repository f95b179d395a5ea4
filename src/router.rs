use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::db::sqlite::WorklogStorage;
use crate::handlers;
use crate::service::{Authenticator, Ledger};

/// Shared handler state: the two service facades over one storage handle.
#[derive(Clone)]
pub struct AppState {
    pub auth: Authenticator,
    pub ledger: Ledger,
}

impl AppState {
    pub fn new(storage: WorklogStorage) -> Self {
        Self {
            auth: Authenticator::new(storage.clone()),
            ledger: Ledger::new(storage),
        }
    }
}

pub fn worklog_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/login", post(handlers::auth::login))
        .route("/work-update", post(handlers::updates::submit_update))
        .route(
            "/work-updates/{username}",
            get(handlers::updates::list_updates_for_user),
        )
        .route("/work-update/{id}", delete(handlers::updates::delete_update))
        .route("/all-work-updates", get(handlers::updates::list_all_updates))
        .route("/all-users", get(handlers::updates::list_all_users))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// Browser clients live on a fixed set of origins; everything else is
/// rejected by the preflight.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(%origin, "skipping unparseable CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}
