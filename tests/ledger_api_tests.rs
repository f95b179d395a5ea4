use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt;
use worklog_backend::db::WorklogStorage;
use worklog_backend::router::AppState;

async fn test_state() -> (AppState, WorklogStorage) {
    let storage = worklog_backend::db::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory store");
    let state = AppState::new(storage.clone());
    state
        .auth
        .seed_defaults()
        .await
        .expect("failed to seed accounts");
    (state, storage)
}

async fn test_app() -> (Router, WorklogStorage) {
    let (state, storage) = test_state().await;
    let cfg = worklog_backend::config::Config::default();
    (
        worklog_backend::router::worklog_router(state, &cfg.allowed_origins),
        storage,
    )
}

fn update_payload(username: &str, work_done: &str) -> Value {
    json!({
        "username": username,
        "name": "Alice Smith",
        "date": "2026-08-28",
        "projectType": "internal",
        "projectName": "billing",
        "workDone": work_done,
        "task": "migration",
        "helpTaken": "none",
        "status": "done",
    })
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}

async fn submit(app: &Router, payload: &Value) -> i64 {
    let resp = app
        .clone()
        .oneshot(post_json("/work-update", payload))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    body["id"].as_i64().expect("id missing")
}

#[tokio::test]
async fn submitted_update_shows_up_in_user_listing() {
    let (app, _storage) = test_app().await;

    let id = submit(&app, &update_payload("alice", "migrated invoices")).await;

    let resp = app
        .oneshot(get("/work-updates/alice"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let updates = body.as_array().expect("expected a JSON array");
    assert_eq!(updates.len(), 1);
    let entry = &updates[0];
    assert_eq!(entry["id"], json!(id));
    assert_eq!(entry["username"], json!("alice"));
    assert_eq!(entry["userType"], json!("software"));
    assert_eq!(entry["workDone"], json!("migrated invoices"));
    assert_eq!(entry["date"], json!("2026-08-28"));
    assert!(entry["timestamp"].as_str().expect("timestamp").ends_with('Z'));
}

#[tokio::test]
async fn listings_are_newest_first() {
    let (app, _storage) = test_app().await;

    submit(&app, &update_payload("alice", "first")).await;
    // the sort key has millisecond precision
    tokio::time::sleep(Duration::from_millis(10)).await;
    submit(&app, &update_payload("alice", "second")).await;

    for uri in ["/work-updates/alice", "/all-work-updates"] {
        let resp = app.clone().oneshot(get(uri)).await.expect("request failed");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        let updates = body.as_array().expect("expected a JSON array");
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0]["workDone"], json!("second"));
        assert_eq!(updates[1]["workDone"], json!("first"));
    }
}

#[tokio::test]
async fn listing_for_unknown_user_is_empty() {
    let (app, _storage) = test_app().await;

    let resp = app
        .oneshot(get("/work-updates/nobody"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

#[tokio::test]
async fn user_type_is_frozen_at_submission_time() {
    let (app, storage) = test_app().await;

    submit(&app, &update_payload("alice", "before switch")).await;

    // The account changes category after the fact; recorded rows keep the
    // snapshot, new rows pick up the change.
    sqlx::query("UPDATE users SET type = 'hardware' WHERE username = 'alice'")
        .execute(storage.pool())
        .await
        .expect("failed to update user type");
    tokio::time::sleep(Duration::from_millis(10)).await;
    submit(&app, &update_payload("alice", "after switch")).await;

    let resp = app
        .oneshot(get("/work-updates/alice"))
        .await
        .expect("request failed");
    let body = body_json(resp).await;
    let updates = body.as_array().expect("expected a JSON array");
    assert_eq!(updates[0]["workDone"], json!("after switch"));
    assert_eq!(updates[0]["userType"], json!("hardware"));
    assert_eq!(updates[1]["workDone"], json!("before switch"));
    assert_eq!(updates[1]["userType"], json!("software"));
}

#[tokio::test]
async fn missing_author_defaults_to_software() {
    let (app, _storage) = test_app().await;

    submit(&app, &update_payload("ghost", "haunting")).await;

    let resp = app
        .oneshot(get("/work-updates/ghost"))
        .await
        .expect("request failed");
    let body = body_json(resp).await;
    assert_eq!(body[0]["userType"], json!("software"));
}

#[tokio::test]
async fn delete_removes_exactly_one_entry() {
    let (app, _storage) = test_app().await;

    let first = submit(&app, &update_payload("alice", "keep me")).await;
    let second = submit(&app, &update_payload("alice", "drop me")).await;

    let resp = app
        .clone()
        .oneshot(delete(&format!("/work-update/{second}")))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "success": true, "message": "Deleted successfully" })
    );

    let resp = app
        .oneshot(get("/work-updates/alice"))
        .await
        .expect("request failed");
    let body = body_json(resp).await;
    let updates = body.as_array().expect("expected a JSON array");
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0]["id"], json!(first));
}

#[tokio::test]
async fn deleting_a_missing_id_is_404() {
    let (app, _storage) = test_app().await;

    let resp = app
        .oneshot(delete("/work-update/999999"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Not found" }));
}
