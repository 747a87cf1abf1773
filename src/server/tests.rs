use super::*;
use axum::{body, body::Body, http::Request, http::StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::config::paths::BodaiPaths;
use crate::crypto::PasswordHashParams;

fn test_app() -> (TempDir, Arc<AppState>, Router) {
    let temp_dir = TempDir::new().expect("temp dir");
    let paths = BodaiPaths::with_base_dir(temp_dir.path().to_path_buf());
    let mut storage = Storage::new(paths).expect("storage");
    storage.load_all().expect("load");

    let mut settings = Settings::default();
    settings.password_hashing = PasswordHashParams::with_values(1024, 1, 1);

    let state = Arc::new(AppState::new(storage, settings));
    let app = build_router(state.clone()).expect("router");
    (temp_dir, state, app)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

fn complete_profile() -> Value {
    json!({
        "email": "ada@example.com",
        "height": "175 cm",
        "weight": "70 kg",
        "age": "25",
        "workoutHistory": "Two years",
        "lifestyle": "active",
        "dailyRoutines": "Desk job",
        "primaryGoal": "fat-loss",
        "secondaryGoals": ["fat-loss", "maintenance"],
        "equipmentAvailability": ["commercial-gym"],
        "workoutLocation": "commercial-gym"
    })
}

#[tokio::test]
async fn root_and_healthz() {
    let (_temp_dir, _state, app) = test_app();

    let response = app
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"message": "Welcome to the AI Fitness API"})
    );

    let response = app
        .oneshot(Request::get("/healthz").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn register_returns_public_user() {
    let (_temp_dir, state, app) = test_app();

    let response = app
        .oneshot(post_json(
            "/api/auth/register",
            json!({"name": "Ada", "email": "Ada@Example.com", "password": "hunter22"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["email"], "ada@example.com");
    assert!(body["id"].is_string());
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
    assert_eq!(state.storage.users.count().unwrap(), 1);
}

#[tokio::test]
async fn register_duplicate_email_is_rejected() {
    let (_temp_dir, state, app) = test_app();
    let request = json!({"name": "Ada", "email": "ada@example.com", "password": "pw"});

    let first = app
        .clone()
        .oneshot(post_json("/api/auth/register", request.clone()))
        .await
        .expect("response");
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(post_json("/api/auth/register", request))
        .await
        .expect("response");
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(second).await["error"], "User already exists");
    assert_eq!(state.storage.users.count().unwrap(), 1);
}

#[tokio::test]
async fn register_missing_fields() {
    let (_temp_dir, state, app) = test_app();

    let response = app
        .oneshot(post_json(
            "/api/auth/register",
            json!({"name": "Ada", "email": "ada@example.com"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Missing fields");
    assert_eq!(state.storage.users.count().unwrap(), 0);
}

#[tokio::test]
async fn register_malformed_json() {
    let (_temp_dir, _state, app) = test_app();

    let request = Request::post("/api/auth/register")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .expect("request");
    let response = app.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(response).await["error"].is_string());
}

#[tokio::test]
async fn profile_submission_created() {
    let (_temp_dir, state, app) = test_app();

    let response = app
        .oneshot(post_json("/api/profile", complete_profile()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(json_body(response).await["id"].is_string());

    let stored = state.storage.profiles.get_all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].email.as_deref(), Some("ada@example.com"));
    // The primary goal was dropped from the secondary goals
    assert_eq!(stored[0].profile.secondary_goals.len(), 1);
}

#[tokio::test]
async fn profile_submission_reports_fields() {
    let (_temp_dir, state, app) = test_app();

    let mut profile = complete_profile();
    profile["age"] = json!("");
    profile["equipmentAvailability"] = json!([]);

    let response = app
        .oneshot(post_json("/api/profile", profile))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["fields"]["age"], "Age is required");
    assert_eq!(
        body["fields"]["equipmentAvailability"],
        "Please select at least one equipment option"
    );
    assert_eq!(body["fields"].as_object().unwrap().len(), 2);
    assert_eq!(state.storage.profiles.count().unwrap(), 0);
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let (_temp_dir, _state, app) = test_app();

    let request = Request::get("/healthz")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("cors header"),
        "http://localhost:3000"
    );
}
