//! Integration tests for API endpoints.
//!
//! Each test builds a fresh router over its own seeded store and drives
//! it with `oneshot`, so no listener is needed.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use movie_users::api::{create_router, AppState};
use movie_users::config::{Config, DuplicateIdPolicy};

// =============================================================================
// Test Helpers
// =============================================================================

fn test_app() -> Router {
    create_router(AppState::from_config(&Config::default()))
}

fn app_with_policy(policy: DuplicateIdPolicy) -> Router {
    let config = Config {
        seed_default_user: false,
        duplicate_id_policy: policy,
        ..Config::default()
    };
    create_router(AppState::from_config(&config))
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, body)
}

async fn create_ana(app: &Router) -> Value {
    let (status, body) = send(
        app,
        json_request(
            Method::POST,
            "/users",
            json!({"id": "2", "name": "Ana", "password": "pw"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

// =============================================================================
// Root & Health
// =============================================================================

#[tokio::test]
async fn test_root_returns_welcome_message() {
    let app = test_app();
    let (status, body) = send(&app, empty_request(Method::GET, "/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("Welcome to the movie users API".to_string()));
}

#[tokio::test]
async fn test_health_reports_user_count() {
    let app = test_app();
    let (status, body) = send(&app, empty_request(Method::GET, "/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["users"], 1);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app();
    let (status, body) = send(&app, empty_request(Method::GET, "/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/users/login"].is_object());
}

// =============================================================================
// User Endpoints
// =============================================================================

#[tokio::test]
async fn test_find_all_starts_with_seed() {
    let app = test_app();
    let (status, body) = send(&app, empty_request(Method::GET, "/users")).await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], "1");
    assert_eq!(users[0]["name"], "Juan");
    assert_eq!(users[0]["favorites"], json!([]));
}

#[tokio::test]
async fn test_create_and_find_one() {
    let app = test_app();
    let created = create_ana(&app).await;

    assert_eq!(created["id"], "2");
    assert_eq!(created["name"], "Ana");
    assert_eq!(created["password"], "pw");
    assert!(created["createdAt"].is_i64());
    assert!(created.get("updatedAt").is_none());

    let (status, found) = send(&app, empty_request(Method::GET, "/users/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, created);
}

#[tokio::test]
async fn test_create_rejects_empty_fields() {
    let app = test_app();
    let (status, body) = send(
        &app,
        json_request(Method::POST, "/users", json!({"id": "", "name": "Ana", "password": "pw"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Id is required");
}

#[tokio::test]
async fn test_create_rejects_missing_fields() {
    let app = test_app();
    let (status, body) = send(
        &app,
        json_request(Method::POST, "/users", json!({"name": "Ana"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_find_one_unknown_returns_404() {
    let app = test_app();
    let (status, body) = send(&app, empty_request(Method::GET, "/users/404")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "User with id \"404\" not found");
}

#[tokio::test]
async fn test_login_success_and_failure() {
    let app = test_app();
    let created = create_ana(&app).await;

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/users/login", json!({"name": "Ana", "password": "pw"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/users/login", json!({"name": "Ana", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_logout_returns_message() {
    let app = test_app();
    let (status, body) = send(&app, empty_request(Method::POST, "/users/logout/77")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "User with ID 77 has been logged out successfully."
    );
}

#[tokio::test]
async fn test_update_user() {
    let app = test_app();
    let (status, body) = send(
        &app,
        json_request(
            Method::PATCH,
            "/users/1",
            json!({"name": "Juan Carlos", "password": "456"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Juan Carlos");
    assert_eq!(body["password"], "456");
    assert!(body["updatedAt"].as_i64().unwrap() >= body["createdAt"].as_i64().unwrap());
}

#[tokio::test]
async fn test_update_unknown_returns_404() {
    let app = test_app();
    let (status, _) = send(
        &app,
        json_request(Method::PATCH, "/users/9", json!({"name": "X", "password": "Y"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_user_is_idempotent() {
    let app = test_app();

    let (status, _) = send(&app, empty_request(Method::DELETE, "/users/1")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, empty_request(Method::DELETE, "/users/1")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, empty_request(Method::GET, "/users")).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_user_with_login_id_is_reachable() {
    let app = test_app();
    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/users",
            json!({"id": "login", "name": "Lola", "password": "pw"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, empty_request(Method::GET, "/users/login")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Lola");

    let (status, body) = send(
        &app,
        json_request(Method::PATCH, "/users/login", json!({"name": "Lola B", "password": "pw2"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "login");
    assert_eq!(body["name"], "Lola B");

    // POST still logs in by name and password
    let (status, body) = send(
        &app,
        json_request(Method::POST, "/users/login", json!({"name": "Lola B", "password": "pw2"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "login");

    let (status, _) = send(&app, empty_request(Method::DELETE, "/users/login")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, empty_request(Method::GET, "/users/login")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_is_documented() {
    let app = test_app();
    let (_, body) = send(&app, empty_request(Method::GET, "/api-docs/openapi.json")).await;

    assert!(body["paths"]["/health"]["get"].is_object());
}

#[tokio::test]
async fn test_duplicate_id_policies() {
    let allow = app_with_policy(DuplicateIdPolicy::Allow);
    create_ana(&allow).await;
    create_ana(&allow).await;
    let (_, body) = send(&allow, empty_request(Method::GET, "/users")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let reject = app_with_policy(DuplicateIdPolicy::Reject);
    create_ana(&reject).await;
    let (status, body) = send(
        &reject,
        json_request(
            Method::POST,
            "/users",
            json!({"id": "2", "name": "Other", "password": "pw"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

// =============================================================================
// Favorites Endpoints
// =============================================================================

#[tokio::test]
async fn test_favorites_flow() {
    let app = test_app();
    create_ana(&app).await;

    for _ in 0..2 {
        let (status, body) = send(&app, empty_request(Method::POST, "/users/2/favorites/m1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["favorites"], json!(["m1"]));
    }

    let (status, body) = send(&app, empty_request(Method::GET, "/users/2/favorites")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["m1"]));

    let (status, body) = send(&app, empty_request(Method::DELETE, "/users/2/favorites/m1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["favorites"], json!([]));

    let (_, body) = send(&app, empty_request(Method::GET, "/users/2/favorites")).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_favorites_unknown_user_returns_404() {
    let app = test_app();

    let (status, _) = send(&app, empty_request(Method::GET, "/users/9/favorites")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, empty_request(Method::POST, "/users/9/favorites/m1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, empty_request(Method::DELETE, "/users/9/favorites/m1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
