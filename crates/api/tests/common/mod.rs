#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use slotbook_api::auth::identity::PasswordIdentity;
use slotbook_api::auth::jwt::JwtConfig;
use slotbook_api::config::{ServerConfig, StoreBackend};
use slotbook_api::router::build_app_router;
use slotbook_api::state::AppState;
use slotbook_core::identity::IdentityProvider;
use slotbook_db::memory::MemoryStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        default_utc_offset_minutes: 0,
        min_password_length: 6,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            session_expiry_mins: 60,
        },
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// The store is returned too so tests can inspect it or simulate an outage.
pub fn build_test_app() -> (Router, Arc<MemoryStore>) {
    let config = test_config();
    let store = Arc::new(MemoryStore::new());
    let identity = Arc::new(PasswordIdentity::new(
        store.clone(),
        config.jwt.clone(),
        config.min_password_length,
    ));
    (build_app(config, store.clone(), identity), store)
}

/// Build the router with a caller-supplied identity provider.
pub fn build_test_app_with_identity(identity: Arc<dyn IdentityProvider>) -> Router {
    build_app(test_config(), Arc::new(MemoryStore::new()), identity)
}

fn build_app(
    config: ServerConfig,
    store: Arc<MemoryStore>,
    identity: Arc<dyn IdentityProvider>,
) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        store,
        identity,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response {
    send(app, Method::GET, uri, token, None).await
}

pub async fn post_json(app: Router, uri: &str, token: Option<&str>, body: Value) -> Response {
    send(app, Method::POST, uri, token, Some(body)).await
}

pub async fn post(app: Router, uri: &str, token: Option<&str>) -> Response {
    send(app, Method::POST, uri, token, None).await
}

pub async fn put_json(app: Router, uri: &str, token: Option<&str>, body: Value) -> Response {
    send(app, Method::PUT, uri, token, Some(body)).await
}

pub async fn delete(app: Router, uri: &str, token: Option<&str>) -> Response {
    send(app, Method::DELETE, uri, token, None).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a `303 See Other` to `location`.
pub fn assert_redirect(response: &Response, location: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], location);
}

// ---------------------------------------------------------------------------
// Principals
// ---------------------------------------------------------------------------

/// A signed-in principal.
pub struct TestUser {
    pub user_id: String,
    pub email: String,
    pub token: String,
}

/// Sign up through the API. The account has no role yet.
pub async fn sign_up(app: &Router, email: &str) -> TestUser {
    let response = post_json(
        app.clone(),
        "/signup",
        None,
        json!({ "email": email, "password": "secret-pw" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    TestUser {
        user_id: json["data"]["user_id"].as_str().unwrap().to_string(),
        email: json["data"]["email"].as_str().unwrap().to_string(),
        token: json["data"]["access_token"].as_str().unwrap().to_string(),
    }
}

/// Sign up and pick `role` (`"user"` or `"admin"`) through the role chooser.
pub async fn login_as(app: &Router, email: &str, role: &str) -> TestUser {
    let user = sign_up(app, email).await;
    let response = post_json(
        app.clone(),
        "/",
        Some(&user.token),
        json!({ "role": role }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    user
}
