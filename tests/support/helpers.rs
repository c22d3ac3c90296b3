// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::AUTHORIZATION};
use axum::response::Response;
use profile_service::application::{
    ports::{security::PrincipalResolver, time::Clock},
    services::ApplicationServices,
};
use profile_service::domain::profile::ProfileRepository;
use profile_service::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use serde_json::Value;

use super::builders::ProfileBuilder;
use super::mocks::{DummyClock, InMemoryProfileRepo, StaticPrincipalResolver};

pub fn build_test_state(profile_repo: Arc<dyn ProfileRepository>) -> HttpState {
    let resolver: Arc<dyn PrincipalResolver> = Arc::new(StaticPrincipalResolver);
    let clock: Arc<dyn Clock> = Arc::new(DummyClock);

    let services = Arc::new(ApplicationServices::new(profile_repo, resolver, clock));
    HttpState { services }
}

pub fn make_router_with_repo(profile_repo: Arc<dyn ProfileRepository>) -> axum::Router {
    build_router(build_test_state(profile_repo), RouterOptions::default())
}

/// Router over a repository seeded with profile "42" owned by "u1" and
/// profile "7" owned by "u2". The repository is returned for inspection.
pub fn make_test_router() -> (axum::Router, Arc<InMemoryProfileRepo>) {
    let repo = Arc::new(InMemoryProfileRepo::with_profiles([
        ProfileBuilder::new().build(),
        ProfileBuilder::new()
            .id("7")
            .owner("u2")
            .first_name("Grace")
            .build(),
    ]));
    let router = make_router_with_repo(repo.clone());
    (router, repo)
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn put_json(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Business errors (not found, wrong user) carry nothing but the status.
pub async fn assert_empty_response(resp: Response, expected_status: StatusCode) {
    assert_eq!(resp.status(), expected_status);
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    assert!(
        bytes.is_empty(),
        "expected empty body, got {}",
        String::from_utf8_lossy(&bytes)
    );
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts.headers.get("content-type").and_then(|v| v.to_str().ok()).unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
