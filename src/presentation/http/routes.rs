// src/presentation/http/routes.rs
use crate::config::{AppConfig, RateLimitSettings, default_allowed_origins};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::profiles,
    middleware::{principal::resolve_principal, rate_limit::rate_limit_layer},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Deployment-time knobs for the HTTP surface.
#[derive(Clone, Debug)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    pub rate_limit: Option<RateLimitSettings>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            rate_limit: None,
        }
    }
}

impl From<&AppConfig> for RouterOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit(),
        }
    }
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .nest("/api/profile", profile_routes())
        .layer(middleware::from_fn(resolve_principal))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins));

    let router = match options.rate_limit.and_then(rate_limit_layer) {
        Some(limiter) => router.layer(limiter),
        None => router,
    };

    router.layer(Extension(state))
}

fn profile_routes() -> Router {
    Router::new()
        .route("/{id}", get(profiles::find_profile_by_id))
        .route("/getByAuthor/{id}", get(profiles::find_profile_by_author))
        .route("/update", put(profiles::update_profile))
        .route("/getUsersProfile", get(profiles::find_users_profile))
        .route(
            "/checkProfileOwnership/{id}",
            get(profiles::check_profile_ownership),
        )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
