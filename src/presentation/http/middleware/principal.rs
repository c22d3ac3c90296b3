// src/presentation/http/middleware/principal.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

/// Resolve the bearer token, if any, into a `Principal` stored in the request
/// extensions. Requests without a token pass through untouched; a token that
/// fails verification is rejected here with 401.
///
/// Usage: `axum::middleware::from_fn(resolve_principal)`
pub async fn resolve_principal(mut req: Request<Body>, next: Next) -> Response {
    let Some(header) = req.headers().typed_get::<Authorization<Bearer>>() else {
        return next.run(req).await;
    };

    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    let resolver = state.services.principal_resolver();
    match resolver.authenticate(header.token()).await {
        Ok(principal) => {
            tracing::debug!(
                user_id = %principal.id,
                expires_at = ?principal.expires_at,
                "principal resolved"
            );
            req.extensions_mut().insert(principal);
            next.run(req).await
        }
        Err(err) => HttpError::from_error(err).into_response(),
    }
}
