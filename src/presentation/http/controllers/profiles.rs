// src/presentation/http/controllers/profiles.rs
use crate::application::{
    commands::profiles::UpdateProfileCommand,
    dto::ProfileDto,
    error::ApplicationError,
    queries::profiles::{CheckProfileOwnershipQuery, GetProfileByIdQuery},
};
use crate::domain::user::{UserId, UserRef};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/profile/{id}",
    params(("id" = String, Path, description = "Profile id")),
    responses(
        (status = 200, description = "The profile.", body = ProfileDto),
        (status = 404, description = "No profile with that id.")
    ),
    tag = "Profiles"
)]
pub async fn find_profile_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ProfileDto>> {
    state
        .services
        .profile_queries
        .find_profile_by_id(GetProfileByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/profile/getByAuthor/{id}",
    params(("id" = String, Path, description = "Owning user id")),
    responses(
        (status = 200, description = "The profile owned by that user.", body = ProfileDto),
        (status = 404, description = "The user has no profile.")
    ),
    tag = "Profiles"
)]
pub async fn find_profile_by_author(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ProfileDto>> {
    let author = UserId::new(id)
        .map(UserRef::new)
        .map_err(ApplicationError::from)
        .into_http()?;

    state
        .services
        .profile_queries
        .find_users_profile(&author)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/profile/update",
    request_body = ProfileDto,
    responses(
        (status = 200, description = "The updated profile.", body = ProfileDto),
        (status = 401, description = "No authenticated principal.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "The caller does not own the profile.")
    ),
    security(("bearerAuth" = [])),
    tag = "Profiles"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(principal): Authenticated,
    Json(payload): Json<ProfileDto>,
) -> HttpResult<Json<ProfileDto>> {
    state
        .services
        .profile_commands
        .update_profile(&principal, UpdateProfileCommand::from(payload))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/profile/getUsersProfile",
    responses(
        (status = 200, description = "The caller's own profile.", body = ProfileDto),
        (status = 401, description = "No authenticated principal.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "The caller has no profile.")
    ),
    security(("bearerAuth" = [])),
    tag = "Profiles"
)]
pub async fn find_users_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(principal): Authenticated,
) -> HttpResult<Json<ProfileDto>> {
    state
        .services
        .profile_queries
        .find_users_profile(&principal.as_user_ref())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/profile/checkProfileOwnership/{id}",
    params(("id" = String, Path, description = "Profile id")),
    responses(
        (status = 200, description = "Whether the caller owns the profile.", body = bool),
        (status = 401, description = "No authenticated principal.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No profile with that id.")
    ),
    security(("bearerAuth" = [])),
    tag = "Profiles"
)]
pub async fn check_profile_ownership(
    Extension(state): Extension<HttpState>,
    Authenticated(principal): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<bool>> {
    state
        .services
        .profile_queries
        .check_profile_ownership(&principal, CheckProfileOwnershipQuery { id })
        .await
        .into_http()
        .map(Json)
}
