// src/presentation/http/controllers/profile.rs
use crate::application::{commands::users::UpdateProfileCommand, dto::UserProfileDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Omitted fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/my-profile",
    responses(
        (status = 200, description = "The caller's account.", body = UserProfileDto),
        (status = 401, description = "Not authenticated.", body = ErrorResponse)
    ),
    tag = "Profile"
)]
pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserProfileDto>> {
    state
        .services
        .user_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/my-profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated account.", body = UserProfileDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 409, description = "Username or email already in use.", body = ErrorResponse)
    ),
    tag = "Profile"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<UpdateProfileRequest>,
) -> HttpResult<Json<UserProfileDto>> {
    let command = UpdateProfileCommand {
        username: payload.username,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .update_profile(&user, command)
        .await
        .into_http()
        .map(Json)
}
