// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{ActivateAccountCommand, LoginUserCommand, RegisterUserCommand},
    dto::{ActivationDto, SessionDto, UserDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created; an activation link was sent.", body = UserDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 409, description = "Username or email already in use.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = RegisterUserCommand {
        username: payload.username,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        password: payload.password,
        confirm_password: payload.confirm_password,
    };

    let user = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/activate/{uid}/{token}",
    params(
        ("uid" = String, Path, description = "Encoded user id from the activation link"),
        ("token" = String, Path, description = "Activation token")
    ),
    responses(
        (status = 200, description = "Account activated.", body = ActivationDto),
        (status = 303, description = "Account activated; redirecting to the configured page."),
        (status = 400, description = "The activation link is invalid or expired.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn activate(
    Extension(state): Extension<HttpState>,
    Path((uid, token)): Path<(String, String)>,
) -> HttpResult<Response> {
    let commands = &state.services.user_commands;
    let activated = commands
        .activate(ActivateAccountCommand { uid, token })
        .await
        .into_http()?;

    Ok(match commands.activation_redirect_url() {
        Some(url) => Redirect::to(url).into_response(),
        None => Json(activated).into_response(),
    })
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened.", body = SessionDto),
        (status = 401, description = "Invalid credentials.", body = ErrorResponse),
        (status = 403, description = "Account not activated.", body = ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<SessionDto>> {
    let command = LoginUserCommand {
        username: payload.username,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 204, description = "Session revoked."),
        (status = 401, description = "Missing, invalid or revoked token.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .logout(&user)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
