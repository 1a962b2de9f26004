// src/presentation/http/controllers/favourites.rs
use crate::application::{
    commands::favourites::{RemoveFavouriteCommand, ToggleFavouriteCommand},
    dto::{FavouriteStatus, FavouriteToggleDto, RecipeDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    post,
    path = "/api/v1/favourites/{slug}/toggle",
    params(("slug" = String, Path, description = "Recipe slug")),
    responses(
        (status = 201, description = "Recipe added to favourites.", body = FavouriteToggleDto),
        (status = 200, description = "Recipe removed from favourites.", body = FavouriteToggleDto),
        (status = 404, description = "Recipe not found.", body = ErrorResponse)
    ),
    tag = "Favourites"
)]
pub async fn toggle_favourite(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<(StatusCode, Json<FavouriteToggleDto>)> {
    let outcome = state
        .services
        .favourite_commands
        .toggle_favourite(&user, ToggleFavouriteCommand { recipe_slug: slug })
        .await
        .into_http()?;

    let status = match outcome.status {
        FavouriteStatus::Added => StatusCode::CREATED,
        FavouriteStatus::Removed => StatusCode::OK,
    };
    Ok((status, Json(outcome)))
}

#[utoipa::path(
    get,
    path = "/api/v1/favourites",
    responses(
        (status = 200, description = "The caller's favourite recipes, most recently added first.", body = [RecipeDto]),
        (status = 401, description = "Not authenticated.", body = ErrorResponse)
    ),
    tag = "Favourites"
)]
pub async fn list_favourites(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<RecipeDto>>> {
    state
        .services
        .favourite_queries
        .list_favourites(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/favourites/{slug}",
    params(("slug" = String, Path, description = "Recipe slug")),
    responses(
        (status = 204, description = "Recipe removed from favourites."),
        (status = 404, description = "Recipe not found or not in favourites.", body = ErrorResponse)
    ),
    tag = "Favourites"
)]
pub async fn remove_favourite(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .favourite_commands
        .remove_favourite(&user, RemoveFavouriteCommand { recipe_slug: slug })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
