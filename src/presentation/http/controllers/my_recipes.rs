// src/presentation/http/controllers/my_recipes.rs
use crate::application::{
    commands::recipes::{CreateRecipeCommand, DeleteRecipeCommand, UpdateRecipeCommand},
    dto::RecipeDto,
    queries::recipes::GetMyRecipeQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub category: i64,
    pub title: String,
    pub instructions: String,
    pub ingredients: String,
    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,
    /// Stored image path or URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// Omitted fields are left unchanged; an empty `image` clears it.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateRecipeRequest {
    pub category: Option<i64>,
    pub title: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Option<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub image: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/my-recipes",
    responses(
        (status = 200, description = "Recipes authored by the caller.", body = [RecipeDto]),
        (status = 401, description = "Not authenticated.", body = ErrorResponse)
    ),
    tag = "My recipes"
)]
pub async fn list_my_recipes(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<RecipeDto>>> {
    state
        .services
        .recipe_queries
        .list_my_recipes(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/my-recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created.", body = RecipeDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 404, description = "Category not found.", body = ErrorResponse),
        (status = 503, description = "No unique slug could be generated.", body = ErrorResponse)
    ),
    tag = "My recipes"
)]
pub async fn create_my_recipe(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateRecipeRequest>,
) -> HttpResult<(StatusCode, Json<RecipeDto>)> {
    let command = CreateRecipeCommand {
        category_id: payload.category,
        title: payload.title,
        instructions: payload.instructions,
        ingredients: payload.ingredients,
        prep_time: payload.prep_time,
        cook_time: payload.cook_time,
        servings: payload.servings,
        image: payload.image,
    };

    let recipe = state
        .services
        .recipe_commands
        .create_recipe(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

#[utoipa::path(
    get,
    path = "/api/v1/my-recipes/{id}",
    params(("id" = i64, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "One of the caller's recipes.", body = RecipeDto),
        (status = 404, description = "No such recipe owned by the caller.", body = ErrorResponse)
    ),
    tag = "My recipes"
)]
pub async fn get_my_recipe(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<RecipeDto>> {
    state
        .services
        .recipe_queries
        .get_my_recipe(&user, GetMyRecipeQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/my-recipes/{id}",
    params(("id" = i64, Path, description = "Recipe id")),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated.", body = RecipeDto),
        (status = 403, description = "Caller may not modify this recipe.", body = ErrorResponse),
        (status = 404, description = "Recipe not found.", body = ErrorResponse)
    ),
    tag = "My recipes"
)]
pub async fn update_my_recipe(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateRecipeRequest>,
) -> HttpResult<Json<RecipeDto>> {
    let command = UpdateRecipeCommand {
        id,
        category_id: payload.category,
        title: payload.title,
        instructions: payload.instructions,
        ingredients: payload.ingredients,
        prep_time: payload.prep_time,
        cook_time: payload.cook_time,
        servings: payload.servings,
        image: payload.image,
    };

    state
        .services
        .recipe_commands
        .update_recipe(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/my-recipes/{id}",
    params(("id" = i64, Path, description = "Recipe id")),
    responses(
        (status = 204, description = "Recipe deleted."),
        (status = 403, description = "Caller may not delete this recipe.", body = ErrorResponse),
        (status = 404, description = "Recipe not found.", body = ErrorResponse)
    ),
    tag = "My recipes"
)]
pub async fn delete_my_recipe(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .recipe_commands
        .delete_recipe(&user, DeleteRecipeCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
