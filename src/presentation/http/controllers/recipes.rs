// src/presentation/http/controllers/recipes.rs
use crate::application::{
    commands::reviews::CreateReviewCommand,
    dto::{RecipeDto, ReviewDto},
    queries::recipes::{
        FilterRecipesQuery, GetRecipeBySlugQuery, ListRecipesQuery, SearchRecipesQuery,
    },
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::openapi::RecipePageResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListRecipesParams {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Items per page (default 2, capped at 100).
    pub page_size: Option<u32>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterParams {
    /// Category id. Missing or unparsable values yield an empty list.
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    pub search: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    pub comment: String,
    /// 1 to 5.
    #[serde(default)]
    pub rating: Option<i16>,
}

#[utoipa::path(
    get,
    path = "/api/v1/home",
    responses(
        (status = 200, description = "The three most recent recipes.", body = [RecipeDto])
    ),
    security((), ("bearerAuth" = [])),
    tag = "Recipes"
)]
pub async fn home(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
) -> HttpResult<Json<Vec<RecipeDto>>> {
    state
        .services
        .recipe_queries
        .home(viewer.as_ref())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "A page of recipes, newest first.", body = RecipePageResponse),
        (status = 400, description = "Invalid page number.", body = ErrorResponse),
        (status = 404, description = "Page beyond the last one.", body = ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Recipes"
)]
pub async fn list_recipes(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Query(params): Query<ListRecipesParams>,
) -> HttpResult<Json<RecipePageResponse>> {
    let query = ListRecipesQuery {
        page: params.page,
        page_size: params.page_size,
    };

    state
        .services
        .recipe_queries
        .list_recipes(viewer.as_ref(), query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/recipes/{slug}",
    params(("slug" = String, Path, description = "Recipe slug")),
    responses(
        (status = 200, description = "Recipe detail with reviews.", body = RecipeDto),
        (status = 404, description = "Recipe not found.", body = ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Recipes"
)]
pub async fn get_recipe(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<RecipeDto>> {
    state
        .services
        .recipe_queries
        .get_recipe_by_slug(viewer.as_ref(), GetRecipeBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/recipes/{slug}/reviews",
    params(("slug" = String, Path, description = "Recipe slug")),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review stored.", body = ReviewDto),
        (status = 400, description = "Invalid comment or rating.", body = ErrorResponse),
        (status = 404, description = "Recipe not found.", body = ErrorResponse)
    ),
    tag = "Recipes"
)]
pub async fn create_review(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<CreateReviewRequest>,
) -> HttpResult<(StatusCode, Json<ReviewDto>)> {
    let command = CreateReviewCommand {
        recipe_slug: slug,
        comment: payload.comment,
        rating: payload.rating,
    };

    let review = state
        .services
        .review_commands
        .create_review(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(review)))
}

#[utoipa::path(
    get,
    path = "/api/v1/recipes/filter",
    params(FilterParams),
    responses(
        (status = 200, description = "Recipes in the category.", body = [RecipeDto])
    ),
    security((), ("bearerAuth" = [])),
    tag = "Recipes"
)]
pub async fn filter_recipes(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Query(params): Query<FilterParams>,
) -> HttpResult<Json<Vec<RecipeDto>>> {
    let category = params
        .category
        .as_deref()
        .and_then(|raw| raw.trim().parse::<i64>().ok());

    state
        .services
        .recipe_queries
        .filter_by_category(viewer.as_ref(), FilterRecipesQuery { category })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/recipes/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Recipes whose title, ingredients or reviewers match.", body = [RecipeDto])
    ),
    security((), ("bearerAuth" = [])),
    tag = "Recipes"
)]
pub async fn search_recipes(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<Vec<RecipeDto>>> {
    state
        .services
        .recipe_queries
        .search_recipes(
            viewer.as_ref(),
            SearchRecipesQuery {
                search: params.search,
            },
        )
        .await
        .into_http()
        .map(Json)
}
