// src/presentation/http/openapi.rs
use crate::application::dto::{Page, RecipeDto};
use crate::presentation::http::controllers::{
    auth, categories, favourites, my_recipes, profile, recipes,
};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecipePageResponse {
    pub items: Vec<RecipeDto>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub has_more: bool,
}

impl From<Page<RecipeDto>> for RecipePageResponse {
    fn from(page: Page<RecipeDto>) -> Self {
        Self {
            items: page.items,
            page: page.page,
            page_size: page.page_size,
            total: page.total,
            has_more: page.has_more,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::activate,
        auth::login,
        auth::logout,
        profile::get_profile,
        profile::update_profile,
        categories::list_categories,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        recipes::home,
        recipes::list_recipes,
        recipes::get_recipe,
        recipes::create_review,
        recipes::filter_recipes,
        recipes::search_recipes,
        my_recipes::list_my_recipes,
        my_recipes::create_my_recipe,
        my_recipes::get_my_recipe,
        my_recipes::update_my_recipe,
        my_recipes::delete_my_recipe,
        favourites::toggle_favourite,
        favourites::list_favourites,
        favourites::remove_favourite,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            RecipePageResponse,
            crate::presentation::http::error::ErrorResponse,
            auth::RegisterRequest,
            auth::LoginRequest,
            profile::UpdateProfileRequest,
            categories::CategoryRequest,
            recipes::CreateReviewRequest,
            my_recipes::CreateRecipeRequest,
            my_recipes::UpdateRecipeRequest,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::SessionDto,
            crate::application::dto::ActivationDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::RecipeDto,
            crate::application::dto::ReviewDto,
            crate::application::dto::FavouriteStatus,
            crate::application::dto::FavouriteToggleDto,
            crate::domain::user::Role
        )
    ),
    tags(
        (name = "Auth", description = "Registration, activation and sessions"),
        (name = "Profile", description = "The caller's own account"),
        (name = "Categories", description = "Recipe categories"),
        (name = "Recipes", description = "Public recipe listings and reviews"),
        (name = "My recipes", description = "Recipes authored by the caller"),
        (name = "Favourites", description = "The caller's favourite recipes"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Recipe API",
        description = "Recipe sharing backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

/// Swagger UI at `/docs`, ReDoc at `/redoc`, raw document at
/// [`OPENAPI_JSON_PATH`]. `/` redirects to the Swagger UI.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
