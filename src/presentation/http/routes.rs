// src/presentation/http/routes.rs
use crate::presentation::http::middleware::rate_limit::rate_limit_layer;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, categories, favourites, my_recipes, profile, recipes},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    build_router_with_options(state, allowed_origins, true)
}

/// Router with permissive CORS, used by tests and tools that do not care
/// about origins.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    build_router_with_options(state, &[], rate_limit)
}

pub fn build_router_with_options(
    state: HttpState,
    allowed_origins: &[String],
    rate_limit: bool,
) -> Router {
    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .nest("/api/v1", api_routes());

    let router = match (rate_limit, rate_limit_layer()) {
        (true, Some(layer)) => router.layer(layer),
        (true, None) => {
            tracing::warn!("rate limiter configuration rejected; serving without it");
            router
        }
        (false, _) => router,
    };

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn api_routes() -> Router {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/activate/{uid}/{token}", get(auth::activate))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route(
            "/my-profile",
            get(profile::get_profile).patch(profile::update_profile),
        )
        .route("/home", get(recipes::home))
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route("/recipes", get(recipes::list_recipes))
        .route("/recipes/filter", get(recipes::filter_recipes))
        .route("/recipes/search", get(recipes::search_recipes))
        .route("/recipes/{slug}", get(recipes::get_recipe))
        .route("/recipes/{slug}/reviews", post(recipes::create_review))
        .route(
            "/my-recipes",
            get(my_recipes::list_my_recipes).post(my_recipes::create_my_recipe),
        )
        .route(
            "/my-recipes/{id}",
            get(my_recipes::get_my_recipe)
                .put(my_recipes::update_my_recipe)
                .delete(my_recipes::delete_my_recipe),
        )
        .route("/favourites", get(favourites::list_favourites))
        .route(
            "/favourites/{slug}",
            axum::routing::delete(favourites::remove_favourite),
        )
        .route(
            "/favourites/{slug}/toggle",
            post(favourites::toggle_favourite),
        )
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() {
        cors.allow_origin(Any).allow_headers(Any)
    } else {
        cors.allow_origin(AllowOrigin::list(origins))
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
