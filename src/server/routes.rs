// src/server/routes.rs
//! Axum router configuration for the Larder server
//!
//! Routes:
//! - `/health` - Health check endpoint
//! - `/recipes`, `/recipes/:id` - Recipe collection and items
//! - `/ingredients`, `/ingredients/:id` - Ingredient collection and items

use crate::server::handlers::{ingredients, recipes};
use crate::server::SharedState;
use axum::{
    http::HeaderValue,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Create the main application router
pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);
    let compress = state.config.enable_compression;

    let router = Router::new()
        .route("/health", get(health_check))
        .route(
            "/recipes",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        .route(
            "/recipes/:id",
            get(recipes::get_recipe)
                .put(recipes::replace_recipe)
                .patch(recipes::patch_recipe)
                .delete(recipes::delete_recipe),
        )
        .route(
            "/ingredients",
            get(ingredients::list_ingredients).post(ingredients::create_ingredient),
        )
        .route(
            "/ingredients/:id",
            get(ingredients::get_ingredient)
                .put(ingredients::update_ingredient)
                .patch(ingredients::update_ingredient)
                .delete(ingredients::delete_ingredient),
        )
        .with_state(state);

    let router = if compress {
        router.layer(CompressionLayer::new())
    } else {
        router
    };

    router.layer(cors)
}

/// CORS layer: any origin when none are configured, otherwise the listed ones
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    cors.allow_origin(allowed)
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}
