//! Axum router configuration with middleware.
//!
//! Middleware: CORS (any origin, method and header) and request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use chronicle_core::category::{Backstory, GenerationCategory, Lore, Storyline};

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            Storyline::CATEGORY.path(),
            post(handlers::generate::generate::<Storyline>),
        )
        .route(
            Backstory::CATEGORY.path(),
            post(handlers::generate::generate::<Backstory>),
        )
        .route(
            Lore::CATEGORY.path(),
            post(handlers::generate::generate::<Lore>),
        )
        .route("/health", get(handlers::health::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
