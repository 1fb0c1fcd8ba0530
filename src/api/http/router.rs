// src/api/http/router.rs
// HTTP router composition for REST API endpoints

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{
    auth::{list_users_handler, sign_in_handler},
    creative::{generate_handler, refine_handler},
    handlers::health_handler,
    image_proxy::download_image_handler,
};
use crate::api::error::panic_response;
use crate::state::AppState;

/// REST endpoints, nested under /api by `create_router`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/generate", post(generate_handler))
        .route("/refine", post(refine_handler))
        .route("/download-image", get(download_image_handler))
        .route("/auth/google", post(sign_in_handler))
        .route("/auth/users", get(list_users_handler))
}

/// Full application router with CORS, request tracing and panic recovery
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_router())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
