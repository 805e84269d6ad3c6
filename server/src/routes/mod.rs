//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the portfolio page, the resume API, and the static
//! asset service (stylesheet, photo, compiled WASM package) under a single
//! Axum router.

pub mod pages;
pub mod resume;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router: page, API, health, and static assets.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_service = ServeDir::new(state.static_dir.as_path());

    Router::new()
        .route("/", get(pages::home))
        .route("/api/resume", get(resume::resume))
        .route("/healthz", get(healthz))
        .nest_service("/static", static_service)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
