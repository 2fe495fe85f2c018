//! Biblio Application Library
//!
//! This library provides the book management modules and the router
//! assembly for the biblio service.

pub mod modules;
pub mod state;
pub mod utils;

use axum::{routing::get, Router};

use biblio_http::router::RouterBuilder;
use biblio_kernel::settings::Settings;

pub use state::AppState;

/// Assemble the application router with global middleware and all module
/// routes mounted at the root.
pub fn app(state: AppState, settings: &Settings) -> Router {
    RouterBuilder::new()
        .with_tracing()
        .with_cors()
        .with_request_id()
        .with_timeout(settings.server.request_timeout_ms)
        .route("/", get(banner))
        .route("/healthz", get(health_check))
        .merge(modules::books::routes::routes(state))
        .build()
}

/// Service banner
async fn banner() -> &'static str {
    "Book Management App Backend"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}
