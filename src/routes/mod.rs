//! HTTP route handlers and router assembly.
//!
//! - `inventory`: register, list, get, update and delete items
//! - `photos`: photo download and replacement
//! - `search`: lookup by id with optional photo link
//! - `pages`: HTML index; the form pages are static files
//! - `docs`: generated OpenAPI document and its viewer page
//! - `health`: liveness, version and counters

pub mod docs;
pub mod health;
pub mod inventory;
pub mod pages;
pub mod photos;
pub mod search;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, get_service},
    Router,
};
use tower_http::{compression::CompressionLayer, services::ServeFile, trace::TraceLayer};

use crate::error::AppError;
use crate::middleware::security_headers::security_headers_middleware;
use crate::state::AppState;

/// Routes without middleware. Anything unmatched, by path or by method, is 405.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();
    let register_page = ServeFile::new(static_dir.join("register.html"));
    let search_page = ServeFile::new(static_dir.join("search.html"));

    Router::new()
        .route("/", get(pages::index))
        .route("/register", get_service(register_page).post(inventory::register))
        .route("/search", get_service(search_page).post(search::search))
        .route("/inventory", get(inventory::list_items))
        .route(
            "/inventory/{id}",
            get(inventory::get_item).put(inventory::update_item).delete(inventory::delete_item),
        )
        .route("/inventory/{id}/photo", get(photos::get_photo).put(photos::put_photo))
        .route("/api-docs", get(docs::docs_page))
        .route(docs::OPENAPI_JSON_PATH, get(docs::openapi_json))
        .route("/healthz", get(health::healthz))
        .route("/version", get(health::version))
        .route("/metrics", get(health::metrics))
        .fallback(method_not_allowed)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

/// Full application: routes plus body limit, compression, tracing and security headers.
pub fn app(state: AppState) -> Router {
    let cfg = state.config.clone();
    let body_limit = cfg.server.body_limit_bytes;
    router(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(from_fn_with_state(cfg, security_headers_middleware))
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
