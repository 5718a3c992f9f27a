use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::app_state::AppState;
use crate::system::middleware::request_logger::request_logger;

/// Конфигурация всех роутов приложения
///
/// Всё, что не попало в API, отдаётся как статика из сборки фронтенда.
pub fn configure_routes(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 SKU
        // ========================================
        .route("/api/a001/sku/probe", get(handlers::a001_sku::probe))
        .route("/api/a001/sku/search", post(handlers::a001_sku::search))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
