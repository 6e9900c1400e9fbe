use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use contracts::usecases::u601_upload_document::UPLOAD_PATH;
use contracts::usecases::u602_ask_question::QUERY_PATH;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::shared::config::ServerConfig;
use crate::system::{self, app_state::AppState};

/// All application routes; anything else is served from the frontend build
pub fn configure_routes(state: AppState, server: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(UPLOAD_PATH, post(handlers::u601_upload_document::upload))
        .route(QUERY_PATH, post(handlers::u602_ask_question::query))
        .layer(DefaultBodyLimit::max(server.max_upload_bytes))
        .with_state(state)
        .fallback_service(ServeDir::new(&server.static_dir))
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors)
}
