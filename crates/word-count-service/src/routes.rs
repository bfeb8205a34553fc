//! 路由配置模块

use std::time::Duration;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::timeout::TimeoutLayer;
use wordcount_shared::observability::middleware as obs_middleware;

use crate::{handlers, state::AppState};

/// 词频业务路由
pub fn word_count_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", post(handlers::submit_message))
        .route("/words/top", get(handlers::get_top_words))
        .route("/words/counts", get(handlers::get_word_count))
}

/// 构建完整应用路由
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/health/ready", get(handlers::ready))
        .nest("/api", word_count_routes())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .with_state(state)
}
