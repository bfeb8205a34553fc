//! 词频 API 处理器

use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::{
    dto::{ApiResponse, SubmitMessageRequest},
    error::ServiceError,
    models::WordCountPair,
    state::AppState,
};

/// 提交消息
///
/// POST /api/messages
///
/// 消息交给 Kafka 后立即返回 202，不等待统计结果。
#[instrument(skip(state, req))]
pub async fn submit_message(
    State(state): State<AppState>,
    Json(req): Json<SubmitMessageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ServiceError> {
    state.service.submit_message(req.into()).await?;
    Ok((StatusCode::ACCEPTED, Json(ApiResponse::success_empty())))
}

/// Top 词频排行
///
/// GET /api/words/top
#[instrument(skip(state))]
pub async fn get_top_words(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<WordCountPair>>>, ServiceError> {
    let words = state.service.get_top_words().await?;
    Ok(Json(ApiResponse::success(words)))
}

/// 全部词频
///
/// GET /api/words/counts
#[instrument(skip(state))]
pub async fn get_word_count(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<WordCountPair>>>, ServiceError> {
    let words = state.service.get_word_count().await?;
    Ok(Json(ApiResponse::success(words)))
}

/// 存活检查
///
/// GET /health
pub async fn health() -> &'static str {
    "OK"
}

/// 就绪检查，探测 Redis
///
/// GET /health/ready
pub async fn ready(State(state): State<AppState>) -> Result<&'static str, ServiceError> {
    state.service.health_check().await?;
    Ok("READY")
}
