//! 词频服务错误类型
//!
//! 外部依赖（Kafka、Redis）的连接失败原样向上传递，不做重试；
//! HTTP 层据此返回 503，系统级细节只记录日志。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use wordcount_shared::error::SharedError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("消息发布失败: {0}")]
    Publish(String),

    #[error("有序集合读取失败: {0}")]
    Store(String),
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Publish(_) | Self::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Publish(_) => "PUBLISH_UNAVAILABLE",
            Self::Store(_) => "STORE_UNAVAILABLE",
        }
    }
}

impl From<SharedError> for ServiceError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::Kafka(msg) => Self::Publish(msg),
            SharedError::Redis(e) => Self::Store(e.to_string()),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            Self::Publish(e) => {
                tracing::error!(error = %e, "Kafka 发布失败");
                "消息服务暂不可用，请稍后重试"
            }
            Self::Store(e) => {
                tracing::error!(error = %e, "Redis 读取失败");
                "统计结果暂不可用，请稍后重试"
            }
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": message,
            "data": serde_json::Value::Null
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_shared_error() {
        let err: ServiceError = SharedError::Kafka("queue full".to_string()).into();
        assert!(matches!(err, ServiceError::Publish(ref m) if m == "queue full"));

        let redis_err = redis_io_error();
        let err: ServiceError = SharedError::Redis(redis_err).into();
        assert!(matches!(err, ServiceError::Store(_)));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ServiceError::Publish("x".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ServiceError::Store("x".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_into_response_hides_details() {
        let response = ServiceError::Store("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    fn redis_io_error() -> redis::RedisError {
        redis::RedisError::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))
    }
}
