//! REST API 请求/响应 DTO

use serde::{Deserialize, Serialize};

use crate::models::Message;

/// 提交消息请求
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitMessageRequest {
    pub payload: String,
}

impl From<SubmitMessageRequest> for Message {
    fn from(req: SubmitMessageRequest) -> Self {
        Message::new(req.payload)
    }
}

/// API 统一响应
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// 创建成功响应（无数据）
    pub fn success_empty() -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: None,
        }
    }
}
