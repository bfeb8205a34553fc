//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use crate::service::WordCountService;

/// Axum 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WordCountService>,
}

impl AppState {
    pub fn new(service: Arc<WordCountService>) -> Self {
        Self { service }
    }
}
