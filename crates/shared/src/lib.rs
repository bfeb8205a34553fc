//! 共享库
//!
//! 包含词频服务使用的配置、错误处理、Redis 有序集合、Kafka 生产者与可观测性等基础设施代码。

pub mod cache;
pub mod config;
pub mod error;
pub mod kafka;
pub mod observability;
