//! 词频服务
//!
//! 将用户提交的消息转发到 Kafka，由外部流计算作业完成词频统计；
//! 统计结果以有序集合形式存放在 Redis 中，本服务负责读取并转换为报表结构。

pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod publisher;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::{Result, ServiceError};
pub use models::{Message, ScoredMember, WordCountPair};
pub use publisher::{KafkaMessagePublisher, MessagePublisher};
pub use service::WordCountService;
pub use store::{RankedStore, RedisRankedStore};
