//! 消息发布通道
//!
//! 服务层只依赖 `MessagePublisher` 抽象，便于测试替身替换 Kafka。

use async_trait::async_trait;
use tracing::debug;
use wordcount_shared::kafka::KafkaProducer;

use crate::error::Result;
use crate::models::Message;

/// 消息发布接口
///
/// 发布语义为发后即忘：实现方只需保证消息交给底层通道，不等待投递确认。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePublisher: Send + Sync {
    async fn publish(&self, topic: &str, message: &Message) -> Result<()>;
}

/// 基于 Kafka 生产者的发布实现
///
/// 消息体即 payload 原始字节，不附带 key。
#[derive(Clone)]
pub struct KafkaMessagePublisher {
    producer: KafkaProducer,
}

impl KafkaMessagePublisher {
    pub fn new(producer: KafkaProducer) -> Self {
        Self { producer }
    }
}

#[async_trait]
impl MessagePublisher for KafkaMessagePublisher {
    async fn publish(&self, topic: &str, message: &Message) -> Result<()> {
        self.producer.enqueue(topic, record_body(message))?;
        debug!(topic, "消息已交给 Kafka 生产者");
        Ok(())
    }
}

/// Kafka 记录的消息体：payload 原样透传，不做 JSON 包装
fn record_body(message: &Message) -> &[u8] {
    message.payload.as_bytes()
}
