//! Kafka 基础设施封装
//!
//! 将 rdkafka 的底层 API 封装为业务友好的 Producer 抽象，
//! 统一错误映射，避免各服务重复编写样板代码。

use std::time::Duration;

use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::util::Timeout;
use tracing::{debug, info, warn};

use crate::config::KafkaConfig;
use crate::error::SharedError;

// ---------------------------------------------------------------------------
// Topic 常量
// ---------------------------------------------------------------------------

/// 默认 topic 名称，与外部词频统计作业订阅的 topic 保持一致
pub mod topics {
    pub const WORD_COUNT: &str = "wordcount.topic";
}

// ---------------------------------------------------------------------------
// KafkaProducer
// ---------------------------------------------------------------------------

/// 面向业务的 Kafka 生产者
///
/// 封装 `FutureProducer`，内部已派生 Clone（`FutureProducer` 本身是 Arc 包装的）。
/// 最后一个克隆被 drop 时 librdkafka 会丢弃队列中未投递的消息，退出前必须调用 `flush`。
#[derive(Clone)]
pub struct KafkaProducer {
    producer: FutureProducer,
    flush_timeout: Duration,
}

impl KafkaProducer {
    /// 根据配置创建生产者
    ///
    /// 创建时不会连接 broker，`message.timeout.ms` 控制消息在本地队列中的最长等待时间，
    /// 同时作为 `flush` 的等待上限。
    pub fn new(config: &KafkaConfig) -> Result<Self, SharedError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("message.timeout.ms", config.message_timeout_ms.to_string())
            .create()
            .map_err(|e| SharedError::Kafka(format!("创建生产者失败: {e}")))?;

        info!(brokers = %config.brokers, "Kafka 生产者已初始化");
        Ok(Self {
            producer,
            flush_timeout: Duration::from_millis(config.message_timeout_ms),
        })
    }

    /// 将原始字节消息放入生产者队列，不等待投递结果
    ///
    /// 只有入队被拒绝（队列已满、消息过大等）时返回错误；
    /// broker 侧的投递失败由 librdkafka 自行处理，调用方不可见。
    pub fn enqueue(&self, topic: &str, payload: &[u8]) -> Result<(), SharedError> {
        // 丢弃 DeliveryFuture 不会取消投递
        let _delivery = self
            .producer
            .send_result(build_record(topic, payload))
            .map_err(|(e, _)| SharedError::Kafka(format!("消息入队失败: {e}")))?;

        debug!(topic, bytes = payload.len(), "消息已入队");
        Ok(())
    }

    /// 等待队列中的消息投递完成，最多等待 `message.timeout.ms`
    ///
    /// 阻塞调用，异步上下文中应放到 `spawn_blocking` 执行。
    pub fn flush(&self) -> Result<(), SharedError> {
        let pending = self.producer.in_flight_count();
        self.producer
            .flush(Timeout::After(self.flush_timeout))
            .map_err(|e| {
                warn!(pending, error = %e, "Kafka 生产者队列未能在超时前清空");
                SharedError::Kafka(format!("刷新生产者队列失败: {e}"))
            })?;

        info!(pending, "Kafka 生产者队列已清空");
        Ok(())
    }
}

/// 构造无 key 的记录，消息体即原始字节
fn build_record<'a>(topic: &'a str, payload: &'a [u8]) -> FutureRecord<'a, (), [u8]> {
    FutureRecord::to(topic).payload(payload)
}
