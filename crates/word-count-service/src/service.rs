//! 词频服务门面
//!
//! 提交：把消息转交给发布通道。
//! 查询：从外部作业维护的两个有序集合中读取全部记录，恢复为词频。
//!
//! 外部作业以负数写入计数，因此读取区间固定为 (-inf, 0]，
//! 结果保持存储返回的顺序（分数升序，即词频降序）。

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, instrument};
use wordcount_shared::config::WordCountConfig;
use wordcount_shared::observability::metrics;

use crate::error::Result;
use crate::models::{Message, WordCountPair};
use crate::publisher::MessagePublisher;
use crate::store::RankedStore;

/// 区间查询的分数上界，负数计数约定下覆盖全部记录
const MAX_STORED_SCORE: f64 = 0.0;

/// 词频服务
///
/// 无内部可变状态，可通过 Arc 在请求处理器之间共享。
pub struct WordCountService {
    publisher: Arc<dyn MessagePublisher>,
    store: Arc<dyn RankedStore>,
    config: WordCountConfig,
}

impl WordCountService {
    pub fn new(
        publisher: Arc<dyn MessagePublisher>,
        store: Arc<dyn RankedStore>,
        config: WordCountConfig,
    ) -> Self {
        Self {
            publisher,
            store,
            config,
        }
    }

    /// 提交消息，发后即忘
    ///
    /// 不做校验也不重试，发布通道的错误原样返回。
    #[instrument(skip(self, message), fields(topic = %self.config.topic))]
    pub async fn submit_message(&self, message: Message) -> Result<()> {
        let result = self.publisher.publish(&self.config.topic, &message).await;
        metrics::record_submission(&self.config.topic, status_label(&result));
        result
    }

    /// 读取 Top 词频排行
    pub async fn get_top_words(&self) -> Result<Vec<WordCountPair>> {
        self.read_ranked(&self.config.top_words_key).await
    }

    /// 读取全部词频
    pub async fn get_word_count(&self) -> Result<Vec<WordCountPair>> {
        self.read_ranked(&self.config.word_counts_key).await
    }

    /// 存储可用性检查
    pub async fn health_check(&self) -> Result<()> {
        self.store.health_check().await
    }

    #[instrument(skip(self))]
    async fn read_ranked(&self, key: &str) -> Result<Vec<WordCountPair>> {
        let start = Instant::now();
        let result = self
            .store
            .range_by_score(key, f64::NEG_INFINITY, MAX_STORED_SCORE)
            .await;
        metrics::record_ranked_read(key, status_label(&result), start.elapsed().as_secs_f64());

        let entries = result?;
        debug!(key, count = entries.len(), "排行读取完成");
        Ok(entries.into_iter().map(WordCountPair::from).collect())
    }
}

fn status_label<T>(result: &Result<T>) -> &'static str {
    if result.is_ok() { "success" } else { "failure" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::models::ScoredMember;
    use crate::publisher::MockMessagePublisher;
    use crate::store::MockRankedStore;
    use mockall::predicate::eq;

    fn service(publisher: MockMessagePublisher, store: MockRankedStore) -> WordCountService {
        WordCountService::new(
            Arc::new(publisher),
            Arc::new(store),
            WordCountConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_submit_publishes_once_to_configured_topic() {
        let mut publisher = MockMessagePublisher::new();
        publisher
            .expect_publish()
            .with(eq("wordcount.topic"), eq(Message::new("cat")))
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = service(publisher, MockRankedStore::new());
        svc.submit_message(Message::new("cat")).await.unwrap();
    }

    #[tokio::test]
    async fn test_submit_surfaces_publisher_error() {
        let mut publisher = MockMessagePublisher::new();
        publisher
            .expect_publish()
            .times(1)
            .returning(|_, _| Err(ServiceError::Publish("broker down".to_string())));

        let svc = service(publisher, MockRankedStore::new());
        let err = svc.submit_message(Message::new("cat")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Publish(_)));
    }

    #[tokio::test]
    async fn test_top_words_recovers_counts_in_store_order() {
        let mut store = MockRankedStore::new();
        store
            .expect_range_by_score()
            .with(eq("top_10_words"), eq(f64::NEG_INFINITY), eq(0.0))
            .times(1)
            .returning(|_, _, _| {
                Ok(vec![
                    ScoredMember::new("the", Some(-87.0)),
                    ScoredMember::new("a", Some(-53.0)),
                ])
            });

        let svc = service(MockMessagePublisher::new(), store);
        let top = svc.get_top_words().await.unwrap();
        assert_eq!(
            top,
            vec![WordCountPair::new("the", 87), WordCountPair::new("a", 53)]
        );
    }

    #[tokio::test]
    async fn test_word_count_queries_word_counts_key() {
        let mut store = MockRankedStore::new();
        store
            .expect_range_by_score()
            .with(eq("word_counts"), eq(f64::NEG_INFINITY), eq(0.0))
            .times(1)
            .returning(|_, _, _| Ok(vec![ScoredMember::new("dog", None)]));

        let svc = service(MockMessagePublisher::new(), store);
        let counts = svc.get_word_count().await.unwrap();
        assert_eq!(counts, vec![WordCountPair::new("dog", 0)]);
    }

    #[tokio::test]
    async fn test_keys_are_configured_independently() {
        let mut store = MockRankedStore::new();
        store
            .expect_range_by_score()
            .with(eq("custom_top"), eq(f64::NEG_INFINITY), eq(0.0))
            .times(1)
            .returning(|_, _, _| Ok(vec![]));
        store
            .expect_range_by_score()
            .with(eq("word_counts"), eq(f64::NEG_INFINITY), eq(0.0))
            .times(1)
            .returning(|_, _, _| Ok(vec![]));

        let config = WordCountConfig {
            top_words_key: "custom_top".to_string(),
            ..Default::default()
        };
        let svc = WordCountService::new(Arc::new(MockMessagePublisher::new()), Arc::new(store), config);

        assert!(svc.get_top_words().await.unwrap().is_empty());
        assert!(svc.get_word_count().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_surfaces_store_error() {
        let mut store = MockRankedStore::new();
        store
            .expect_range_by_score()
            .returning(|_, _, _| Err(ServiceError::Store("connection refused".to_string())));

        let svc = service(MockMessagePublisher::new(), store);
        assert!(matches!(
            svc.get_top_words().await,
            Err(ServiceError::Store(_))
        ));
    }
}
