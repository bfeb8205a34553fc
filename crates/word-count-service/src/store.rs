//! 有序集合存储
//!
//! 服务层只依赖 `RankedStore` 抽象，便于测试替身替换 Redis。

use async_trait::async_trait;
use wordcount_shared::cache::Cache;

use crate::error::Result;
use crate::models::ScoredMember;

/// 有序集合只读接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RankedStore: Send + Sync {
    /// 读取分数落在 [min, max] 内的成员，按分数升序；key 不存在时返回空列表
    async fn range_by_score(&self, key: &str, min: f64, max: f64) -> Result<Vec<ScoredMember>>;

    /// 存储可用性检查
    async fn health_check(&self) -> Result<()>;
}

/// 基于 Redis 有序集合的实现
#[derive(Clone)]
pub struct RedisRankedStore {
    cache: Cache,
}

impl RedisRankedStore {
    pub fn new(cache: Cache) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl RankedStore for RedisRankedStore {
    async fn range_by_score(&self, key: &str, min: f64, max: f64) -> Result<Vec<ScoredMember>> {
        let entries = self.cache.zrange_by_score_with_scores(key, min, max).await?;
        Ok(entries
            .into_iter()
            .map(|(member, score)| ScoredMember::new(member, Some(score)))
            .collect())
    }

    async fn health_check(&self) -> Result<()> {
        self.cache.health_check().await?;
        Ok(())
    }
}
