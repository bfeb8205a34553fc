//! Redis 有序集合访问模块
//!
//! 提供 Redis 连接管理和词频服务所需的有序集合读取操作。
//! 有序集合由外部流计算作业维护，这里只读不写。

use crate::config::RedisConfig;
use crate::error::{Result, SharedError};
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Redis 客户端
#[derive(Clone)]
pub struct Cache {
    client: Client,
    connect_timeout: Duration,
}

impl Cache {
    /// 创建 Redis 客户端
    ///
    /// 此时不建立连接，首次命令执行时才会连接。
    pub fn new(config: &RedisConfig) -> Result<Self> {
        let client = Client::open(config.url.as_str())?;
        info!(url = %config.url, "Redis client created");
        Ok(Self {
            client,
            connect_timeout: Duration::from_secs(config.connect_timeout_seconds),
        })
    }

    /// 获取连接
    ///
    /// 超时以 IO 错误的形式归入 Redis 连接错误。
    async fn get_conn(&self) -> Result<MultiplexedConnection> {
        match tokio::time::timeout(
            self.connect_timeout,
            self.client.get_multiplexed_async_connection(),
        )
        .await
        {
            Ok(conn) => conn.map_err(SharedError::from),
            Err(_) => Err(SharedError::Redis(redis::RedisError::from(
                std::io::Error::new(std::io::ErrorKind::TimedOut, "Redis 连接超时"),
            ))),
        }
    }

    /// 健康检查
    pub async fn health_check(&self) -> Result<()> {
        let mut conn = self.get_conn().await?;
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map(|_| ())
            .map_err(SharedError::from)
    }

    /// 按分数区间读取有序集合成员及分数（ZRANGEBYSCORE ... WITHSCORES）
    ///
    /// 结果按分数升序返回；key 不存在时返回空列表。
    #[instrument(skip(self))]
    pub async fn zrange_by_score_with_scores(
        &self,
        key: &str,
        min: f64,
        max: f64,
    ) -> Result<Vec<(String, f64)>> {
        let mut conn = self.get_conn().await?;
        let entries: Vec<(String, f64)> = conn
            .zrangebyscore_withscores(key, score_bound(min), score_bound(max))
            .await?;

        debug!(key, count = entries.len(), "有序集合区间读取完成");
        Ok(entries)
    }
}

/// 将分数边界转换为 Redis 参数，无穷值使用 `-inf` / `+inf`
pub fn score_bound(value: f64) -> String {
    if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else if value == f64::INFINITY {
        "+inf".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bound_infinite() {
        assert_eq!(score_bound(f64::NEG_INFINITY), "-inf");
        assert_eq!(score_bound(f64::INFINITY), "+inf");
    }

    #[test]
    fn test_score_bound_finite() {
        assert_eq!(score_bound(0.0), "0");
        assert_eq!(score_bound(-12.5), "-12.5");
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let config = RedisConfig {
            url: "not a redis url".to_string(),
            ..Default::default()
        };
        assert!(Cache::new(&config).is_err());
    }

    #[test]
    fn test_new_does_not_connect() {
        // 无可用 Redis 时创建客户端也应成功
        let config = RedisConfig {
            url: "redis://127.0.0.1:1".to_string(),
            ..Default::default()
        };
        assert!(Cache::new(&config).is_ok());
    }
}
