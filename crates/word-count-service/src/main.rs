//! 词频服务
//!
//! 提供消息提交和词频排行查询的 REST API。

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{error, info, warn};
use word_count_service::{
    KafkaMessagePublisher, RedisRankedStore, WordCountService, routes, state::AppState,
};
use wordcount_shared::{cache::Cache, config::AppConfig, kafka::KafkaProducer, observability};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load("word-count-service")?;

    let obs_config = config
        .observability
        .clone()
        .with_service_name(&config.service_name);
    let _guard = observability::init(&obs_config).await?;

    info!(
        environment = %config.environment,
        topic = %config.wordcount.topic,
        word_counts_key = %config.wordcount.word_counts_key,
        top_words_key = %config.wordcount.top_words_key,
        "Starting word-count-service on {}",
        config.server_addr()
    );

    let producer = KafkaProducer::new(&config.kafka)?;
    let cache = Cache::new(&config.redis)?;

    let service = Arc::new(WordCountService::new(
        Arc::new(KafkaMessagePublisher::new(producer.clone())),
        Arc::new(RedisRankedStore::new(cache)),
        config.wordcount.clone(),
    ));

    let app = routes::build_router(
        AppState::new(service),
        Duration::from_secs(config.server.request_timeout_seconds),
    );

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("word-count-service listening on {}", config.server_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // HTTP 已停止接收请求，把已返回 202 的消息投递出去再退出
    if let Err(e) = tokio::task::spawn_blocking(move || producer.flush()).await? {
        warn!(error = %e, "退出前仍有消息未投递");
    }

    info!("word-count-service stopped");
    Ok(())
}

/// 监听关闭信号
///
/// K8s 通过 SIGTERM 通知 Pod 停止；本地开发通过 Ctrl+C。
/// 收到任一信号后返回，触发 axum 的优雅关闭流程。
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "注册 Ctrl+C 处理器失败");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "注册 SIGTERM 处理器失败");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
