use std::env;
use std::path::Path;
use std::sync::Arc;

use fxbook_api::server::{AppState, start_server};
use fxbook_core::common::time::RealTimeProvider;
use fxbook_journal::journal::TradeJournal;
use fxbook_store::blob::SqliteBlobStore;
use fxbook_suggest::gemini::GeminiSuggester;
use tracing::info;

mod logging;
mod settings;

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责实例化所有具体实现组件并通过 Arc<dyn Trait> 注入到 API 层。
///
/// # Logic
/// 1. 加载配置并初始化全局日志。
/// 2. 实例化基础设施层（SQLite 文档存储、Gemini 客户端）。
/// 3. 加载交易日志（缺失时写入演示数据）。
/// 4. 启动 HTTP 服务，等待 Ctrl-C 优雅退出。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 配置与日志
    let config = settings::load(
        Path::new(settings::DEFAULT_CONFIG_PATH),
        env::var("GEMINI_API_KEY").ok(),
    )?;
    let _log_guard = logging::init(&config.storage.data_dir);
    info!("FXBook starting (data dir: {})", config.storage.data_dir);

    // 2. 实例化基础设施层
    let store = Arc::new(SqliteBlobStore::open(&config.storage.data_dir).await?);
    let suggester = Arc::new(GeminiSuggester::new(
        config.suggestion.api_key.clone(),
        config.suggestion.model.clone(),
        config.suggestion.base_url.clone(),
    )?);
    if config.suggestion.api_key.trim().is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set, AI suggestions will fail until configured");
    }

    // 3. 加载交易日志
    let journal = TradeJournal::load(
        store,
        Arc::new(RealTimeProvider),
        config.storage.document_key.clone(),
    )
    .await;

    let state = AppState {
        journal: Arc::new(journal),
        suggester,
    };

    // 4. 启动服务，挂起直到外部退出信号
    start_server(state, &config.bind_addr(), async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
        }
        info!("Shutdown signal received. Exiting...");
    })
    .await?;

    Ok(())
}
