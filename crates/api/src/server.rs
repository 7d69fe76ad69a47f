//! # API 服务启动器
//!
//! 组装 axum 路由、挂载 Swagger UI、配置 CORS 并绑定 TCP 端口对外提供服务。
//! 本模块不直接启动 `main()`, 而是由 `crates/app` 持有并调用。

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_swagger_ui::SwaggerUi;

use fxbook_core::journal::port::JournalPort;
use fxbook_core::suggest::port::SuggestionPort;

use crate::routes::{analytics, suggestion, trade};

// ============================================================
//  共享应用状态
// ============================================================

/// 全局应用状态，通过 axum 的 `State` 提取器注入到每个 Handler 中。
///
/// # Invariants
/// - `journal` 和 `suggester` 在服务启动前由 `crates/app` 注入，生命周期与进程等同。
#[derive(Clone)]
pub struct AppState {
    /// 交易日志 (唯一的记录持有者)
    pub journal: Arc<dyn JournalPort>,
    /// AI 建议生成器
    pub suggester: Arc<dyn SuggestionPort>,
}

// ============================================================
//  OpenAPI 文档定义
// ============================================================

/// 全局 OpenAPI 文档结构
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FXBook 交易日志 API",
        version = "0.1.0",
        description = "个人外汇交易日志的 RESTful API。提供交易记录管理、统计看板与 AI 复盘建议。",
        contact(name = "FXBook Team"),
        license(name = "MIT")
    ),
    tags(
        (name = "交易日志 (Trades)", description = "交易记录的新增、编辑、删除与清空"),
        (name = "统计 (Analytics)", description = "看板统计与策略选项"),
        (name = "AI 建议 (Suggestions)", description = "基于单笔交易的心理复盘建议")
    )
)]
pub struct ApiDoc;

// ============================================================
//  服务构建与启动
// ============================================================

/// 构建完整的 axum 应用路由树 (含 Swagger UI 与 CORS)。
///
/// 与端口绑定解耦，测试可直接挂到自己的 listener 上。
pub fn build_router(state: AppState) -> Router {
    // 1. 按资源收集路由与 OpenAPI Doc，同一路径的不同方法放在同一个 routes! 中
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            trade::list_trades,
            trade::create_trade,
            trade::clear_trades
        ))
        .routes(routes!(
            trade::get_trade,
            trade::update_trade,
            trade::delete_trade
        ))
        .routes(routes!(trade::get_trade_draft))
        .routes(routes!(analytics::get_analytics))
        .routes(routes!(analytics::list_strategy_options))
        .routes(routes!(suggestion::request_suggestion))
        .with_state(state)
        .split_for_parts();

    // 2. 配置 CORS (本地单用户应用，允许所有来源)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 3. 合并 Swagger UI 路由并应用中间件
    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(cors)
}

/// 构建路由并启动 HTTP 监听，直到 `shutdown` 完成。
///
/// # Arguments
/// * `state` - 由 `crates/app` 注入的共享状态
/// * `bind_addr` - 监听的地址与端口，如 `"0.0.0.0:3000"`
/// * `shutdown` - 优雅停机信号
///
/// # Returns
/// 端口绑定或服务运行失败时返回错误。
pub async fn start_server(
    state: AppState,
    bind_addr: &str,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(state);

    tracing::info!("FXBook API Server listening on {}", bind_addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
