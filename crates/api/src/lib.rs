//! # `fxbook-api` - HTTP API 接入层
//!
//! 本 crate 是交易日志面向表现层的唯一入口。
//! 使用 `axum` 构建路由与控制器，通过 `utoipa` 自动生成 OpenAPI 3.0 Swagger 文档。
//!
//! ## 架构职责
//! - 接收来自浏览器表单与看板的 HTTP 请求
//! - 在边界处校验表单 (`TradeDraft::validate`)，只把合法输入交给 `JournalPort`
//! - 破坏性操作要求显式 `confirm=true`
//! - 将 AI 建议失败统一映射为通用提示，细节只写日志

pub mod error;
pub mod extract;
pub mod routes;
pub mod server;
pub mod types;
