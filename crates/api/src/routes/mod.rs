//! # 路由模块
//!
//! 按业务领域划分 Handler：交易记录、统计看板、AI 建议。

pub mod analytics;
pub mod suggestion;
pub mod trade;
