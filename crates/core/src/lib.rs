//! # `fxbook-core` - 交易日志领域核心
//!
//! 只包含实体、纯函数与端口 (Trait) 定义，不依赖任何具体基础设施。
//! 存储、AI 建议与 HTTP 接入均由外层 crate 以适配器形式实现这些端口。

pub mod analytics;
pub mod config;

pub mod common {
    pub mod time;
}

pub mod blob {
    pub mod error;
    pub mod port;
}

pub mod journal {
    pub mod draft;
    pub mod entity;
    pub mod error;
    pub mod port;
}

pub mod suggest {
    pub mod error;
    pub mod port;
}

#[cfg(feature = "test-utils")]
pub mod test_utils;
