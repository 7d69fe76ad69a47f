use thiserror::Error;

/// 展示给最终用户的统一失败提示，不暴露底层细节
pub const SUGGESTION_FAILED_MESSAGE: &str = "Failed to get AI suggestion. Please try again.";

/// # Summary
/// AI 建议生成错误枚举。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
/// - 错误详情只写日志，对用户一律使用 `SUGGESTION_FAILED_MESSAGE`。
#[derive(Error, Debug)]
pub enum SuggestError {
    /// 网络连接或传输错误
    #[error("Network error: {0}")]
    Network(String),

    /// 配置错误 (如缺少 API Key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// 生成服务返回的错误 (如鉴权失败、内容被拦截)
    #[error("Platform error: {0}")]
    Platform(String),

    /// 服务成功响应但没有任何文本
    #[error("Empty response from suggestion service")]
    EmptyResponse,
}

impl SuggestError {
    pub fn user_message(&self) -> &'static str {
        SUGGESTION_FAILED_MESSAGE
    }
}
