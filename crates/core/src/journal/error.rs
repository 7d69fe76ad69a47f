use thiserror::Error;

/// # Summary
/// 表单校验错误，提交被拒绝且日志不发生任何变更。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 货币对为空
    #[error("Currency Pair is a required field.")]
    EmptyCurrencyPair,
    /// 策略为空
    #[error("Strategy is a required field.")]
    EmptyStrategy,
    /// 选择了 "Other" 但没有填写自定义策略
    #[error("Please specify your custom strategy when \"Other\" is selected.")]
    MissingCustomStrategy,
    /// 请求 AI 建议前点数为 0 或未填写复盘原因
    #[error("Please enter Pips Captured and Reason for Win/Loss before generating a suggestion.")]
    IncompleteReview,
}

/// # Summary
/// 日志变更操作的错误。
#[derive(Error, Debug)]
pub enum JournalError {
    /// 更新目标不存在，日志保持不变
    #[error("Trade not found: {0}")]
    NotFound(String),
}
