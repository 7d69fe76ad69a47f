use crate::journal::draft::TradeDraft;
use crate::journal::entity::{Direction, EmotionalState, TradeResult};
use crate::journal::error::ValidationError;
use crate::suggest::error::SuggestError;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// # Summary
/// 生成建议所需的交易上下文。
///
/// # Invariants
/// - `strategy` 已解析，不会是 "Other"。
/// - `result` 与 `pips_captured` 的推导规则和日志记录完全一致。
/// - `reason` 非空，`pips_captured` 不为 0。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeContext {
    pub direction: Direction,
    pub currency_pair: String,
    pub strategy: String,
    pub result: TradeResult,
    pub pips_captured: Decimal,
    pub risk_free: bool,
    pub reason: String,
    pub emotional_state: EmotionalState,
}

impl TradeContext {
    /// # Summary
    /// 从待提交表单构造建议上下文。
    ///
    /// # Logic
    /// 1. 点数不能为 0，复盘原因去空白后必须非空。
    /// 2. 解析策略选择，"Other" 必须附带自定义文本。
    /// 3. 用统一规则推导结果。
    ///
    /// # Returns
    /// 上下文，或 `ValidationError` (此时不应发起请求)。
    pub fn from_draft(draft: &TradeDraft) -> Result<Self, ValidationError> {
        if draft.pips_captured.is_zero() || draft.reason.trim().is_empty() {
            return Err(ValidationError::IncompleteReview);
        }
        let strategy = draft.strategy_selection().resolve()?;

        Ok(Self {
            direction: draft.direction,
            currency_pair: draft.currency_pair.trim().to_string(),
            strategy,
            result: TradeResult::from_pips(draft.pips_captured),
            pips_captured: draft.pips_captured,
            risk_free: draft.risk_free,
            reason: draft.reason.trim().to_string(),
            emotional_state: draft.emotional_state,
        })
    }
}

/// # Summary
/// 外部文本生成服务的接口定义。
///
/// # Invariants
/// - 实现必须是 `Send` 和 `Sync` 以支持并发调用。
/// - 无状态，失败不自动重试。
#[async_trait]
pub trait SuggestionPort: Send + Sync {
    /// # Summary
    /// 针对一笔交易生成简短的改进建议。
    ///
    /// # Logic
    /// 1. 将上下文渲染为自然语言提示词。
    /// 2. 发起一次请求/响应调用。
    /// 3. 返回生成的文本或可区分的错误。
    ///
    /// # Arguments
    /// * `context` - 已校验的交易上下文。
    ///
    /// # Returns
    /// * 成功返回建议文本。
    /// * 失败返回 `Err(SuggestError)`。
    async fn suggest(&self, context: &TradeContext) -> Result<String, SuggestError>;
}
