use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use super::draft::TradeInput;

/// # Summary
/// 交易记录的系统内唯一标识。
///
/// # Invariants
/// - 创建后不可变，且在同一份日志内永不复用。
/// - 序列化时退化为纯字符串。
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct TradeId(pub String);

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// # Summary
/// 入场时所处的交易时段。
///
/// # Invariants
/// - 固定四个取值，声明顺序即看板展示顺序。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum Session {
    Asia,
    London,
    #[serde(rename = "New York")]
    NewYork,
    Overlap,
}

impl Session {
    /// 全部时段，按看板展示顺序排列
    pub const ALL: [Session; 4] = [
        Session::Asia,
        Session::London,
        Session::NewYork,
        Session::Overlap,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Session::Asia => "Asia",
            Session::London => "London",
            Session::NewYork => "New York",
            Session::Overlap => "Overlap",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// # Summary
/// 交易方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Direction {
    /// 做多
    Long,
    /// 做空
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => f.write_str("Long"),
            Direction::Short => f.write_str("Short"),
        }
    }
}

/// # Summary
/// 交易者入场时自评的情绪状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum EmotionalState {
    Calm,
    Rushed,
    #[serde(rename = "Revenge Trading")]
    RevengeTrading,
    Confident,
    Anxious,
}

impl fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EmotionalState::Calm => "Calm",
            EmotionalState::Rushed => "Rushed",
            EmotionalState::RevengeTrading => "Revenge Trading",
            EmotionalState::Confident => "Confident",
            EmotionalState::Anxious => "Anxious",
        };
        f.write_str(label)
    }
}

/// # Summary
/// 交易结果，只能由点数推导得到。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum TradeResult {
    Win,
    Loss,
}

impl TradeResult {
    /// # Summary
    /// 根据捕获点数推导交易结果。
    ///
    /// # Logic
    /// 严格大于 0 才算盈利，0 点归为亏损。
    ///
    /// # Arguments
    /// * `pips`: 带符号的捕获点数。
    ///
    /// # Returns
    /// `Win` 或 `Loss`。
    pub fn from_pips(pips: Decimal) -> Self {
        if pips > Decimal::ZERO {
            TradeResult::Win
        } else {
            TradeResult::Loss
        }
    }
}

impl fmt::Display for TradeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeResult::Win => f.write_str("Win"),
            TradeResult::Loss => f.write_str("Loss"),
        }
    }
}

/// # Summary
/// 持久化的单笔交易记录。
///
/// # Invariants
/// - `id` 创建后不可修改。
/// - `result` 永远等于 `TradeResult::from_pips(pips_captured)`，只在新增/更新时重新推导。
/// - `strategy` 已是最终解析后的字符串，不会出现 "Other" 占位。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    /// 唯一标识
    #[schema(value_type = String, example = "1718000000000-5f0c2d1e9a7b4c3d8e6f1a2b3c4d5e6f")]
    pub id: TradeId,
    /// 入场时间 (持久化为 ISO-8601 字符串)
    pub entry_date_time: DateTime<Utc>,
    /// 交易时段
    pub session: Session,
    /// 货币对
    #[schema(example = "EUR/USD")]
    pub currency_pair: String,
    /// 方向
    pub direction: Direction,
    /// 策略名称
    #[schema(example = "Breakout")]
    pub strategy: String,
    /// 捕获点数 (正为盈利)
    #[schema(value_type = f64, example = 25.0)]
    pub pips_captured: Decimal,
    /// 是否已移至保本
    pub risk_free: bool,
    /// 盈亏原因复盘
    pub reason: String,
    /// 情绪状态
    pub emotional_state: EmotionalState,
    /// 改进建议 (手写或 AI 生成)
    pub suggestion: String,
    /// 推导结果
    pub result: TradeResult,
}

impl TradeRecord {
    /// # Summary
    /// 由已校验的输入创建一条全新的记录。
    ///
    /// # Logic
    /// 1. 绑定调用方分配的 `id`。
    /// 2. 拷贝输入字段并推导 `result`。
    pub fn from_input(id: TradeId, input: TradeInput) -> Self {
        let result = TradeResult::from_pips(input.pips_captured);
        Self {
            id,
            entry_date_time: input.entry_date_time,
            session: input.session,
            currency_pair: input.currency_pair,
            direction: input.direction,
            strategy: input.strategy,
            pips_captured: input.pips_captured,
            risk_free: input.risk_free,
            reason: input.reason,
            emotional_state: input.emotional_state,
            suggestion: input.suggestion,
            result,
        }
    }

    /// # Summary
    /// 用新的输入整体替换除 `id` 外的全部字段。
    pub fn replace_with(&mut self, input: TradeInput) {
        let id = self.id.clone();
        *self = Self::from_input(id, input);
    }

    pub fn is_win(&self) -> bool {
        self.result == TradeResult::Win
    }
}
