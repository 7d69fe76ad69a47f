//! # 看板统计
//!
//! 无状态的纯函数，每次都基于完整记录列表从头计算。
//! 记录数量受人工录入限制，不做增量或缓存。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::journal::entity::{Session, TradeRecord};

/// 最近交易列表的长度上限
pub const RECENT_TRADES_LIMIT: usize = 10;

/// 单个时段的点数汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionPips {
    pub session: Session,
    #[schema(value_type = f64)]
    pub pips: Decimal,
}

/// 单个策略的盈利次数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StrategyWins {
    pub strategy: String,
    pub wins: usize,
}

/// # Summary
/// 看板所需的全部统计结果。
///
/// # Invariants
/// - `pips_by_session` 恒为四项，顺序与 `Session::ALL` 一致。
/// - `wins_by_strategy` 只包含至少盈利一次的策略。
/// - 无记录时所有字段为 0 或空。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,
    /// 胜率百分比 [0, 100]
    #[schema(value_type = f64, example = 50.0)]
    pub win_rate: Decimal,
    #[schema(value_type = f64, example = 15.0)]
    pub total_pips: Decimal,
    pub risk_free_trades: usize,
    pub pips_by_session: Vec<SessionPips>,
    pub wins_by_strategy: Vec<StrategyWins>,
    pub recent_trades: Vec<TradeRecord>,
}

impl Analytics {
    /// 查询某个时段的点数合计
    pub fn pips_for(&self, session: Session) -> Decimal {
        self.pips_by_session
            .iter()
            .find(|p| p.session == session)
            .map(|p| p.pips)
            .unwrap_or(Decimal::ZERO)
    }

    /// 查询某个策略的盈利次数，未出现的策略返回 None
    pub fn wins_for(&self, strategy: &str) -> Option<usize> {
        self.wins_by_strategy
            .iter()
            .find(|s| s.strategy == strategy)
            .map(|s| s.wins)
    }
}

/// # Summary
/// 计算看板统计。
///
/// # Logic
/// 1. 统计总数、盈利数、保本数与点数合计。
/// 2. 胜率 = 100 * 盈利数 / 总数，总数为 0 时为 0。
/// 3. 按固定的四个时段累加点数，没有记录的时段保留 0。
/// 4. 仅对盈利记录按策略计数，保持策略首次出现的顺序。
/// 5. 截取存储顺序下的前 10 条作为最近交易。
///
/// # Arguments
/// * `records`: 按存储顺序排列的全部记录。
///
/// # Returns
/// 完整的 `Analytics`。
pub fn compute(records: &[TradeRecord]) -> Analytics {
    let total_trades = records.len();
    let wins = records.iter().filter(|r| r.is_win()).count();
    let risk_free_trades = records.iter().filter(|r| r.risk_free).count();
    let total_pips: Decimal = records.iter().map(|r| r.pips_captured).sum();

    let win_rate = if total_trades == 0 {
        Decimal::ZERO
    } else {
        Decimal::ONE_HUNDRED * Decimal::from(wins) / Decimal::from(total_trades)
    };

    let pips_by_session = Session::ALL
        .iter()
        .map(|session| SessionPips {
            session: *session,
            pips: records
                .iter()
                .filter(|r| r.session == *session)
                .map(|r| r.pips_captured)
                .sum(),
        })
        .collect();

    let mut wins_by_strategy: Vec<StrategyWins> = Vec::new();
    for record in records.iter().filter(|r| r.is_win()) {
        match wins_by_strategy
            .iter_mut()
            .find(|s| s.strategy == record.strategy)
        {
            Some(entry) => entry.wins += 1,
            None => wins_by_strategy.push(StrategyWins {
                strategy: record.strategy.clone(),
                wins: 1,
            }),
        }
    }

    Analytics {
        total_trades,
        wins,
        losses: total_trades - wins,
        win_rate,
        total_pips,
        risk_free_trades,
        pips_by_session,
        wins_by_strategy,
        recent_trades: records.iter().take(RECENT_TRADES_LIMIT).cloned().collect(),
    }
}
