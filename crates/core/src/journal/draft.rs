use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entity::{Direction, EmotionalState, Session, TradeRecord};
use super::error::ValidationError;

/// 表单中代表"自定义策略"的占位选项
pub const OTHER_STRATEGY: &str = "Other";

/// 表单下拉框中的预设策略，最后一项为自定义占位
pub const STRATEGY_PRESETS: [&str; 7] = [
    "Breakout",
    "Trend Following",
    "Support/Resistance",
    "Reversal",
    "Scalping",
    "News Trading",
    OTHER_STRATEGY,
];

/// # Summary
/// 表单阶段的策略选择，带有 "Other" 逃生口。
///
/// # Invariants
/// - 只存在于输入校验边界，持久化实体中只保存 `resolve` 之后的字符串。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategySelection {
    /// 选择了某个预设 (或历史遗留的任意名称)
    Preset(String),
    /// 选择了 "Other"，需配合自定义文本
    Other { custom: Option<String> },
}

impl StrategySelection {
    /// # Summary
    /// 根据表单的两个字段构造选择。
    ///
    /// # Arguments
    /// * `strategy`: 下拉框的值。
    /// * `custom`: 自定义输入框的值。
    ///
    /// 比较前去除首尾空白，`" Other "` 同样视为占位。
    pub fn from_form(strategy: &str, custom: Option<&str>) -> Self {
        if strategy.trim() == OTHER_STRATEGY {
            StrategySelection::Other {
                custom: custom.map(str::to_string),
            }
        } else {
            StrategySelection::Preset(strategy.to_string())
        }
    }

    /// # Summary
    /// 将已保存的策略名还原为表单选择 (用于编辑回填)。
    ///
    /// # Logic
    /// 1. 名称属于预设 (且不是占位) 时还原为 `Preset`。
    /// 2. 否则还原为 `Other`，并把原名称填入自定义文本。
    pub fn for_strategy(resolved: &str) -> Self {
        let is_preset = resolved != OTHER_STRATEGY && STRATEGY_PRESETS.contains(&resolved);
        if is_preset {
            StrategySelection::Preset(resolved.to_string())
        } else {
            StrategySelection::Other {
                custom: Some(resolved.to_string()),
            }
        }
    }

    /// # Summary
    /// 解析出最终写入记录的策略名。
    ///
    /// # Logic
    /// 1. `Preset` 去除首尾空白后必须非空，且不能是 "Other" 占位本身。
    /// 2. `Other` 的自定义文本去除首尾空白后必须非空。
    ///
    /// # Returns
    /// 最终策略名，或 `ValidationError`。
    pub fn resolve(&self) -> Result<String, ValidationError> {
        match self {
            StrategySelection::Preset(name) => {
                let name = name.trim();
                if name.is_empty() {
                    Err(ValidationError::EmptyStrategy)
                } else if name == OTHER_STRATEGY {
                    Err(ValidationError::MissingCustomStrategy)
                } else {
                    Ok(name.to_string())
                }
            }
            StrategySelection::Other { custom } => custom
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or(ValidationError::MissingCustomStrategy),
        }
    }

    /// 拆回表单的两个字段
    pub fn into_form(self) -> (String, Option<String>) {
        match self {
            StrategySelection::Preset(name) => (name, None),
            StrategySelection::Other { custom } => (OTHER_STRATEGY.to_string(), custom),
        }
    }
}

/// # Summary
/// 待提交的交易表单数据，尚未校验。
///
/// # Invariants
/// - 可能包含 "Other" 占位与空字段，只有 `validate` 成功后才能进入日志。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TradeDraft {
    /// 入场时间
    pub entry_date_time: DateTime<Utc>,
    pub session: Session,
    #[schema(example = "EUR/USD")]
    pub currency_pair: String,
    pub direction: Direction,
    /// 预设策略名或 "Other"
    #[schema(example = "Breakout")]
    pub strategy: String,
    /// strategy 为 "Other" 时必填
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_strategy: Option<String>,
    #[schema(value_type = f64, example = 25.0)]
    pub pips_captured: Decimal,
    #[serde(default)]
    pub risk_free: bool,
    #[serde(default)]
    pub reason: String,
    pub emotional_state: EmotionalState,
    #[serde(default)]
    pub suggestion: String,
}

impl TradeDraft {
    pub fn strategy_selection(&self) -> StrategySelection {
        StrategySelection::from_form(&self.strategy, self.custom_strategy.as_deref())
    }

    /// # Summary
    /// 校验表单并产出可提交给日志的输入。
    ///
    /// # Logic
    /// 1. 货币对去空白后不能为空。
    /// 2. 解析策略选择，"Other" 必须附带自定义文本。
    /// 3. 其余字段原样带入。
    ///
    /// # Returns
    /// 校验通过的 `TradeInput`，或首个 `ValidationError`。
    pub fn validate(&self) -> Result<TradeInput, ValidationError> {
        let currency_pair = self.currency_pair.trim();
        if currency_pair.is_empty() {
            return Err(ValidationError::EmptyCurrencyPair);
        }
        let strategy = self.strategy_selection().resolve()?;

        Ok(TradeInput {
            entry_date_time: self.entry_date_time,
            session: self.session,
            currency_pair: currency_pair.to_string(),
            direction: self.direction,
            strategy,
            pips_captured: self.pips_captured,
            risk_free: self.risk_free,
            reason: self.reason.clone(),
            emotional_state: self.emotional_state,
            suggestion: self.suggestion.clone(),
        })
    }

    /// # Summary
    /// 用已有记录回填编辑表单。
    ///
    /// # Logic
    /// 非预设策略回填为 "Other" + 自定义文本，保证再次提交时内容不变。
    pub fn from_record(record: &TradeRecord) -> Self {
        let (strategy, custom_strategy) =
            StrategySelection::for_strategy(&record.strategy).into_form();
        Self {
            entry_date_time: record.entry_date_time,
            session: record.session,
            currency_pair: record.currency_pair.clone(),
            direction: record.direction,
            strategy,
            custom_strategy,
            pips_captured: record.pips_captured,
            risk_free: record.risk_free,
            reason: record.reason.clone(),
            emotional_state: record.emotional_state,
            suggestion: record.suggestion.clone(),
        }
    }
}

/// # Summary
/// 通过校验的交易输入，Mutation API 唯一接受的参数类型。
///
/// # Invariants
/// - 只能由 `TradeDraft::validate` 构造。
/// - `currency_pair` 与 `strategy` 非空，`strategy` 不含 "Other" 占位。
#[derive(Debug, Clone, PartialEq)]
pub struct TradeInput {
    pub(crate) entry_date_time: DateTime<Utc>,
    pub(crate) session: Session,
    pub(crate) currency_pair: String,
    pub(crate) direction: Direction,
    pub(crate) strategy: String,
    pub(crate) pips_captured: Decimal,
    pub(crate) risk_free: bool,
    pub(crate) reason: String,
    pub(crate) emotional_state: EmotionalState,
    pub(crate) suggestion: String,
}

impl TradeInput {
    pub fn currency_pair(&self) -> &str {
        &self.currency_pair
    }

    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    pub fn pips_captured(&self) -> Decimal {
        self.pips_captured
    }
}
