use chrono::{TimeZone, Utc};
use fxbook_core::journal::draft::{OTHER_STRATEGY, StrategySelection, TradeDraft};
use fxbook_core::journal::entity::{
    Direction, EmotionalState, Session, TradeId, TradeRecord, TradeResult,
};
use fxbook_core::journal::error::ValidationError;
use fxbook_core::suggest::port::TradeContext;
use rust_decimal_macros::dec;

fn draft() -> TradeDraft {
    TradeDraft {
        entry_date_time: Utc.with_ymd_and_hms(2026, 5, 11, 13, 45, 0).unwrap(),
        session: Session::Overlap,
        currency_pair: " GBP/JPY ".to_string(),
        direction: Direction::Short,
        strategy: "Breakout".to_string(),
        custom_strategy: None,
        pips_captured: dec!(-12.5),
        risk_free: false,
        reason: "Entered before the candle closed".to_string(),
        emotional_state: EmotionalState::Rushed,
        suggestion: String::new(),
    }
}

#[test]
fn test_other_strategy_resolves_to_custom_text() {
    let selection = StrategySelection::from_form(OTHER_STRATEGY, Some("  London Fade "));
    assert_eq!(selection.resolve().unwrap(), "London Fade");

    let missing = StrategySelection::from_form(OTHER_STRATEGY, Some("   "));
    assert_eq!(missing.resolve(), Err(ValidationError::MissingCustomStrategy));

    let none = StrategySelection::from_form(OTHER_STRATEGY, None);
    assert_eq!(none.resolve(), Err(ValidationError::MissingCustomStrategy));
}

#[test]
fn test_padded_other_marker_is_still_other() {
    for marker in ["Other ", " Other", "  Other  "] {
        let selection = StrategySelection::from_form(marker, None);
        assert_eq!(selection, StrategySelection::Other { custom: None });
        assert_eq!(selection.resolve(), Err(ValidationError::MissingCustomStrategy));
    }

    let custom = StrategySelection::from_form(" Other ", Some("Asian Range"));
    assert_eq!(custom.resolve().unwrap(), "Asian Range");
}

#[test]
fn test_other_marker_never_resolves_as_preset() {
    let selection = StrategySelection::Preset(" Other ".to_string());
    assert_eq!(selection.resolve(), Err(ValidationError::MissingCustomStrategy));

    let mut d = draft();
    d.strategy = "Other ".to_string();
    assert_eq!(d.validate(), Err(ValidationError::MissingCustomStrategy));
}

#[test]
fn test_preset_ignores_custom_text() {
    let selection = StrategySelection::from_form("Scalping", Some("ignored"));
    assert_eq!(selection, StrategySelection::Preset("Scalping".to_string()));
    assert_eq!(selection.resolve().unwrap(), "Scalping");
}

#[test]
fn test_validate_rejects_empty_currency_pair() {
    let mut d = draft();
    d.currency_pair = "  ".to_string();
    assert_eq!(d.validate(), Err(ValidationError::EmptyCurrencyPair));
}

#[test]
fn test_validate_never_stores_other_marker() {
    let mut d = draft();
    d.strategy = OTHER_STRATEGY.to_string();
    d.custom_strategy = Some("Asian Range".to_string());

    let record = TradeRecord::from_input(TradeId("t1".into()), d.validate().unwrap());
    assert_eq!(record.strategy, "Asian Range");
    assert_eq!(record.currency_pair, "GBP/JPY");
    assert_eq!(record.result, TradeResult::Loss);
}

#[test]
fn test_from_record_reopens_custom_strategy() {
    let mut d = draft();
    d.strategy = OTHER_STRATEGY.to_string();
    d.custom_strategy = Some("Asian Range".to_string());
    let record = TradeRecord::from_input(TradeId("t1".into()), d.validate().unwrap());

    let reopened = TradeDraft::from_record(&record);
    assert_eq!(reopened.strategy, OTHER_STRATEGY);
    assert_eq!(reopened.custom_strategy.as_deref(), Some("Asian Range"));

    // 再次提交内容保持不变
    let again = TradeRecord::from_input(record.id.clone(), reopened.validate().unwrap());
    assert_eq!(again, record);
}

#[test]
fn test_from_record_keeps_preset() {
    let record = TradeRecord::from_input(TradeId("t2".into()), draft().validate().unwrap());
    let reopened = TradeDraft::from_record(&record);
    assert_eq!(reopened.strategy, "Breakout");
    assert!(reopened.custom_strategy.is_none());
}

#[test]
fn test_replace_with_rederives_result_and_keeps_id() {
    let mut d = draft();
    d.pips_captured = dec!(30);
    let mut record = TradeRecord::from_input(TradeId("keep".into()), d.validate().unwrap());
    assert_eq!(record.result, TradeResult::Win);

    d.pips_captured = dec!(0);
    record.replace_with(d.validate().unwrap());
    assert_eq!(record.id, TradeId("keep".into()));
    assert_eq!(record.result, TradeResult::Loss);
}

#[test]
fn test_trade_context_requires_reason() {
    let mut d = draft();
    d.reason = " ".to_string();
    assert_eq!(TradeContext::from_draft(&d), Err(ValidationError::IncompleteReview));
}

#[test]
fn test_trade_context_requires_nonzero_pips() {
    let mut d = draft();
    d.pips_captured = dec!(0);
    assert_eq!(TradeContext::from_draft(&d), Err(ValidationError::IncompleteReview));

    // 保存交易不受此限制
    assert!(d.validate().is_ok());
}

#[test]
fn test_trade_context_resolves_strategy_and_result() {
    let mut d = draft();
    d.strategy = OTHER_STRATEGY.to_string();
    d.custom_strategy = Some("Asian Range".to_string());
    d.pips_captured = dec!(-3);

    let context = TradeContext::from_draft(&d).unwrap();
    assert_eq!(context.strategy, "Asian Range");
    assert_eq!(context.result, TradeResult::Loss);
    assert_eq!(context.currency_pair, "GBP/JPY");
}

#[test]
fn test_draft_accepts_browser_payload() {
    let json = r#"{
        "entryDateTime": "2024-07-01T09:15:00.000Z",
        "session": "London",
        "currencyPair": "EUR/USD",
        "direction": "Long",
        "strategy": "Other",
        "customStrategy": "Fib Pullback",
        "pipsCaptured": 18.4,
        "riskFree": true,
        "reason": "Waited for confirmation",
        "emotionalState": "Confident",
        "suggestion": ""
    }"#;
    let d: TradeDraft = serde_json::from_str(json).unwrap();
    let input = d.validate().unwrap();
    assert_eq!(input.strategy(), "Fib Pullback");
    assert_eq!(input.pips_captured(), dec!(18.4));
}
