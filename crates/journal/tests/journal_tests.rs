use chrono::{TimeZone, Utc};
use fxbook_cache::mem::MemBlobStore;
use fxbook_core::blob::port::{BlobStore, BlobStoreExt};
use fxbook_core::common::time::{FakeClockProvider, TimeProvider};
use fxbook_core::journal::draft::TradeDraft;
use fxbook_core::journal::entity::{
    Direction, EmotionalState, Session, TradeId, TradeRecord, TradeResult,
};
use fxbook_core::journal::error::JournalError;
use fxbook_core::journal::port::JournalPort;
use fxbook_core::test_utils::{ReadOnlyBlobStore, UnreadableBlobStore};
use fxbook_journal::journal::{DEFAULT_DOCUMENT_KEY, TradeJournal};
use fxbook_journal::seed;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn clock() -> Arc<dyn TimeProvider> {
    Arc::new(FakeClockProvider::new(
        Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap(),
    ))
}

fn draft(session: Session, strategy: &str, pips: Decimal) -> TradeDraft {
    TradeDraft {
        entry_date_time: Utc.with_ymd_and_hms(2026, 10, 15, 8, 30, 0).unwrap(),
        session,
        currency_pair: "EUR/USD".to_string(),
        direction: Direction::Long,
        strategy: strategy.to_string(),
        custom_strategy: None,
        pips_captured: pips,
        risk_free: false,
        reason: "Followed the plan".to_string(),
        emotional_state: EmotionalState::Calm,
        suggestion: String::new(),
    }
}

/// 以空文档启动的日志，避免演示数据干扰断言
async fn empty_journal() -> (TradeJournal, Arc<MemBlobStore>) {
    let store = Arc::new(MemBlobStore::with_document(DEFAULT_DOCUMENT_KEY, "[]"));
    let journal = TradeJournal::load(store.clone(), clock(), DEFAULT_DOCUMENT_KEY).await;
    (journal, store)
}

async fn stored(store: &MemBlobStore) -> Vec<TradeRecord> {
    store
        .get::<Vec<TradeRecord>>(DEFAULT_DOCUMENT_KEY)
        .await
        .unwrap()
        .unwrap()
}

#[tokio::test]
async fn test_add_and_update_scenario() {
    let (journal, _store) = empty_journal().await;

    let first = journal
        .add(draft(Session::London, "Breakout", dec!(25)).validate().unwrap())
        .await;
    assert_eq!(first.result, TradeResult::Win);
    let a = journal.analytics().await;
    assert_eq!(a.total_trades, 1);
    assert_eq!(a.win_rate, dec!(100));
    assert_eq!(a.total_pips, dec!(25));

    journal
        .add(draft(Session::Asia, "Breakout", dec!(-10)).validate().unwrap())
        .await;
    let a = journal.analytics().await;
    assert_eq!(a.total_trades, 2);
    assert_eq!(a.win_rate, dec!(50));
    assert_eq!(a.total_pips, dec!(15));
    assert_eq!(a.pips_for(Session::Asia), dec!(-10));
    assert_eq!(a.pips_for(Session::London), dec!(25));
    assert_eq!(a.pips_for(Session::NewYork), dec!(0));
    assert_eq!(a.pips_for(Session::Overlap), dec!(0));
    assert_eq!(a.wins_for("Breakout"), Some(1));

    // 将第一笔改为 -5 点，结果翻转为亏损
    let updated = journal
        .update(
            &first.id,
            draft(Session::London, "Breakout", dec!(-5)).validate().unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(updated.id, first.id);
    assert_eq!(updated.result, TradeResult::Loss);

    let a = journal.analytics().await;
    assert_eq!(a.win_rate, dec!(0));
    assert_eq!(a.total_pips, dec!(-15));
    assert!(a.wins_by_strategy.is_empty());
}

#[tokio::test]
async fn test_add_prepends_and_update_keeps_position() {
    let (journal, _store) = empty_journal().await;

    let oldest = journal
        .add(draft(Session::Asia, "Breakout", dec!(1)).validate().unwrap())
        .await;
    let middle = journal
        .add(draft(Session::Asia, "Breakout", dec!(2)).validate().unwrap())
        .await;
    let newest = journal
        .add(draft(Session::Asia, "Breakout", dec!(3)).validate().unwrap())
        .await;

    let ids: Vec<TradeId> = journal.list().await.into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newest.id.clone(), middle.id.clone(), oldest.id.clone()]);

    journal
        .update(
            &middle.id,
            draft(Session::Overlap, "Reversal", dec!(9)).validate().unwrap(),
        )
        .await
        .unwrap();
    let list = journal.list().await;
    assert_eq!(list[1].id, middle.id);
    assert_eq!(list[1].strategy, "Reversal");
    assert_eq!(list[1].session, Session::Overlap);
}

#[tokio::test]
async fn test_update_missing_id_is_signaled_noop() {
    let (journal, store) = empty_journal().await;
    journal
        .add(draft(Session::Asia, "Breakout", dec!(4)).validate().unwrap())
        .await;
    let before = journal.list().await;

    let result = journal
        .update(
            &TradeId("missing".into()),
            draft(Session::Asia, "Breakout", dec!(-4)).validate().unwrap(),
        )
        .await;

    assert!(matches!(result, Err(JournalError::NotFound(id)) if id == "missing"));
    assert_eq!(journal.list().await, before);
    assert_eq!(stored(&store).await, before);
}

#[tokio::test]
async fn test_add_then_delete_restores_prior_state() {
    let store = Arc::new(MemBlobStore::new());
    let journal = TradeJournal::load(store.clone(), clock(), DEFAULT_DOCUMENT_KEY).await;
    let before = journal.list().await;
    assert!(!before.is_empty());

    let added = journal
        .add(draft(Session::NewYork, "Scalping", dec!(7)).validate().unwrap())
        .await;
    assert_eq!(journal.list().await.len(), before.len() + 1);

    assert!(journal.delete(&added.id).await);
    assert_eq!(journal.list().await, before);
    assert_eq!(stored(&store).await, before);
}

#[tokio::test]
async fn test_delete_missing_id_is_noop() {
    let (journal, _store) = empty_journal().await;
    journal
        .add(draft(Session::Asia, "Breakout", dec!(4)).validate().unwrap())
        .await;

    assert!(!journal.delete(&TradeId("nope".into())).await);
    assert_eq!(journal.list().await.len(), 1);
}

#[tokio::test]
async fn test_clear_all_zeroes_analytics() {
    let store = Arc::new(MemBlobStore::new());
    let journal = TradeJournal::load(store.clone(), clock(), DEFAULT_DOCUMENT_KEY).await;
    let seeded = journal.list().await.len();

    assert_eq!(journal.clear_all().await, seeded);
    let a = journal.analytics().await;
    assert_eq!(a.total_trades, 0);
    assert_eq!(a.win_rate, Decimal::ZERO);
    assert_eq!(a.total_pips, Decimal::ZERO);
    assert_eq!(a.risk_free_trades, 0);
    assert!(a.wins_by_strategy.is_empty());
    assert!(a.recent_trades.is_empty());
    assert!(stored(&store).await.is_empty());
}

#[tokio::test]
async fn test_ids_are_unique_under_frozen_clock() {
    let (journal, _store) = empty_journal().await;
    for _ in 0..50 {
        journal
            .add(draft(Session::Asia, "Breakout", dec!(1)).validate().unwrap())
            .await;
    }
    let mut ids: Vec<String> = journal.list().await.into_iter().map(|r| r.id.0).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

#[tokio::test]
async fn test_absent_document_loads_seed_and_persists_it() {
    let store = Arc::new(MemBlobStore::new());
    let journal = TradeJournal::load(store.clone(), clock(), DEFAULT_DOCUMENT_KEY).await;

    assert_eq!(journal.list().await, seed::demo_trades());
    assert_eq!(stored(&store).await, seed::demo_trades());
}

#[tokio::test]
async fn test_malformed_document_starts_empty() {
    let store = Arc::new(MemBlobStore::with_document(
        DEFAULT_DOCUMENT_KEY,
        r#"[{"id": "1", "entryDateTime": "not a date"}]"#,
    ));
    let journal = TradeJournal::load(store.clone(), clock(), DEFAULT_DOCUMENT_KEY).await;

    assert!(journal.list().await.is_empty());
    // 损坏的文档被空列表覆盖
    assert!(stored(&store).await.is_empty());
}

#[tokio::test]
async fn test_wrong_shape_document_starts_empty() {
    let store = Arc::new(MemBlobStore::with_document(DEFAULT_DOCUMENT_KEY, r#"{"trades": []}"#));
    let journal = TradeJournal::load(store, clock(), DEFAULT_DOCUMENT_KEY).await;
    assert!(journal.list().await.is_empty());
}

#[tokio::test]
async fn test_persisted_document_roundtrips() -> anyhow::Result<()> {
    let store = Arc::new(MemBlobStore::with_document(DEFAULT_DOCUMENT_KEY, "[]"));
    let journal = TradeJournal::load(store.clone(), clock(), DEFAULT_DOCUMENT_KEY).await;

    let mut custom = draft(Session::Overlap, "Other", dec!(12.3));
    custom.custom_strategy = Some("Asian Range".to_string());
    custom.risk_free = true;
    custom.emotional_state = EmotionalState::RevengeTrading;
    custom.direction = Direction::Short;
    journal.add(custom.validate()?).await;
    journal
        .add(draft(Session::London, "Breakout", dec!(-7.5)).validate()?)
        .await;

    // 文档中的日期为 ISO-8601 字符串
    let raw = store.get_raw(DEFAULT_DOCUMENT_KEY).await?.unwrap_or_default();
    let json: serde_json::Value = serde_json::from_slice(&raw)?;
    assert_eq!(json[0]["entryDateTime"], "2026-10-15T08:30:00Z");
    assert_eq!(json[1]["strategy"], "Asian Range");

    // 重新加载得到完全相同的列表
    let reloaded = TradeJournal::load(store.clone(), clock(), DEFAULT_DOCUMENT_KEY).await;
    assert_eq!(reloaded.list().await, journal.list().await);
    Ok(())
}

#[tokio::test]
async fn test_loads_browser_document() {
    let doc = r#"[{
        "id": "2024-06-01T10:00:00.000Z0.123456",
        "entryDateTime": "2024-06-01T09:45:00.000Z",
        "session": "New York",
        "currencyPair": "USD/CAD",
        "direction": "Short",
        "strategy": "Fib Pullback",
        "pipsCaptured": 0,
        "riskFree": false,
        "reason": "",
        "emotionalState": "Revenge Trading",
        "suggestion": "",
        "result": "Loss"
    }]"#;
    let store = Arc::new(MemBlobStore::with_document(DEFAULT_DOCUMENT_KEY, doc));
    let journal = TradeJournal::load(store, clock(), DEFAULT_DOCUMENT_KEY).await;

    let list = journal.list().await;
    assert_eq!(list.len(), 1);
    assert_eq!(
        list[0].entry_date_time,
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 45, 0).unwrap()
    );
    assert_eq!(list[0].session, Session::NewYork);
}

#[tokio::test]
async fn test_persist_failure_keeps_memory_authoritative() {
    let store = Arc::new(ReadOnlyBlobStore::new(Some(b"[]".to_vec())));
    let journal = TradeJournal::load(store.clone(), clock(), DEFAULT_DOCUMENT_KEY).await;

    let added = journal
        .add(draft(Session::London, "Breakout", dec!(3)).validate().unwrap())
        .await;

    assert_eq!(journal.get(&added.id).await, Some(added));
    // 加载时一次 + 新增时一次，失败后不重试
    assert_eq!(store.write_attempts(), 2);
}

#[tokio::test]
async fn test_read_failure_does_not_overwrite_stored_journal() -> anyhow::Result<()> {
    let store = Arc::new(UnreadableBlobStore::new());
    let journal = TradeJournal::load(store.clone(), clock(), DEFAULT_DOCUMENT_KEY).await;

    assert!(journal.list().await.is_empty());
    // 读取失败不代表文档损坏，加载阶段不写回
    assert!(store.writes().is_empty());

    // 只有真实变更才会写入
    let added = journal
        .add(draft(Session::London, "Breakout", dec!(8)).validate()?)
        .await;
    let writes = store.writes();
    assert_eq!(writes.len(), 1);
    let saved: Vec<TradeRecord> = serde_json::from_slice(&writes[0])?;
    assert_eq!(saved, vec![added]);
    Ok(())
}
