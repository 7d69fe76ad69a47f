use async_trait::async_trait;
use fxbook_core::analytics::{self, Analytics};
use fxbook_core::blob::error::BlobError;
use fxbook_core::blob::port::{BlobStore, BlobStoreExt};
use fxbook_core::common::time::TimeProvider;
use fxbook_core::journal::draft::TradeInput;
use fxbook_core::journal::entity::{TradeId, TradeRecord};
use fxbook_core::journal::error::JournalError;
use fxbook_core::journal::port::JournalPort;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::seed;

/// 日志文档在键值存储中的默认 Key
pub const DEFAULT_DOCUMENT_KEY: &str = "forexTradeLogs";

/// # Summary
/// `TradeJournal` 是交易记录的唯一持有者，实现了 `JournalPort`。
/// 启动时从文档存储加载一次，之后每次变更都把整份列表写回。
///
/// # Invariants
/// - 列表顺序为最新在前：新增插入头部，更新保持原位。
/// - 写锁覆盖"变更 + 持久化"全过程，读者不会看到中间状态，写入也不会乱序。
/// - 持久化失败只记录日志，内存状态在进程生命周期内始终权威。
pub struct TradeJournal {
    records: RwLock<Vec<TradeRecord>>,
    /// 外部文档存储
    store: Arc<dyn BlobStore>,
    /// 用于生成记录 ID 的时钟
    clock: Arc<dyn TimeProvider>,
    document_key: String,
}

impl TradeJournal {
    /// # Summary
    /// 从文档存储加载日志。永不失败。
    ///
    /// # Logic
    /// 1. 读取 `document_key` 对应的文档。
    /// 2. 文档不存在时使用内置演示数据。
    /// 3. 文档损坏或结构不匹配时记录警告，以空列表启动，不保留任何部分数据。
    /// 4. 存储读取失败时同样以空列表启动，但不写回，原文档只会被后续的真实变更覆盖。
    /// 5. 日期字段在反序列化时还原为 `DateTime<Utc>`，其余字段原样保留。
    /// 6. 其余情况将初始快照写回一次，覆盖掉损坏或缺失的文档。
    ///
    /// # Arguments
    /// * `store` - 文档存储端口。
    /// * `clock` - 时间供给器。
    /// * `document_key` - 文档键。
    pub async fn load(
        store: Arc<dyn BlobStore>,
        clock: Arc<dyn TimeProvider>,
        document_key: impl Into<String>,
    ) -> Self {
        let document_key = document_key.into();
        let (records, write_back) = match store.get::<Vec<TradeRecord>>(&document_key).await {
            Ok(Some(records)) => {
                tracing::info!("Loaded {} trades from '{}'", records.len(), document_key);
                (records, true)
            }
            Ok(None) => {
                tracing::info!("No stored journal under '{}', starting with seed data", document_key);
                (seed::demo_trades(), true)
            }
            Err(BlobError::Storage(e)) => {
                tracing::error!(
                    "Failed to read trade journal from '{}', starting empty without overwriting it: {}",
                    document_key,
                    e
                );
                (Vec::new(), false)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse trade journal from '{}', starting fresh: {}",
                    document_key,
                    e
                );
                (Vec::new(), true)
            }
        };

        let journal = Self {
            records: RwLock::new(records),
            store,
            clock,
            document_key,
        };
        if write_back {
            let records = journal.records.read().await;
            journal.persist(&records).await;
        }
        journal
    }

    /// 生成不与现有记录冲突的 ID：毫秒时间戳 + 随机部分
    fn next_id(&self, records: &[TradeRecord]) -> TradeId {
        loop {
            let candidate = TradeId(format!(
                "{}-{}",
                self.clock.now().timestamp_millis(),
                Uuid::new_v4().simple()
            ));
            if !records.iter().any(|r| r.id == candidate) {
                return candidate;
            }
        }
    }

    /// 整体覆盖写入文档，失败只记日志，不重试也不排队
    async fn persist(&self, records: &[TradeRecord]) {
        match self.store.set(&self.document_key, &records).await {
            Ok(()) => tracing::debug!("Persisted {} trades", records.len()),
            Err(e) => tracing::error!("Failed to save trade journal to blob store: {}", e),
        }
    }
}

#[async_trait]
impl JournalPort for TradeJournal {
    async fn list(&self) -> Vec<TradeRecord> {
        self.records.read().await.clone()
    }

    async fn get(&self, id: &TradeId) -> Option<TradeRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| &r.id == id)
            .cloned()
    }

    /// # Logic
    /// 1. 在写锁内分配新 ID，保证与现有记录不冲突。
    /// 2. 由 `TradeRecord::from_input` 统一推导结果。
    /// 3. 插入头部后整体持久化。
    async fn add(&self, input: TradeInput) -> TradeRecord {
        let mut records = self.records.write().await;
        let id = self.next_id(&records);
        let record = TradeRecord::from_input(id, input);
        records.insert(0, record.clone());
        tracing::info!(
            "Trade {} added: {} {} pips ({})",
            record.id,
            record.currency_pair,
            record.pips_captured,
            record.result
        );

        self.persist(&records).await;
        record
    }

    /// # Logic
    /// 1. 查找目标记录，不存在直接返回 `NotFound`，不触发持久化。
    /// 2. 原位替换除 ID 外的全部字段并重新推导结果。
    /// 3. 整体持久化。
    async fn update(&self, id: &TradeId, input: TradeInput) -> Result<TradeRecord, JournalError> {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|r| &r.id == id) else {
            tracing::warn!("Update rejected, trade {} not found", id);
            return Err(JournalError::NotFound(id.to_string()));
        };
        record.replace_with(input);
        let updated = record.clone();
        tracing::info!("Trade {} updated ({})", updated.id, updated.result);

        self.persist(&records).await;
        Ok(updated)
    }

    async fn delete(&self, id: &TradeId) -> bool {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| &r.id != id);
        if records.len() == before {
            tracing::debug!("Delete ignored, trade {} not found", id);
            return false;
        }

        tracing::info!("Trade {} deleted", id);
        self.persist(&records).await;
        true
    }

    async fn clear_all(&self) -> usize {
        let mut records = self.records.write().await;
        let removed = records.len();
        records.clear();
        tracing::info!("Journal cleared, {} trades removed", removed);

        self.persist(&records).await;
        removed
    }

    async fn analytics(&self) -> Analytics {
        analytics::compute(&self.records.read().await)
    }
}
