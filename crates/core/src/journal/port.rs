use super::draft::TradeInput;
use super::entity::{TradeId, TradeRecord};
use super::error::JournalError;
use crate::analytics::Analytics;
use async_trait::async_trait;

/// # Summary
/// 交易日志的读写端口，表现层获取数据与发起变更的唯一门户。
///
/// # Invariants
/// - 所有变更成功后都会触发一次整体持久化，持久化失败不会反馈给调用方。
/// - 读操作永远看到某次变更完成后的完整快照。
/// - 删除与清空不做二次确认，确认是调用方的职责。
#[async_trait]
pub trait JournalPort: Send + Sync {
    /// 按存储顺序 (最新在前) 返回全部记录
    async fn list(&self) -> Vec<TradeRecord>;

    /// 按 ID 读取单条记录
    async fn get(&self, id: &TradeId) -> Option<TradeRecord>;

    /// # Summary
    /// 新增一条记录。
    ///
    /// # Logic
    /// 1. 分配不与现有记录冲突的新 ID。
    /// 2. 推导结果并插入到列表头部。
    /// 3. 持久化整份日志。
    ///
    /// # Returns
    /// 新建的记录。
    async fn add(&self, input: TradeInput) -> TradeRecord;

    /// # Summary
    /// 整体替换指定记录除 ID 外的字段。
    ///
    /// # Returns
    /// * `Ok(TradeRecord)` - 更新后的记录，位置不变。
    /// * `Err(JournalError::NotFound)` - 目标不存在，日志保持原样。
    async fn update(&self, id: &TradeId, input: TradeInput) -> Result<TradeRecord, JournalError>;

    /// 删除指定记录，目标不存在时为空操作。返回是否真的删除了记录。
    async fn delete(&self, id: &TradeId) -> bool;

    /// 无条件清空日志，返回被删除的记录数
    async fn clear_all(&self) -> usize;

    /// 基于当前快照重新计算看板统计
    async fn analytics(&self) -> Analytics;
}
