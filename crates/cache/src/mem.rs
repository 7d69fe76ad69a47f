use async_trait::async_trait;
use dashmap::DashMap;
use fxbook_core::blob::error::BlobError;
use fxbook_core::blob::port::BlobStore;

/// # Summary
/// 基于 DashMap 的内存文档存储实现。
///
/// # Invariants
/// - 所有操作均通过并发哈希表 `DashMap` 执行，保证多线程安全。
/// - 进程退出即丢失，不提供任何持久化。
pub struct MemBlobStore {
    // 线程安全的 KV 存储容器
    storage: DashMap<String, Vec<u8>>,
}

impl MemBlobStore {
    /// # Summary
    /// 创建一个空的 MemBlobStore。
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// # Summary
    /// 创建并预置一份文档，用于模拟已有历史数据的启动场景。
    ///
    /// # Arguments
    /// * `key`: 文档键。
    /// * `value`: 文档原始字节。
    pub fn with_document(key: &str, value: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        store.storage.insert(key.to_string(), value.into());
        store
    }

    /// 当前保存的文档数量
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for MemBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStore for MemBlobStore {
    /// # Summary
    /// 写入原始字节文档。
    ///
    /// # Logic
    /// 将 Key 转换为 String 后与 Value 一并插入哈希表。若存在同名 Key 则整体覆盖。
    ///
    /// # Returns
    /// * `Result<(), BlobError>` - 始终返回 Ok。
    async fn set_raw(&self, key: &str, value: Vec<u8>) -> Result<(), BlobError> {
        self.storage.insert(key.to_string(), value);
        Ok(())
    }

    /// # Summary
    /// 读取原始字节文档。
    ///
    /// # Logic
    /// 从哈希表中检索 Key 对应的引用，并将其克隆为独立的所有权对象返回。
    async fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, BlobError> {
        Ok(self.storage.get(key).map(|v| v.value().clone()))
    }

    async fn del(&self, key: &str) -> Result<(), BlobError> {
        self.storage.remove(key);
        Ok(())
    }
}
