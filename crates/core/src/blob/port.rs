use crate::blob::error::BlobError;
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

/// # Summary
/// 业务无关的异步键值文档存储接口 (Port)。
///
/// # Invariants
/// - 处理原始字节，确保 Trait 是对象安全的 (Object Safe)。
/// - 每个 Key 对应一整份文档，写入即整体覆盖，不做增量合并。
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// # Summary
    /// 写入原始字节文档。
    ///
    /// # Logic
    /// 1. 以原子方式覆盖 Key 下已有的文档。
    ///
    /// # Arguments
    /// * `key`: 文档键。
    /// * `value`: 原始字节数组。
    ///
    /// # Returns
    /// 成功返回 Ok，失败返回 `BlobError`。
    async fn set_raw(&self, key: &str, value: Vec<u8>) -> Result<(), BlobError>;

    /// # Summary
    /// 读取原始字节文档。
    ///
    /// # Arguments
    /// * `key`: 文档键。
    ///
    /// # Returns
    /// 存在则返回 `Some(Vec<u8>)`，否则返回 `None`。
    async fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, BlobError>;

    /// 删除指定文档，Key 不存在时同样返回 Ok。
    async fn del(&self, key: &str) -> Result<(), BlobError>;
}

/// # Summary
/// 文档存储的泛型扩展接口，提供 JSON 序列化支持。
///
/// # Invariants
/// - 自动为所有实现 `BlobStore` 的类型提供支持。
#[async_trait]
pub trait BlobStoreExt: BlobStore {
    /// # Summary
    /// 存入强类型文档。
    ///
    /// # Logic
    /// 1. 使用 JSON 序列化对象。
    /// 2. 调用底层 `set_raw` 写入。
    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T) -> Result<(), BlobError> {
        let bytes = serde_json::to_vec(value).map_err(|e| BlobError::Serialize(e.to_string()))?;
        self.set_raw(key, bytes).await
    }

    /// # Summary
    /// 取出强类型文档。
    ///
    /// # Logic
    /// 1. 调用底层 `get_raw` 获取字节。
    /// 2. 使用 JSON 反序列化为目标类型，结构不匹配返回 `BlobError::Deserialize`。
    ///
    /// # Returns
    /// 反序列化后的对象或 None。
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> Result<Option<T>, BlobError> {
        match self.get_raw(key).await? {
            Some(bytes) => {
                let val = serde_json::from_slice(&bytes)
                    .map_err(|e| BlobError::Deserialize(e.to_string()))?;
                Ok(Some(val))
            }
            None => Ok(None),
        }
    }
}

impl<T: BlobStore + ?Sized> BlobStoreExt for T {}
