use thiserror::Error;

/// # Summary
/// 键值文档存储的错误枚举，区分序列化问题与底层存储故障。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug)]
pub enum BlobError {
    // 文档序列化失败
    #[error("Serialize error: {0}")]
    Serialize(String),
    // 文档内容损坏或结构不匹配
    #[error("Deserialize error: {0}")]
    Deserialize(String),
    // 底层存储引擎故障
    #[error("Storage error: {0}")]
    Storage(String),
}
