//! 供其它 crate 测试使用的端口替身，仅在 `test-utils` 特性下编译。

use crate::blob::error::BlobError;
use crate::blob::port::BlobStore;
use crate::suggest::error::SuggestError;
use crate::suggest::port::{SuggestionPort, TradeContext};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// # Summary
/// 只读文档存储：可预置一份文档，所有写入都失败。
pub struct ReadOnlyBlobStore {
    document: Option<Vec<u8>>,
    write_attempts: AtomicUsize,
}

impl ReadOnlyBlobStore {
    pub fn new(document: Option<Vec<u8>>) -> Self {
        Self {
            document,
            write_attempts: AtomicUsize::new(0),
        }
    }

    pub fn write_attempts(&self) -> usize {
        self.write_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlobStore for ReadOnlyBlobStore {
    async fn set_raw(&self, _key: &str, _value: Vec<u8>) -> Result<(), BlobError> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        Err(BlobError::Storage("quota exceeded".into()))
    }

    async fn get_raw(&self, _key: &str) -> Result<Option<Vec<u8>>, BlobError> {
        Ok(self.document.clone())
    }

    async fn del(&self, _key: &str) -> Result<(), BlobError> {
        Err(BlobError::Storage("read only".into()))
    }
}

/// # Summary
/// 读取总是失败的文档存储 (如数据库被锁)，写入会被记录下来。
#[derive(Default)]
pub struct UnreadableBlobStore {
    writes: Mutex<Vec<Vec<u8>>>,
}

impl UnreadableBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按顺序返回所有写入过的文档
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl BlobStore for UnreadableBlobStore {
    async fn set_raw(&self, _key: &str, value: Vec<u8>) -> Result<(), BlobError> {
        self.writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(value);
        Ok(())
    }

    async fn get_raw(&self, _key: &str) -> Result<Option<Vec<u8>>, BlobError> {
        Err(BlobError::Storage("database is locked".into()))
    }

    async fn del(&self, _key: &str) -> Result<(), BlobError> {
        Ok(())
    }
}

/// # Summary
/// 固定应答的建议生成器，记录调用次数。
pub struct StaticSuggester {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl StaticSuggester {
    /// 每次都返回给定文本
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Some(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// 每次都返回平台错误
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SuggestionPort for StaticSuggester {
    async fn suggest(&self, _context: &TradeContext) -> Result<String, SuggestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .clone()
            .ok_or_else(|| SuggestError::Platform("API key not valid".into()))
    }
}
