use async_trait::async_trait;
use chrono::Utc;
use fxbook_core::blob::error::BlobError;
use fxbook_core::blob::port::BlobStore;
use sqlx::{SqlitePool, sqlite::{SqliteConnectOptions, SqlitePoolOptions}};
use std::fs;
use std::path::Path;

/// 默认文档数据库文件名
const DEFAULT_BLOB_DB: &str = "journal.db";

/// BlobStore 的 SQLite 实现。
///
/// # Summary
/// 在单个 SQLite 数据库 (`journal.db`) 的 `blobs` 表中按 Key 保存整份文档。
///
/// # Invariants
/// * 表结构在存储实例创建时初始化。
/// * 每个 Key 只有一行，写入即整体覆盖。
pub struct SqliteBlobStore {
    pool: SqlitePool,
}

impl SqliteBlobStore {
    /// 打开 (必要时创建) 数据目录下的文档数据库。
    ///
    /// # Logic
    /// 1. 确保数据目录存在。
    /// 2. 配置 SQLite 连接选项，开启 `create_if_missing`。
    /// 3. 连接到数据库并执行 DDL 初始化 `blobs` 表。
    ///
    /// # Arguments
    /// * `data_dir` - 数据根目录。
    ///
    /// # Returns
    /// * `Result<Self, BlobError>` - 存储实例或存储错误。
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, BlobError> {
        let root = data_dir.as_ref();
        fs::create_dir_all(root).map_err(|e| BlobError::Storage(e.to_string()))?;

        let db_path = root.join(DEFAULT_BLOB_DB);
        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| BlobError::Storage(e.to_string()))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS blobs (
                key TEXT PRIMARY KEY,
                value BLOB NOT NULL,
                updated_at DATETIME NOT NULL
            );
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| BlobError::Storage(e.to_string()))?;

        tracing::debug!("Blob store opened at {}", db_path.display());
        Ok(Self { pool })
    }
}

#[async_trait]
impl BlobStore for SqliteBlobStore {
    /// # Summary
    /// 覆盖写入一份文档。
    ///
    /// # Logic
    /// 在 `blobs` 表上执行 `INSERT OR REPLACE`，同时刷新 `updated_at`。
    async fn set_raw(&self, key: &str, value: Vec<u8>) -> Result<(), BlobError> {
        sqlx::query("INSERT OR REPLACE INTO blobs (key, value, updated_at) VALUES (?, ?, ?)")
            .bind(key)
            .bind(value)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| BlobError::Storage(e.to_string()))?;
        Ok(())
    }

    /// # Summary
    /// 读取一份文档。
    ///
    /// # Returns
    /// * `Result<Option<Vec<u8>>, BlobError>` - 文档字节或 None。
    async fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, BlobError> {
        sqlx::query_scalar::<_, Vec<u8>>("SELECT value FROM blobs WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| BlobError::Storage(e.to_string()))
    }

    async fn del(&self, key: &str) -> Result<(), BlobError> {
        sqlx::query("DELETE FROM blobs WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| BlobError::Storage(e.to_string()))?;
        Ok(())
    }
}
