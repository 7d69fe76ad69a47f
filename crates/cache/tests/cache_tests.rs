use fxbook_cache::mem::MemBlobStore;
use fxbook_core::blob::error::BlobError;
use fxbook_core::blob::port::{BlobStore, BlobStoreExt};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
struct TestItem {
    id: u32,
    name: String,
}

#[tokio::test]
async fn test_mem_store_raw_ops() {
    let store = MemBlobStore::new();
    let key = "raw_key";
    let value = vec![1, 2, 3, 4];

    // 测试存取
    store.set_raw(key, value.clone()).await.unwrap();
    let result = store.get_raw(key).await.unwrap().unwrap();
    assert_eq!(result, value);

    // 整体覆盖
    store.set_raw(key, vec![9]).await.unwrap();
    assert_eq!(store.get_raw(key).await.unwrap().unwrap(), vec![9]);
    assert_eq!(store.len(), 1);

    // 测试删除
    store.del(key).await.unwrap();
    let result = store.get_raw(key).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_mem_store_typed_ops() {
    let store = MemBlobStore::new();
    let key = "typed_key";
    let item = TestItem {
        id: 42,
        name: "FXBook".to_string(),
    };

    store.set(key, &item).await.unwrap();
    let result: TestItem = store.get(key).await.unwrap().unwrap();
    assert_eq!(result, item);
}

#[tokio::test]
async fn test_mem_store_rejects_malformed_document() {
    let store = MemBlobStore::with_document("doc", "{not json");

    let result: Result<Option<Vec<TestItem>>, BlobError> = store.get("doc").await;
    assert!(matches!(result, Err(BlobError::Deserialize(_))));

    // 结构不匹配同样视为损坏
    store.set_raw("doc", br#"{"id": 1}"#.to_vec()).await.unwrap();
    let result: Result<Option<Vec<TestItem>>, BlobError> = store.get("doc").await;
    assert!(matches!(result, Err(BlobError::Deserialize(_))));
}
