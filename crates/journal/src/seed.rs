use fxbook_core::journal::entity::TradeRecord;

/// 随程序打包的演示数据，首次启动 (存储中没有日志文档) 时使用
const SEED_DOCUMENT: &str = include_str!("../data/seed.json");

/// # Summary
/// 解析内置演示数据。
///
/// # Logic
/// 演示数据随二进制一起编译，解析失败只记录错误并返回空列表。
pub fn demo_trades() -> Vec<TradeRecord> {
    match serde_json::from_str(SEED_DOCUMENT) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Bundled seed data is malformed: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxbook_core::journal::entity::TradeResult;

    #[test]
    fn test_seed_is_consistent() {
        let records = demo_trades();
        assert!(!records.is_empty());
        for record in &records {
            assert_eq!(record.result, TradeResult::from_pips(record.pips_captured));
            assert_ne!(record.strategy, "Other");
        }
    }
}
