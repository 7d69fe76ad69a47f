//! # `fxbook-journal` - 交易日志
//!
//! 内存中的有序记录集合 (唯一事实来源) 与四个变更操作，
//! 每次变更后将整份日志写回键值文档存储。

pub mod journal;
pub mod seed;
