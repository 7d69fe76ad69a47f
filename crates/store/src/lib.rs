//! 基于 SQLite 的持久化文档存储，对应浏览器中的本地键值存储。

pub mod blob;
