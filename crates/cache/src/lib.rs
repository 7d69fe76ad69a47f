//! 基于内存的文档存储适配器，主要用于测试与无持久化运行。

pub mod mem;
