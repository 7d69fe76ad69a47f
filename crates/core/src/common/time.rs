use chrono::{DateTime, Utc};

/// # Summary
/// 时间供给器接口，用于隔离物理系统时钟。
/// 日志分配记录 ID 时通过此接口获取当前时间，测试中可替换为固定时钟。
pub trait TimeProvider: Send + Sync {
    /// 获取当前时间
    fn now(&self) -> DateTime<Utc>;
}

/// # Summary
/// 真实时钟，直接返回操作系统当前时间。
pub struct RealTimeProvider;

impl TimeProvider for RealTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// # Summary
/// 测试专用固定时钟，始终返回创建时给定的时间。
/// 用于验证同一毫秒内连续分配的 ID 仍不冲突。
pub struct FakeClockProvider {
    current_time: DateTime<Utc>,
}

impl FakeClockProvider {
    /// 使用指定的时间创建固定时钟
    pub fn new(current_time: DateTime<Utc>) -> Self {
        Self { current_time }
    }
}

impl TimeProvider for FakeClockProvider {
    fn now(&self) -> DateTime<Utc> {
        self.current_time
    }
}
