use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// # Summary
/// 初始化全局日志：控制台输出 + `<data_dir>/logs` 下按天滚动的文件。
///
/// # Returns
/// 文件写入线程的 guard，必须在 `main` 中持有到进程退出，否则尾部日志会丢失。
pub fn init(data_dir: &str) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(Path::new(data_dir).join("logs"), "fxbook.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    guard
}
