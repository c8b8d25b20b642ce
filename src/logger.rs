//! 日志初始化
//!
//! 日志统一输出到 stderr，stdout 只留给答题界面。

use tracing_subscriber::EnvFilter;

/// 初始化日志，`RUST_LOG` 优先于 `verbose`
pub fn init(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 测试中可能重复初始化，忽略错误
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
