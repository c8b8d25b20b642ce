/// 日志工具模块
///
/// 会话开始、加载完成、会话结束时的日志横幅
use tracing::info;

use crate::config::Config;
use crate::workflow::{SessionOutcome, SessionReport};

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 限时答题模式");
    info!("📄 题库文件: {}", config.problems_path);
    info!("⏱️ 时间限制: {} 秒", config.time_limit_secs);
    info!(
        "🔀 打乱顺序: {}{}",
        config.shuffle,
        config.seed.map(|s| format!(" (seed={})", s)).unwrap_or_default()
    );
    info!("{}", "=".repeat(60));
}

/// 记录题目加载信息
pub fn log_questions_loaded(total: usize) {
    info!("✓ 共加载 {} 道题目", total);
}

/// 打印会话结束统计
///
/// # 参数
/// - `report`: 会话结果
pub fn log_session_complete(report: &SessionReport) {
    info!("\n{}", "=".repeat(60));
    info!("📊 答题结束统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    match report.outcome {
        SessionOutcome::Completed => info!("✅ 全部作答: {}/{}", report.asked, report.total),
        SessionOutcome::TimedOut => info!("⌛ 超时结束: 作答 {}/{}", report.asked, report.total),
    }
    info!("🎯 答对: {}", report.correct);
    info!("⏱️ 用时: {:.1} 秒", report.elapsed.as_secs_f64());
    info!("{}", "=".repeat(60));
}
