//! # Timed Quiz
//!
//! 命令行限时答题程序
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目 `QuizItem` 与题库加载（CSV / TOML）
//!
//! ### ② 业务能力层（Services）
//! - `AnswerCollector` - 把一次阻塞读取包装成可竞争的异步结果
//! - `shuffle` - 用显式构造的随机数生成器打乱题目
//!
//! ### ③ 流程层（Workflow）
//! - `QuizSession` - 整场答题流程，倒计时与答案收集竞争
//! - `SessionState` - 会话内的计分状态
//!
//! ### ④ 编排层（App）
//! - `App` - 加载 → 打乱 → 答题 → 输出得分

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use cli::Cli;
pub use config::Config;
pub use error::{QuizError, QuizResult};
pub use models::QuizItem;
pub use services::{AnswerCollector, LineCollector};
pub use workflow::{QuizSession, SessionOutcome, SessionReport};
