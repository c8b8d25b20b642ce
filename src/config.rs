use std::time::Duration;

use crate::error::{QuizError, QuizResult};

/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// 题目文件路径（CSV 或 TOML）
    pub problems_path: String,
    /// 整场答题的时间限制（秒）
    pub time_limit_secs: u64,
    /// 是否打乱题目顺序
    pub shuffle: bool,
    /// 打乱时使用的随机种子，None 表示每次运行随机
    pub seed: Option<u64>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            problems_path: "problems.csv".to_string(),
            time_limit_secs: 30,
            shuffle: false,
            seed: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            problems_path: std::env::var("QUIZ_CSV").unwrap_or(default.problems_path),
            time_limit_secs: std::env::var("QUIZ_LIMIT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.time_limit_secs),
            shuffle: std::env::var("QUIZ_SHUFFLE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.shuffle),
            seed: std::env::var("QUIZ_SEED").ok().and_then(|v| v.parse().ok()).or(default.seed),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 校验配置，时间限制必须大于 0
    pub fn validate(self) -> QuizResult<Self> {
        if self.time_limit_secs == 0 {
            return Err(QuizError::InvalidTimeLimit(self.time_limit_secs));
        }
        Ok(self)
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs)
    }
}
