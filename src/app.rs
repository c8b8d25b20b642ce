//! 应用入口 - 编排层
//!
//! 加载题库 → 打乱（可选）→ 答题会话 → 输出得分。
//! 题库加载失败直接返回错误，不会进入答题会话。

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::config::Config;
use crate::models::{self, QuizItem};
use crate::services::{shuffle_items, AnswerCollector, LineCollector, ShuffleRng};
use crate::utils::logging::{log_questions_loaded, log_session_complete, log_startup};
use crate::workflow::{QuizSession, SessionReport};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用，校验配置
    pub fn initialize(config: Config) -> Result<Self> {
        let config = config.validate()?;
        log_startup(&config);
        Ok(Self { config })
    }

    /// 使用标准输入输出运行
    pub async fn run(&self) -> Result<SessionReport> {
        self.run_with(LineCollector::stdin(), io::stdout()).await
    }

    /// 使用指定的答案收集器和输出流运行
    pub async fn run_with<C, W>(&self, collector: C, out: W) -> Result<SessionReport>
    where
        C: AnswerCollector,
        W: Write,
    {
        let items = self.load_questions().await?;

        let mut session = QuizSession::new(collector, out);
        let report = session
            .run(&items, self.config.time_limit())
            .await
            .context("答题过程中输出失败")?;

        let mut out = session.into_output();
        writeln!(out, "\nYou scored {} out of {}.", report.correct, report.total)?;
        out.flush()?;

        log_session_complete(&report);
        Ok(report)
    }

    /// 加载题目，按配置打乱顺序
    async fn load_questions(&self) -> Result<Vec<QuizItem>> {
        let path = Path::new(&self.config.problems_path);
        let mut items = models::load_questions(path)
            .await
            .with_context(|| format!("无法加载题库: {}", self.config.problems_path))?;

        if items.is_empty() {
            warn!("⚠️ 题库为空: {}", self.config.problems_path);
        }

        if self.config.shuffle {
            let mut rng = ShuffleRng::new(self.config.seed);
            shuffle_items(&mut items, &mut rng);
        }

        log_questions_loaded(items.len());
        Ok(items)
    }
}
