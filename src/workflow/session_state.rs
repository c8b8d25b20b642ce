//! 答题会话状态
//!
//! 只在一次会话内存在，由会话循环独占修改，会话结束后转成 `SessionReport`。

use std::time::Duration;

use tokio::time::Instant;

/// 时间限制过大时的截止时间（约 30 年），与 `tokio::time::sleep` 的处理一致
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// 会话的终止状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// 所有题目都已作答
    Completed,
    /// 倒计时先到，剩余题目未出现
    TimedOut,
}

/// 会话进行中的状态
///
/// 保证 `correct <= index`，截止时间在创建时确定，之后不再改变。
#[derive(Debug)]
pub struct SessionState {
    /// 当前题目位置（已作答的题数）
    index: usize,
    /// 答对的题数
    correct: usize,
    deadline: Instant,
    started_at: Instant,
}

impl SessionState {
    /// 启动倒计时
    pub fn start(time_limit: Duration) -> Self {
        let started_at = Instant::now();
        let deadline = started_at
            .checked_add(time_limit)
            .unwrap_or_else(|| started_at + FAR_FUTURE);
        Self {
            index: 0,
            correct: 0,
            deadline,
            started_at,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// 当前题号（从 1 开始）
    pub fn question_number(&self) -> usize {
        self.index + 1
    }

    /// 记录一道题的作答结果
    pub fn record(&mut self, is_correct: bool) {
        self.index += 1;
        if is_correct {
            self.correct += 1;
        }
    }

    pub fn finish(self, total: usize, outcome: SessionOutcome) -> SessionReport {
        SessionReport {
            correct: self.correct,
            asked: self.index,
            total,
            outcome,
            elapsed: self.started_at.elapsed(),
        }
    }
}

/// 会话结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// 答对的题数
    pub correct: usize,
    /// 已计分的题数
    pub asked: usize,
    /// 题目总数
    pub total: usize,
    pub outcome: SessionOutcome,
    pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_deadline_fixed_at_start() {
        let state = SessionState::start(Duration::from_secs(30));
        let deadline = state.deadline();

        tokio::time::advance(Duration::from_secs(10)).await;
        assert_eq!(state.deadline(), deadline);
        assert_eq!(deadline - state.started_at, Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_limit_saturates_deadline() {
        let state = SessionState::start(Duration::from_secs(u64::MAX / 2));
        assert_eq!(state.deadline() - state.started_at, FAR_FUTURE);

        let state = SessionState::start(Duration::from_secs(u64::MAX));
        assert!(state.deadline() > state.started_at);
    }

    #[tokio::test(start_paused = true)]
    async fn test_record_keeps_correct_within_index() {
        let mut state = SessionState::start(Duration::from_secs(30));
        state.record(true);
        state.record(false);
        state.record(true);
        assert_eq!(state.question_number(), 4);

        let report = state.finish(5, SessionOutcome::TimedOut);
        assert_eq!(report.correct, 2);
        assert_eq!(report.asked, 3);
        assert!(report.correct <= report.asked && report.asked <= report.total);
    }
}
