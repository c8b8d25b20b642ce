//! 限时答题会话 - 流程层
//!
//! 流程：
//! 1. 打印开始提示，等待用户按回车（不计时）
//! 2. 启动整场会话唯一的倒计时
//! 3. 逐题出题，每题启动一次答案收集，和倒计时竞争
//! 4. 倒计时先到则立即结束，正在等待的答案直接丢弃
//!
//! 状态变化：NotStarted → AwaitingAck → Running → Completed / TimedOut

use std::io::{self, Write};
use std::time::Duration;

use tokio::time;
use tracing::{debug, info};

use crate::models::QuizItem;
use crate::services::AnswerCollector;
use crate::workflow::session_state::{SessionOutcome, SessionReport, SessionState};

/// 限时答题会话
///
/// - 持有答案收集器和输出流
/// - 倒计时只在确认开始后启动一次，题目之间不会重置
/// - 同一时间最多只有一个未完成的答案收集
pub struct QuizSession<C, W> {
    collector: C,
    out: W,
}

impl<C, W> QuizSession<C, W>
where
    C: AnswerCollector,
    W: Write,
{
    pub fn new(collector: C, out: W) -> Self {
        Self { collector, out }
    }

    /// 取回输出流
    pub fn into_output(self) -> W {
        self.out
    }

    /// 运行整场答题，返回答对的题数等结果
    ///
    /// # 参数
    /// - `items`: 按出题顺序排列的题目
    /// - `time_limit`: 整场答题的时间限制，必须大于 0
    pub async fn run(&mut self, items: &[QuizItem], time_limit: Duration) -> io::Result<SessionReport> {
        writeln!(self.out, "Press Enter to start the quiz.")?;
        self.out.flush()?;

        // 确认开始：阻塞等待，不受倒计时限制
        if self.collector.collect().await.is_err() {
            debug!("确认开始时输入流已结束");
        }

        let mut state = SessionState::start(time_limit);
        info!("⏱️ 倒计时开始: {} 秒, 共 {} 道题", time_limit.as_secs(), items.len());

        let countdown = time::sleep_until(state.deadline());
        tokio::pin!(countdown);

        for item in items {
            write!(self.out, "Problem #{}: {} = ", state.question_number(), item.question)?;
            self.out.flush()?;

            let answer_rx = self.collector.collect();

            // 倒计时优先：两者同时就绪时不再计分
            tokio::select! {
                biased;
                _ = &mut countdown => {
                    writeln!(self.out, "\nTime's up!")?;
                    self.out.flush()?;
                    info!("⌛ 时间到, 停在第 {} 题", state.question_number());
                    return Ok(state.finish(items.len(), SessionOutcome::TimedOut));
                }
                answer = answer_rx => {
                    // 读不到输入按空答案处理
                    let answer = answer.unwrap_or_default();
                    let is_correct = item.is_correct(&answer);
                    debug!("第 {} 题: 回答 {:?}, 正确: {}", state.question_number(), answer, is_correct);
                    state.record(is_correct);
                }
            }
        }

        Ok(state.finish(items.len(), SessionOutcome::Completed))
    }
}
