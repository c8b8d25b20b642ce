//! 答案收集 - 业务能力层
//!
//! 把一次阻塞的行读取包装成可以和倒计时竞争的异步结果。
//!
//! 每次 `collect()` 启动一个独立线程做一次阻塞读取，结果通过一次性的
//! oneshot 通道交回。调用方不等待的话，读取线程会在后台继续跑到读完为止，
//! 结果直接丢弃；这些线程是 detached 的，不会阻止进程退出。

use std::io::{self, BufRead, BufReader, Stdin};
use std::sync::{Arc, Mutex};
use std::thread;

use tokio::sync::oneshot;
use tracing::{debug, warn};

/// 答案收集能力
///
/// 返回的 Receiver 只会被消费一次。发送端被丢弃（读到 EOF、读取失败）时，
/// 调用方按空答案处理。
pub trait AnswerCollector {
    fn collect(&self) -> oneshot::Receiver<String>;
}

/// 基于行读取的收集器，多个收集请求共享同一个输入流
pub struct LineCollector<R> {
    reader: Arc<Mutex<R>>,
}

impl LineCollector<BufReader<Stdin>> {
    /// 从标准输入读取答案
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R> LineCollector<R>
where
    R: BufRead + Send + 'static,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader: Arc::new(Mutex::new(reader)),
        }
    }
}

impl<R> Clone for LineCollector<R> {
    fn clone(&self) -> Self {
        Self {
            reader: Arc::clone(&self.reader),
        }
    }
}

impl<R> AnswerCollector for LineCollector<R>
where
    R: BufRead + Send + 'static,
{
    fn collect(&self) -> oneshot::Receiver<String> {
        let (tx, rx) = oneshot::channel();
        let reader = Arc::clone(&self.reader);

        let spawned = thread::Builder::new()
            .name("answer-reader".to_string())
            .spawn(move || match read_one_line(&reader) {
                Ok(Some(line)) => {
                    // 接收端已放弃（超时）时发送失败，直接丢弃
                    if tx.send(line).is_err() {
                        debug!("答案到达时会话已结束，丢弃");
                    }
                }
                Ok(None) => debug!("输入流已结束"),
                Err(e) => warn!("读取答案失败: {}", e),
            });

        if let Err(e) = spawned {
            warn!("无法启动读取线程: {}", e);
        }

        rx
    }
}

/// 读取一行并去掉行尾换行符，EOF 返回 None
fn read_one_line<R: BufRead>(reader: &Mutex<R>) -> io::Result<Option<String>> {
    let mut guard = reader
        .lock()
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "输入流锁已损坏"))?;

    let mut line = String::new();
    if guard.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
