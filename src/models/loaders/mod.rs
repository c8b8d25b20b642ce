//! 题库加载
//!
//! 按扩展名选择格式：`.toml` 使用 TOML 加载器，其余一律按 CSV 处理。
//! 任何加载错误都在答题开始前返回。

mod csv_loader;
mod toml_loader;

pub use csv_loader::parse_csv;
pub use toml_loader::parse_toml;

use std::path::Path;

use tokio::fs;
use tracing::info;

use crate::error::{QuizError, QuizResult};
use crate::models::QuizItem;

/// 从文件加载题目列表，保持文件中的顺序
pub async fn load_questions(path: &Path) -> QuizResult<Vec<QuizItem>> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| QuizError::source_unreadable(&path_str, e))?;

    let is_toml = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let items = if is_toml {
        parse_toml(&content, &path_str)?
    } else {
        parse_csv(&content, &path_str)?
    };

    info!("成功加载 {} 道题目: {}", items.len(), path_str);
    Ok(items)
}
