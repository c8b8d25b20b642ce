use serde::Deserialize;

/// 一道题目：题干 + 标准答案
///
/// 解析完成后不再修改，答案在加载时已去除首尾空白。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct QuizItem {
    pub question: String,
    pub answer: String,
}

impl QuizItem {
    pub fn new(question: impl Into<String>, answer: impl AsRef<str>) -> Self {
        Self {
            question: question.into(),
            answer: answer.as_ref().trim().to_string(),
        }
    }

    /// 判断用户的回答是否正确（忽略大小写和首尾空白）
    pub fn is_correct(&self, given: &str) -> bool {
        normalize(given) == normalize(&self.answer)
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
