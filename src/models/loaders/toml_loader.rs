use serde::Deserialize;

use crate::error::{QuizError, QuizResult};
use crate::models::QuizItem;

/// TOML 题库文件结构
///
/// ```toml
/// [[questions]]
/// question = "5+5"
/// answer = "10"
/// ```
#[derive(Debug, Deserialize)]
struct QuestionFile {
    #[serde(default)]
    questions: Vec<QuizItem>,
}

/// 解析 TOML 格式的题库，答案同样去除首尾空白
pub fn parse_toml(content: &str, path: &str) -> QuizResult<Vec<QuizItem>> {
    let file: QuestionFile = toml::from_str(content).map_err(|source| QuizError::Toml {
        path: path.to_string(),
        source,
    })?;

    Ok(file
        .questions
        .into_iter()
        .map(|item| QuizItem::new(item.question, item.answer))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_questions_in_order() {
        let content = r#"
            [[questions]]
            question = "5+5"
            answer = "10 "

            [[questions]]
            question = "3+3"
            answer = "6"
        "#;

        let items = parse_toml(content, "quiz.toml").unwrap();
        assert_eq!(
            items,
            vec![QuizItem::new("5+5", "10"), QuizItem::new("3+3", "6")]
        );
    }

    #[test]
    fn test_missing_answer_is_error() {
        let content = r#"
            [[questions]]
            question = "5+5"
        "#;
        assert!(matches!(
            parse_toml(content, "quiz.toml"),
            Err(QuizError::Toml { .. })
        ));
    }
}
