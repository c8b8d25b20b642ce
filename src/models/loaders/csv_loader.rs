use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{QuizError, QuizResult};
use crate::models::QuizItem;

/// 解析 `题目,答案` 格式的 CSV 内容
///
/// 多余的列会被忽略；少于两列的行视为格式错误。
pub fn parse_csv(content: &str, path: &str) -> QuizResult<Vec<QuizItem>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut items = Vec::new();
    let mut record = StringRecord::new();

    loop {
        let more = reader.read_record(&mut record).map_err(|source| QuizError::Csv {
            path: path.to_string(),
            source,
        })?;
        if !more {
            break;
        }

        let line = record.position().map_or(0, |p| p.line());
        match (record.get(0), record.get(1)) {
            (Some(question), Some(answer)) => {
                if record.len() > 2 {
                    debug!("第 {} 行有 {} 列，忽略多余的列", line, record.len());
                }
                items.push(QuizItem::new(question, answer));
            }
            _ => {
                return Err(QuizError::MalformedRow {
                    path: path.to_string(),
                    line,
                    fields: record.len(),
                })
            }
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order_and_trims_answer() {
        let items = parse_csv("5+5,10\n3+3,  6\n", "problems.csv").unwrap();
        assert_eq!(
            items,
            vec![QuizItem::new("5+5", "10"), QuizItem::new("3+3", "6")]
        );
    }

    #[test]
    fn test_parse_quoted_field_with_comma() {
        let items = parse_csv("\"what 2+2, sqrt(16)?\",4\n", "problems.csv").unwrap();
        assert_eq!(items[0].question, "what 2+2, sqrt(16)?");
        assert_eq!(items[0].answer, "4");
    }

    #[test]
    fn test_extra_columns_ignored() {
        let items = parse_csv("1+1,2,easy\n", "problems.csv").unwrap();
        assert_eq!(items, vec![QuizItem::new("1+1", "2")]);
    }

    #[test]
    fn test_single_field_row_is_malformed() {
        let err = parse_csv("5+5,10\n3+3\n", "problems.csv").unwrap_err();
        match err {
            QuizError::MalformedRow { line, fields, .. } => {
                assert_eq!(line, 2);
                assert_eq!(fields, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_source_yields_no_items() {
        assert!(parse_csv("", "problems.csv").unwrap().is_empty());
    }
}
