use thiserror::Error;

/// 题库加载与配置错误
///
/// 这些错误都发生在答题会话开始之前，一旦出现就直接终止程序，
/// 不会产生任何会话状态。
#[derive(Debug, Error)]
pub enum QuizError {
    /// 题目文件不存在或无法读取
    #[error("无法读取题目文件 ({path}): {source}")]
    SourceUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 某一行列数不足（至少需要 题目,答案 两列）
    #[error("题目文件格式错误 ({path} 第 {line} 行): 需要至少 2 列, 实际 {fields} 列")]
    MalformedRow {
        path: String,
        line: u64,
        fields: usize,
    },

    /// CSV 解析失败
    #[error("CSV解析失败 ({path}): {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// 时间限制必须为正数
    #[error("时间限制必须大于 0 秒, 实际: {0}")]
    InvalidTimeLimit(u64),
}

// ========== 便捷构造函数 ==========

impl QuizError {
    /// 创建文件读取错误
    pub fn source_unreadable(path: impl Into<String>, source: std::io::Error) -> Self {
        QuizError::SourceUnreadable {
            path: path.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 题库结果类型
pub type QuizResult<T> = Result<T, QuizError>;
