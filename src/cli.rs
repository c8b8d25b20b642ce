//! 命令行参数
//!
//! 命令行参数覆盖环境变量中的配置，未指定的项保持 `Config::from_env()` 的值。

use clap::Parser;

use crate::config::Config;

/// 限时答题
#[derive(Parser, Debug)]
#[command(version, about = "Timed quiz runner", long_about = None)]
pub struct Cli {
    /// a CSV (or TOML) file in 'question,answer' format
    #[arg(long = "csv", value_name = "FILE")]
    pub csv: Option<String>,

    /// time limit for the whole quiz in seconds
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// shuffle the quiz questions
    #[arg(long)]
    pub shuffle: bool,

    /// seed for shuffling, makes the order reproducible
    #[arg(long)]
    pub seed: Option<u64>,

    /// print diagnostic logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 将命令行参数合并进配置
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(path) = self.csv {
            config.problems_path = path;
        }
        if let Some(limit) = self.limit {
            config.time_limit_secs = limit;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config.shuffle |= self.shuffle;
        config.verbose_logging |= self.verbose;
        config
    }
}
