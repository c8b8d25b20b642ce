use anyhow::Result;
use clap::Parser;
use timed_quiz::{logger, App, Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置：环境变量 + 命令行
    let config = cli.apply(Config::from_env());

    // 初始化日志
    logger::init(config.verbose_logging);

    // 初始化并运行应用
    let _report = App::initialize(config)?.run().await?;

    Ok(())
}
