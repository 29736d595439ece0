use anyhow::Result;
use rag_compare::{logging, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::load().await?;

    // 初始化并运行应用
    let _report = App::initialize(config)?.run().await?;

    Ok(())
}
