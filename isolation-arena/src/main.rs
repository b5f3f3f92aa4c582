use std::env;
use std::path::PathBuf;

use anyhow::Result;
use isolation_arena::{run_tournament, ArenaConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("isolation_arena=info".parse()?))
        .init();

    // 第一个参数为配置文件路径，缺省使用内置阵容
    let config = match env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            info!("加载配置: {:?}", path);
            ArenaConfig::load(&path)?
        }
        None => ArenaConfig::default(),
    };

    info!(
        "隔离棋循环赛开始: {}x{} 棋盘, {} 名选手, 单步时限 {} ms",
        config.width,
        config.height,
        config.agents.len(),
        config.time_limit_ms
    );

    let standings = run_tournament(&config)?;
    info!("共 {} 局", standings.total_games());
    println!("{}", standings.render());

    Ok(())
}
