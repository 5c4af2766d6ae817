//! Courier entry point.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use courier::application::Relay;
use courier::infrastructure::config::ConfigLoader;
use courier::infrastructure::logging::LoggerImpl;

#[derive(Parser, Debug)]
#[command(name = "courier")]
#[command(about = "Telegram relay that queues laptop commands classified by an LLM")]
#[command(version)]
struct Args {
    /// Path to a YAML config file (defaults to ./courier.yaml when present)
    #[arg(short, long, env = "COURIER_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ConfigLoader::load(args.config.as_deref())?;
    let _logger = LoggerImpl::init(&config.logging)?;

    info!(version = env!("CARGO_PKG_VERSION"), "starting courier");

    Relay::build(config).await?.run().await
}
