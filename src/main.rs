use anyhow::Result;
use tracing_subscriber::EnvFilter;
use upcheck::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    Cli::menu().await
}
