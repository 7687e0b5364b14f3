pub mod check;
pub mod download;
pub mod install;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Check a remote URL for a newer version code")]
    Check(check::CheckArgs),
    #[command(about = "Download the update artifact, optionally triggering install")]
    Download(download::DownloadArgs),
    #[command(about = "Hand a staged artifact to the install trigger")]
    Install(install::InstallArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Check(args) => check::cmd(args).await,
            Commands::Download(args) => download::cmd(args).await,
            Commands::Install(args) => install::cmd(args).await,
        }
    }
}
