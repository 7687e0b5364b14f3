use crate::libs::checker::UpdateChecker;
use crate::libs::config::Config;
use crate::libs::context::HostContext;
use crate::libs::download::DownloadState;
use crate::libs::install::CommandInstall;
use crate::libs::messages::Message;
use crate::libs::version::UNKNOWN_VERSION;
use crate::{msg_bail_anyhow, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct DownloadArgs {
    /// URL of the update artifact
    pub url: String,

    /// Trigger install as soon as the download completes
    #[arg(long)]
    pub install: bool,

    /// Command to run with the staged artifact path as its last argument
    #[arg(long, requires = "install")]
    pub install_cmd: Option<String>,
}

/// Downloads the update artifact and optionally triggers install.
pub async fn cmd(args: DownloadArgs) -> Result<()> {
    let config = Config::read()?;
    let mut context = HostContext::from_config(&config, UNKNOWN_VERSION)?;
    if let Some(cmd) = &args.install_cmd {
        context = context.with_installer(Arc::new(CommandInstall::new(cmd.clone(), Vec::new())));
    }
    let checker = UpdateChecker::new(Some(context), true);

    msg_print!(Message::DownloadStarted(args.url.clone()));

    let task = if args.install {
        checker.download_and_install(&args.url)?
    } else {
        checker.download(&args.url)?
    };
    task.await?;

    let handle = checker
        .current_download()
        .ok_or_else(|| crate::msg_error_anyhow!(Message::DownloadFailed("no download handle".to_string())))?;
    let staged = handle.artifact().map(|p| p.display().to_string()).unwrap_or_default();

    match handle.state() {
        DownloadState::Installed => msg_success!(Message::InstallTriggered(staged)),
        DownloadState::Downloaded => msg_success!(Message::DownloadCompleted(staged)),
        _ => msg_bail_anyhow!(Message::DownloadFailed(args.url)),
    }

    Ok(())
}
