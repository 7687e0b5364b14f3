use crate::libs::install::{CommandInstall, InstallTrigger, LogInstall};
use crate::libs::messages::Message;
use crate::libs::storage::DataStorage;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InstallArgs {
    /// Staged artifact to install; defaults to the most recent download
    pub artifact: Option<PathBuf>,

    /// Command to run with the artifact path as its last argument
    #[arg(long)]
    pub install_cmd: Option<String>,
}

/// Hands a previously staged artifact to the install trigger.
pub async fn cmd(args: InstallArgs) -> Result<()> {
    let artifact = match args.artifact {
        Some(path) => path,
        None => match DataStorage::new().latest_staged()? {
            Some(path) => path,
            None => msg_bail_anyhow!(Message::InstallWithoutDownload),
        },
    };
    if !artifact.is_file() {
        msg_bail_anyhow!(Message::InstallWithoutDownload);
    }

    let installer: Box<dyn InstallTrigger> = match &args.install_cmd {
        Some(cmd) => Box::new(CommandInstall::new(cmd.clone(), Vec::new())),
        None => Box::new(LogInstall),
    };
    installer.trigger(&artifact)?;

    msg_success!(Message::InstallTriggered(artifact.display().to_string()));
    Ok(())
}
