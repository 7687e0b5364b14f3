use crate::libs::checker::UpdateChecker;
use crate::libs::config::Config;
use crate::libs::context::HostContext;
use crate::libs::messages::Message;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// URL of the text file whose first line is the latest version code
    pub url: String,

    /// Version code of the installed application
    #[arg(long)]
    pub current: i64,
}

/// Performs one end-to-end update check and reports the result.
pub async fn cmd(args: CheckArgs) -> Result<()> {
    let config = Config::read()?;
    let context = HostContext::from_config(&config, args.current)?;
    let checker = UpdateChecker::new(Some(context), true);

    msg_print!(Message::LocalVersionCode(checker.version_code()));

    let check = checker.check_for_update(&args.url)?;
    let available = check.await?;

    if available {
        msg_success!(Message::UpdateAvailable);
    } else {
        msg_info!(Message::NoUpdateAvailable);
    }

    Ok(())
}
