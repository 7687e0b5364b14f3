//! Display implementation for upcheck application messages.
//!
//! All user-facing message text lives in this single `Display` impl so the
//! wording stays consistent between the CLI commands and the advisory
//! messages the checker emits when notifications are enabled.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CHECK MESSAGES ===
            Message::UpdateAvailable => "A newer version is available".to_string(),
            Message::NoUpdateAvailable => "You are already on the latest version".to_string(),
            Message::CheckSkippedOffline => "App update check failed. No internet connection available".to_string(),
            Message::CheckFailedNoContext => "Update check skipped: no host context configured".to_string(),
            Message::CheckFailedInvalidVersion => "Update check skipped: local version code could not be determined".to_string(),
            Message::MalformedRemoteVersion(text) => format!("Remote version file does not contain a number: '{}'", text),
            Message::LocalVersionCode(code) => format!("Local version code: {}", code),

            // === DOWNLOAD MESSAGES ===
            Message::DownloadSkippedOffline => "App update failed. No internet connection available".to_string(),
            Message::DownloadStarted(url) => format!("Downloading update from {}", url),
            Message::DownloadCompleted(path) => format!("Update downloaded to {}", path),
            Message::DownloadFailed(reason) => format!("Update download failed: {}", reason),

            // === INSTALL MESSAGES ===
            Message::InstallTriggered(path) => format!("Install triggered for {}", path),
            Message::InstallFailed(reason) => format!("Install failed: {}", reason),
            Message::InstallWithoutDownload => "Nothing to install: no update has been downloaded".to_string(),
        };
        write!(f, "{}", text)
    }
}
