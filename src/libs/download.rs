//! Download/install task handle and its state machine.
//!
//! Every `download()` call on the facade constructs a fresh handle, so
//! `install()` always refers to the most recent download. The handle is a
//! cheap clone around shared state: the background task drives the state
//! forward while the facade and host threads read it.

use crate::libs::error::UpdateError;
use crate::libs::fetch::{artifact_file_name, Fetch};
use crate::libs::install::InstallTrigger;
use crate::libs::messages::Message;
use crate::msg_debug;
use parking_lot::Mutex;
use std::fs::File;
use std::io::copy;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Progress of one download/install attempt.
///
/// `Failed` is reachable from `Downloading` and `Installing`; the other
/// states advance strictly left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadState {
    Idle,
    Downloading,
    Downloaded,
    Installing,
    Installed,
    Failed,
}

struct Inner {
    state: DownloadState,
    artifact: Option<PathBuf>,
}

/// Handle to one download/install attempt.
#[derive(Clone)]
pub struct DownloadHandle {
    inner: Arc<Mutex<Inner>>,
    installer: Arc<dyn InstallTrigger>,
    install_after: bool,
}

impl DownloadHandle {
    pub fn new(installer: Arc<dyn InstallTrigger>, install_after: bool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: DownloadState::Idle,
                artifact: None,
            })),
            installer,
            install_after,
        }
    }

    pub fn state(&self) -> DownloadState {
        self.inner.lock().state
    }

    /// Path of the staged artifact, present once the download completed.
    pub fn artifact(&self) -> Option<PathBuf> {
        self.inner.lock().artifact.clone()
    }

    /// Fetches the artifact and stages it under `staging_dir`. Runs on a
    /// background thread; the handle records progress as it goes. When the
    /// handle was created with `install_after`, a successful download flows
    /// straight into the install trigger.
    pub(crate) fn run(&self, fetch: &dyn Fetch, staging_dir: &Path, url: &str) {
        self.inner.lock().state = DownloadState::Downloading;

        let bytes = match fetch.fetch_bytes(url) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(url, error = %err, "update download failed");
                self.inner.lock().state = DownloadState::Failed;
                return;
            }
        };

        let path = staging_dir.join(artifact_file_name(url));
        if let Err(err) = stage(&path, &bytes) {
            tracing::warn!(path = %path.display(), error = %err, "failed to stage update artifact");
            self.inner.lock().state = DownloadState::Failed;
            return;
        }

        {
            let mut inner = self.inner.lock();
            inner.artifact = Some(path);
            inner.state = DownloadState::Downloaded;
        }
        tracing::debug!(url, "update artifact staged");

        if self.install_after {
            // Install faults are absorbed here like every other task
            // fault; the handle ends up Failed with a diagnostic.
            let _ = self.install();
        }
    }

    /// Hands the staged artifact to the install trigger.
    ///
    /// Legal only once the download completed; before that the artifact
    /// does not exist and the call is a sequencing error.
    pub fn install(&self) -> Result<(), UpdateError> {
        let artifact = {
            let mut inner = self.inner.lock();
            match inner.artifact.clone() {
                Some(path) => {
                    inner.state = DownloadState::Installing;
                    path
                }
                None => return Err(UpdateError::InstallWithoutDownload),
            }
        };

        // The trigger may be slow; keep the state lock released while it
        // runs.
        match self.installer.trigger(&artifact) {
            Ok(()) => {
                self.inner.lock().state = DownloadState::Installed;
                tracing::info!(artifact = %artifact.display(), "install triggered");
                Ok(())
            }
            Err(err) => {
                self.inner.lock().state = DownloadState::Failed;
                tracing::warn!(artifact = %artifact.display(), error = %err, "install trigger failed");
                msg_debug!(Message::InstallFailed(err.to_string()));
                Ok(())
            }
        }
    }
}

fn stage(path: &Path, bytes: &[u8]) -> Result<(), std::io::Error> {
    let mut out = File::create(path)?;
    copy(&mut &bytes[..], &mut out)?;
    Ok(())
}
