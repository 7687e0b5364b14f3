//! Install trigger collaborator.
//!
//! The core's responsibility ends once the artifact is staged on disk;
//! installation itself belongs to the host. These implementations cover
//! the common cases: hand the path to a host command, or just record that
//! the handoff point was reached.

use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// Accepts a staged artifact and hands it off to the host's installation
/// mechanism.
pub trait InstallTrigger: Send + Sync {
    fn trigger(&self, artifact: &Path) -> Result<()>;
}

/// Logs the handoff and does nothing else. Default for hosts that pick up
/// the staged artifact themselves.
pub struct LogInstall;

impl InstallTrigger for LogInstall {
    fn trigger(&self, artifact: &Path) -> Result<()> {
        tracing::info!(artifact = %artifact.display(), "artifact staged, install handed off to host");
        Ok(())
    }
}

/// Runs a host command with the staged artifact path appended as the last
/// argument, e.g. `installer.sh /path/to/update.bin`.
pub struct CommandInstall {
    program: String,
    args: Vec<String>,
}

impl CommandInstall {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }
}

impl InstallTrigger for CommandInstall {
    fn trigger(&self, artifact: &Path) -> Result<()> {
        let status = Command::new(&self.program).args(&self.args).arg(artifact).status()?;
        if !status.success() {
            anyhow::bail!("install command '{}' exited with {}", self.program, status);
        }
        Ok(())
    }
}
