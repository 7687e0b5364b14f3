//! Host context: the collaborators the update core consumes.
//!
//! The core never resolves versions, probes networks or installs anything
//! on its own; the host injects all of that here. A checker built without
//! a context degrades every network-gated operation into a reported
//! failure instead of crashing.

use crate::libs::config::Config;
use crate::libs::connectivity::{Connectivity, TcpProbe};
use crate::libs::fetch::{Fetch, HttpFetcher};
use crate::libs::install::{InstallTrigger, LogInstall};
use crate::libs::storage::DataStorage;
use crate::libs::version::{FixedVersion, LocalVersionSource};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Bundle of host capabilities the checker operates against.
#[derive(Clone)]
pub struct HostContext {
    pub versions: Arc<dyn LocalVersionSource>,
    pub connectivity: Arc<dyn Connectivity>,
    pub fetch: Arc<dyn Fetch>,
    pub installer: Arc<dyn InstallTrigger>,
    /// Directory where downloaded artifacts are staged.
    pub staging_dir: PathBuf,
}

impl HostContext {
    /// Builds a context from the application configuration: HTTP fetcher,
    /// TCP connectivity probe, platform staging directory and a fixed
    /// local version code supplied by the caller.
    pub fn from_config(config: &Config, local_version: i64) -> Result<Self> {
        Ok(Self {
            versions: Arc::new(FixedVersion(local_version)),
            connectivity: Arc::new(TcpProbe::new(&config.probe())),
            fetch: Arc::new(HttpFetcher::new(&config.fetch())?),
            installer: Arc::new(LogInstall),
            staging_dir: DataStorage::new().staging_dir()?,
        })
    }

    pub fn with_installer(mut self, installer: Arc<dyn InstallTrigger>) -> Self {
        self.installer = installer;
        self
    }
}
