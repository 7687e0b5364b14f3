use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub const VENDOR_NAME: &str = "lacodda";
pub const APP_NAME: &str = "upcheck";

const STAGING_DIR: &str = "staging";

/// Resolves platform-specific paths for the config file and for staged
/// update artifacts.
#[derive(Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }

    /// Directory where downloaded update artifacts are staged before the
    /// install trigger takes over.
    pub fn staging_dir(&self) -> Result<PathBuf> {
        let dir = self.base_path.join(STAGING_DIR);
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }

    /// Most recently staged artifact, or `None` when nothing has been
    /// downloaded yet.
    pub fn latest_staged(&self) -> Result<Option<PathBuf>> {
        let dir = self.staging_dir()?;
        let mut latest: Option<(SystemTime, PathBuf)> = None;
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let modified = entry.metadata()?.modified()?;
            if latest.as_ref().map_or(true, |(time, _)| modified > *time) {
                latest = Some((modified, path));
            }
        }
        Ok(latest.map(|(_, path)| path))
    }
}
