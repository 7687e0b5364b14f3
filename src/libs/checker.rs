//! Update checker facade: the single entry point a host integrates against.
//!
//! The facade owns the durable check result, the observer registry and the
//! current download handle, and sequences the two background task kinds:
//!
//! - **Check task**: connectivity gate → fetch first line → compare version
//!   codes → store the boolean → notify every observer exactly once. All
//!   fetch and parse faults resolve to "no update"; nothing propagates.
//! - **Download task**: connectivity gate → fetch artifact → stage on disk
//!   → optionally trigger install. Each call replaces the previous handle,
//!   so `install()` always refers to the most recent download.
//!
//! Blocking network I/O always runs on the tokio blocking pool, never on
//! the caller's thread. `update_available` is written only by check-task
//! completion and the download slot only by `download*()` calls, so the two
//! task kinds never contend on the same field.

use crate::libs::context::HostContext;
use crate::libs::download::DownloadHandle;
use crate::libs::error::UpdateError;
use crate::libs::messages::Message;
use crate::libs::version::{self, UNKNOWN_VERSION};
use crate::{msg_debug, msg_warning};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::{self, JoinHandle};

type Observer = Arc<dyn Fn(bool) + Send + Sync>;

pub struct UpdateChecker {
    context: Option<HostContext>,
    use_notifications: bool,
    update_available: Arc<AtomicBool>,
    observers: Arc<Mutex<Vec<Observer>>>,
    download: Mutex<Option<DownloadHandle>>,
}

impl UpdateChecker {
    /// Creates a checker over the given host context.
    ///
    /// With `context = None` every network-gated operation reports
    /// [`UpdateError::InvalidContext`] instead of crashing. When
    /// `use_notifications` is set, skipped operations print a short
    /// advisory message for offline conditions.
    pub fn new(context: Option<HostContext>, use_notifications: bool) -> Self {
        Self {
            context,
            use_notifications,
            update_available: Arc::new(AtomicBool::new(false)),
            observers: Arc::new(Mutex::new(Vec::new())),
            download: Mutex::new(None),
        }
    }

    /// Registers an observer that is invoked once per completed update
    /// check with the check's boolean result.
    ///
    /// Passing the result in the callback is a deliberate strengthening of
    /// the classic payload-less notify: observers may still re-read
    /// [`is_update_available`](Self::is_update_available), but they no
    /// longer have to.
    pub fn subscribe(&self, observer: impl Fn(bool) + Send + Sync + 'static) {
        self.observers.lock().push(Arc::new(observer));
    }

    /// Checks the URL for a newer version code.
    ///
    /// Gates run synchronously in order: host context, connectivity, local
    /// version validity. Only then is the check task spawned; a spawned
    /// task always completes, stores its result and fires one notification
    /// cycle, whatever the fetch returned. Concurrent calls spawn
    /// independent tasks, each notifying once.
    ///
    /// The returned handle can be awaited to observe completion; dropping
    /// it does not cancel the check.
    pub fn check_for_update(&self, url: &str) -> Result<JoinHandle<bool>, UpdateError> {
        let context = self.context_or_report()?;

        if !context.connectivity.is_connected() {
            if self.use_notifications {
                msg_warning!(Message::CheckSkippedOffline);
            }
            return Err(UpdateError::Offline);
        }

        let local_version = context.versions.local_version();
        if local_version < 0 {
            tracing::warn!("local version code unavailable, refusing to check for updates");
            msg_debug!(Message::CheckFailedInvalidVersion);
            return Err(UpdateError::InvalidLocalVersion);
        }

        let fetch = context.fetch.clone();
        let update_available = self.update_available.clone();
        let observers = self.observers.clone();
        let url = url.to_string();

        Ok(task::spawn_blocking(move || {
            let available = match fetch.fetch_first_line(&url) {
                Ok(remote_text) => version::is_update_available(&remote_text, local_version),
                Err(err) => {
                    // An unreadable version file means "no update", not a
                    // failed check.
                    tracing::warn!(url, error = %err, "version check fetch failed");
                    false
                }
            };

            update_available.store(available, Ordering::SeqCst);
            // Snapshot the registry and release the lock before invoking:
            // a callback may subscribe() further observers, and a slow
            // callback must not block another check's completion.
            let snapshot: Vec<Observer> = observers.lock().clone();
            for observer in &snapshot {
                observer(available);
            }
            available
        }))
    }

    /// Last completed check's result; `false` until a check completes.
    pub fn is_update_available(&self) -> bool {
        self.update_available.load(Ordering::SeqCst)
    }

    /// Downloads the update artifact without installing it.
    pub fn download(&self, url: &str) -> Result<JoinHandle<()>, UpdateError> {
        self.start_download(url, false)
    }

    /// Downloads the update artifact and triggers install when the
    /// download completes.
    pub fn download_and_install(&self, url: &str) -> Result<JoinHandle<()>, UpdateError> {
        self.start_download(url, true)
    }

    /// Hands the most recently downloaded artifact to the install trigger.
    ///
    /// A sequencing error when no prior `download()` staged an artifact.
    pub fn install(&self) -> Result<(), UpdateError> {
        let handle = self.download.lock().clone();
        match handle {
            Some(handle) => handle.install(),
            None => {
                msg_debug!(Message::InstallWithoutDownload);
                Err(UpdateError::InstallWithoutDownload)
            }
        }
    }

    /// Local version code, or `-1` when it cannot be resolved. Never
    /// fails.
    pub fn version_code(&self) -> i64 {
        match &self.context {
            Some(context) => context.versions.local_version(),
            None => UNKNOWN_VERSION,
        }
    }

    /// Handle of the current download attempt, if any. Replaced by every
    /// `download*()` call.
    pub fn current_download(&self) -> Option<DownloadHandle> {
        self.download.lock().clone()
    }

    fn start_download(&self, url: &str, install_after: bool) -> Result<JoinHandle<()>, UpdateError> {
        let context = self.context_or_report()?;

        // Offline is reported synchronously; the task is never started.
        if !context.connectivity.is_connected() {
            if self.use_notifications {
                msg_warning!(Message::DownloadSkippedOffline);
            }
            return Err(UpdateError::Offline);
        }

        // A fresh handle per call: the previous download, whatever its
        // state, is no longer reachable through install().
        let handle = DownloadHandle::new(context.installer.clone(), install_after);
        *self.download.lock() = Some(handle.clone());

        let fetch = context.fetch.clone();
        let staging_dir = context.staging_dir.clone();
        let url = url.to_string();

        Ok(task::spawn_blocking(move || {
            handle.run(fetch.as_ref(), &staging_dir, &url);
        }))
    }

    fn context_or_report(&self) -> Result<&HostContext, UpdateError> {
        match &self.context {
            Some(context) => Ok(context),
            None => {
                tracing::warn!("host context is missing, operation skipped");
                msg_debug!(Message::CheckFailedNoContext);
                Err(UpdateError::InvalidContext)
            }
        }
    }
}
