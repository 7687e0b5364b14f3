//! Error taxonomy for the update orchestration core.
//!
//! Network and parsing faults never escape the check pipeline: they are
//! absorbed into the boolean check result. The variants here cover the
//! cases a caller can actually act on, most of them raised synchronously
//! before any task is spawned.

use thiserror::Error;

/// Faults raised by the remote fetcher.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL could not be parsed at all; no connection was attempted.
    #[error("malformed url: {0}")]
    MalformedUrl(String),

    /// Any connection or read fault. Timeouts, DNS failures and non-2xx
    /// responses all collapse into this variant.
    #[error("failed to read from {url}")]
    Io {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Errors surfaced by the [`UpdateChecker`](crate::libs::checker::UpdateChecker) facade.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The facade was constructed without a host context; every
    /// context-dependent operation degrades to this error.
    #[error("host context is missing or invalid")]
    InvalidContext,

    /// The connectivity probe reported no usable network path. The
    /// operation was skipped, not attempted.
    #[error("no network connection available")]
    Offline,

    /// The local version source returned the unavailable sentinel; the
    /// check refuses to start rather than compare against garbage.
    #[error("local version code could not be determined")]
    InvalidLocalVersion,

    /// `install()` was called before any download staged an artifact.
    #[error("install requested without a completed download")]
    InstallWithoutDownload,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
