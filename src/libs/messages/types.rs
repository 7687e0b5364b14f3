#[derive(Debug, Clone)]
pub enum Message {
    // === CHECK MESSAGES ===
    UpdateAvailable,
    NoUpdateAvailable,
    CheckSkippedOffline,
    CheckFailedNoContext,
    CheckFailedInvalidVersion,
    MalformedRemoteVersion(String),
    LocalVersionCode(i64),

    // === DOWNLOAD MESSAGES ===
    DownloadSkippedOffline,
    DownloadStarted(String),   // url
    DownloadCompleted(String), // staged artifact path
    DownloadFailed(String),    // reason

    // === INSTALL MESSAGES ===
    InstallTriggered(String), // staged artifact path
    InstallFailed(String),    // reason
    InstallWithoutDownload,
}
