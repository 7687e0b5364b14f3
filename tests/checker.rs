#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;
    use upcheck::libs::checker::UpdateChecker;
    use upcheck::libs::connectivity::Connectivity;
    use upcheck::libs::context::HostContext;
    use upcheck::libs::error::{FetchError, UpdateError};
    use upcheck::libs::fetch::Fetch;
    use upcheck::libs::install::LogInstall;
    use upcheck::libs::version::FixedVersion;

    /// Scripted fetcher that counts calls. A `None` response simulates a
    /// fetch fault.
    struct MockFetch {
        line: Option<String>,
        bytes: Option<Vec<u8>>,
        line_calls: AtomicUsize,
        byte_calls: AtomicUsize,
    }

    impl MockFetch {
        fn with_line(line: &str) -> Self {
            Self {
                line: Some(line.to_string()),
                bytes: None,
                line_calls: AtomicUsize::new(0),
                byte_calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                line: None,
                bytes: None,
                line_calls: AtomicUsize::new(0),
                byte_calls: AtomicUsize::new(0),
            }
        }
    }

    impl Fetch for MockFetch {
        fn fetch_first_line(&self, url: &str) -> Result<String, FetchError> {
            self.line_calls.fetch_add(1, Ordering::SeqCst);
            self.line.clone().ok_or_else(|| FetchError::MalformedUrl(url.to_string()))
        }

        fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            self.byte_calls.fetch_add(1, Ordering::SeqCst);
            self.bytes.clone().ok_or_else(|| FetchError::MalformedUrl(url.to_string()))
        }
    }

    /// Connectivity whose answer can be flipped mid-test.
    struct SwitchableConnectivity(Arc<AtomicBool>);

    impl Connectivity for SwitchableConnectivity {
        fn is_connected(&self) -> bool {
            self.0.load(Ordering::SeqCst)
        }
    }

    struct TestHost {
        fetch: Arc<MockFetch>,
        online: Arc<AtomicBool>,
        _staging: TempDir,
    }

    impl TestHost {
        fn new(fetch: MockFetch) -> Self {
            Self {
                fetch: Arc::new(fetch),
                online: Arc::new(AtomicBool::new(true)),
                _staging: tempfile::tempdir().unwrap(),
            }
        }

        fn context(&self, local_version: i64) -> HostContext {
            HostContext {
                versions: Arc::new(FixedVersion(local_version)),
                connectivity: Arc::new(SwitchableConnectivity(self.online.clone())),
                fetch: self.fetch.clone(),
                installer: Arc::new(LogInstall),
                staging_dir: PathBuf::from(self._staging.path()),
            }
        }
    }

    fn count_notifications(checker: &UpdateChecker) -> Arc<AtomicUsize> {
        let notifications = Arc::new(AtomicUsize::new(0));
        let counter = notifications.clone();
        checker.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        notifications
    }

    #[tokio::test]
    async fn test_newer_remote_version_reports_update() {
        let host = TestHost::new(MockFetch::with_line("7"));
        let checker = UpdateChecker::new(Some(host.context(5)), false);
        let notifications = count_notifications(&checker);

        let available = checker.check_for_update("https://example.com/version.txt").unwrap().await.unwrap();

        assert!(available);
        assert!(checker.is_update_available());
        assert_eq!(notifications.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_equal_remote_version_reports_no_update() {
        let host = TestHost::new(MockFetch::with_line("5"));
        let checker = UpdateChecker::new(Some(host.context(5)), false);

        let available = checker.check_for_update("https://example.com/version.txt").unwrap().await.unwrap();

        assert!(!available);
        assert!(!checker.is_update_available());
    }

    #[tokio::test]
    async fn test_malformed_remote_version_resolves_to_no_update() {
        let host = TestHost::new(MockFetch::with_line("abc"));
        let checker = UpdateChecker::new(Some(host.context(5)), false);
        let notifications = count_notifications(&checker);

        let available = checker.check_for_update("https://example.com/version.txt").unwrap().await.unwrap();

        assert!(!available);
        assert!(!checker.is_update_available());
        // A failed parse still completes the check and notifies once.
        assert_eq!(notifications.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_still_completes_and_notifies_once() {
        let host = TestHost::new(MockFetch::failing());
        let checker = UpdateChecker::new(Some(host.context(5)), false);
        let notifications = count_notifications(&checker);

        let available = checker.check_for_update("https://example.com/version.txt").unwrap().await.unwrap();

        assert!(!available);
        assert_eq!(notifications.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_offline_check_skips_fetch_and_keeps_prior_result() {
        let host = TestHost::new(MockFetch::with_line("7"));
        let checker = UpdateChecker::new(Some(host.context(5)), false);
        let notifications = count_notifications(&checker);

        // First check succeeds and records an available update.
        checker.check_for_update("https://example.com/version.txt").unwrap().await.unwrap();
        assert!(checker.is_update_available());

        host.online.store(false, Ordering::SeqCst);
        let result = checker.check_for_update("https://example.com/version.txt");

        assert!(matches!(result, Err(UpdateError::Offline)));
        // No second fetch happened and the prior result survived untouched.
        assert_eq!(host.fetch.line_calls.load(Ordering::SeqCst), 1);
        assert!(checker.is_update_available());
        assert_eq!(notifications.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unknown_local_version_refuses_to_start() {
        let host = TestHost::new(MockFetch::with_line("7"));
        let checker = UpdateChecker::new(Some(host.context(-1)), false);
        let notifications = count_notifications(&checker);

        let result = checker.check_for_update("https://example.com/version.txt");

        assert!(matches!(result, Err(UpdateError::InvalidLocalVersion)));
        assert_eq!(host.fetch.line_calls.load(Ordering::SeqCst), 0);
        assert_eq!(notifications.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_context_degrades_to_errors() {
        let checker = UpdateChecker::new(None, false);

        assert!(matches!(
            checker.check_for_update("https://example.com/version.txt"),
            Err(UpdateError::InvalidContext)
        ));
        assert!(matches!(checker.download("https://example.com/app.bin"), Err(UpdateError::InvalidContext)));
        assert_eq!(checker.version_code(), -1);
        assert!(!checker.is_update_available());
    }

    #[tokio::test]
    async fn test_every_completed_check_notifies_again() {
        let host = TestHost::new(MockFetch::with_line("7"));
        let checker = UpdateChecker::new(Some(host.context(5)), false);
        let notifications = count_notifications(&checker);

        checker.check_for_update("https://example.com/version.txt").unwrap().await.unwrap();
        checker.check_for_update("https://example.com/version.txt").unwrap().await.unwrap();

        assert_eq!(notifications.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_observer_may_subscribe_during_notification() {
        let host = TestHost::new(MockFetch::with_line("7"));
        let checker = Arc::new(UpdateChecker::new(Some(host.context(5)), false));
        let notifications = count_notifications(&checker);

        // Re-entering the registry from inside a callback must not
        // deadlock the check task.
        let checker_in_observer = checker.clone();
        checker.subscribe(move |_| {
            checker_in_observer.subscribe(|_| {});
        });

        let available = checker.check_for_update("https://example.com/version.txt").unwrap().await.unwrap();

        assert!(available);
        assert_eq!(notifications.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_observer_receives_check_result() {
        let host = TestHost::new(MockFetch::with_line("9"));
        let checker = UpdateChecker::new(Some(host.context(5)), false);

        let seen = Arc::new(AtomicBool::new(false));
        let seen_by_observer = seen.clone();
        checker.subscribe(move |available| {
            seen_by_observer.store(available, Ordering::SeqCst);
        });

        checker.check_for_update("https://example.com/version.txt").unwrap().await.unwrap();

        assert!(seen.load(Ordering::SeqCst));
    }
}
