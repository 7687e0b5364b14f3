#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use upcheck::libs::config::{Config, FetchConfig, ProbeConfig, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_PROBE_ADDR};
    use upcheck::libs::storage::DataStorage;

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata
    /// directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.fetch.is_none());
        assert!(config.probe.is_none());

        // Accessors fill in defaults for omitted sections.
        assert_eq!(config.fetch().timeout_secs, Some(DEFAULT_FETCH_TIMEOUT_SECS));
        assert_eq!(config.probe().addr, DEFAULT_PROBE_ADDR);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert!(config.fetch.is_none());
        assert!(config.probe.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_save_and_read(_ctx: &mut ConfigTestContext) {
        let config = Config {
            fetch: Some(FetchConfig {
                timeout_secs: None,
                user_agent: Some("upcheck-test".to_string()),
            }),
            probe: Some(ProbeConfig {
                addr: "10.0.0.1:80".to_string(),
                timeout_ms: 250,
            }),
        };

        config.save().unwrap();
        let loaded = Config::read().unwrap();

        let fetch = loaded.fetch.unwrap();
        assert_eq!(fetch.timeout_secs, None);
        assert_eq!(fetch.user_agent.as_deref(), Some("upcheck-test"));

        let probe = loaded.probe.unwrap();
        assert_eq!(probe.addr, "10.0.0.1:80");
        assert_eq!(probe.timeout_ms, 250);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_staging_dir_is_created(_ctx: &mut ConfigTestContext) {
        let dir = DataStorage::new().staging_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with("staging"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_latest_staged_is_none_without_downloads(_ctx: &mut ConfigTestContext) {
        assert!(DataStorage::new().latest_staged().unwrap().is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_latest_staged_picks_most_recent_artifact(_ctx: &mut ConfigTestContext) {
        let storage = DataStorage::new();
        let dir = storage.staging_dir().unwrap();

        std::fs::write(dir.join("first.bin"), b"one").unwrap();
        // Keep the modification times apart.
        std::thread::sleep(std::time::Duration::from_millis(20));
        std::fs::write(dir.join("second.bin"), b"two").unwrap();

        let latest = storage.latest_staged().unwrap().unwrap();
        assert_eq!(latest.file_name().unwrap(), "second.bin");
    }
}
