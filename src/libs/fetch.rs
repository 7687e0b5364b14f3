//! Remote fetching, the only I/O primitive the update core depends on.
//!
//! The fetch surface is deliberately blocking: the version file is a plain
//! GET whose first line carries the version code, and the artifact download
//! is a plain GET for an opaque payload. Callers are responsible for moving
//! the call off any thread that must not stall; the checker runs fetches on
//! the tokio blocking pool.

use crate::libs::config::FetchConfig;
use crate::libs::error::FetchError;
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;

/// Blocking fetch capability over a URL.
pub trait Fetch: Send + Sync {
    /// Reads only the first line of the text at `url`. The version file is
    /// expected to contain exactly one line; anything after the first
    /// newline is discarded.
    fn fetch_first_line(&self, url: &str) -> Result<String, FetchError>;

    /// Reads the full payload at `url`, used for the artifact download.
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// HTTP fetcher backed by a blocking `reqwest` client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        } else {
            // Legacy behavior: block until the connection library itself
            // times out or succeeds.
            builder = builder.timeout(None::<Duration>);
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        Ok(Self { client: builder.build()? })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, FetchError> {
        // Parse up front so an unusable URL is reported without a
        // connection attempt.
        let parsed = Url::parse(url).map_err(|_| FetchError::MalformedUrl(url.to_string()))?;
        self.client
            .get(parsed)
            .send()
            .and_then(|resp| resp.error_for_status())
            .map_err(|source| FetchError::Io {
                url: url.to_string(),
                source,
            })
    }
}

impl Fetch for HttpFetcher {
    fn fetch_first_line(&self, url: &str) -> Result<String, FetchError> {
        let body = self.get(url)?.text().map_err(|source| FetchError::Io {
            url: url.to_string(),
            source,
        })?;
        Ok(body.lines().next().unwrap_or_default().to_string())
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let bytes = self.get(url)?.bytes().map_err(|source| FetchError::Io {
            url: url.to_string(),
            source,
        })?;
        Ok(bytes.to_vec())
    }
}

/// Derives a file name for the staged artifact from the URL's last path
/// segment, falling back to a fixed name when the URL has none.
pub fn artifact_file_name(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| "update.bin".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_builds_from_config() {
        assert!(HttpFetcher::new(&FetchConfig::default()).is_ok());
        assert!(HttpFetcher::new(&FetchConfig {
            timeout_secs: None,
            user_agent: Some("upcheck-test".to_string()),
        })
        .is_ok());
    }

    #[test]
    fn test_artifact_file_name_from_url() {
        assert_eq!(artifact_file_name("https://example.com/releases/app-2.apk"), "app-2.apk");
        assert_eq!(artifact_file_name("https://example.com/"), "update.bin");
        assert_eq!(artifact_file_name("not a url"), "update.bin");
    }
}
