//! Version code comparison and local version resolution.
//!
//! Version identifiers are plain integers that increase with every release.
//! The local code is trusted ground truth; the remote text is untrusted
//! network input and is parsed fail-closed: anything that is not a base-10
//! integer means "no update", never an error.

use crate::libs::messages::Message;
use crate::msg_debug;

/// Sentinel for "local version could not be determined".
pub const UNKNOWN_VERSION: i64 = -1;

/// Resolves the installed application's version code.
///
/// Returns [`UNKNOWN_VERSION`] when the code cannot be resolved; this
/// method never fails.
pub trait LocalVersionSource: Send + Sync {
    fn local_version(&self) -> i64;
}

/// A version source with a known, fixed code. Suits hosts that resolve
/// their own version at startup and CLI invocations that pass it in.
pub struct FixedVersion(pub i64);

impl LocalVersionSource for FixedVersion {
    fn local_version(&self) -> i64 {
        self.0
    }
}

/// Decides update availability from the fetched remote text.
///
/// The remote text must parse as a base-10 integer; a newer version exists
/// only when it is strictly greater than `local_version`. Parse failures
/// are recorded as a diagnostic and resolve to `false` so bad remote data
/// can never announce an update.
pub fn is_update_available(remote_text: &str, local_version: i64) -> bool {
    match remote_text.trim().parse::<i64>() {
        Ok(remote_code) => remote_code > local_version,
        Err(_) => {
            tracing::warn!(remote = remote_text, "remote version text is not a number");
            msg_debug!(Message::MalformedRemoteVersion(remote_text.to_string()));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_remote_is_available() {
        assert!(is_update_available("7", 5));
        assert!(is_update_available("6", 5));
        assert!(is_update_available("100", 0));
    }

    #[test]
    fn test_equal_or_older_remote_is_not_available() {
        assert!(!is_update_available("5", 5));
        assert!(!is_update_available("4", 5));
        assert!(!is_update_available("0", 0));
    }

    #[test]
    fn test_malformed_remote_is_never_available() {
        assert!(!is_update_available("abc", 5));
        assert!(!is_update_available("", 5));
        assert!(!is_update_available("1.2.3", 5));
        assert!(!is_update_available("Problem reading the file", -1));
    }

    #[test]
    fn test_unknown_local_version_is_compared_arithmetically() {
        // Refusing to check with an unknown local code is the caller's
        // job; the comparator itself stays plain arithmetic.
        assert!(is_update_available("0", UNKNOWN_VERSION));
        assert!(!is_update_available("-2", UNKNOWN_VERSION));
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        assert!(is_update_available(" 7\n", 5));
    }
}
