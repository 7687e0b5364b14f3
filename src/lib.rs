//! # Upcheck - Remote Version Check and Update Orchestration
//!
//! A small core for keeping an installed application up to date: it
//! compares the local version code against a number published at a remote
//! URL, and stages the download and install of the update artifact.
//!
//! ## Features
//!
//! - **Connectivity Gating**: Network operations are skipped, not
//!   attempted, when no network path is usable
//! - **Background Checks**: Version checks and downloads run off the
//!   calling thread so a slow connection never stalls the host
//! - **Observer Notifications**: Subscribers are informed exactly once per
//!   completed check, on every outcome path
//! - **Fail-Closed Parsing**: Malformed remote data can never announce an
//!   update
//! - **Download/Install Sequencing**: `install()` always refers to the
//!   most recent staged download and errors cleanly without one
//!
//! ## Usage
//!
//! ```rust,no_run
//! use upcheck::libs::checker::UpdateChecker;
//! use upcheck::libs::config::Config;
//! use upcheck::libs::context::HostContext;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let context = HostContext::from_config(&config, 5)?;
//! let checker = UpdateChecker::new(Some(context), true);
//!
//! checker.subscribe(|available| {
//!     if available {
//!         println!("A newer version is available");
//!     }
//! });
//! checker.check_for_update("https://example.com/version.txt")?.await?;
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod libs;
