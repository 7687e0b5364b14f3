//! Core library modules for the upcheck application.
//!
//! The update pipeline is built from small collaborators wired together by
//! the [`checker::UpdateChecker`] facade:
//!
//! - **Gating**: [`connectivity`] answers whether a network path is usable
//! - **I/O**: [`fetch`] is the only network primitive the core depends on
//! - **Decision**: [`version`] compares local and remote version codes
//! - **Staging**: [`download`] stages the artifact and drives the install
//!   handoff defined in [`install`]
//! - **Infrastructure**: [`config`], [`storage`], [`messages`], [`error`]

pub mod checker;
pub mod config;
pub mod connectivity;
pub mod context;
pub mod download;
pub mod error;
pub mod fetch;
pub mod install;
pub mod messages;
pub mod storage;
pub mod version;
