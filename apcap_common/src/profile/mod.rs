//! Capability profiles — the option sets handed to the automation driver.
//!
//! - [`id`] - Closed set of supported profile names
//! - [`capability`] - `CapabilityProfile` and its wire mapping
//! - [`catalog`] - Built-in profile literals
//! - [`registry`] - Process-wide, read-only lookup

pub mod capability;
pub mod catalog;
pub mod id;
pub mod registry;

use thiserror::Error;

pub use capability::CapabilityProfile;
pub use id::ProfileId;
pub use registry::{ProfileRegistry, get_profile};

/// Error type for profile lookup and construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Requested profile name is not in the supported set.
    #[error("unknown profile '{name}'")]
    UnknownProfile { name: String },

    /// A field the driver requires is empty. Carries the wire key.
    #[error("profile field '{0}' must not be empty")]
    MissingField(&'static str),
}
