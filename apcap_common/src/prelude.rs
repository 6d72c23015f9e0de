//! Prelude module for common re-exports.
//!
//! ```rust
//! use apcap_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{AppConfig, ConfigError, ConfigLoader, LogLevel, SharedConfig};

// ─── Environment ────────────────────────────────────────────────────
pub use crate::env::{EnvSource, ProcessEnv, resolve_platform_version};

// ─── Profiles ───────────────────────────────────────────────────────
pub use crate::profile::{
    CapabilityProfile, ProfileError, ProfileId, ProfileRegistry, get_profile,
};
