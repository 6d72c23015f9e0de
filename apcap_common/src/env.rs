//! Environment lookup for profile construction.
//!
//! [`EnvSource`] is the single seam through which profiles read the
//! environment. [`ProcessEnv`] reads the real process environment; a
//! `HashMap<String, String>` can stand in for it in tests and embedders.

use std::collections::HashMap;

use crate::consts::{DEFAULT_PLATFORM_VERSION, PLATFORM_VERSION_ENV};

/// Read-only source of environment variables.
pub trait EnvSource {
    /// Return the value of `key`, or `None` when it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-unicode values are treated as unset.
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Resolve `platformVersion`: the override when set and non-empty, else
/// [`DEFAULT_PLATFORM_VERSION`].
pub fn resolve_platform_version(env: &impl EnvSource) -> String {
    match env.var(PLATFORM_VERSION_ENV) {
        Some(v) if !v.is_empty() => v,
        _ => DEFAULT_PLATFORM_VERSION.to_string(),
    }
}
