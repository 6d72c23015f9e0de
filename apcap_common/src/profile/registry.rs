//! Profile registry — name-based access to the built-in profiles.
//!
//! Built once from an [`EnvSource`] and an anchor directory. Immutable after
//! construction; callers only ever receive shared references.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::debug;

use super::ProfileError;
use super::capability::CapabilityProfile;
use super::catalog::build_profile;
use super::id::ProfileId;
use crate::consts::DEFAULT_MODULE_DIR;
use crate::env::{EnvSource, ProcessEnv};

/// Read-only map from [`ProfileId`] to its fully resolved profile.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: HashMap<ProfileId, CapabilityProfile>,
    module_dir: PathBuf,
}

impl ProfileRegistry {
    /// Construct and validate every profile in [`ProfileId::ALL`].
    ///
    /// The environment is consulted here and never again; later changes to
    /// it do not reach an existing registry.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::MissingField` if a profile lacks a required
    /// field.
    pub fn build(
        env: &impl EnvSource,
        module_dir: impl Into<PathBuf>,
    ) -> Result<Self, ProfileError> {
        let module_dir = module_dir.into();
        let mut profiles = HashMap::with_capacity(ProfileId::ALL.len());

        for id in ProfileId::ALL {
            let profile = build_profile(id, env, &module_dir);
            profile.validate()?;
            debug!(
                profile = %id,
                platform_version = profile.platform_version(),
                app = %profile.app_path().display(),
                "profile resolved"
            );
            profiles.insert(id, profile);
        }

        Ok(Self {
            profiles,
            module_dir,
        })
    }

    /// Process-wide registry, built on first access from the process
    /// environment and [`DEFAULT_MODULE_DIR`].
    ///
    /// Every call returns the same instance (or the same error).
    pub fn global() -> Result<&'static ProfileRegistry, ProfileError> {
        static REGISTRY: OnceLock<Result<ProfileRegistry, ProfileError>> = OnceLock::new();
        REGISTRY
            .get_or_init(|| ProfileRegistry::build(&ProcessEnv, DEFAULT_MODULE_DIR))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Profile for a known identifier.
    pub fn get(&self, id: ProfileId) -> &CapabilityProfile {
        // `build` inserts every id in `ProfileId::ALL`.
        &self.profiles[&id]
    }

    /// Look up a profile by its canonical name.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::UnknownProfile` if `name` is not a supported
    /// profile.
    pub fn get_profile(&self, name: &str) -> Result<&CapabilityProfile, ProfileError> {
        let id: ProfileId = name.parse()?;
        Ok(self.get(id))
    }

    /// All profiles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ProfileId, &CapabilityProfile)> + '_ {
        ProfileId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    /// Directory app binaries were resolved against.
    pub fn module_dir(&self) -> &Path {
        &self.module_dir
    }
}

/// Look up `name` in the process-wide registry.
///
/// # Errors
///
/// Returns `ProfileError::UnknownProfile` for names outside the supported
/// set.
pub fn get_profile(name: &str) -> Result<&'static CapabilityProfile, ProfileError> {
    ProfileRegistry::global()?.get_profile(name)
}
