//! Built-in profile definitions.
//!
//! Literals for each supported application. Paths are joined onto the
//! anchor directory and never checked against the filesystem.

use std::path::Path;

use super::capability::{CapabilityProfile, LifecycleFlags, ProfileParts};
use super::id::ProfileId;
use crate::consts::{AUTOMATION_NAME, NEW_COMMAND_TIMEOUT_SECS, PLATFORM_NAME, SESSION_NAME};
use crate::env::{EnvSource, resolve_platform_version};

/// Lifecycle flags used by every built-in profile: keep app data and the
/// running app across sessions, launch on start, skip logcat capture.
const KEEP_STATE: LifecycleFlags = LifecycleFlags {
    no_reset: true,
    full_reset: false,
    dont_stop_app_on_reset: true,
    auto_launch: true,
    skip_logcat_capture: true,
};

/// Build the profile for `id`, anchored at `module_dir`.
///
/// Reads `ANDROID_PLATFORM_VERSION` from `env` exactly once.
pub fn build_profile(
    id: ProfileId,
    env: &impl EnvSource,
    module_dir: &Path,
) -> CapabilityProfile {
    let platform_version = resolve_platform_version(env);

    let (app_package, app_path, device_id, app_activity) = match id {
        ProfileId::EggInc => (
            "com.auxbrain.egginc",
            module_dir.join("eggInc.apk"),
            // Physical handset.
            "RFCT70B6C8P",
            "com.auxbrain.egginc.EggIncActivity",
        ),
        ProfileId::AdventureCapitalist => (
            "com.kongregate.mobile.adventurecapitalist.google",
            module_dir.join("..").join("apks").join("advCapitalist.apk"),
            "emulator-5554",
            // From `adb shell pm dump <package> | grep -A 1 MAIN`.
            "com.kongregate.mobile.adventurecapitalist.google/com.clevertap.unity.CleverTapOverrideActivity",
        ),
    };

    CapabilityProfile::from_parts(ProfileParts {
        automation_name: AUTOMATION_NAME.to_string(),
        platform_name: PLATFORM_NAME.to_string(),
        platform_version,
        session_name: SESSION_NAME.to_string(),
        app_package: app_package.to_string(),
        app_path,
        device_id: device_id.to_string(),
        app_activity: app_activity.to_string(),
        new_command_timeout_secs: NEW_COMMAND_TIMEOUT_SECS,
        flags: KEEP_STATE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn test_egg_inc_literals() {
        let p = build_profile(ProfileId::EggInc, &no_env(), Path::new("/cfg"));
        assert_eq!(p.app_package(), "com.auxbrain.egginc");
        assert_eq!(p.app_activity(), "com.auxbrain.egginc.EggIncActivity");
        assert_eq!(p.device_id(), "RFCT70B6C8P");
        assert_eq!(p.app_path(), Path::new("/cfg/eggInc.apk"));
    }

    #[test]
    fn test_adventure_capitalist_path_goes_up_one_level() {
        let p = build_profile(
            ProfileId::AdventureCapitalist,
            &no_env(),
            Path::new("/cfg"),
        );
        assert_eq!(p.app_path(), Path::new("/cfg/../apks/advCapitalist.apk"));
        assert_eq!(p.device_id(), "emulator-5554");
    }

    #[test]
    fn test_shared_defaults() {
        for id in ProfileId::ALL {
            let p = build_profile(id, &no_env(), Path::new("/cfg"));
            assert_eq!(p.automation_name(), "UiAutomator2");
            assert_eq!(p.platform_name(), "Android");
            assert_eq!(p.platform_version(), "16.0");
            assert_eq!(p.session_name(), "test-session");
            assert_eq!(p.new_command_timeout_secs(), 600);
            assert!(p.no_reset());
            assert!(!p.full_reset());
            assert!(p.dont_stop_app_on_reset());
            assert!(p.auto_launch());
            assert!(p.skip_logcat_capture());
            assert!(p.validate().is_ok());
        }
    }
}
