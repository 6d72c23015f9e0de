//! Registry integration tests.
//!
//! Covers name lookup, `ANDROID_PLATFORM_VERSION` resolution, app path
//! anchoring and the capability mapping handed to the driver.

use apcap_common::consts::{DEFAULT_MODULE_DIR, PLATFORM_VERSION_ENV};
use apcap_common::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Environment with `ANDROID_PLATFORM_VERSION` set to `version`.
fn env_with_version(version: &str) -> HashMap<String, String> {
    HashMap::from([(PLATFORM_VERSION_ENV.to_string(), version.to_string())])
}

fn empty_env() -> HashMap<String, String> {
    HashMap::new()
}

// ─── Tests ──────────────────────────────────────────────────────────

/// Test: every profile carries every field, required ones non-empty.
#[test]
fn all_profiles_fully_populated() {
    let reg = ProfileRegistry::build(&empty_env(), "/srv/automation/config").unwrap();

    for (id, profile) in reg.iter() {
        assert!(!profile.app_package().is_empty(), "{id}: appPackage");
        assert!(!profile.app_activity().is_empty(), "{id}: appActivity");
        assert!(!profile.app_path().as_os_str().is_empty(), "{id}: app");

        let caps = profile.to_capabilities();
        for key in [
            "automationName",
            "platformName",
            "platformVersion",
            "name",
            "appPackage",
            "app",
            "udid",
            "appActivity",
            "newCommandTimeout",
            "noReset",
            "fullReset",
            "dontStopAppOnReset",
            "autoLaunch",
            "skipLogcatCapture",
        ] {
            assert!(caps.contains_key(key), "{id}: missing {key}");
        }
    }
}

/// Test: repeated lookups return identical records.
#[test]
fn lookup_is_idempotent() {
    let first = get_profile("adventureCapitalist").unwrap().clone();
    let second = get_profile("adventureCapitalist").unwrap();
    assert_eq!(&first, second);
}

/// Test: an override applies to every profile.
#[test]
fn platform_version_override_applies_to_all() {
    let reg = ProfileRegistry::build(&env_with_version("14.0"), DEFAULT_MODULE_DIR).unwrap();
    for (_, profile) in reg.iter() {
        assert_eq!(profile.platform_version(), "14.0");
    }
}

/// Test: unset or empty override falls back to 16.0.
#[test]
fn platform_version_defaults() {
    for env in [empty_env(), env_with_version("")] {
        let reg = ProfileRegistry::build(&env, DEFAULT_MODULE_DIR).unwrap();
        for (_, profile) in reg.iter() {
            assert_eq!(profile.platform_version(), "16.0");
        }
    }
}

/// Test: egg inc binary sits directly in the anchor directory.
#[test]
fn egg_inc_path_anchored_at_module_dir() {
    let reg = ProfileRegistry::build(&empty_env(), DEFAULT_MODULE_DIR).unwrap();
    let path = reg.get(ProfileId::EggInc).app_path();

    assert!(path.is_absolute());
    assert!(path.ends_with("eggInc.apk"));
    assert_eq!(path.parent(), Some(Path::new(DEFAULT_MODULE_DIR)));
}

/// Test: adventure capitalist binary sits in `apks/` one level up.
#[test]
fn adventure_capitalist_path_anchored_above_module_dir() {
    let reg = ProfileRegistry::build(&empty_env(), DEFAULT_MODULE_DIR).unwrap();
    let path = reg.get(ProfileId::AdventureCapitalist).app_path();

    assert!(path.is_absolute());
    assert!(path.ends_with("apks/advCapitalist.apk"));
    assert!(path.starts_with(Path::new(DEFAULT_MODULE_DIR).join("..")));
}

/// Scenario: environment unset → eggInc uses 16.0.
#[test]
fn scenario_default_version() {
    let reg = ProfileRegistry::build(&empty_env(), DEFAULT_MODULE_DIR).unwrap();
    assert_eq!(reg.get_profile("eggInc").unwrap().platform_version(), "16.0");
}

/// Scenario: environment set to 15.0 → eggInc uses 15.0.
#[test]
fn scenario_overridden_version() {
    let reg = ProfileRegistry::build(&env_with_version("15.0"), DEFAULT_MODULE_DIR).unwrap();
    assert_eq!(reg.get_profile("eggInc").unwrap().platform_version(), "15.0");
}

/// Scenario: adventure capitalist package name.
#[test]
fn scenario_adventure_capitalist_package() {
    let profile = get_profile("adventureCapitalist").unwrap();
    assert_eq!(
        profile.app_package(),
        "com.kongregate.mobile.adventurecapitalist.google"
    );
}

/// Scenario: undefined name fails with UnknownProfile.
#[test]
fn scenario_unknown_profile() {
    let result = get_profile("flappyBird");
    assert!(matches!(
        result,
        Err(ProfileError::UnknownProfile { ref name }) if name == "flappyBird"
    ));
}

/// Test: a profile read back from its wire form is rejected when a
/// required field is blank.
#[test]
fn blank_activity_rejected_on_deserialize() {
    let reg = ProfileRegistry::build(&empty_env(), DEFAULT_MODULE_DIR).unwrap();
    let mut caps = reg.get(ProfileId::EggInc).to_capabilities();
    caps.insert("appActivity".into(), "".into());

    let result = serde_json::from_value::<CapabilityProfile>(serde_json::Value::Object(caps));
    let err = result.expect_err("blank appActivity should not deserialize");
    assert!(err.to_string().contains("appActivity"), "unexpected error: {err}");
}

/// Test: an object with every required field blank does not deserialize.
#[test]
fn blank_profile_rejected_on_deserialize() {
    let value = serde_json::json!({
        "automationName": "",
        "platformName": "",
        "platformVersion": "",
        "name": "",
        "appPackage": "",
        "app": "",
        "udid": "",
        "appActivity": "",
        "newCommandTimeout": 0,
        "noReset": false,
        "fullReset": false,
        "dontStopAppOnReset": false,
        "autoLaunch": false,
        "skipLogcatCapture": false
    });
    assert!(serde_json::from_value::<CapabilityProfile>(value).is_err());
}

/// Test: the global registry can be read from several threads at once.
#[test]
fn registry_shared_across_threads() {
    let reg = ProfileRegistry::global().unwrap();
    let handles: Vec<_> = ProfileId::ALL
        .into_iter()
        .map(|id| std::thread::spawn(move || reg.get(id).app_package().to_string()))
        .collect();

    let packages: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(packages[0], "com.auxbrain.egginc");
    assert_eq!(
        packages[1],
        "com.kongregate.mobile.adventurecapitalist.google"
    );
}
