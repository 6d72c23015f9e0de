//! `CapabilityProfile` — the launch and connection options for one
//! application under test.
//!
//! Field names are Rust-side; the serialized keys are the driver's own
//! capability names and must not change.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::ProfileError;
use crate::consts::W3C_VENDOR_PREFIX;

/// Capabilities defined by W3C WebDriver itself. These never take a vendor
/// prefix.
const W3C_STANDARD_KEYS: &[&str] = &[
    "acceptInsecureCerts",
    "browserName",
    "browserVersion",
    "pageLoadStrategy",
    "platformName",
    "proxy",
    "setWindowRect",
    "strictFileInteractability",
    "timeouts",
    "unhandledPromptBehavior",
    "webSocketUrl",
];

/// Complete capability set for one automation session.
///
/// Immutable once built: fields are private and only readable. Deserializing
/// runs [`validate`](Self::validate), so every instance has a package,
/// activity and app path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProfile")]
pub struct CapabilityProfile {
    #[serde(rename = "automationName")]
    automation_name: String,
    #[serde(rename = "platformName")]
    platform_name: String,
    #[serde(rename = "platformVersion")]
    platform_version: String,
    #[serde(rename = "name")]
    session_name: String,
    #[serde(rename = "appPackage")]
    app_package: String,
    #[serde(rename = "app", serialize_with = "serialize_path_lossy")]
    app_path: PathBuf,
    #[serde(rename = "udid")]
    device_id: String,
    #[serde(rename = "appActivity")]
    app_activity: String,
    #[serde(rename = "newCommandTimeout")]
    new_command_timeout_secs: u32,
    #[serde(rename = "noReset")]
    no_reset: bool,
    #[serde(rename = "fullReset")]
    full_reset: bool,
    #[serde(rename = "dontStopAppOnReset")]
    dont_stop_app_on_reset: bool,
    #[serde(rename = "autoLaunch")]
    auto_launch: bool,
    #[serde(rename = "skipLogcatCapture")]
    skip_logcat_capture: bool,
}

/// Non-UTF-8 paths are written lossily, same as
/// [`CapabilityProfile::to_capabilities`].
fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// Wire shape of a profile before validation.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
    #[serde(rename = "automationName")]
    automation_name: String,
    #[serde(rename = "platformName")]
    platform_name: String,
    #[serde(rename = "platformVersion")]
    platform_version: String,
    #[serde(rename = "name")]
    session_name: String,
    #[serde(rename = "appPackage")]
    app_package: String,
    #[serde(rename = "app")]
    app_path: PathBuf,
    #[serde(rename = "udid")]
    device_id: String,
    #[serde(rename = "appActivity")]
    app_activity: String,
    #[serde(rename = "newCommandTimeout")]
    new_command_timeout_secs: u32,
    #[serde(rename = "noReset")]
    no_reset: bool,
    #[serde(rename = "fullReset")]
    full_reset: bool,
    #[serde(rename = "dontStopAppOnReset")]
    dont_stop_app_on_reset: bool,
    #[serde(rename = "autoLaunch")]
    auto_launch: bool,
    #[serde(rename = "skipLogcatCapture")]
    skip_logcat_capture: bool,
}

impl TryFrom<RawProfile> for CapabilityProfile {
    type Error = ProfileError;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        let profile = Self::from_parts(ProfileParts {
            automation_name: raw.automation_name,
            platform_name: raw.platform_name,
            platform_version: raw.platform_version,
            session_name: raw.session_name,
            app_package: raw.app_package,
            app_path: raw.app_path,
            device_id: raw.device_id,
            app_activity: raw.app_activity,
            new_command_timeout_secs: raw.new_command_timeout_secs,
            flags: LifecycleFlags {
                no_reset: raw.no_reset,
                full_reset: raw.full_reset,
                dont_stop_app_on_reset: raw.dont_stop_app_on_reset,
                auto_launch: raw.auto_launch,
                skip_logcat_capture: raw.skip_logcat_capture,
            },
        });
        profile.validate()?;
        Ok(profile)
    }
}

/// Session lifecycle flags shared by the built-in profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LifecycleFlags {
    pub no_reset: bool,
    pub full_reset: bool,
    pub dont_stop_app_on_reset: bool,
    pub auto_launch: bool,
    pub skip_logcat_capture: bool,
}

/// Identity and target fields, grouped to keep construction readable.
#[derive(Debug, Clone)]
pub(crate) struct ProfileParts {
    pub automation_name: String,
    pub platform_name: String,
    pub platform_version: String,
    pub session_name: String,
    pub app_package: String,
    pub app_path: PathBuf,
    pub device_id: String,
    pub app_activity: String,
    pub new_command_timeout_secs: u32,
    pub flags: LifecycleFlags,
}

impl CapabilityProfile {
    pub(crate) fn from_parts(parts: ProfileParts) -> Self {
        let ProfileParts {
            automation_name,
            platform_name,
            platform_version,
            session_name,
            app_package,
            app_path,
            device_id,
            app_activity,
            new_command_timeout_secs,
            flags,
        } = parts;
        Self {
            automation_name,
            platform_name,
            platform_version,
            session_name,
            app_package,
            app_path,
            device_id,
            app_activity,
            new_command_timeout_secs,
            no_reset: flags.no_reset,
            full_reset: flags.full_reset,
            dont_stop_app_on_reset: flags.dont_stop_app_on_reset,
            auto_launch: flags.auto_launch,
            skip_logcat_capture: flags.skip_logcat_capture,
        }
    }

    /// Check the fields the driver cannot start a session without.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::MissingField` naming the wire key when any of
    /// `appPackage`, `appActivity` or `app` is empty.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.app_package.trim().is_empty() {
            return Err(ProfileError::MissingField("appPackage"));
        }
        if self.app_activity.trim().is_empty() {
            return Err(ProfileError::MissingField("appActivity"));
        }
        if self.app_path.as_os_str().is_empty() {
            return Err(ProfileError::MissingField("app"));
        }
        Ok(())
    }

    /// The option mapping handed to the automation driver, keyed by the
    /// driver's capability names.
    pub fn to_capabilities(&self) -> Map<String, Value> {
        let mut caps = Map::new();
        caps.insert("automationName".into(), self.automation_name.clone().into());
        caps.insert("platformName".into(), self.platform_name.clone().into());
        caps.insert("platformVersion".into(), self.platform_version.clone().into());
        caps.insert("name".into(), self.session_name.clone().into());
        caps.insert("appPackage".into(), self.app_package.clone().into());
        caps.insert(
            "app".into(),
            self.app_path.to_string_lossy().into_owned().into(),
        );
        caps.insert("udid".into(), self.device_id.clone().into());
        caps.insert("appActivity".into(), self.app_activity.clone().into());
        caps.insert(
            "newCommandTimeout".into(),
            self.new_command_timeout_secs.into(),
        );
        caps.insert("noReset".into(), self.no_reset.into());
        caps.insert("fullReset".into(), self.full_reset.into());
        caps.insert("dontStopAppOnReset".into(), self.dont_stop_app_on_reset.into());
        caps.insert("autoLaunch".into(), self.auto_launch.into());
        caps.insert("skipLogcatCapture".into(), self.skip_logcat_capture.into());
        caps
    }

    /// Same mapping as [`to_capabilities`](Self::to_capabilities), with every
    /// non-standard key carrying the `appium:` vendor prefix as W3C session
    /// requests require.
    pub fn to_w3c_capabilities(&self) -> Map<String, Value> {
        self.to_capabilities()
            .into_iter()
            .map(|(key, value)| {
                if W3C_STANDARD_KEYS.contains(&key.as_str()) {
                    (key, value)
                } else {
                    (format!("{W3C_VENDOR_PREFIX}{key}"), value)
                }
            })
            .collect()
    }

    pub fn automation_name(&self) -> &str {
        &self.automation_name
    }

    pub fn platform_name(&self) -> &str {
        &self.platform_name
    }

    pub fn platform_version(&self) -> &str {
        &self.platform_version
    }

    pub fn session_name(&self) -> &str {
        &self.session_name
    }

    pub fn app_package(&self) -> &str {
        &self.app_package
    }

    pub fn app_path(&self) -> &Path {
        &self.app_path
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn app_activity(&self) -> &str {
        &self.app_activity
    }

    pub fn new_command_timeout_secs(&self) -> u32 {
        self.new_command_timeout_secs
    }

    pub fn no_reset(&self) -> bool {
        self.no_reset
    }

    pub fn full_reset(&self) -> bool {
        self.full_reset
    }

    pub fn dont_stop_app_on_reset(&self) -> bool {
        self.dont_stop_app_on_reset
    }

    pub fn auto_launch(&self) -> bool {
        self.auto_launch
    }

    pub fn skip_logcat_capture(&self) -> bool {
        self.skip_logcat_capture
    }
}
