//! Constants shared by the registry and the CLI.
//!
//! Single source of truth for environment keys, default literals and the
//! compile-time anchor directory of the built-in profiles.

/// Environment variable that overrides `platformVersion` for every profile.
pub const PLATFORM_VERSION_ENV: &str = "ANDROID_PLATFORM_VERSION";

/// `platformVersion` used when the override is unset or empty.
pub const DEFAULT_PLATFORM_VERSION: &str = "16.0";

/// Automation backend requested from the driver.
pub const AUTOMATION_NAME: &str = "UiAutomator2";

/// Platform under test.
pub const PLATFORM_NAME: &str = "Android";

/// Human-readable session label. Not unique.
pub const SESSION_NAME: &str = "test-session";

/// Idle timeout before the driver tears the session down, in seconds.
pub const NEW_COMMAND_TIMEOUT_SECS: u32 = 600;

/// Directory the built-in profile definitions are anchored at.
///
/// Absolute, fixed at compile time. App binaries are resolved relative to it.
pub const DEFAULT_MODULE_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// Vendor prefix for non-standard W3C capabilities.
pub const W3C_VENDOR_PREFIX: &str = "appium:";

/// Service name used when no config file is given.
pub const DEFAULT_SERVICE_NAME: &str = "apcap";
