//! apcap Common Library
//!
//! Capability profiles for mobile automation sessions: the option sets an
//! Appium/UiAutomator2 driver needs to start a session against each
//! supported Android application, plus configuration loading for the
//! `apcap` binary.
//!
//! # Module Structure
//!
//! - [`profile`] - Profile types, the closed profile set and the registry
//! - [`env`] - Environment lookup used during profile construction
//! - [`config`] - Configuration loading traits and types
//! - [`consts`] - Shared literals and defaults
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use apcap_common::prelude::*;
//!
//! let profile = get_profile("eggInc").unwrap();
//! assert_eq!(profile.app_package(), "com.auxbrain.egginc");
//! ```

pub mod config;
pub mod consts;
pub mod env;
pub mod prelude;
pub mod profile;
