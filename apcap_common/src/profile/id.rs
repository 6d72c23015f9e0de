//! Closed set of supported profiles.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use super::ProfileError;

/// Identifier of a built-in capability profile, one per application under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProfileId {
    /// Egg, Inc. on a physical device.
    #[serde(rename = "eggInc")]
    EggInc,
    /// AdVenture Capitalist on the default emulator.
    #[serde(rename = "adventureCapitalist")]
    AdventureCapitalist,
}

impl ProfileId {
    /// Every supported profile, in declaration order.
    pub const ALL: [ProfileId; 2] = [Self::EggInc, Self::AdventureCapitalist];

    /// Canonical lookup name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::EggInc => "eggInc",
            Self::AdventureCapitalist => "adventureCapitalist",
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProfileId {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| ProfileError::UnknownProfile {
                name: s.to_string(),
            })
    }
}
