//! The pirate crew.
//!
//! Pirates carry no data of their own; a pirate is its name. Where a pirate
//! stands is board state, not pirate state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four crew members.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pirate {
    Samuel,
    Astrid,
    Billy,
    Elena,
}

impl Pirate {
    /// Every pirate, in roster order.
    pub const ALL: [Pirate; 4] = [Pirate::Samuel, Pirate::Astrid, Pirate::Billy, Pirate::Elena];

    /// The pirate's name as printed on the board.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Pirate::Samuel => "Samuel",
            Pirate::Astrid => "Astrid",
            Pirate::Billy => "Billy",
            Pirate::Elena => "Elena",
        }
    }
}

impl fmt::Display for Pirate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name does not match any pirate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no pirate named '{0}'")]
pub struct UnknownPirate(pub String);

impl FromStr for Pirate {
    type Err = UnknownPirate;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pirate::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPirate(s.to_string()))
    }
}
