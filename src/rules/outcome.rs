//! How a game ends.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Holes in the hull that sink the ship.
pub const SHIP_HOLES_TO_SINK: usize = 4;

/// Wounds that drive the Kraken away.
pub const KRAKEN_DAMAGE_TO_RETREAT: u8 = 3;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameOutcome {
    /// The hull took its fourth hole. The Kraken wins.
    ShipSunk,
    /// The Kraken took its third wound. The pirates win.
    KrakenRetreats,
}

impl GameOutcome {
    /// Decide the outcome from the two damage tracks.
    ///
    /// Returns `None` while the game continues. A sunk ship takes precedence
    /// over a retreating Kraken.
    #[must_use]
    pub fn from_damage(ship_holes: usize, kraken_damage: u8) -> Option<Self> {
        if ship_holes >= SHIP_HOLES_TO_SINK {
            Some(GameOutcome::ShipSunk)
        } else if kraken_damage >= KRAKEN_DAMAGE_TO_RETREAT {
            Some(GameOutcome::KrakenRetreats)
        } else {
            None
        }
    }

    /// Check if the pirates won.
    #[must_use]
    pub fn pirates_win(self) -> bool {
        matches!(self, GameOutcome::KrakenRetreats)
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::ShipSunk => f.write_str("Kraken drowns ship"),
            GameOutcome::KrakenRetreats => f.write_str("Kraken retreats"),
        }
    }
}
