//! Observable board state.
//!
//! `BoardView` is an owned snapshot of everything a player can see on the
//! table. Renderers and other read-only consumers work from it so they never
//! need a handle on the live board.

use serde::{Deserialize, Serialize};

use crate::core::{DiceCounts, GameRngState, Lane, LaneMap, Pirate, Quadrant};
use crate::rules::GameOutcome;

/// Snapshot of a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Pirates and their quadrants, in roster order.
    pub pirates: Vec<(Pirate, Quadrant)>,

    /// Shield per lane, `true` while intact.
    pub shield_status: LaneMap<bool>,

    /// Arm position per lane, 0 (retracted) to 3 (touching the hull).
    pub arm_locations: LaneMap<u8>,

    /// Kraken approach track, 0-8 approaching, 9 on board.
    pub kraken_location: u8,

    /// Lane the Kraken occupies once on board.
    pub kraken_lane: Option<Lane>,

    /// Wounds dealt to the Kraken.
    pub kraken_damage: u8,

    /// One entry per hull breach, in the order they happened.
    pub ship_hole_positions: Vec<Quadrant>,

    /// Dice the Kraken rolls next.
    pub dice_counts: DiceCounts,

    /// Set once the game is decided.
    pub outcome: Option<GameOutcome>,

    /// Position of the dice stream.
    pub rng: GameRngState,
}

impl BoardView {
    /// Number of holes in the hull.
    #[must_use]
    pub fn ship_damage(&self) -> usize {
        self.ship_hole_positions.len()
    }

    /// Check if the Kraken has reached the ship.
    #[must_use]
    pub fn is_kraken_on_board(&self) -> bool {
        self.kraken_lane.is_some()
    }

    /// Pirates standing in a quadrant.
    pub fn pirates_in(&self, quadrant: Quadrant) -> impl Iterator<Item = Pirate> + '_ {
        self.pirates
            .iter()
            .filter(move |(_, q)| *q == quadrant)
            .map(|(p, _)| *p)
    }
}
