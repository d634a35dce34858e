//! Rule tables and end-of-game conditions.
//!
//! The board consults these to decide what is legal and what a roll means:
//! - Which quadrants a pirate can step to
//! - How many dice the Kraken rolls
//! - Which weapon reaches which arm position
//! - When the game is over

mod moves;
mod outcome;

pub use moves::{dice_counts, kraken_moves, legal_pirate_moves, AttackKind, AttackOutcome};
pub use outcome::{GameOutcome, KRAKEN_DAMAGE_TO_RETREAT, SHIP_HOLES_TO_SINK};
