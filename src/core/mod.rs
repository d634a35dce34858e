//! Core types: pirates, lanes, dice, RNG, setup and errors.
//!
//! These are the vocabulary the board and its consumers share. Nothing in
//! here knows the rules of the game.

pub mod config;
pub mod dice;
pub mod error;
pub mod lane;
pub mod pirate;
pub mod rng;

pub use config::{GameSetup, DEFAULT_SEED};
pub use dice::{DiceCounts, DiceRoll, DieColor, DieRoll, Facet, BLANK_FACE, DIE_FACES, EYE_FACE};
pub use error::{GameError, IllegalMove, RollError, SetupError};
pub use lane::{Lane, LaneMap, Quadrant, LANE_COUNT, QUADRANT_COUNT};
pub use pirate::{Pirate, UnknownPirate};
pub use rng::{GameRng, GameRngState};
