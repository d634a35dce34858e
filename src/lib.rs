//! # kraken-attack
//!
//! Game-state engine for Kraken Attack, a cooperative board game where a crew
//! of pirates defends a ship against a Kraken reaching for it down eight lanes.
//!
//! ## Design Principles
//!
//! 1. **The board guards itself**: every mutation goes through a `GameBoard`
//!    operation that validates first. A rejected operation changes nothing.
//!
//! 2. **Deterministic**: all randomness comes from a seeded per-board RNG, so a
//!    seed plus a command sequence reproduces a game exactly.
//!
//! 3. **Typed positions**: lanes, quadrants and the Kraken's position are types,
//!    not raw integers, so an out-of-range index cannot reach the board.
//!
//! ## Modules
//!
//! - `core`: Pirates, lanes, quadrants, dice, RNG, setup and errors
//! - `rules`: Rule tables, roll resolution and end-of-game conditions
//! - `board`: `GameBoard` and its `BoardView` snapshot
//! - `render`: Plain-text drawing of a board
//! - `driver`: Text commands and the Kraken phase

pub mod board;
pub mod core;
pub mod driver;
pub mod render;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    DiceRoll, DieColor, DieRoll, GameError, GameRng, GameRngState, GameSetup, IllegalMove, Lane,
    LaneMap, Pirate, Quadrant,
};

pub use crate::rules::{AttackKind, AttackOutcome, GameOutcome};

pub use crate::board::{BoardView, GameBoard, KrakenImpact, KrakenPosition};

pub use crate::driver::{Command, KrakenPhase, Report};
