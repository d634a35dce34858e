//! The game board: all mutable game state and the rules that guard it.
//!
//! ## GameBoard
//!
//! Owns pirate positions, shields, Kraken arms, the Kraken itself, hull
//! damage and the dice stream. Each operation either applies completely or
//! fails with a `GameError` and changes nothing.
//!
//! ## BoardView
//!
//! Owned, serializable snapshot for renderers and other read-only consumers.

mod game_board;
mod view;

pub use game_board::{
    GameBoard, KrakenImpact, KrakenPosition, ARM_AT_HULL, INITIAL_ARM_LOCATIONS,
    KRAKEN_LAST_APPROACH, KRAKEN_ON_BOARD,
};
pub use view::BoardView;
