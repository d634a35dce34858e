//! Error types for board operations.
//!
//! Every failed operation leaves the board untouched.

use thiserror::Error;

use super::lane::{Lane, Quadrant};
use super::pirate::Pirate;

/// Any error a board operation can return.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The initial configuration cannot start a game.
    #[error("invalid setup: {0}")]
    InvalidSetup(#[from] SetupError),

    /// A rule-violating action. Recoverable: ask the player for another one.
    #[error(transparent)]
    IllegalMove(#[from] IllegalMove),

    /// A malformed roll was handed to move resolution.
    #[error("invalid roll: {0}")]
    InvalidRoll(#[from] RollError),
}

/// Structurally invalid starting positions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("there needs to be at least 1 pirate")]
    NoPirates,

    #[error("the pirate {pirate} is in an illegal quadrant {quadrant}")]
    QuadrantOutOfRange { pirate: Pirate, quadrant: u8 },
}

/// Actions the rules forbid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("{0} is not on the board")]
    PirateNotOnBoard(Pirate),

    #[error("can only go to quadrants {} from quadrant {from}", list(.reachable))]
    UnreachableQuadrant {
        from: Quadrant,
        to: Quadrant,
        reachable: [Quadrant; 2],
    },

    #[error("{pirate} cannot attack lane {lane} from quadrant {quadrant}")]
    AttackOutOfReach {
        pirate: Pirate,
        lane: Lane,
        quadrant: Quadrant,
    },

    #[error("{pirate} cannot repair lane {lane} from quadrant {quadrant}")]
    RepairOutOfReach {
        pirate: Pirate,
        lane: Lane,
        quadrant: Quadrant,
    },

    #[error("must specify to which lane the Kraken will go")]
    KrakenLaneRequired,
}

/// Rolls that could not have come from the Kraken dice.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("a roll needs at least one red and one blue die")]
    MissingColor,

    #[error("die {index} shows {value}, faces run 0 to 5")]
    FaceOutOfRange { index: usize, value: u8 },
}

fn list(quadrants: &[Quadrant]) -> String {
    let items: Vec<String> = quadrants.iter().map(ToString::to_string).collect();
    format!("({})", items.join(", "))
}
