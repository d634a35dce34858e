//! Applying commands to a board.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Command;
use crate::board::{GameBoard, KrakenImpact};
use crate::core::{DiceRoll, GameError, Lane, Pirate, Quadrant};
use crate::rules::{AttackKind, AttackOutcome, GameOutcome};

/// Everything that happened in one Kraken phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KrakenPhase {
    pub roll: DiceRoll,
    /// Lanes the roll advanced, in die order.
    pub lanes: Vec<Lane>,
    pub impacts: Vec<KrakenImpact>,
    /// Outcome after the phase, if the game is decided.
    pub outcome: Option<GameOutcome>,
}

/// Roll the Kraken's dice and apply them to the board.
///
/// # Errors
///
/// Propagates a malformed roll, which the board's own dice never produce.
pub fn run_kraken_phase(board: &mut GameBoard) -> Result<KrakenPhase, GameError> {
    let roll = board.roll_dice();
    let lanes = GameBoard::determine_kraken_moves(&roll)?;
    let impacts = board.determine_board_after_kraken_move(&lanes);
    let outcome = board.game_outcome();
    debug!(
        dice = roll.len(),
        lanes = lanes.len(),
        impacts = impacts.len(),
        ?outcome,
        "kraken phase"
    );
    Ok(KrakenPhase {
        roll,
        lanes,
        impacts,
        outcome,
    })
}

impl fmt::Display for KrakenPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dice: Vec<String> = self.roll.iter().map(ToString::to_string).collect();
        write!(f, "The Kraken rolls {}", dice.join(", "))?;
        if self.impacts.is_empty() {
            write!(f, "\n  nothing happens")?;
        }
        for impact in &self.impacts {
            write!(f, "\n  {impact}")?;
        }
        Ok(())
    }
}

/// What a command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    Moved {
        pirate: Pirate,
        to: Quadrant,
    },
    Attacked {
        pirate: Pirate,
        kind: AttackKind,
        lane: Lane,
        outcome: AttackOutcome,
    },
    Repaired {
        pirate: Pirate,
        lane: Lane,
    },
    KrakenAnnoyed {
        location: u8,
        lane: Option<Lane>,
    },
    KrakenPhase(KrakenPhase),
    Show,
    Help,
    Quit,
}

impl Report {
    /// Whether the board may look different afterwards.
    #[must_use]
    pub fn changes_board(&self) -> bool {
        !matches!(self, Report::Show | Report::Help | Report::Quit)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Moved { pirate, to } => write!(f, "{pirate} moves to quadrant {to}"),
            Report::Attacked {
                pirate,
                kind,
                lane,
                outcome,
            } => match outcome {
                AttackOutcome::Miss => write!(f, "{pirate}'s {kind} misses the arm in lane {lane}"),
                AttackOutcome::Hit { kraken_wounded } => {
                    write!(f, "{pirate}'s {kind} drives back the arm in lane {lane}")?;
                    if *kraken_wounded {
                        write!(f, ", the Kraken is wounded")?;
                    }
                    Ok(())
                }
            },
            Report::Repaired { pirate, lane } => {
                write!(f, "{pirate} repairs the shield in lane {lane}")
            }
            Report::KrakenAnnoyed { lane: Some(lane), .. } => {
                write!(f, "The Kraken is on board in lane {lane}")
            }
            Report::KrakenAnnoyed { location, lane: None } => {
                write!(f, "The Kraken approaches to {location}")
            }
            Report::KrakenPhase(phase) => write!(f, "{phase}"),
            Report::Show | Report::Help | Report::Quit => Ok(()),
        }
    }
}

/// Apply one command to the board.
///
/// # Errors
///
/// Whatever the board rejects; the board is unchanged in that case.
pub fn execute(board: &mut GameBoard, command: Command) -> Result<Report, GameError> {
    let report = match command {
        Command::Move { pirate, to } => {
            board.move_pirate(pirate, to)?;
            Report::Moved { pirate, to }
        }
        Command::Attack { pirate, kind, lane } => {
            let outcome = board.perform_pirate_attack(pirate, kind, lane)?;
            Report::Attacked {
                pirate,
                kind,
                lane,
                outcome,
            }
        }
        Command::Repair { pirate, lane } => {
            board.perform_repair(pirate, lane)?;
            Report::Repaired { pirate, lane }
        }
        Command::Annoy { lane } => {
            board.annoy_kraken(lane)?;
            Report::KrakenAnnoyed {
                location: board.kraken_location(),
                lane: board.kraken_lane(),
            }
        }
        Command::Kraken => Report::KrakenPhase(run_kraken_phase(board)?),
        Command::Show => Report::Show,
        Command::Help => Report::Help,
        Command::Quit => Report::Quit,
    };
    Ok(report)
}
