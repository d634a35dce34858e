//! Turn-level driving of a board.
//!
//! The board validates single operations. This module sits one level up:
//! it parses player commands, runs a whole Kraken phase (roll, resolve,
//! apply) and reports what each command did so a front end can show it.

mod command;
mod phase;

pub use command::{Command, ParseCommandError, HELP};
pub use phase::{execute, run_kraken_phase, KrakenPhase, Report};
