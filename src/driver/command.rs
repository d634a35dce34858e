//! Text commands.

use std::str::FromStr;

use thiserror::Error;

use crate::core::{Lane, Pirate, Quadrant, UnknownPirate};
use crate::rules::AttackKind;

/// Command summary printed by `help`.
pub const HELP: &str = "\
commands:
  move <pirate> <quadrant>                    step to an adjacent quadrant
  attack <pirate> <sword|pistol|cannon> <lane> swing at an arm in your quadrant
  repair <pirate> <lane>                       raise a broken shield
  annoy [lane]                                 move the Kraken along its track
  kraken                                       the Kraken rolls and strikes
  show                                         print the board
  help                                         print this text
  quit                                         leave the game";

/// One player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move {
        pirate: Pirate,
        to: Quadrant,
    },
    Attack {
        pirate: Pirate,
        kind: AttackKind,
        lane: Lane,
    },
    Repair {
        pirate: Pirate,
        lane: Lane,
    },
    Annoy {
        lane: Option<Lane>,
    },
    /// Roll the Kraken's dice and apply the result.
    Kraken,
    Show,
    Help,
    Quit,
}

/// Why a line is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error(transparent)]
    UnknownPirate(#[from] UnknownPirate),

    #[error("'{0}' is not a weapon, use sword, pistol or cannon")]
    UnknownWeapon(String),

    #[error("'{0}' is not a quadrant (0-3)")]
    BadQuadrant(String),

    #[error("'{0}' is not a lane (0-7)")]
    BadLane(String),

    #[error("unexpected '{0}' at end of command")]
    TrailingInput(String),
}

/// Cursor over the words of one command.
struct Args<'a> {
    command: &'static str,
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn new(command: &'static str, words: std::str::SplitWhitespace<'a>) -> Self {
        Self { command, words }
    }

    fn next(&mut self, argument: &'static str) -> Result<&'a str, ParseCommandError> {
        self.words.next().ok_or(ParseCommandError::MissingArgument {
            command: self.command,
            argument,
        })
    }

    fn pirate(&mut self) -> Result<Pirate, ParseCommandError> {
        Ok(self.next("pirate")?.parse::<Pirate>()?)
    }

    fn quadrant(&mut self) -> Result<Quadrant, ParseCommandError> {
        let word = self.next("quadrant")?;
        parse_quadrant(word)
    }

    fn lane(&mut self) -> Result<Lane, ParseCommandError> {
        let word = self.next("lane")?;
        parse_lane(word)
    }

    fn weapon(&mut self) -> Result<AttackKind, ParseCommandError> {
        self.next("weapon")?
            .parse::<AttackKind>()
            .map_err(ParseCommandError::UnknownWeapon)
    }

    fn finish<T>(mut self, command: T) -> Result<T, ParseCommandError> {
        match self.words.next() {
            Some(extra) => Err(ParseCommandError::TrailingInput(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn parse_quadrant(word: &str) -> Result<Quadrant, ParseCommandError> {
    word.parse::<u8>()
        .ok()
        .and_then(Quadrant::new)
        .ok_or_else(|| ParseCommandError::BadQuadrant(word.to_string()))
}

fn parse_lane(word: &str) -> Result<Lane, ParseCommandError> {
    word.parse::<u8>()
        .ok()
        .and_then(Lane::new)
        .ok_or_else(|| ParseCommandError::BadLane(word.to_string()))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words
            .next()
            .ok_or(ParseCommandError::Empty)?
            .to_ascii_lowercase();

        match verb.as_str() {
            "move" => {
                let mut args = Args::new("move", words);
                let pirate = args.pirate()?;
                let to = args.quadrant()?;
                args.finish(Command::Move { pirate, to })
            }
            "attack" => {
                let mut args = Args::new("attack", words);
                let pirate = args.pirate()?;
                let kind = args.weapon()?;
                let lane = args.lane()?;
                args.finish(Command::Attack { pirate, kind, lane })
            }
            "repair" => {
                let mut args = Args::new("repair", words);
                let pirate = args.pirate()?;
                let lane = args.lane()?;
                args.finish(Command::Repair { pirate, lane })
            }
            "annoy" => {
                let mut args = Args::new("annoy", words);
                let lane = args.words.next().map(parse_lane).transpose()?;
                args.finish(Command::Annoy { lane })
            }
            "kraken" => Args::new("kraken", words).finish(Command::Kraken),
            "show" => Args::new("show", words).finish(Command::Show),
            "help" | "?" => Args::new("help", words).finish(Command::Help),
            "quit" | "exit" => Args::new("quit", words).finish(Command::Quit),
            _ => Err(ParseCommandError::UnknownCommand(verb)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lane(i: u8) -> Lane {
        Lane::new(i).unwrap()
    }

    #[test]
    fn test_parse_move() {
        let cmd: Command = "move Elena 2".parse().unwrap();
        assert_eq!(
            cmd,
            Command::Move {
                pirate: Pirate::Elena,
                to: Quadrant::new(2).unwrap()
            }
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let cmd: Command = "  ATTACK billy Sword 5 ".parse().unwrap();
        assert_eq!(
            cmd,
            Command::Attack {
                pirate: Pirate::Billy,
                kind: AttackKind::Sword,
                lane: lane(5)
            }
        );
    }

    #[test]
    fn test_parse_repair_and_annoy() {
        assert_eq!(
            "repair astrid 3".parse::<Command>(),
            Ok(Command::Repair {
                pirate: Pirate::Astrid,
                lane: lane(3)
            })
        );
        assert_eq!("annoy".parse::<Command>(), Ok(Command::Annoy { lane: None }));
        assert_eq!(
            "annoy 6".parse::<Command>(),
            Ok(Command::Annoy {
                lane: Some(lane(6))
            })
        );
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!("kraken".parse::<Command>(), Ok(Command::Kraken));
        assert_eq!("Show".parse::<Command>(), Ok(Command::Show));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors_name_the_token() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "dance".parse::<Command>(),
            Err(ParseCommandError::UnknownCommand("dance".into()))
        );
        assert_eq!(
            "move elena".parse::<Command>(),
            Err(ParseCommandError::MissingArgument {
                command: "move",
                argument: "quadrant"
            })
        );
        assert_eq!(
            "move elena 4".parse::<Command>(),
            Err(ParseCommandError::BadQuadrant("4".into()))
        );
        assert_eq!(
            "repair elena x".parse::<Command>(),
            Err(ParseCommandError::BadLane("x".into()))
        );
        assert_eq!(
            "attack elena axe 0".parse::<Command>(),
            Err(ParseCommandError::UnknownWeapon("axe".into()))
        );
        assert_eq!(
            "show me".parse::<Command>(),
            Err(ParseCommandError::TrailingInput("me".into()))
        );
    }

    #[test]
    fn test_unknown_pirate_message() {
        let err = "move jack 1".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "no pirate named 'jack'");
    }
}
