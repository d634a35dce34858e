//! Kraken Attack at the terminal.
//!
//! Reads one command per line from stdin and prints the board after every
//! change. Set `KRAKEN_LOG` (e.g. `KRAKEN_LOG=debug`) to see engine logs on
//! stderr.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kraken_attack::core::DEFAULT_SEED;
use kraken_attack::driver::{execute, HELP};
use kraken_attack::{Command, GameBoard, GameSetup, Pirate, Report};

/// Defend the ship against the Kraken.
#[derive(Parser, Debug)]
#[command(name = "kraken")]
#[command(about = "Play Kraken Attack from the command line", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for the Kraken's dice; the same seed replays the same game
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// A pirate and their starting quadrant, e.g. `--pirate billy=3`
    #[arg(long = "pirate", value_name = "NAME=QUADRANT", value_parser = parse_pirate)]
    pirates: Vec<(Pirate, u8)>,
}

fn parse_pirate(s: &str) -> Result<(Pirate, u8), String> {
    let (name, quadrant) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=QUADRANT, got '{s}'"))?;
    let pirate = name.parse::<Pirate>().map_err(|e| e.to_string())?;
    let quadrant = quadrant
        .trim()
        .parse::<u8>()
        .map_err(|_| format!("'{quadrant}' is not a quadrant"))?;
    Ok((pirate, quadrant))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("KRAKEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let setup = if cli.pirates.is_empty() {
        GameSetup::default().with_seed(cli.seed)
    } else {
        cli.pirates
            .iter()
            .fold(GameSetup::new().with_seed(cli.seed), |setup, &(pirate, quadrant)| {
                setup.with_pirate(pirate, quadrant)
            })
    };
    let mut board = GameBoard::from_setup(&setup).context("cannot set up the game")?;
    info!(seed = setup.seed, pirates = setup.pirates.len(), "game started");

    play(&mut board, io::stdin().lock(), io::stdout().lock())
}

fn play(board: &mut GameBoard, input: impl BufRead, mut out: impl Write) -> Result<()> {
    writeln!(out, "{}", board.view())?;
    writeln!(out, "\nType 'help' for commands.")?;
    prompt(&mut out)?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            prompt(&mut out)?;
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}")?;
                prompt(&mut out)?;
                continue;
            }
        };

        match execute(board, command) {
            Ok(Report::Quit) => return Ok(()),
            Ok(Report::Help) => writeln!(out, "{HELP}")?,
            Ok(Report::Show) => writeln!(out, "{}", board.view())?,
            Ok(report) => {
                writeln!(out, "{report}")?;
                writeln!(out, "\n{}", board.view())?;
            }
            Err(e) => writeln!(out, "{e}")?,
        }

        if let Some(outcome) = board.game_outcome() {
            info!(%outcome, "game over");
            writeln!(out, "\nGame over. {outcome}.")?;
            return Ok(());
        }
        prompt(&mut out)?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
