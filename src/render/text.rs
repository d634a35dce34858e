//! Plain-text board drawing.

use std::fmt::{self, Write};

use crate::board::{BoardView, KRAKEN_ON_BOARD};
use crate::core::{DieColor, Lane};
use crate::rules::dice_counts;

const KRAKEN: char = '🐙';
const ARM: char = 'δ';
const SHIELD: char = '🛡';
const NO_SHIELD: char = '.';
const RED_STEP: char = '🟥';
const BLUE_STEP: char = '🟦';

/// Cells in a lane row, one per arm position.
const ARM_CELLS: usize = 4;

fn cells(cells: impl IntoIterator<Item = char>) -> String {
    let mut out = String::from("|");
    for c in cells {
        out.push(c);
        out.push('|');
    }
    out
}

/// Marker for a track slot where a dice count steps up.
fn step_marker(slot: u8) -> char {
    if slot == 0 {
        return ' ';
    }
    let (before, here) = (dice_counts(slot - 1), dice_counts(slot));
    if here.red > before.red {
        RED_STEP
    } else if here.blue > before.blue {
        BLUE_STEP
    } else {
        ' '
    }
}

/// The Kraken's approach track.
///
/// Slots the Kraken has passed are blank; slots ahead show where the red or
/// blue dice count goes up. Once the Kraken is on board the track is empty.
///
/// ```
/// use kraken_attack::board::GameBoard;
/// use kraken_attack::core::Pirate;
/// use kraken_attack::render::draw_kraken_track;
///
/// let board = GameBoard::new([(Pirate::Elena, 0)], 42).unwrap();
/// assert_eq!(draw_kraken_track(&board.view()), "|🐙| |🟥| |🟦| |🟥| |🟦|");
/// ```
#[must_use]
pub fn draw_kraken_track(view: &BoardView) -> String {
    let location = view.kraken_location;
    cells((0..KRAKEN_ON_BOARD).map(|slot| {
        if location >= KRAKEN_ON_BOARD || slot < location {
            ' '
        } else if slot == location {
            KRAKEN
        } else {
            step_marker(slot)
        }
    }))
}

/// A lane with the Kraken's arm in it. Red lanes are drawn mirrored.
///
/// While the Kraken approaches every arm is shown; once it has boarded only
/// its own lane is marked.
#[must_use]
pub fn draw_lane(view: &BoardView, lane: Lane) -> String {
    let arm = usize::from(view.arm_locations[lane]);
    let marker = match view.kraken_lane {
        None => Some(ARM),
        Some(kraken_lane) if kraken_lane == lane => Some(KRAKEN),
        Some(_) => None,
    };

    let mut row: Vec<char> = (0..ARM_CELLS)
        .map(|cell| match marker {
            Some(m) if cell == arm => m,
            _ => ' ',
        })
        .collect();
    if lane.color() == DieColor::Red {
        row.reverse();
    }
    cells(row)
}

/// The ship's edge at a lane: its shield and the deck.
#[must_use]
pub fn draw_ship_lane(view: &BoardView, lane: Lane) -> String {
    let shield = if view.shield_status[lane] { SHIELD } else { NO_SHIELD };
    match lane.color() {
        DieColor::Blue => format!("{shield}|__"),
        DieColor::Red => format!("__|{shield}"),
    }
}

/// The whole table: track, lanes, damage and crew.
#[must_use]
pub fn draw_board(view: &BoardView) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_board(&mut out, view);
    out
}

fn write_board(out: &mut impl Write, view: &BoardView) -> fmt::Result {
    writeln!(out, "      KRAKEN ATTACK")?;
    writeln!(out)?;
    writeln!(out, "{}", draw_kraken_track(view))?;
    writeln!(out)?;

    // Each blue lane is drawn beside the red lane across the ship.
    for (left, right) in Lane::of_color(DieColor::Blue).zip(Lane::of_color(DieColor::Red)) {
        writeln!(
            out,
            "{}{}{}{}",
            draw_lane(view, left),
            draw_ship_lane(view, left),
            draw_ship_lane(view, right),
            draw_lane(view, right)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Ship damage: {}", view.ship_damage())?;
    writeln!(out, "Kraken damage: {}", view.kraken_damage)?;
    let crew: Vec<String> = view
        .pirates
        .iter()
        .map(|(pirate, quadrant)| format!("{pirate} ({quadrant})"))
        .collect();
    write!(out, "Pirates: {}", crew.join(", "))?;
    if let Some(outcome) = view.outcome {
        write!(out, "\n{outcome}")?;
    }
    Ok(())
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_board(f, self)
    }
}
