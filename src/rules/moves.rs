//! Rule tables: pirate adjacency, dice escalation, attack matching and
//! translating a roll into lane advances.
//!
//! Everything here is a pure function of its arguments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{DiceCounts, DieColor, DieRoll, Facet, Lane, Quadrant, RollError};

/// Quadrants reachable in one move.
///
/// Each left quadrant connects to one left and one right quadrant:
/// 0↔{1,2}, 1↔{0,3}, 2↔{0,3}, 3↔{1,2}.
#[must_use]
pub fn legal_pirate_moves(from: Quadrant) -> [Quadrant; 2] {
    from.adjacent()
}

/// Dice to roll with the Kraken at `kraken_location`.
///
/// ```
/// use kraken_attack::rules::dice_counts;
///
/// assert_eq!(dice_counts(0).red, 1);
/// assert_eq!(dice_counts(6).red, 3);
/// assert_eq!(dice_counts(9).blue, 3);
/// ```
#[must_use]
pub fn dice_counts(kraken_location: u8) -> DiceCounts {
    let (red, blue) = match kraken_location {
        0..=1 => (1, 1),
        2..=3 => (2, 1),
        4..=5 => (2, 2),
        6..=7 => (3, 2),
        _ => (3, 3),
    };
    DiceCounts { red, blue }
}

/// Weapon a pirate swings at a Kraken arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackKind {
    Sword,
    Pistol,
    Cannon,
}

impl AttackKind {
    /// The arm position this weapon connects with.
    ///
    /// Swords only reach an arm touching the hull, cannons only one far out.
    #[must_use]
    pub const fn reaches_arm_at(self) -> u8 {
        match self {
            AttackKind::Sword => 3,
            AttackKind::Pistol => 2,
            AttackKind::Cannon => 1,
        }
    }

    /// Whether an attack against an arm at `arm` lands.
    #[must_use]
    pub const fn hits(self, arm: u8) -> bool {
        self.reaches_arm_at() == arm
    }
}

impl fmt::Display for AttackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackKind::Sword => f.write_str("sword"),
            AttackKind::Pistol => f.write_str("pistol"),
            AttackKind::Cannon => f.write_str("cannon"),
        }
    }
}

impl FromStr for AttackKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sword" => Ok(AttackKind::Sword),
            "pistol" => Ok(AttackKind::Pistol),
            "cannon" => Ok(AttackKind::Cannon),
            other => Err(other.to_string()),
        }
    }
}

/// What a pirate attack did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// Wrong weapon for the arm's position. Nothing changed.
    Miss,
    /// The arm was pushed back one step.
    Hit {
        /// The arm belonged to the boarded Kraken, which took a wound.
        kraken_wounded: bool,
    },
}

impl AttackOutcome {
    #[must_use]
    pub fn is_hit(self) -> bool {
        matches!(self, AttackOutcome::Hit { .. })
    }
}

/// Turn a roll into the lanes the Kraken advances, in die order.
///
/// A lane face advances one lane, an eye advances all four lanes of its colour
/// in place, a blank advances nothing. Repeated lanes are kept.
///
/// ```
/// use kraken_attack::core::{DieColor, DieRoll};
/// use kraken_attack::rules::kraken_moves;
///
/// let roll = [DieRoll::new(DieColor::Red, 1), DieRoll::new(DieColor::Blue, 4)];
/// let lanes: Vec<usize> = kraken_moves(&roll).unwrap().iter().map(|l| l.index()).collect();
/// assert_eq!(lanes, vec![5, 0, 1, 2, 3]);
/// ```
///
/// # Errors
///
/// `RollError` if a face is outside `0..=5` or either colour is missing.
pub fn kraken_moves(roll: &[DieRoll]) -> Result<Vec<Lane>, RollError> {
    let has = |color: DieColor| roll.iter().any(|d| d.color == color);
    if !has(DieColor::Red) || !has(DieColor::Blue) {
        return Err(RollError::MissingColor);
    }

    let mut lanes = Vec::with_capacity(roll.len() * 4);
    for (index, die) in roll.iter().enumerate() {
        let facet = die.facet().ok_or(RollError::FaceOutOfRange {
            index,
            value: die.value,
        })?;
        match facet {
            Facet::Lane(offset) => lanes.extend(Lane::of_color(die.color).nth(offset as usize)),
            Facet::Eye => lanes.extend(Lane::of_color(die.color)),
            Facet::Blank => {}
        }
    }

    Ok(lanes)
}
