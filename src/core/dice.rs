//! Kraken dice.
//!
//! Each die has six faces:
//! - 0 to 3: a lane of the die's colour
//! - 4: the "eye", every lane of the die's colour advances
//! - 5: blank, no movement

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Faces per die.
pub const DIE_FACES: u8 = 6;

/// Face value of the eye.
pub const EYE_FACE: u8 = 4;

/// Face value of the blank.
pub const BLANK_FACE: u8 = 5;

/// Die colour. Blue dice drive the left lanes, red dice the right ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieColor {
    Red,
    Blue,
}

impl fmt::Display for DieColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DieColor::Red => f.write_str("red"),
            DieColor::Blue => f.write_str("blue"),
        }
    }
}

/// What a rolled face means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facet {
    /// Advance a single lane; the value is the lane offset within the colour (0-3).
    Lane(u8),
    /// Advance all four lanes of the colour.
    Eye,
    /// No movement.
    Blank,
}

/// A single rolled die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieRoll {
    /// Colour of the die.
    pub color: DieColor,
    /// Face value. Rolled values are always in `0..DIE_FACES`.
    pub value: u8,
}

impl DieRoll {
    /// Create a die roll.
    #[must_use]
    pub const fn new(color: DieColor, value: u8) -> Self {
        Self { color, value }
    }

    /// Interpret the face, or `None` if the value is not a face of the die.
    #[must_use]
    pub const fn facet(self) -> Option<Facet> {
        match self.value {
            0..=3 => Some(Facet::Lane(self.value)),
            EYE_FACE => Some(Facet::Eye),
            BLANK_FACE => Some(Facet::Blank),
            _ => None,
        }
    }
}

impl fmt::Display for DieRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.facet() {
            Some(Facet::Lane(n)) => write!(f, "{} {}", self.color, n),
            Some(Facet::Eye) => write!(f, "{} eye", self.color),
            Some(Facet::Blank) => write!(f, "{} blank", self.color),
            None => write!(f, "{} ?{}", self.color, self.value),
        }
    }
}

/// A full roll in draw order. At most six dice are ever rolled at once.
pub type DiceRoll = SmallVec<[DieRoll; 6]>;

/// How many dice of each colour to roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceCounts {
    pub red: u8,
    pub blue: u8,
}

impl DiceCounts {
    /// Total number of dice.
    #[must_use]
    pub const fn total(self) -> usize {
        self.red as usize + self.blue as usize
    }
}
