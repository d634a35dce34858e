//! Lanes, quadrants and per-lane storage.
//!
//! ## Lane
//!
//! The ship is approached through 8 lanes. Lanes 0-3 are blue and on the
//! left side, lanes 4-7 are red and on the right side.
//!
//! ## Quadrant
//!
//! Four ship regions a pirate can stand in. Quadrants 0 and 1 are on the left,
//! 2 and 3 on the right. Each quadrant covers two lanes: `quadrant = lane / 2`.
//!
//! ## LaneMap
//!
//! Fixed per-lane storage with O(1) access, indexed by `Lane`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

use super::dice::DieColor;

/// Number of lanes around the ship.
pub const LANE_COUNT: usize = 8;

/// Number of quadrants a pirate can occupy.
pub const QUADRANT_COUNT: usize = 4;

/// Lane identifier, always in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Lane(u8);

impl Lane {
    /// Create a lane, or `None` if `index` is not in `0..8`.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < LANE_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw lane index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The quadrant this lane runs into.
    #[must_use]
    pub const fn quadrant(self) -> Quadrant {
        Quadrant(self.0 / 2)
    }

    /// Blue for the left lanes, red for the right ones.
    #[must_use]
    pub const fn color(self) -> DieColor {
        if self.0 < 4 {
            DieColor::Blue
        } else {
            DieColor::Red
        }
    }

    /// Iterate over all lanes in index order.
    pub fn all() -> impl Iterator<Item = Lane> {
        (0..LANE_COUNT as u8).map(Lane)
    }

    /// The four lanes of one colour.
    pub fn of_color(color: DieColor) -> impl Iterator<Item = Lane> {
        let first = match color {
            DieColor::Blue => 0,
            DieColor::Red => 4,
        };
        (first..first + 4).map(Lane)
    }
}

impl TryFrom<u8> for Lane {
    type Error = u8;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Lane::new(index).ok_or(index)
    }
}

impl From<Lane> for u8 {
    fn from(lane: Lane) -> Self {
        lane.0
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quadrant identifier, always in `0..4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quadrant(u8);

impl Quadrant {
    /// Create a quadrant, or `None` if `index` is not in `0..4`.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < QUADRANT_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Get the raw quadrant index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The two lanes that end in this quadrant.
    #[must_use]
    pub const fn lanes(self) -> [Lane; 2] {
        [Lane(self.0 * 2), Lane(self.0 * 2 + 1)]
    }

    /// The two quadrants a pirate can step to from here, in index order.
    #[must_use]
    pub const fn adjacent(self) -> [Quadrant; 2] {
        match self.0 {
            0 => [Quadrant(1), Quadrant(2)],
            1 | 2 => [Quadrant(0), Quadrant(3)],
            _ => [Quadrant(1), Quadrant(2)],
        }
    }

    /// Iterate over all quadrants in index order.
    pub fn all() -> impl Iterator<Item = Quadrant> {
        (0..QUADRANT_COUNT as u8).map(Quadrant)
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = u8;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Quadrant::new(index).ok_or(index)
    }
}

impl From<Quadrant> for u8 {
    fn from(quadrant: Quadrant) -> Self {
        quadrant.0
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-lane data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use kraken_attack::core::{Lane, LaneMap};
///
/// let mut shields = LaneMap::with_value(true);
/// let lane = Lane::new(3).unwrap();
///
/// shields[lane] = false;
/// assert!(!shields[lane]);
/// assert_eq!(shields.iter().filter(|(_, up)| **up).count(), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaneMap<T> {
    data: [T; LANE_COUNT],
}

impl<T> LaneMap<T> {
    /// Create a new LaneMap with values from a factory function.
    pub fn new(factory: impl Fn(Lane) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(Lane(i as u8))),
        }
    }

    /// Create a new LaneMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a lane's data.
    #[must_use]
    pub fn get(&self, lane: Lane) -> &T {
        &self.data[lane.index()]
    }

    /// Get a mutable reference to a lane's data.
    pub fn get_mut(&mut self, lane: Lane) -> &mut T {
        &mut self.data[lane.index()]
    }

    /// Iterate over (Lane, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Lane, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (Lane(i as u8), v))
    }
}

impl<T> Index<Lane> for LaneMap<T> {
    type Output = T;

    fn index(&self, lane: Lane) -> &Self::Output {
        self.get(lane)
    }
}

impl<T> IndexMut<Lane> for LaneMap<T> {
    fn index_mut(&mut self, lane: Lane) -> &mut Self::Output {
        self.get_mut(lane)
    }
}
