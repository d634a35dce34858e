//! Game setup: who starts where, and the dice seed.
//!
//! Quadrants are kept as raw numbers here so that a setup read from user input
//! can be reported precisely when `GameBoard::from_setup` rejects it.

use serde::{Deserialize, Serialize};

use super::pirate::Pirate;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Starting configuration for one game.
///
/// ## Example
///
/// ```
/// use kraken_attack::core::{GameSetup, Pirate};
///
/// let setup = GameSetup::new()
///     .with_pirate(Pirate::Elena, 0)
///     .with_pirate(Pirate::Billy, 3)
///     .with_seed(7);
///
/// assert_eq!(setup.pirates.len(), 2);
/// assert_eq!(setup.seed, 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    /// Starting quadrant per pirate. A pirate listed twice keeps the last entry.
    pub pirates: Vec<(Pirate, u8)>,

    /// Seed for the dice stream. Same seed produces the same rolls.
    pub seed: u64,
}

impl Default for GameSetup {
    /// Elena alone in quadrant 0, seed 42.
    fn default() -> Self {
        Self {
            pirates: vec![(Pirate::Elena, 0)],
            seed: DEFAULT_SEED,
        }
    }
}

impl GameSetup {
    /// An empty crew with the default seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pirates: Vec::new(),
            seed: DEFAULT_SEED,
        }
    }

    /// Add a pirate at a starting quadrant.
    #[must_use]
    pub fn with_pirate(mut self, pirate: Pirate, quadrant: u8) -> Self {
        self.pirates.push((pirate, quadrant));
        self
    }

    /// Use a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_setup() {
        let setup = GameSetup::default();
        assert_eq!(setup.pirates, vec![(Pirate::Elena, 0)]);
        assert_eq!(setup.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let setup = GameSetup::new()
            .with_pirate(Pirate::Samuel, 1)
            .with_pirate(Pirate::Astrid, 2)
            .with_seed(123);

        assert_eq!(setup.pirates, vec![(Pirate::Samuel, 1), (Pirate::Astrid, 2)]);
        assert_eq!(setup.seed, 123);
    }

    #[test]
    fn test_serialization() {
        let setup = GameSetup::default().with_pirate(Pirate::Billy, 2);
        let json = serde_json::to_string(&setup).unwrap();
        let deserialized: GameSetup = serde_json::from_str(&json).unwrap();
        assert_eq!(setup, deserialized);
    }
}
