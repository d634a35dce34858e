//! The Kraken Attack board.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::view::BoardView;
use crate::core::{
    DiceCounts, DiceRoll, DieColor, DieRoll, GameError, GameRng, GameRngState, GameSetup,
    IllegalMove, Lane, LaneMap, Pirate, Quadrant, SetupError,
};
use crate::rules::{self, AttackKind, AttackOutcome, GameOutcome, KRAKEN_DAMAGE_TO_RETREAT};

/// Arm positions at the start of a game, by lane.
pub const INITIAL_ARM_LOCATIONS: [u8; 8] = [2, 1, 1, 0, 2, 1, 1, 0];

/// Arm position at which the arm touches the hull.
pub const ARM_AT_HULL: u8 = 3;

/// Last track position before the Kraken boards.
pub const KRAKEN_LAST_APPROACH: u8 = 8;

/// Track position of a Kraken on board.
pub const KRAKEN_ON_BOARD: u8 = 9;

/// Where the Kraken is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KrakenPosition {
    /// Still on the approach track, at 0-8.
    Approaching(u8),
    /// On the ship, holding one lane for the rest of the game.
    Boarded(Lane),
}

impl KrakenPosition {
    /// Track position, 9 once boarded.
    #[must_use]
    pub const fn location(self) -> u8 {
        match self {
            KrakenPosition::Approaching(n) => n,
            KrakenPosition::Boarded(_) => KRAKEN_ON_BOARD,
        }
    }

    /// The occupied lane, if boarded.
    #[must_use]
    pub const fn lane(self) -> Option<Lane> {
        match self {
            KrakenPosition::Approaching(_) => None,
            KrakenPosition::Boarded(lane) => Some(lane),
        }
    }
}

/// One effect of a Kraken lane move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KrakenImpact {
    /// The arm moved one step closer; `arm` is its new position.
    ArmAdvanced { lane: Lane, arm: u8 },
    /// The arm was already at the hull and smashed the lane's shield.
    ShieldBroken { lane: Lane },
    /// The arm was at the hull with no shield left and holed the ship.
    HullBreached { lane: Lane, quadrant: Quadrant },
}

impl fmt::Display for KrakenImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KrakenImpact::ArmAdvanced { lane, arm } => write!(f, "arm in lane {lane} reaches {arm}"),
            KrakenImpact::ShieldBroken { lane } => write!(f, "shield in lane {lane} broken"),
            KrakenImpact::HullBreached { lane, quadrant } => {
                write!(f, "hull breached from lane {lane} in quadrant {quadrant}")
            }
        }
    }
}

/// Game state and rules for one game.
///
/// The board validates and applies single operations; the caller decides the
/// order of turns. A failed operation never changes state.
///
/// ## Example
///
/// ```
/// use kraken_attack::board::GameBoard;
/// use kraken_attack::core::{Pirate, Quadrant};
///
/// let mut board = GameBoard::new([(Pirate::Elena, 0)], 42).unwrap();
///
/// board.move_pirate(Pirate::Elena, Quadrant::new(2).unwrap()).unwrap();
/// assert!(board.move_pirate(Pirate::Elena, Quadrant::new(1).unwrap()).is_err());
///
/// let roll = board.roll_dice();
/// let lanes = kraken_attack::board::GameBoard::determine_kraken_moves(&roll).unwrap();
/// board.determine_board_after_kraken_move(&lanes);
/// assert_eq!(board.game_outcome(), None);
/// ```
#[derive(Clone, Debug)]
pub struct GameBoard {
    pirate_quadrants: FxHashMap<Pirate, Quadrant>,
    shield_status: LaneMap<bool>,
    arm_locations: LaneMap<u8>,
    kraken: KrakenPosition,
    kraken_damage: u8,
    ship_hole_positions: Vec<Quadrant>,
    rng: GameRng,
}

impl GameBoard {
    /// Set up a new game.
    ///
    /// A pirate listed twice keeps its last quadrant.
    ///
    /// # Errors
    ///
    /// `InvalidSetup` if there are no pirates or a quadrant is not in `0..4`.
    pub fn new(
        pirate_quadrants: impl IntoIterator<Item = (Pirate, u8)>,
        seed: u64,
    ) -> Result<Self, GameError> {
        let mut pirates = FxHashMap::default();
        for (pirate, quadrant) in pirate_quadrants {
            let quadrant = Quadrant::new(quadrant)
                .ok_or(SetupError::QuadrantOutOfRange { pirate, quadrant })?;
            pirates.insert(pirate, quadrant);
        }
        if pirates.is_empty() {
            return Err(SetupError::NoPirates.into());
        }

        debug!(pirates = pirates.len(), seed, "new board");

        Ok(Self {
            pirate_quadrants: pirates,
            shield_status: LaneMap::with_value(true),
            arm_locations: LaneMap::new(|lane| INITIAL_ARM_LOCATIONS[lane.index()]),
            kraken: KrakenPosition::Approaching(0),
            kraken_damage: 0,
            ship_hole_positions: Vec::new(),
            rng: GameRng::new(seed),
        })
    }

    /// Set up a new game from a setup record.
    ///
    /// # Errors
    ///
    /// See [`GameBoard::new`].
    pub fn from_setup(setup: &GameSetup) -> Result<Self, GameError> {
        Self::new(setup.pirates.iter().copied(), setup.seed)
    }

    // === Accessors ===

    /// Pirates on the board, in roster order.
    #[must_use]
    pub fn pirates(&self) -> Vec<Pirate> {
        let mut pirates: Vec<_> = self.pirate_quadrants.keys().copied().collect();
        pirates.sort_unstable();
        pirates
    }

    /// All pirate positions.
    #[must_use]
    pub fn pirate_quadrants(&self) -> &FxHashMap<Pirate, Quadrant> {
        &self.pirate_quadrants
    }

    /// Where a pirate stands, or `None` if it is not playing.
    #[must_use]
    pub fn pirate_quadrant(&self, pirate: Pirate) -> Option<Quadrant> {
        self.pirate_quadrants.get(&pirate).copied()
    }

    /// Shield per lane, `true` while intact.
    #[must_use]
    pub fn shield_status(&self) -> &LaneMap<bool> {
        &self.shield_status
    }

    /// Arm position per lane.
    #[must_use]
    pub fn arm_locations(&self) -> &LaneMap<u8> {
        &self.arm_locations
    }

    #[must_use]
    pub fn kraken_position(&self) -> KrakenPosition {
        self.kraken
    }

    /// Kraken track position, 0-8 approaching, 9 on board.
    #[must_use]
    pub fn kraken_location(&self) -> u8 {
        self.kraken.location()
    }

    /// The Kraken's lane; set exactly when it is on board.
    #[must_use]
    pub fn kraken_lane(&self) -> Option<Lane> {
        self.kraken.lane()
    }

    #[must_use]
    pub fn kraken_damage(&self) -> u8 {
        self.kraken_damage
    }

    /// Hull breaches by quadrant, in the order they happened.
    #[must_use]
    pub fn ship_hole_positions(&self) -> &[Quadrant] {
        &self.ship_hole_positions
    }

    /// Position of the dice stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Snapshot everything a player can see.
    #[must_use]
    pub fn view(&self) -> BoardView {
        let mut pirates: Vec<_> = self.pirate_quadrants.iter().map(|(p, q)| (*p, *q)).collect();
        pirates.sort_unstable();

        BoardView {
            pirates,
            shield_status: self.shield_status.clone(),
            arm_locations: self.arm_locations.clone(),
            kraken_location: self.kraken_location(),
            kraken_lane: self.kraken_lane(),
            kraken_damage: self.kraken_damage,
            ship_hole_positions: self.ship_hole_positions.clone(),
            dice_counts: self.dice_counts(),
            outcome: self.game_outcome(),
            rng: self.rng.state(),
        }
    }

    // === Queries ===

    /// Dice the Kraken rolls at its current position.
    #[must_use]
    pub fn dice_counts(&self) -> DiceCounts {
        rules::dice_counts(self.kraken_location())
    }

    /// `Some` once the ship has sunk or the Kraken has retreated.
    #[must_use]
    pub fn game_outcome(&self) -> Option<GameOutcome> {
        GameOutcome::from_damage(self.ship_hole_positions.len(), self.kraken_damage)
    }

    #[must_use]
    pub fn is_kraken_on_board(&self) -> bool {
        self.kraken_location() == KRAKEN_ON_BOARD && self.kraken_lane().is_some()
    }

    /// Quadrants reachable in one pirate move from `from`.
    #[must_use]
    pub fn legal_pirate_moves(from: Quadrant) -> [Quadrant; 2] {
        rules::legal_pirate_moves(from)
    }

    // === Kraken ===

    /// Roll the Kraken dice: red dice first, then blue, each in `0..=5`.
    pub fn roll_dice(&mut self) -> DiceRoll {
        let counts = self.dice_counts();
        let mut roll = DiceRoll::new();
        for (color, count) in [(DieColor::Red, counts.red), (DieColor::Blue, counts.blue)] {
            for _ in 0..count {
                roll.push(DieRoll::new(color, self.rng.roll_die()));
            }
        }
        debug!(roll = ?roll, "kraken dice");
        roll
    }

    /// Lanes the Kraken advances for a roll, in die order.
    ///
    /// # Errors
    ///
    /// `InvalidRoll` unless both colours are present and every face is in `0..=5`.
    pub fn determine_kraken_moves(roll: &[DieRoll]) -> Result<Vec<Lane>, GameError> {
        Ok(rules::kraken_moves(roll)?)
    }

    /// Apply Kraken lane moves in order.
    ///
    /// An arm short of the hull advances one step; an arm at the hull breaks the
    /// lane's shield, or holes the ship in the lane's quadrant if the shield is
    /// already gone. Moves after the ship has sunk are ignored.
    ///
    /// # Panics
    ///
    /// If an arm position is outside `0..=3`, which no sequence of operations
    /// can produce.
    pub fn determine_board_after_kraken_move(&mut self, lanes: &[Lane]) -> Vec<KrakenImpact> {
        let mut impacts = Vec::with_capacity(lanes.len());
        for &lane in lanes {
            if self.game_outcome() == Some(GameOutcome::ShipSunk) {
                debug!(lane = %lane, "ship already sunk, move ignored");
                break;
            }

            let arm = self.arm_locations[lane];
            let impact = match arm {
                0..=2 => {
                    self.arm_locations[lane] = arm + 1;
                    KrakenImpact::ArmAdvanced { lane, arm: arm + 1 }
                }
                ARM_AT_HULL if self.shield_status[lane] => {
                    self.shield_status[lane] = false;
                    info!(lane = %lane, "shield broken");
                    KrakenImpact::ShieldBroken { lane }
                }
                ARM_AT_HULL => {
                    let quadrant = lane.quadrant();
                    self.ship_hole_positions.push(quadrant);
                    info!(
                        lane = %lane,
                        quadrant = %quadrant,
                        holes = self.ship_hole_positions.len(),
                        "hull breached"
                    );
                    KrakenImpact::HullBreached { lane, quadrant }
                }
                _ => panic!("arm in lane {lane} at {arm}, outside 0..=3"),
            };
            impacts.push(impact);
        }
        impacts
    }

    /// Move the Kraken one step along its track.
    ///
    /// From position 8 the Kraken boards the ship and needs a lane; once on
    /// board it stays put. `lane` is ignored everywhere else.
    ///
    /// # Errors
    ///
    /// `IllegalMove` if the Kraken is at 8 and no lane is given.
    pub fn annoy_kraken(&mut self, lane: Option<Lane>) -> Result<(), GameError> {
        self.kraken = match self.kraken {
            KrakenPosition::Boarded(_) => {
                debug!("kraken already on board");
                return Ok(());
            }
            KrakenPosition::Approaching(KRAKEN_LAST_APPROACH) => {
                let lane = lane.ok_or(IllegalMove::KrakenLaneRequired)?;
                info!(lane = %lane, "kraken boards the ship");
                KrakenPosition::Boarded(lane)
            }
            KrakenPosition::Approaching(n) => {
                debug!(location = n + 1, "kraken advances");
                KrakenPosition::Approaching(n + 1)
            }
        };
        Ok(())
    }

    // === Pirates ===

    /// Step a pirate to an adjacent quadrant.
    ///
    /// # Errors
    ///
    /// `IllegalMove` if the pirate is not playing or `to` is not adjacent.
    pub fn move_pirate(&mut self, pirate: Pirate, to: Quadrant) -> Result<(), GameError> {
        let from = self.quadrant_of(pirate)?;
        let reachable = Self::legal_pirate_moves(from);
        if !reachable.contains(&to) {
            return Err(IllegalMove::UnreachableQuadrant { from, to, reachable }.into());
        }

        self.pirate_quadrants.insert(pirate, to);
        debug!(%pirate, from = %from, to = %to, "pirate moved");
        Ok(())
    }

    /// Attack the arm in a lane of the pirate's quadrant.
    ///
    /// Only the matching weapon lands (sword on 3, pistol on 2, cannon on 1);
    /// anything else is a miss. A hit pushes the arm back one step and wounds
    /// the Kraken if it holds that lane.
    ///
    /// # Errors
    ///
    /// `IllegalMove` if the pirate is not playing or the lane is in another quadrant.
    pub fn perform_pirate_attack(
        &mut self,
        pirate: Pirate,
        kind: AttackKind,
        lane: Lane,
    ) -> Result<AttackOutcome, GameError> {
        let quadrant = self.quadrant_of(pirate)?;
        if lane.quadrant() != quadrant {
            return Err(IllegalMove::AttackOutOfReach {
                pirate,
                lane,
                quadrant,
            }
            .into());
        }

        let arm = self.arm_locations[lane];
        if !kind.hits(arm) {
            debug!(%pirate, %kind, lane = %lane, arm, "attack missed");
            return Ok(AttackOutcome::Miss);
        }

        self.arm_locations[lane] = arm - 1;
        let kraken_wounded =
            self.kraken_lane() == Some(lane) && self.kraken_damage < KRAKEN_DAMAGE_TO_RETREAT;
        if kraken_wounded {
            self.kraken_damage += 1;
            info!(%pirate, damage = self.kraken_damage, "kraken wounded");
        }
        debug!(%pirate, %kind, lane = %lane, arm = arm - 1, "attack hit");
        Ok(AttackOutcome::Hit { kraken_wounded })
    }

    /// Raise the shield of a lane in the pirate's quadrant. Intact shields are left alone.
    ///
    /// # Errors
    ///
    /// `IllegalMove` if the pirate is not playing or the lane is in another quadrant.
    pub fn perform_repair(&mut self, pirate: Pirate, lane: Lane) -> Result<(), GameError> {
        let quadrant = self.quadrant_of(pirate)?;
        if lane.quadrant() != quadrant {
            return Err(IllegalMove::RepairOutOfReach {
                pirate,
                lane,
                quadrant,
            }
            .into());
        }

        if !self.shield_status[lane] {
            self.shield_status[lane] = true;
            debug!(%pirate, lane = %lane, "shield repaired");
        }
        Ok(())
    }

    fn quadrant_of(&self, pirate: Pirate) -> Result<Quadrant, IllegalMove> {
        self.pirate_quadrant(pirate)
            .ok_or(IllegalMove::PirateNotOnBoard(pirate))
    }
}
