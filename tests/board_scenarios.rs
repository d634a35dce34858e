//! Whole-game scenarios through the public board API.

use kraken_attack::board::{GameBoard, KrakenImpact, KrakenPosition};
use kraken_attack::core::{DiceCounts, GameError, IllegalMove, Lane, Pirate, Quadrant, SetupError};
use kraken_attack::rules::{AttackKind, AttackOutcome, GameOutcome};
use kraken_attack::BoardView;

fn lane(i: u8) -> Lane {
    Lane::new(i).unwrap()
}

fn quadrant(i: u8) -> Quadrant {
    Quadrant::new(i).unwrap()
}

/// Board with the Kraken on board in `kraken_lane`.
fn boarded(pirates: &[(Pirate, u8)], kraken_lane: u8) -> GameBoard {
    let mut board = GameBoard::new(pirates.iter().copied(), 7).unwrap();
    for _ in 0..8 {
        board.annoy_kraken(None).unwrap();
    }
    board.annoy_kraken(Some(lane(kraken_lane))).unwrap();
    board
}

#[test]
fn test_setup_is_validated() {
    assert_eq!(
        GameBoard::new(Vec::<(Pirate, u8)>::new(), 1).unwrap_err(),
        GameError::InvalidSetup(SetupError::NoPirates)
    );
    let err = GameBoard::new([(Pirate::Samuel, 4)], 1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid setup: the pirate Samuel is in an illegal quadrant 4"
    );
}

#[test]
fn test_dice_count_escalation() {
    let mut board = GameBoard::new([(Pirate::Elena, 0)], 42).unwrap();
    let expected = [(0, 1, 1), (2, 2, 1), (4, 2, 2), (6, 3, 2), (8, 3, 3)];

    for (location, red, blue) in expected {
        while board.kraken_location() < location {
            board.annoy_kraken(None).unwrap();
        }
        assert_eq!(board.dice_counts(), DiceCounts { red, blue }, "location {location}");
        assert_eq!(board.roll_dice().len(), usize::from(red + blue));
    }
}

#[test]
fn test_arm_progression_to_breach() {
    let mut board = GameBoard::new([(Pirate::Elena, 0)], 42).unwrap();
    assert_eq!(board.arm_locations()[lane(0)], 2);

    board.determine_board_after_kraken_move(&[lane(0)]);
    assert_eq!(board.arm_locations()[lane(0)], 3);
    assert!(board.shield_status()[lane(0)]);

    board.determine_board_after_kraken_move(&[lane(0)]);
    assert_eq!(board.arm_locations()[lane(0)], 3);
    assert!(!board.shield_status()[lane(0)]);
    assert!(board.ship_hole_positions().is_empty());

    let impacts = board.determine_board_after_kraken_move(&[lane(0)]);
    assert_eq!(
        impacts,
        vec![KrakenImpact::HullBreached {
            lane: lane(0),
            quadrant: quadrant(0)
        }]
    );
    assert_eq!(board.ship_hole_positions(), &[quadrant(0)]);
}

#[test]
fn test_attack_kind_must_match_arm() {
    let mut board = GameBoard::new([(Pirate::Astrid, 2)], 42).unwrap();
    assert_eq!(board.arm_locations()[lane(4)], 2);

    let hit = AttackOutcome::Hit {
        kraken_wounded: false,
    };
    assert_eq!(
        board.perform_pirate_attack(Pirate::Astrid, AttackKind::Pistol, lane(4)),
        Ok(hit)
    );
    assert_eq!(board.arm_locations()[lane(4)], 1);

    assert_eq!(
        board.perform_pirate_attack(Pirate::Astrid, AttackKind::Cannon, lane(4)),
        Ok(hit)
    );
    assert_eq!(board.arm_locations()[lane(4)], 0);

    assert_eq!(
        board.perform_pirate_attack(Pirate::Astrid, AttackKind::Pistol, lane(4)),
        Ok(AttackOutcome::Miss)
    );
    assert_eq!(board.arm_locations()[lane(4)], 0);
}

#[test]
fn test_cross_quadrant_attack() {
    let mut board = GameBoard::new([(Pirate::Billy, 2)], 42).unwrap();
    let before = board.view();

    let err = board
        .perform_pirate_attack(Pirate::Billy, AttackKind::Pistol, lane(0))
        .unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalMove(IllegalMove::AttackOutOfReach {
            pirate: Pirate::Billy,
            lane: lane(0),
            quadrant: quadrant(2),
        })
    );
    let message = err.to_string();
    assert!(message.contains("Billy"));
    assert!(message.contains("quadrant 2"));
    assert_eq!(board.view(), before);
}

#[test]
fn test_kraken_boarding() {
    let mut board = GameBoard::new([(Pirate::Elena, 0)], 42).unwrap();
    for _ in 0..8 {
        board.annoy_kraken(None).unwrap();
    }
    assert_eq!(board.kraken_location(), 8);

    let err = board.annoy_kraken(None).unwrap_err();
    assert_eq!(err.to_string(), "must specify to which lane the Kraken will go");
    assert_eq!(board.kraken_location(), 8);

    board.annoy_kraken(Some(lane(3))).unwrap();
    assert_eq!(board.kraken_location(), 9);
    assert_eq!(board.kraken_lane(), Some(lane(3)));
    assert_eq!(board.kraken_position(), KrakenPosition::Boarded(lane(3)));

    // Once aboard the Kraken stays in its lane.
    board.annoy_kraken(Some(lane(5))).unwrap();
    assert_eq!(board.kraken_lane(), Some(lane(3)));
}

#[test]
fn test_wounded_kraken_retreats() {
    let mut board = boarded(&[(Pirate::Elena, 0)], 0);

    assert_eq!(
        board.perform_pirate_attack(Pirate::Elena, AttackKind::Pistol, lane(0)),
        Ok(AttackOutcome::Hit {
            kraken_wounded: true
        })
    );
    board
        .perform_pirate_attack(Pirate::Elena, AttackKind::Cannon, lane(0))
        .unwrap();
    assert_eq!(board.kraken_damage(), 2);
    assert_eq!(board.game_outcome(), None);

    // Lane 1 is not the Kraken's: the arm retreats but the Kraken is unhurt.
    assert_eq!(
        board.perform_pirate_attack(Pirate::Elena, AttackKind::Cannon, lane(1)),
        Ok(AttackOutcome::Hit {
            kraken_wounded: false
        })
    );
    assert_eq!(board.kraken_damage(), 2);

    board.determine_board_after_kraken_move(&[lane(0), lane(0), lane(0)]);
    board
        .perform_pirate_attack(Pirate::Elena, AttackKind::Sword, lane(0))
        .unwrap();
    assert_eq!(board.kraken_damage(), 3);
    assert_eq!(board.game_outcome(), Some(GameOutcome::KrakenRetreats));
    assert!(board.game_outcome().unwrap().pirates_win());
}

#[test]
fn test_ship_sinks_after_four_holes() {
    let mut board = GameBoard::new([(Pirate::Samuel, 3)], 42).unwrap();

    // Lane 7 starts retracted: three steps in, one shield, then four holes.
    let impacts = board.determine_board_after_kraken_move(&[lane(7); 10]);
    assert_eq!(impacts.len(), 8);
    assert_eq!(board.ship_hole_positions(), &[quadrant(3); 4]);
    assert_eq!(board.game_outcome(), Some(GameOutcome::ShipSunk));

    // Nothing more happens to a sunken ship.
    assert!(board.determine_board_after_kraken_move(&[lane(6)]).is_empty());
    assert_eq!(board.ship_hole_positions().len(), 4);
}

#[test]
fn test_sinking_outranks_retreat() {
    let mut board = boarded(&[(Pirate::Elena, 0)], 0);
    board
        .perform_pirate_attack(Pirate::Elena, AttackKind::Pistol, lane(0))
        .unwrap();
    board
        .perform_pirate_attack(Pirate::Elena, AttackKind::Cannon, lane(0))
        .unwrap();
    board.determine_board_after_kraken_move(&[lane(0)]);
    board
        .perform_pirate_attack(Pirate::Elena, AttackKind::Cannon, lane(0))
        .unwrap();
    assert_eq!(board.game_outcome(), Some(GameOutcome::KrakenRetreats));

    board.determine_board_after_kraken_move(&[lane(7); 8]);
    assert_eq!(board.kraken_damage(), 3);
    assert_eq!(board.game_outcome(), Some(GameOutcome::ShipSunk));
}

#[test]
fn test_repair_restores_shield() {
    let mut board = GameBoard::new([(Pirate::Billy, 1)], 42).unwrap();
    board.determine_board_after_kraken_move(&[lane(3); 4]);
    assert!(!board.shield_status()[lane(3)]);

    board.perform_repair(Pirate::Billy, lane(3)).unwrap();
    assert!(board.shield_status()[lane(3)]);
    let repaired = board.view();

    // Repairing an intact shield changes nothing.
    board.perform_repair(Pirate::Billy, lane(3)).unwrap();
    board.perform_repair(Pirate::Billy, lane(2)).unwrap();
    assert_eq!(board.view(), repaired);

    let err = board.perform_repair(Pirate::Billy, lane(5)).unwrap_err();
    assert_eq!(err.to_string(), "Billy cannot repair lane 5 from quadrant 1");
}

#[test]
fn test_pirates_walk_between_adjacent_quadrants() {
    let mut board = GameBoard::new([(Pirate::Elena, 0), (Pirate::Samuel, 3)], 42).unwrap();
    assert_eq!(board.pirates(), vec![Pirate::Samuel, Pirate::Elena]);

    board.move_pirate(Pirate::Elena, quadrant(1)).unwrap();
    board.move_pirate(Pirate::Elena, quadrant(3)).unwrap();
    board.move_pirate(Pirate::Samuel, quadrant(2)).unwrap();
    assert_eq!(board.pirate_quadrant(Pirate::Elena), Some(quadrant(3)));
    assert_eq!(board.pirate_quadrant(Pirate::Samuel), Some(quadrant(2)));

    let err = board.move_pirate(Pirate::Samuel, quadrant(1)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "can only go to quadrants (0, 3) from quadrant 2"
    );
    assert_eq!(
        board.move_pirate(Pirate::Astrid, quadrant(1)),
        Err(GameError::IllegalMove(IllegalMove::PirateNotOnBoard(
            Pirate::Astrid
        )))
    );
}

#[test]
fn test_view_serializes() {
    let mut board = boarded(&[(Pirate::Elena, 0), (Pirate::Astrid, 2)], 4);
    board.determine_board_after_kraken_move(&[lane(4), lane(4), lane(4)]);
    let view = board.view();

    let json = serde_json::to_string(&view).unwrap();
    let back: BoardView = serde_json::from_str(&json).unwrap();
    assert_eq!(back, view);
    assert_eq!(back.kraken_lane, Some(lane(4)));
    assert_eq!(back.ship_damage(), 1);
    assert_eq!(back.pirates_in(quadrant(2)).collect::<Vec<_>>(), vec![Pirate::Astrid]);
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed: u64| {
        let mut board = GameBoard::new([(Pirate::Elena, 0)], seed).unwrap();
        let mut rolls = Vec::new();
        for _ in 0..20 {
            let roll = board.roll_dice();
            let lanes = GameBoard::determine_kraken_moves(&roll).unwrap();
            board.determine_board_after_kraken_move(&lanes);
            rolls.push(roll);
        }
        (rolls, board.view())
    };

    assert_eq!(play(9), play(9));
    assert_ne!(play(9).0, play(10).0);
}
