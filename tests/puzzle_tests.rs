//! Puzzle engine scenario tests.
//!
//! These walk the engine through concrete ring layouts and check link
//! propagation, the solved check and the one-shot solved event.

use mandala_path::core::{Direction, Move, PuzzleConfig, PuzzleError, Symbol};
use mandala_path::engine::{compute_links, is_solved, PuzzleEngine, PuzzleStatus, RotateOutcome};

fn three_rings() -> PuzzleConfig {
    PuzzleConfig::with_single_link(3, 8, 4)
}

/// Rotating a ring drags every ring linked to it, and nothing else.
#[test]
fn test_linked_group_propagation() {
    let mut engine = PuzzleEngine::from_rotations(three_rings(), &[0, 0, 3]).unwrap();
    assert_eq!(engine.links().to_vec(), vec![true, false]);

    let outcome = engine.rotate(1, Direction::Clockwise).unwrap();
    assert_eq!(engine.rotations(), &[1, 1, 3]);

    let record = outcome.record().unwrap();
    assert_eq!((record.group_start, record.group_end), (0, 2));
    assert_eq!(record.group_len(), 2);
    assert_eq!(engine.moves(), 1);
}

/// All-equal rotations are solved; a single offset breaks the link.
#[test]
fn test_solved_and_broken_layouts() {
    let config = three_rings();
    assert!(is_solved(&config, &[0, 0, 0]));

    let links = compute_links(&config, &[0, 4, 0]);
    assert!(!links[0]);
    assert!(!is_solved(&config, &[0, 4, 0]));
}

/// Two rings one step apart come back into line after a full lap.
#[test]
fn test_full_lap_solves() {
    let config = PuzzleConfig::with_single_link(2, 8, 0);
    let mut engine = PuzzleEngine::from_rotations(config, &[0, 1]).unwrap();

    for step in 0..7 {
        let outcome = engine.rotate(1, Direction::Clockwise).unwrap();
        assert_eq!(outcome.is_solved(), step == 6);
    }
    assert_eq!(engine.rotations(), &[0, 0]);
    assert_eq!(engine.status(), PuzzleStatus::Solved);
    assert_eq!(engine.moves(), 7);

    let event = engine.take_solved_event().unwrap();
    assert_eq!(event.moves, 7);
    assert!(engine.take_solved_event().is_none());
}

/// Once solved, rotations are ignored and nothing changes.
#[test]
fn test_rotate_after_solved_is_ignored() {
    let mut engine = PuzzleEngine::from_rotations(three_rings(), &[2, 2, 2]).unwrap();
    assert!(engine.is_solved());

    let outcome = engine.rotate(0, Direction::CounterClockwise).unwrap();
    assert_eq!(outcome, RotateOutcome::Ignored);
    assert_eq!(engine.rotations(), &[2, 2, 2]);
    assert_eq!(engine.moves(), 0);
    assert!(engine.history().is_empty());
}

/// After a reset the scramble can always be worked back to solved.
#[test]
fn test_reset_then_solve() {
    let mut engine = PuzzleEngine::new(three_rings(), 1234).unwrap();
    engine.rotate(0, Direction::Clockwise).unwrap();
    engine.reset();
    assert_eq!(engine.moves(), 0);
    assert!(!engine.is_solved());

    // Turn the outermost unaligned ring until it matches ring 0.
    let mut guard = 0;
    while !engine.is_solved() {
        let rotations = engine.rotations().to_vec();
        let ring = (1..rotations.len())
            .rev()
            .find(|&r| rotations[r] != rotations[0])
            .unwrap();
        engine.apply(Move::ccw(ring)).unwrap();
        guard += 1;
        assert!(guard < 100);
    }
    assert!(engine.take_solved_event().is_some());
}

/// A single ring has no links and is always solved.
#[test]
fn test_single_ring() {
    let config = PuzzleConfig::with_single_link(1, 8, 0);
    let engine = PuzzleEngine::from_rotations(config, &[5]).unwrap();
    assert!(engine.links().is_empty());
    assert!(engine.is_solved());
}

/// Configs that can never be played are rejected up front.
#[test]
fn test_invalid_configs() {
    let no_link = PuzzleConfig::from_symbols(3, vec![Symbol::Fire; 8]);
    assert!(matches!(PuzzleEngine::new(no_link.clone(), 1), Err(PuzzleError::NoLinkSymbol)));
    assert!(PuzzleEngine::new(no_link.allow_unsolvable(), 1).is_ok());

    let one_segment = PuzzleConfig::with_single_link(3, 1, 0);
    assert!(matches!(
        PuzzleEngine::new(one_segment, 1),
        Err(PuzzleError::AlwaysSolved { ring_count: 3 })
    ));

    let mut engine = PuzzleEngine::new(three_rings(), 1).unwrap();
    assert!(matches!(
        engine.rotate(3, Direction::Clockwise),
        Err(PuzzleError::RingOutOfRange { ring: 3, ring_count: 3 })
    ));
}

/// Symbols are read through each ring's rotation.
#[test]
fn test_symbol_positions() {
    let engine = PuzzleEngine::from_rotations(three_rings(), &[0, 1, 0]).unwrap();
    assert_eq!(engine.symbol_at(0, 4).unwrap(), Symbol::Logo);
    assert_eq!(engine.symbol_at(1, 5).unwrap(), Symbol::Logo);
    assert_eq!(engine.symbol_at(1, 4).unwrap(), Symbol::Lotus);
}
