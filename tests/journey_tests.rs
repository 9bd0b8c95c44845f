//! End-to-end player journey tests.
//!
//! A player works through levels via `PlaySession`, progress is written to a
//! store, and unlocks and titles follow from what was recorded.

use mandala_path::catalog::{LevelKey, MandalaCatalog, LEVELS_PER_MANDALA};
use mandala_path::core::Direction;
use mandala_path::host::{
    AudioClip, AudioRequest, CollaboratorError, HostError, InsightRequest, InsightStatus,
    PlaySession, SessionConfig,
};
use mandala_path::progress::{MemoryProgressStore, PlayerTitle, ProgressStore};

fn solve(session: &mut PlaySession) {
    while !session.is_solved() {
        let rotations = session.engine().rotations().to_vec();
        let ring = (1..rotations.len())
            .find(|&r| rotations[r] != rotations[0])
            .unwrap();
        session.rotate(ring, Direction::Clockwise).unwrap();
    }
}

fn no_insight(_: &InsightRequest) -> Result<String, CollaboratorError> {
    Err(CollaboratorError::Failed("offline".to_string()))
}

fn no_audio(_: &AudioRequest) -> Result<AudioClip, CollaboratorError> {
    Err(CollaboratorError::Empty)
}

/// Play every level of a mandala in order, writing progress as we go.
fn complete_mandala(
    catalog: &MandalaCatalog,
    store: &mut MemoryProgressStore,
    config: &SessionConfig,
    mandala_id: &str,
) {
    for level in 0..LEVELS_PER_MANDALA {
        let key = LevelKey::new(mandala_id, level);
        let mut session =
            PlaySession::start_unlocked(catalog, &*store, key, config.clone()).unwrap();
        let base_rings = catalog.require(mandala_id).unwrap().base_rings;
        assert_eq!(
            session.engine().config().ring_count,
            base_rings + level as usize / 2
        );
        solve(&mut session);
        session.resolve_pending(&mut no_insight, &mut no_audio);
        assert!(matches!(session.reveal().unwrap().insight, InsightStatus::Unavailable(_)));
        assert_eq!(session.flush_progress(store), 1);
    }
}

#[test]
fn test_first_mandala_unlocks_second() {
    let catalog = MandalaCatalog::builtin();
    let mut store = MemoryProgressStore::new();
    let config = SessionConfig::default().with_user("pilgrim").with_seed(9);

    assert!(matches!(
        PlaySession::start_unlocked(&catalog, &store, LevelKey::new("jala", 0), config.clone()),
        Err(HostError::Locked(_))
    ));

    complete_mandala(&catalog, &mut store, &config, "agni");

    let progress = store.load("pilgrim").unwrap();
    assert!(progress.is_mandala_complete("agni"));
    assert_eq!(progress.mandalas_completed(), 1);
    assert_eq!(progress.title(), PlayerTitle::Apprentice);
    assert!(progress.is_mandala_unlocked(&catalog, "jala"));
    assert!(!progress.is_mandala_unlocked(&catalog, "prithvi"));
    assert_eq!(progress.next_level("agni"), None);
    assert_eq!(progress.next_level("jala"), Some(0));

    assert!(PlaySession::start_unlocked(&catalog, &store, LevelKey::new("jala", 0), config).is_ok());
}

#[test]
fn test_replaying_a_level_does_not_double_count() {
    let catalog = MandalaCatalog::builtin();
    let mut store = MemoryProgressStore::new();
    let config = SessionConfig::default().with_user("pilgrim");

    for _ in 0..2 {
        let mut session =
            PlaySession::start(&catalog, LevelKey::new("agni", 0), config.clone()).unwrap();
        solve(&mut session);
        session.flush_progress(&mut store);
    }
    assert_eq!(store.load("pilgrim").unwrap().levels_completed("agni"), 1);
}

#[test]
fn test_progress_survives_snapshot() {
    let catalog = MandalaCatalog::builtin();
    let mut store = MemoryProgressStore::new();
    let config = SessionConfig::default().with_user("pilgrim");

    let mut session = PlaySession::start(&catalog, LevelKey::new("agni", 0), config).unwrap();
    solve(&mut session);
    session.flush_progress(&mut store);

    let bytes = store.snapshot().unwrap();
    let restored = MemoryProgressStore::restore(&bytes).unwrap();
    assert!(restored
        .load("pilgrim")
        .unwrap()
        .is_completed(&LevelKey::new("agni", 0)));
}

#[test]
fn test_custom_catalog_from_json() {
    let json = r#"[
        {"id": "tiny", "name": "Tiny Mandala", "base_rings": 2, "segments": 4,
         "symbols": ["logo", "lotus", "fire", "lotus"]}
    ]"#;
    let catalog = MandalaCatalog::from_json(json).unwrap();
    let mut session =
        PlaySession::start(&catalog, LevelKey::new("tiny", 8), SessionConfig::default()).unwrap();
    assert_eq!(session.engine().config().ring_count, 6);
    solve(&mut session);
    assert_eq!(session.reveal().unwrap().mandala_name, "Tiny Mandala");
}
