//! End-to-end session scenarios over the public API.

use treasure_hunt::game::events::GameEventData;
use treasure_hunt::game::position::{from_fn, ScriptedPositions};
use treasure_hunt::{
    DeterministicRng, GameConfig, GameSession, ManualClock, MatPoint, Position, ProximityLevel,
    ScriptedRng, SessionPhase, TreasureRng,
};

fn scripted_session(points: &[(i32, i32)]) -> (GameSession<ScriptedRng, ManualClock>, ManualClock) {
    let clock = ManualClock::at_epoch();
    let rng = ScriptedRng::from_points(points.iter().copied());
    (GameSession::with_parts(GameConfig::default(), rng, clock.clone()), clock)
}

#[test]
fn single_treasure_walkthrough() {
    let (mut session, clock) = scripted_session(&[(50, 0)]);
    assert_eq!(session.initialize_default().unwrap(), 1);
    let started = session.started_at().unwrap();

    let d = session.treasure_distance(&mut Position::new(50.0, 10.0)).unwrap();
    assert!((d - 10.0).abs() < 1e-9);

    // 16 away is out of range
    assert_eq!(session.try_collect_treasure(&mut Position::new(50.0, 16.0)), Some(false));
    assert_eq!(session.remaining_treasures(), 1);

    clock.advance_secs(42);
    let mut cube = Position::new(55.0, 5.0);
    let d = session.treasure_distance(&mut cube).unwrap();
    assert!((d - 7.0710678).abs() < 1e-6);
    assert_eq!(session.try_collect_treasure(&mut cube), Some(true));

    assert_eq!(session.remaining_treasures(), 0);
    let finished = session.finished_at().unwrap();
    assert!(finished >= started);
    assert_eq!(session.elapsed().unwrap().as_secs(), 42);

    // Nothing left to find
    assert_eq!(session.treasure_distance(&mut cube), None);
    assert_eq!(session.try_collect_treasure(&mut cube), Some(false));
}

#[test]
fn collection_range_is_inclusive() {
    let (mut session, _) = scripted_session(&[(50, 0)]);
    session.initialize_default().unwrap();

    assert_eq!(session.try_collect_treasure(&mut Position::new(50.0, 15.0001)), Some(false));
    assert_eq!(session.try_collect_treasure(&mut Position::new(50.0, 15.0)), Some(true));
}

#[test]
fn overlapping_ranges_collect_in_placement_order() {
    // Manhattan 30 apart, Euclidean ~22.4, so ranges overlap
    let (mut session, _) = scripted_session(&[(0, 0), (20, 10)]);
    session.initialize_treasures(2.0).unwrap();

    // ~13.4 from the first, ~8.9 from the second: the first placed still wins
    let mut cube = Position::new(12.0, 6.0);
    assert_eq!(session.try_collect_treasure(&mut cube), Some(true));
    assert_eq!(session.collected(), &[MatPoint::new(0, 0)]);

    assert_eq!(session.try_collect_treasure(&mut cube), Some(true));
    assert_eq!(session.collected(), &[MatPoint::new(0, 0), MatPoint::new(20, 10)]);
    assert_eq!(session.phase(), SessionPhase::Finished { all_collected: true });
}

#[test]
fn counts_are_normalized() {
    let cases = [
        (1.0, 1),
        (2.5, 3),
        (2.4, 2),
        (4.5, 5),
        (5.0, 5),
        (6.0, 5),
        (100.0, 5),
        (0.0, 1),
        (-2.0, 1),
    ];

    for (requested, expected) in cases {
        let mut session = GameSession::with_parts(
            GameConfig::default(),
            DeterministicRng::new(9),
            ManualClock::at_epoch(),
        );
        assert_eq!(session.initialize_treasures(requested).unwrap(), expected, "requested {requested}");
        assert_eq!(session.remaining_treasures(), expected);
        assert_eq!(session.treasures().len(), expected);
    }
}

#[test]
fn reset_then_initialize_starts_clean() {
    let mut session = GameSession::with_parts(
        GameConfig::default(),
        DeterministicRng::new(77),
        ManualClock::at_epoch(),
    );
    session.initialize_treasures(5.0).unwrap();
    let first = session.treasures()[0];
    session.try_collect_treasure(&mut first.to_position());
    session.finish_game();

    session.reset_game();
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(session.remaining_treasures(), 0);
    assert_eq!(session.started_at(), None);
    assert_eq!(session.finished_at(), None);

    session.initialize_treasures(3.0).unwrap();
    assert_eq!(session.treasures().len(), 3);
    assert!(session.collected().is_empty());
    assert_eq!(session.remaining_treasures(), 3);
    assert!(session.started_at().is_some());
    assert_eq!(session.finished_at(), None);
    assert_eq!(session.phase(), SessionPhase::Hunting);
}

#[test]
fn reinitializing_discards_progress() {
    let (mut session, _) = scripted_session(&[(50, 0), (-50, 0), (100, 80)]);
    session.initialize_treasures(2.0).unwrap();
    session.try_collect_treasure(&mut Position::new(50.0, 0.0));
    assert_eq!(session.remaining_treasures(), 1);

    session.initialize_treasures(1.0).unwrap();
    assert_eq!(session.treasures(), &[MatPoint::new(100, 80)]);
    assert_eq!(session.remaining_treasures(), 1);
}

#[test]
fn lost_tracking_changes_nothing() {
    let (mut session, _) = scripted_session(&[(50, 0)]);
    session.initialize_default().unwrap();
    session.take_events();

    let mut source = ScriptedPositions::new([None, None]);
    assert_eq!(session.treasure_distance(&mut source), None);
    assert_eq!(session.try_collect_treasure(&mut source), None);

    assert_eq!(session.remaining_treasures(), 1);
    assert!(session.take_events().is_empty());
}

#[test]
fn proximity_tracks_an_approaching_cube() {
    let (mut session, _) = scripted_session(&[(100, 0)]);
    session.initialize_default().unwrap();

    let mut x = -20.0;
    let mut source = from_fn(move || {
        x += 20.0;
        Some(Position::new(x, 0.0))
    });

    let levels: Vec<_> = (0..6)
        .map(|_| session.proximity(&mut source).unwrap())
        .collect();

    // Distances 100, 80, 60, 40, 20, 0
    assert_eq!(
        levels,
        vec![
            ProximityLevel::Far,
            ProximityLevel::Near,
            ProximityLevel::Near,
            ProximityLevel::Close,
            ProximityLevel::Close,
            ProximityLevel::Collectible,
        ]
    );
}

#[test]
fn manual_finish_reports_partial_progress() {
    let (mut session, clock) = scripted_session(&[(50, 0), (-50, 0), (0, 60)]);
    session.initialize_treasures(3.0).unwrap();
    session.try_collect_treasure(&mut Position::new(-50.0, 0.0));

    clock.advance_secs(125);
    let summary = session.finish_game();

    assert_eq!(summary.collected, 1);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.to_string(), "found 1/3 treasures in 2:05");

    let finished: Vec<_> = session
        .take_events()
        .into_iter()
        .filter(|e| matches!(e.data, GameEventData::SessionFinished { .. }))
        .collect();
    assert_eq!(finished.len(), 1);
}

/// Any `rand` generator can drive placement.
struct RandRng(rand::rngs::StdRng);

impl TreasureRng for RandRng {
    fn next_int_range(&mut self, min: i32, max: i32) -> i32 {
        use rand::Rng;
        self.0.gen_range(min..=max)
    }
}

#[test]
fn foreign_rng_can_be_injected() {
    use rand::SeedableRng;

    let rng = RandRng(rand::rngs::StdRng::seed_from_u64(2024));
    let mut session = GameSession::with_parts(GameConfig::default(), rng, ManualClock::at_epoch());

    assert_eq!(session.initialize_treasures(5.0).unwrap(), 5);
    let treasures = session.treasures();
    for (i, a) in treasures.iter().enumerate() {
        for b in &treasures[i + 1..] {
            assert!(a.manhattan_distance(*b) >= 30);
        }
    }
}

#[test]
fn zero_separation_cannot_stack_treasures() {
    let config = GameConfig {
        bounds: treasure_hunt::MatBounds::new(0, 0, 0, 0),
        min_separation: 0,
        max_placement_attempts: 100,
        ..GameConfig::default()
    };
    assert!(config.validate().is_err());

    let mut session = GameSession::with_parts(config, DeterministicRng::new(5), ManualClock::at_epoch());
    assert!(session.initialize_treasures(2.0).is_err());
    assert_eq!(session.phase(), SessionPhase::Idle);

    assert_eq!(session.initialize_treasures(1.0).unwrap(), 1);
    assert_eq!(session.try_collect_treasure(&mut Position::new(0.0, 0.0)), Some(true));
    assert_eq!(session.phase(), SessionPhase::Finished { all_collected: true });
}
