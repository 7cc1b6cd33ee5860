//! Whole-game scenarios driven through the public API

use glam::Vec2;

use vector_asteroids::consts::{BULLET_CAPACITY, LEVEL_CLEAR_BONUS, LEVEL_CLEAR_HOLD_TICKS};
use vector_asteroids::sim::{
    Asteroid, AsteroidId, CollisionOutcome, GameEvent, GamePhase, GameState, Ship, TickInput,
    fire, resolve_bullet_collisions, tick, update_scene,
};

/// Ship at (300,300) facing +x with a single still asteroid 100 units ahead
fn shooting_range(score: u32) -> GameState {
    let mut state = GameState::new(1);
    state.ship = Ship {
        pos: Vec2::new(300.0, 300.0),
        heading: 0.0,
        vel: Vec2::ZERO,
    };
    state.asteroids.clear();
    state.bullets.clear();
    state.score = score;
    state
        .asteroids
        .push(Asteroid::new(Vec2::new(400.0, 300.0), 32.0, 0.0, 0.0))
        .unwrap();
    state
}

#[test]
fn test_single_shot_splits_asteroid() {
    let mut state = shooting_range(1000);
    fire(&mut state);
    assert_eq!(state.score, 990);

    let mut outcome = CollisionOutcome::Miss;
    let mut steps = 0;
    while outcome == CollisionOutcome::Miss && steps < 100 {
        update_scene(&mut state);
        outcome = resolve_bullet_collisions(&mut state);
        steps += 1;
    }

    assert!(matches!(
        outcome,
        CollisionOutcome::Hit {
            asteroid: AsteroidId(0),
            fragment: Some(AsteroidId(1)),
            ..
        }
    ));
    assert_eq!(state.asteroids.live_count(), 2);
    assert_eq!(state.asteroids.get(AsteroidId(0)).unwrap().radius, 16.0);
    assert_eq!(state.asteroids.get(AsteroidId(1)).unwrap().radius, 16.0);
    assert_eq!(state.score, 1670);
    assert_eq!(state.bullets.active_count(), 0);

    let events: Vec<_> = state.drain_events().collect();
    assert_eq!(
        events,
        vec![
            GameEvent::ShotFired,
            GameEvent::AsteroidHit { destroyed: false }
        ]
    );
}

#[test]
fn test_last_asteroid_clears_level() {
    let mut state = shooting_range(0);
    state.asteroids.clear();
    state
        .asteroids
        .push(Asteroid::new(Vec2::new(400.0, 300.0), 8.0, 0.0, 0.0))
        .unwrap();

    fire(&mut state);
    let mut outcome = CollisionOutcome::Miss;
    while outcome == CollisionOutcome::Miss {
        update_scene(&mut state);
        outcome = resolve_bullet_collisions(&mut state);
    }
    assert!(matches!(
        outcome,
        CollisionOutcome::Hit { fragment: None, .. }
    ));

    // The next pass finds nothing left
    assert_eq!(
        resolve_bullet_collisions(&mut state),
        CollisionOutcome::LevelCleared
    );
    assert_eq!(state.level, 2);
    assert_eq!(state.score, 1000 - 80 + LEVEL_CLEAR_BONUS);
    assert_eq!(state.asteroids.live_count(), 4);
    assert_eq!(
        state.phase,
        GamePhase::LevelCleared {
            ticks_remaining: LEVEL_CLEAR_HOLD_TICKS
        }
    );

    // The scene stays frozen for the hold, then play resumes
    let frozen = state.snapshot();
    for _ in 0..LEVEL_CLEAR_HOLD_TICKS {
        tick(&mut state, &TickInput::default());
    }
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.asteroids.iter().count(), frozen.asteroids.len());
}

#[test]
fn test_bullet_ring_recycles_oldest() {
    let mut state = shooting_range(0);
    // Fire away from the asteroid so nothing gets consumed
    state.ship.heading = std::f32::consts::PI;

    let first = fire(&mut state);
    for _ in 1..BULLET_CAPACITY {
        fire(&mut state);
    }
    assert_eq!(state.bullets.active_count(), BULLET_CAPACITY);

    let recycled = fire(&mut state);
    assert_eq!(recycled, first);
    assert_eq!(state.bullets.active_count(), BULLET_CAPACITY);
}

#[test]
fn test_same_seed_same_game() {
    let input = TickInput {
        turn_left: true,
        fire: true,
        ..Default::default()
    };
    let mut a = GameState::new(99);
    let mut b = GameState::new(99);
    for _ in 0..600 {
        tick(&mut a, &input);
        tick(&mut b, &input);
    }
    let a = serde_json::to_string(&a.snapshot()).unwrap();
    let b = serde_json::to_string(&b.snapshot()).unwrap();
    assert_eq!(a, b);
}
