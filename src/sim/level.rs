//! Level setup and progression
//!
//! Seeds asteroid fields, advances levels and resets the run after a crash.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, GameEvent, GamePhase, GameState, Ship};
use crate::consts::*;

/// Reset the ship and bullets and seed a fresh asteroid field for `state.level`
pub fn init_level(state: &mut GameState) {
    state.ship = Ship::default();
    state.thrusting = false;

    state.asteroids.clear();
    for _ in 0..ASTEROID_BASE_COUNT {
        let asteroid = spawn_asteroid(&mut state.rng, state.ship.pos, state.level);
        if let Err(err) = state.asteroids.push(asteroid) {
            log::error!("Level {} field seeding stopped: {}", state.level, err);
            break;
        }
    }

    state.bullets.clear();
}

/// Roll a full-size asteroid away from `avoid`
///
/// Positions too close to `avoid` are resampled so a level never starts with
/// the ship inside a rock.
pub fn spawn_asteroid<R: Rng + ?Sized>(rng: &mut R, avoid: Vec2, level: u32) -> Asteroid {
    let pos = loop {
        let candidate = Vec2::new(
            rng.random_range(0..SCREEN_WIDTH as u32) as f32,
            rng.random_range(0..SCREEN_HEIGHT as u32) as f32,
        );
        if candidate.distance_squared(avoid) >= SPAWN_CLEARANCE_SQ {
            break candidate;
        }
    };

    let radius = ASTEROID_MAX_RADIUS;
    let mut asteroid = Asteroid::new(pos, radius, 0.0, 0.0);
    for r in &mut asteroid.silhouette {
        *r = radius + rng.random::<f32>() * radius * SILHOUETTE_JITTER;
    }
    asteroid.heading = rng.random::<f32>() * TAU;
    asteroid.speed = (rng.random::<f32>() + 0.2) * level as f32;
    asteroid
}

/// Move to the next level after the field was emptied
pub fn advance_level(state: &mut GameState) {
    state.level += 1;
    init_level(state);
    state.score = state.score.saturating_add(LEVEL_CLEAR_BONUS);
    state.emit(GameEvent::LevelCleared { level: state.level });
    state.phase = GamePhase::LevelCleared {
        ticks_remaining: LEVEL_CLEAR_HOLD_TICKS,
    };
    log::info!("Level {} (score {})", state.level, state.score);
}

/// Ship was hit: freeze the scene and bank the score
pub fn crash(state: &mut GameState) {
    state.emit(GameEvent::ShipDestroyed);
    if state.record_high_score() {
        log::info!("New high score: {}", state.high_score);
    }
    state.phase = GamePhase::Crashed {
        ticks_remaining: CRASH_HOLD_TICKS,
    };
    log::info!("Ship destroyed on level {} with score {}", state.level, state.score);
}

/// Start a new run after the crash hold, keeping the high score
pub fn restart(state: &mut GameState) {
    state.score = 0;
    state.level = 1;
    init_level(state);
    state.phase = GamePhase::Playing;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawned_asteroids_keep_clearance() {
        let mut rng = Pcg32::seed_from_u64(42);
        let center = Ship::default().pos;
        for level in 1..20 {
            let a = spawn_asteroid(&mut rng, center, level);
            assert!(a.pos.distance_squared(center) >= SPAWN_CLEARANCE_SQ);
            assert!(a.pos.x >= 0.0 && a.pos.x < SCREEN_WIDTH);
            assert!(a.pos.y >= 0.0 && a.pos.y < SCREEN_HEIGHT);
            assert_eq!(a.pos.x.fract(), 0.0);
        }
    }

    #[test]
    fn test_spawned_silhouette_jitter() {
        let mut rng = Pcg32::seed_from_u64(9);
        let a = spawn_asteroid(&mut rng, Vec2::ZERO, 1);
        assert_eq!(a.radius, ASTEROID_MAX_RADIUS);
        for &r in &a.silhouette {
            assert!(r >= ASTEROID_MAX_RADIUS);
            assert!(r < ASTEROID_MAX_RADIUS * (1.0 + SILHOUETTE_JITTER));
        }
        assert!((0.0..TAU).contains(&a.heading));
    }

    #[test]
    fn test_spawn_speed_scales_with_level() {
        let mut rng = Pcg32::seed_from_u64(5);
        for level in [1u32, 3, 10] {
            let a = spawn_asteroid(&mut rng, Vec2::ZERO, level);
            assert!(a.speed >= 0.2 * level as f32);
            assert!(a.speed < 1.2 * level as f32);
        }
    }

    #[test]
    fn test_init_level_resets_ship_and_bullets() {
        let mut state = GameState::new(11);
        state.ship.pos = Vec2::new(10.0, 10.0);
        state.ship.vel = Vec2::new(3.0, 3.0);
        state.bullets.push(crate::sim::Bullet {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
        });

        init_level(&mut state);

        assert_eq!(state.ship, Ship::default());
        assert_eq!(state.bullets.active_count(), 0);
        assert_eq!(state.bullets.cursor(), 0);
        assert_eq!(state.asteroids.len(), ASTEROID_BASE_COUNT);
        assert_eq!(state.asteroids.live_count(), ASTEROID_BASE_COUNT);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = GameState::new(1234);
        let b = GameState::new(1234);
        let pa: Vec<_> = a.asteroids.iter().map(|(_, x)| *x).collect();
        let pb: Vec<_> = b.asteroids.iter().map(|(_, x)| *x).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_advance_level() {
        let mut state = GameState::new(2);
        state.score = 100;
        advance_level(&mut state);
        assert_eq!(state.level, 2);
        assert_eq!(state.score, 5100);
        assert_eq!(state.events(), &[GameEvent::LevelCleared { level: 2 }]);
        assert_eq!(
            state.phase,
            GamePhase::LevelCleared {
                ticks_remaining: LEVEL_CLEAR_HOLD_TICKS
            }
        );
    }

    #[test]
    fn test_crash_then_restart_keeps_high_score() {
        let mut state = GameState::new(3);
        state.level = 4;
        state.score = 2500;
        crash(&mut state);
        assert_eq!(state.high_score, 2500);
        assert!(matches!(state.phase, GamePhase::Crashed { .. }));

        restart(&mut state);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.high_score, 2500);
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
