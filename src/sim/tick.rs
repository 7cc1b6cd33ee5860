//! Fixed timestep simulation tick
//!
//! One call to [`tick`] is one frame at [`TICK_RATE`]: steer, fire, thrust,
//! move everything, then resolve collisions.

use glam::Vec2;

use super::arena::{AsteroidId, BulletId};
use super::collision::{any_live_asteroids, find_first_collision, ship_collides};
use super::level;
use super::state::{Bullet, GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::polar_to_cartesian;

/// Player intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    /// Fire button held (rate limited to SHOTS_PER_SECOND)
    pub fire: bool,
}

/// What the bullet pass did this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// No bullet hit anything and asteroids remain
    Miss,
    /// A bullet hit an asteroid; `fragment` is set when it split
    Hit {
        bullet: BulletId,
        asteroid: AsteroidId,
        fragment: Option<AsteroidId>,
    },
    /// The field was empty and the next level was seeded
    LevelCleared,
}

/// Advance the game state by one fixed timestep
///
/// Events from the previous tick are discarded, so callers must drain them
/// between ticks.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.clear_events();
    state.time_ticks += 1;

    // Holds freeze the scene until they run out
    match state.phase {
        GamePhase::LevelCleared { ticks_remaining } => {
            state.phase = if ticks_remaining > 1 {
                GamePhase::LevelCleared {
                    ticks_remaining: ticks_remaining - 1,
                }
            } else {
                GamePhase::Playing
            };
            return;
        }
        GamePhase::Crashed { ticks_remaining } => {
            if ticks_remaining > 1 {
                state.phase = GamePhase::Crashed {
                    ticks_remaining: ticks_remaining - 1,
                };
            } else {
                level::restart(state);
            }
            return;
        }
        GamePhase::Playing => {}
    }

    if input.turn_left {
        state.ship.turn(-SHIP_TURN_RATE);
    }
    if input.turn_right {
        state.ship.turn(SHIP_TURN_RATE);
    }

    state.ticks_since_shot = state.ticks_since_shot.saturating_add(1);
    if input.fire && state.ticks_since_shot > FIRE_INTERVAL_TICKS {
        state.ticks_since_shot = 0;
        fire(state);
    }

    state.thrusting = input.thrust;
    if input.thrust {
        state.ship.thrust();
        state.emit(GameEvent::Thrust);
    }

    update_scene(state);
    resolve_bullet_collisions(state);

    if ship_collides(&state.ship, &state.asteroids) {
        level::crash(state);
    }

    // Score bleeds away while playing
    state.score = state.score.saturating_sub(1);
}

/// Wrap a coordinate to the opposite edge once it leaves `[0, extent)`
#[inline]
pub fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        extent - 1.0
    } else if value >= extent {
        0.0
    } else {
        value
    }
}

/// Toroidal screen wrap, each axis independently
#[inline]
pub fn wrap_position(pos: Vec2) -> Vec2 {
    Vec2::new(
        wrap_axis(pos.x, SCREEN_WIDTH),
        wrap_axis(pos.y, SCREEN_HEIGHT),
    )
}

/// Integrate every entity by one tick
///
/// Asteroids and the ship wrap around the screen; bullets do not and keep
/// flying until their slot is recycled or they hit something.
pub fn update_scene(state: &mut GameState) {
    for (_, asteroid) in state.asteroids.iter_mut() {
        asteroid.pos = wrap_position(asteroid.pos + asteroid.velocity());
    }

    for (_, bullet) in state.bullets.iter_mut() {
        bullet.pos += bullet.vel;
    }

    state.ship.pos = wrap_position(state.ship.pos + state.ship.vel);
}

/// Shoot from the ship's nose along its heading
///
/// Costs SHOT_PENALTY points (never below zero).
pub fn fire(state: &mut GameState) -> BulletId {
    let bullet = Bullet {
        pos: state.ship.muzzle(),
        vel: polar_to_cartesian(BULLET_SPEED, state.ship.heading),
    };
    let id = state.bullets.push(bullet);
    state.score = state.score.saturating_sub(SHOT_PENALTY);
    state.emit(GameEvent::ShotFired);
    id
}

/// Resolve at most one bullet hit, or clear the level if nothing is left
pub fn resolve_bullet_collisions(state: &mut GameState) -> CollisionOutcome {
    if let Some((bullet, asteroid)) = find_first_collision(&state.bullets, &state.asteroids) {
        state.bullets.deactivate(bullet);
        return hit_asteroid(state, bullet, asteroid);
    }

    if !any_live_asteroids(&state.asteroids) {
        level::advance_level(state);
        return CollisionOutcome::LevelCleared;
    }

    CollisionOutcome::Miss
}

fn hit_asteroid(state: &mut GameState, bullet: BulletId, id: AsteroidId) -> CollisionOutcome {
    let Some(asteroid) = state.asteroids.get(id).copied() else {
        return CollisionOutcome::Miss;
    };
    let reward = asteroid.hit_reward();

    let fragment = if asteroid.can_split() {
        match state.asteroids.split(id) {
            Ok(fragment) => Some(fragment),
            Err(err) => {
                // Saturate: the hit still lands, only the second half is lost
                log::warn!("Dropping fragment of asteroid {}: {}", id.0, err);
                if let Some(parent) = state.asteroids.get_mut(id) {
                    parent.shrink();
                }
                None
            }
        }
    } else {
        state.asteroids.destroy(id);
        None
    };

    state.score = state.score.saturating_add(reward);
    state.emit(GameEvent::AsteroidHit {
        destroyed: fragment.is_none() && state.asteroids.get(id).is_none(),
    });

    CollisionOutcome::Hit {
        bullet,
        asteroid: id,
        fragment,
    }
}
