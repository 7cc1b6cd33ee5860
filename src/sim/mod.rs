//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use arena::{AsteroidField, AsteroidId, BulletId, BulletRing, Slot};
pub use collision::{any_live_asteroids, find_first_collision, point_in_circle, ship_collides};
pub use level::{advance_level, init_level};
pub use state::{Asteroid, Bullet, GameEvent, GamePhase, GameState, SceneSnapshot, Ship};
pub use tick::{
    CollisionOutcome, TickInput, fire, resolve_bullet_collisions, tick, update_scene,
    wrap_position,
};
