//! Vector Asteroids - simulation core for a classic vector arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, level progression)
//! - `renderer`: Line geometry and HUD text for the render collaborator
//! - `audio`: Mapping of simulation events to sound effects
//! - `settings`: Platform-facing preferences loaded from JSON

pub mod audio;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{SettingsError, SimError};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
///
/// Distances are in screen pixels, speeds in pixels per tick.
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Asteroid arena capacity (worst-case fragmentation)
    pub const ASTEROID_CAPACITY: usize = 80;
    /// Asteroids spawned at the start of every level
    pub const ASTEROID_BASE_COUNT: usize = 4;
    pub const ASTEROID_MAX_RADIUS: f32 = 32.0;
    /// Asteroids this small are destroyed instead of split
    pub const ASTEROID_MIN_RADIUS: f32 = 8.0;
    /// Silhouette samples per asteroid
    pub const ASTEROID_VERTICES: usize = 16;
    /// Silhouette jitter as a fraction of the radius
    pub const SILHOUETTE_JITTER: f32 = 0.2;
    /// Minimum squared distance between a fresh asteroid and the ship
    pub const SPAWN_CLEARANCE_SQ: f32 = 5000.0;
    /// Speed multiplier applied to both halves of a split asteroid
    pub const FRAGMENT_SPEED_FACTOR: f32 = 1.5;

    /// Bullet ring buffer size
    pub const BULLET_CAPACITY: usize = 50;
    pub const SHOTS_PER_SECOND: u32 = 5;
    pub const BULLET_SPEED: f32 = 5.0;
    /// Ticks that must pass between two shots
    pub const FIRE_INTERVAL_TICKS: u32 = TICK_RATE / SHOTS_PER_SECOND;

    /// Ship geometry
    pub const SHIP_NOSE_LENGTH: f32 = 25.0;
    pub const SHIP_TAIL_LENGTH: f32 = 15.0;
    /// Bullets appear slightly ahead of the nose
    pub const MUZZLE_OFFSET: f32 = 30.0;
    /// Radians per tick
    pub const SHIP_TURN_RATE: f32 = 0.1;
    /// Velocity gained per tick of thrust
    pub const SHIP_THRUST: f32 = 0.1;

    /// Scoring
    pub const HIT_BASE_REWARD: f32 = 1000.0;
    pub const HIT_RADIUS_PENALTY: f32 = 10.0;
    pub const SHOT_PENALTY: u32 = 10;
    pub const LEVEL_CLEAR_BONUS: u32 = 5000;

    /// Pause after a level is cleared (1 second)
    pub const LEVEL_CLEAR_HOLD_TICKS: u32 = TICK_RATE;
    /// Crash animation (10 blinks of 100ms) plus a 2 second pause
    pub const CRASH_HOLD_TICKS: u32 = 3 * TICK_RATE;

    const _: () = assert!(ASTEROID_BASE_COUNT <= ASTEROID_CAPACITY);
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(3.0 * PI + 0.5) - (-PI + 0.5)).abs() < 1e-5);
        let wrapped = normalize_angle(3.0 * PI);
        assert!((-PI..=PI).contains(&wrapped));
        assert!((wrapped.abs() - PI).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0) - (-PI / 2.0)).abs() < 1e-6);
        assert!((normalize_angle(2.0 * PI + 0.5) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_polar_to_cartesian_heading_zero() {
        let v = polar_to_cartesian(25.0, 0.0);
        assert_eq!(v, Vec2::new(25.0, 0.0));
    }
}
