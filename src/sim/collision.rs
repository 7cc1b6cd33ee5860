//! Collision queries
//!
//! Bullets and asteroids meet on a plain radius test. The ship is checked as
//! three hull points against each asteroid's collision radius; the irregular
//! silhouette is only for drawing.

use glam::Vec2;

use super::arena::{AsteroidField, AsteroidId, BulletId, BulletRing};
use super::state::{Asteroid, Bullet, Ship};

/// Strictly inside a circle
#[inline]
pub fn point_in_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance_squared(center) < radius * radius
}

/// A bullet touching the rim counts as a hit
#[inline]
pub fn bullet_hits_asteroid(bullet: &Bullet, asteroid: &Asteroid) -> bool {
    bullet.pos.distance_squared(asteroid.pos) <= asteroid.radius * asteroid.radius
}

/// First colliding (bullet, asteroid) pair
///
/// Bullets are scanned in slot order, and for each bullet the asteroids in
/// slot order, so the same frame always resolves the same pair.
pub fn find_first_collision(
    bullets: &BulletRing,
    asteroids: &AsteroidField,
) -> Option<(BulletId, AsteroidId)> {
    bullets.iter().find_map(|(bullet_id, bullet)| {
        asteroids
            .iter()
            .find(|(_, asteroid)| bullet_hits_asteroid(bullet, asteroid))
            .map(|(asteroid_id, _)| (bullet_id, asteroid_id))
    })
}

pub fn any_live_asteroids(asteroids: &AsteroidField) -> bool {
    asteroids.iter().next().is_some()
}

/// Whether any hull point of the ship is inside an asteroid
pub fn ship_collides(ship: &Ship, asteroids: &AsteroidField) -> bool {
    let hull = ship.hull();
    asteroids.iter().any(|(_, asteroid)| {
        hull.iter()
            .any(|&point| point_in_circle(point, asteroid.pos, asteroid.radius))
    })
}
