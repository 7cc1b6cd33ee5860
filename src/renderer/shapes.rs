//! Line geometry for ships, asteroids and bullets
//!
//! Line lists come back as vertex pairs (one pair per segment); points are
//! single vertices.

use std::f32::consts::PI;

use glam::Vec2;

use super::vertex::{LineVertex, colors};
use crate::consts::TICK_RATE;
use crate::polar_to_cartesian;
use crate::sim::{Asteroid, GamePhase, SceneSnapshot, Ship};

/// Flame segment runs from this far behind the ship...
const FLAME_START: f32 = 12.0;
/// ...to this far
const FLAME_END: f32 = 22.0;

/// Ticks per half blink while the ship explodes (50ms)
const CRASH_BLINK_TICKS: u64 = (TICK_RATE / 20) as u64;

fn segment(out: &mut Vec<LineVertex>, a: Vec2, b: Vec2, color: [f32; 4]) {
    out.push(LineVertex::new(a.x, a.y, color));
    out.push(LineVertex::new(b.x, b.y, color));
}

/// Ship outline: nose to both rear corners, rear corners back to the centre
pub fn ship_lines(ship: &Ship, thrusting: bool, color: [f32; 4]) -> Vec<LineVertex> {
    let [nose, left, right] = ship.hull();
    let mut vertices = Vec::with_capacity(10);

    segment(&mut vertices, nose, left, color);
    segment(&mut vertices, nose, right, color);
    segment(&mut vertices, left, ship.pos, color);
    segment(&mut vertices, right, ship.pos, color);

    if thrusting {
        let back = ship.heading + PI;
        segment(
            &mut vertices,
            ship.pos + polar_to_cartesian(FLAME_START, back),
            ship.pos + polar_to_cartesian(FLAME_END, back),
            color,
        );
    }

    vertices
}

/// Closed outline through every silhouette vertex
pub fn asteroid_outline(asteroid: &Asteroid, color: [f32; 4]) -> Vec<LineVertex> {
    let points: Vec<Vec2> = asteroid.outline().collect();
    let mut vertices = Vec::with_capacity(points.len() * 2);

    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        segment(&mut vertices, a, b, color);
    }

    vertices
}

pub fn bullet_points(bullets: &[Vec2], color: [f32; 4]) -> Vec<LineVertex> {
    bullets
        .iter()
        .map(|p| LineVertex::new(p.x, p.y, color))
        .collect()
}

/// Ship colour for this frame; blinks while the crash hold runs
pub fn ship_color(phase: GamePhase, time_ticks: u64) -> [f32; 4] {
    match phase {
        GamePhase::Crashed { .. } if (time_ticks / CRASH_BLINK_TICKS) % 2 == 0 => {
            colors::SHIP_BLINK
        }
        _ => colors::SHIP,
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Default)]
pub struct SceneGeometry {
    pub lines: Vec<LineVertex>,
    pub points: Vec<LineVertex>,
}

pub fn scene_geometry(snapshot: &SceneSnapshot) -> SceneGeometry {
    let ship_color = ship_color(snapshot.phase, snapshot.time_ticks);
    let thrusting = snapshot.thrusting && snapshot.phase == GamePhase::Playing;

    let mut lines = ship_lines(&snapshot.ship, thrusting, ship_color);
    for asteroid in &snapshot.asteroids {
        lines.extend(asteroid_outline(asteroid, colors::ASTEROID));
    }

    SceneGeometry {
        lines,
        points: bullet_points(&snapshot.bullets, colors::BULLET),
    }
}
