//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; the render and
//! audio collaborators only ever see a [`SceneSnapshot`] and [`GameEvent`]s.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_6, TAU};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::{AsteroidField, BulletRing};
use super::level;
use crate::consts::*;
use crate::polar_to_cartesian;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Field was just reseeded for the next level; simulation holds still
    LevelCleared { ticks_remaining: u32 },
    /// Ship hit an asteroid; entities stay frozen at the crash site
    Crashed { ticks_remaining: u32 },
}

/// Discrete events for the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired,
    /// An asteroid was split or, if `destroyed`, removed
    AsteroidHit { destroyed: bool },
    /// Field emptied; `level` is the level just entered
    LevelCleared { level: u32 },
    ShipDestroyed,
    Thrust,
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Heading in radians (0 = +x, screen y grows downward)
    pub heading: f32,
    pub vel: Vec2,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            pos: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            heading: -FRAC_PI_2, // Pointing up
            vel: Vec2::ZERO,
        }
    }
}

impl Ship {
    /// Nose tip
    pub fn nose(&self) -> Vec2 {
        self.pos + polar_to_cartesian(SHIP_NOSE_LENGTH, self.heading)
    }

    /// Nose and the two rear corners (at ±120° from the heading)
    pub fn hull(&self) -> [Vec2; 3] {
        [
            self.nose(),
            self.pos + polar_to_cartesian(SHIP_TAIL_LENGTH, self.heading + TAU / 3.0),
            self.pos + polar_to_cartesian(SHIP_TAIL_LENGTH, self.heading + 2.0 * TAU / 3.0),
        ]
    }

    /// Spawn point for new bullets
    pub fn muzzle(&self) -> Vec2 {
        self.pos + polar_to_cartesian(MUZZLE_OFFSET, self.heading)
    }

    pub fn turn(&mut self, delta: f32) {
        self.heading = crate::normalize_angle(self.heading + delta);
    }

    /// Accelerate along the current heading
    pub fn thrust(&mut self) {
        self.vel += polar_to_cartesian(SHIP_THRUST, self.heading);
    }
}

/// An asteroid with an irregular outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub pos: Vec2,
    /// Collision radius
    pub radius: f32,
    /// Outline radii sampled at equal angular steps, starting at angle 0
    pub silhouette: [f32; ASTEROID_VERTICES],
    pub heading: f32,
    /// Pixels per tick along `heading`
    pub speed: f32,
}

impl Asteroid {
    /// Round asteroid with a flat silhouette
    pub fn new(pos: Vec2, radius: f32, heading: f32, speed: f32) -> Self {
        Self {
            pos,
            radius,
            silhouette: [radius; ASTEROID_VERTICES],
            heading,
            speed,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        polar_to_cartesian(self.speed, self.heading)
    }

    /// Angle between two neighbouring silhouette samples
    pub const fn vertex_step() -> f32 {
        TAU / ASTEROID_VERTICES as f32
    }

    /// Outline vertices in screen space
    pub fn outline(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.silhouette
            .iter()
            .enumerate()
            .map(|(i, &r)| self.pos + polar_to_cartesian(r, i as f32 * Self::vertex_step()))
    }

    /// Whether a hit splits this asteroid rather than destroying it
    pub fn can_split(&self) -> bool {
        self.radius > ASTEROID_MIN_RADIUS
    }

    /// Halve size and outline, speed up
    pub fn shrink(&mut self) {
        self.radius /= 2.0;
        for r in &mut self.silhouette {
            *r /= 2.0;
        }
        self.speed *= FRAGMENT_SPEED_FACTOR;
    }

    /// Shrink in place and return the sibling fragment
    ///
    /// The two halves veer off at ±30° from the original heading.
    pub fn split(&mut self) -> Asteroid {
        self.shrink();
        let mut fragment = *self;
        self.heading += FRAC_PI_6;
        fragment.heading = self.heading - FRAC_PI_3;
        fragment
    }

    /// Points awarded for hitting this asteroid
    pub fn hit_reward(&self) -> u32 {
        (HIT_BASE_REWARD - self.radius * HIT_RADIUS_PENALTY).max(0.0) as u32
    }
}

/// A projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Read-only view of a frame for the render collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub level: u32,
    pub score: u32,
    pub high_score: u32,
    pub thrusting: bool,
    pub ship: Ship,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Vec2>,
}

/// Complete game state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Current level (1-based)
    pub level: u32,
    pub score: u32,
    /// Best score of this run
    pub high_score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub ship: Ship,
    pub asteroids: AsteroidField,
    pub bullets: BulletRing,
    /// Thrust was applied on the last tick
    pub thrusting: bool,
    /// Ticks since the last shot (fire rate limiter)
    pub(crate) ticks_since_shot: u32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game at level 1 with a freshly seeded field
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level: 1,
            score: 0,
            high_score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            ship: Ship::default(),
            asteroids: AsteroidField::new(),
            bullets: BulletRing::new(),
            thrusting: false,
            ticks_since_shot: 0,
            events: Vec::with_capacity(8),
        };

        level::init_level(&mut state);

        state
    }

    /// Queue an event for the audio collaborator
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events raised by the current tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drop events nobody collected; called at the start of every tick
    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Raise the high score if the current score beats it
    pub fn record_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            time_ticks: self.time_ticks,
            phase: self.phase,
            level: self.level,
            score: self.score,
            high_score: self.high_score,
            thrusting: self.thrusting,
            ship: self.ship,
            asteroids: self.asteroids.iter().map(|(_, a)| *a).collect(),
            bullets: self.bullets.iter().map(|(_, b)| b.pos).collect(),
        }
    }
}
