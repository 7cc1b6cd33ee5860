//! Vector Asteroids headless driver
//!
//! Runs the simulation under a simple autopilot at the fixed tick rate,
//! routing sound events to the log. Usage: `vector-asteroids [settings.json]`

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use vector_asteroids::Settings;
use vector_asteroids::audio::{AudioManager, LogSink};
use vector_asteroids::consts::TICK_RATE;
use vector_asteroids::normalize_angle;
use vector_asteroids::renderer::{hud_labels, scene_geometry};
use vector_asteroids::sim::{GameEvent, GameState, TickInput, tick};

/// Don't bother steering for less than this (radians)
const AIM_TOLERANCE: f32 = 0.05;

/// Turn towards the closest asteroid and keep the trigger held
fn autopilot(state: &GameState) -> TickInput {
    let ship = &state.ship;
    let target = state
        .asteroids
        .iter()
        .map(|(_, a)| a.pos - ship.pos)
        .min_by(|a, b| a.length_squared().total_cmp(&b.length_squared()));

    let Some(offset) = target else {
        return TickInput::default();
    };

    let error = normalize_angle(offset.y.atan2(offset.x) - ship.heading);
    TickInput {
        turn_left: error < -AIM_TOLERANCE,
        turn_right: error > AIM_TOLERANCE,
        // Short burns now and then so the ship doesn't sit still
        thrust: state.time_ticks % 240 < 10,
        fire: error.abs() < 0.3,
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(time_seed);
    let mut state = GameState::new(seed);
    log::info!("Vector Asteroids starting (seed {})", state.seed);
    let mut audio = AudioManager::from_settings(LogSink, &settings);
    audio.start_music();

    let frame = Duration::from_secs_f64(1.0 / TICK_RATE as f64);
    let mut crashes = 0u32;

    for _ in 0..settings.demo_ticks {
        let started = Instant::now();

        let input = autopilot(&state);
        tick(&mut state, &input);

        let events: Vec<GameEvent> = state.drain_events().collect();
        for event in &events {
            match event {
                GameEvent::LevelCleared { level } => {
                    log::info!("Reached level {} with score {}", level, state.score)
                }
                GameEvent::ShipDestroyed => crashes += 1,
                _ => {}
            }
        }
        audio.dispatch(events);

        if settings.realtime {
            // Build the frame geometry the way a renderer would
            let geometry = scene_geometry(&state.snapshot());
            log::trace!(
                "frame {}: {} line vertices, {} points",
                state.time_ticks,
                geometry.lines.len(),
                geometry.points.len()
            );
            if let Some(rest) = frame.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    let snapshot = state.snapshot();
    let [score, high_score] = hud_labels(&snapshot);
    println!("Ticks:      {}", snapshot.time_ticks);
    println!("Level:      {}", snapshot.level);
    println!("Crashes:    {}", crashes);
    println!("Score:      {}", score.text);
    println!("High score: {}", high_score.text);

    if settings.dump_snapshot {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{}", json),
            Err(err) => log::error!("Failed to serialize snapshot: {}", err),
        }
    }
}
