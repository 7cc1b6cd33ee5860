//! Audio event mapping
//!
//! The simulation only emits [`GameEvent`]s. This module turns them into
//! sound effects and hands them to whatever backend the platform provides.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Background music track
pub const MUSIC_ASSET: &str = "assets/Quake_II_-_Rage.mptm";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Shot fired
    Laser,
    /// Bullet hit an asteroid
    Hit,
    /// Ship destroyed
    Crash,
    /// Level cleared
    NewLevel,
    /// Engine burn (plays every thrusting tick)
    Thrust,
}

impl SoundEffect {
    /// Sample file the platform should load for this effect
    pub fn asset_path(&self) -> &'static str {
        match self {
            SoundEffect::Laser => "assets/laser.wav",
            SoundEffect::Hit => "assets/hit.wav",
            SoundEffect::Crash => "assets/crash.wav",
            SoundEffect::NewLevel => "assets/newLevel.wav",
            SoundEffect::Thrust => "assets/trust.wav",
        }
    }

    /// Per-effect gain before user volume
    pub fn base_gain(&self) -> f32 {
        match self {
            // Thrust repeats every tick, keep it quiet
            SoundEffect::Thrust => 20.0 / 128.0,
            _ => 1.0,
        }
    }
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::ShotFired => SoundEffect::Laser,
            GameEvent::AsteroidHit { .. } => SoundEffect::Hit,
            GameEvent::LevelCleared { .. } => SoundEffect::NewLevel,
            GameEvent::ShipDestroyed => SoundEffect::Crash,
            GameEvent::Thrust => SoundEffect::Thrust,
        }
    }
}

/// Platform sound backend
pub trait AudioSink {
    /// Play `effect` once at `volume` (0.0 - 1.0)
    fn play(&mut self, effect: SoundEffect, volume: f32);

    /// Start looping a music track
    fn loop_music(&mut self, _asset: &str, _volume: f32) {}
}

/// Backend that only logs what would have played
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("play {} at {:.2}", effect.asset_path(), volume);
    }

    fn loop_music(&mut self, asset: &str, volume: f32) {
        log::debug!("loop {} at {:.2}", asset, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
        }
    }

    pub fn from_settings(sink: S, settings: &Settings) -> Self {
        let mut audio = Self::new(sink);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_music_volume(settings.music_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume() * effect.base_gain();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// Start the background track
    pub fn start_music(&mut self) {
        if self.muted {
            return;
        }
        let vol = self.master_volume * self.music_volume;
        self.sink.loop_music(MUSIC_ASSET, vol);
    }

    /// Play the sound for every event of a tick
    pub fn dispatch(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        for event in events {
            self.play(event.into());
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<(SoundEffect, f32)>, Option<f32>);

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.push((effect, volume));
        }

        fn loop_music(&mut self, _asset: &str, volume: f32) {
            self.1 = Some(volume);
        }
    }

    #[test]
    fn test_music_uses_music_volume() {
        let settings = Settings {
            master_volume: 0.5,
            music_volume: 0.5,
            ..Default::default()
        };
        let mut audio = AudioManager::from_settings(Recorder::default(), &settings);
        audio.start_music();
        assert_eq!(audio.sink().1, Some(0.25));
    }

    #[test]
    fn test_events_map_to_effects() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.set_master_volume(1.0);
        audio.dispatch([
            GameEvent::ShotFired,
            GameEvent::AsteroidHit { destroyed: true },
            GameEvent::LevelCleared { level: 2 },
            GameEvent::ShipDestroyed,
        ]);
        let played: Vec<_> = audio.sink().0.iter().map(|(e, _)| *e).collect();
        assert_eq!(
            played,
            vec![
                SoundEffect::Laser,
                SoundEffect::Hit,
                SoundEffect::NewLevel,
                SoundEffect::Crash
            ]
        );
    }

    #[test]
    fn test_thrust_is_quieter() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.set_master_volume(1.0);
        audio.play(SoundEffect::Thrust);
        let (_, vol) = audio.sink().0[0];
        assert!((vol - 20.0 / 128.0).abs() < 1e-6);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let mut audio = AudioManager::from_settings(Recorder::default(), &settings);
        audio.dispatch([GameEvent::ShotFired]);
        assert!(audio.sink().0.is_empty());
    }

    #[test]
    fn test_volume_clamped() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.set_master_volume(4.0);
        audio.set_sfx_volume(-1.0);
        audio.play(SoundEffect::Hit);
        assert!(audio.sink().0.is_empty());
    }
}
