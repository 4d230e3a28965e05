//! Game settings
//!
//! Loaded from an optional JSON file; every field falls back to the
//! defaults in [`crate::consts`].

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};
use crate::sim::time_seed;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Pattern ===
    /// Symbols generated per game
    pub pattern_capacity: usize,
    /// Entries played back when a game starts
    pub game_length: u16,
    /// Fixed seed for reproducible games (time-seeded when absent)
    pub seed: Option<u64>,

    // === Timing ===
    /// How long the computer holds each symbol (ms)
    pub dwell_ms: u64,
    /// Renderer lock wait before a frame is skipped (ms)
    pub render_lock_timeout_ms: u64,
    /// Period of redraw ticks (ms); no ticks when absent
    pub tick_interval_ms: Option<u64>,

    // === Input ===
    /// Pending events before input senders block
    pub event_queue_capacity: usize,

    // === Effects ===
    /// Speaker volume (0.0 - 1.0)
    pub effect_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pattern_capacity: PATTERN_CAPACITY,
            game_length: GAME_LENGTH,
            seed: None,

            dwell_ms: DWELL_MS,
            render_lock_timeout_ms: RENDER_LOCK_TIMEOUT_MS,
            tick_interval_ms: None,

            event_queue_capacity: EVENT_QUEUE_CAPACITY,

            effect_volume: EFFECT_VOLUME,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.effect_volume = settings.effect_volume.clamp(0.0, 1.0);
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject settings that cannot describe a playable game
    pub fn validate(&self) -> Result<()> {
        if self.pattern_capacity == 0 || self.pattern_capacity > u16::MAX as usize {
            return Err(GameError::InvalidConfig(format!(
                "pattern_capacity must be in 1..={}, got {}",
                u16::MAX,
                self.pattern_capacity
            )));
        }
        if self.game_length == 0 || self.game_length as usize > self.pattern_capacity {
            return Err(GameError::InvalidConfig(format!(
                "game_length must be in 1..={}, got {}",
                self.pattern_capacity, self.game_length
            )));
        }
        if self.event_queue_capacity == 0 {
            return Err(GameError::InvalidConfig(
                "event_queue_capacity must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Configured seed, or one taken from the clock
    pub fn pattern_seed(&self) -> u64 {
        self.seed.unwrap_or_else(time_seed)
    }

    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_ms)
    }

    pub fn render_lock_timeout(&self) -> Duration {
        Duration::from_millis(self.render_lock_timeout_ms)
    }

    pub fn tick_interval(&self) -> Option<Duration> {
        self.tick_interval_ms.map(Duration::from_millis)
    }
}
