//! Memory Game - a Simon-says game core
//!
//! Core modules:
//! - `sim`: Deterministic game logic (symbols, pattern, state, phase machine)
//! - `shared`: Lock-guarded game state shared between threads
//! - `playback`: Computer player thread that plays the pattern back
//! - `game`: Event loop and resource lifetime
//! - `effects`: Light/tone effect emitter abstraction
//! - `renderer`: Frame requests and the text renderer
//! - `platform`: Terminal input plumbing for the native binary
//! - `settings`: Data-driven configuration

pub mod effects;
pub mod error;
pub mod game;
pub mod platform;
pub mod playback;
pub mod renderer;
pub mod settings;
pub mod shared;
pub mod sim;

pub use error::{GameError, Result};
pub use game::{ExitReason, MemoryGame};
pub use settings::Settings;
pub use shared::SharedState;

/// Game configuration constants
pub mod consts {
    /// Number of symbols generated for a game
    pub const PATTERN_CAPACITY: usize = 200;
    /// Number of pattern entries played back when a game starts
    pub const GAME_LENGTH: u16 = 10;
    /// How long the computer holds each symbol pressed (ms)
    pub const DWELL_MS: u64 = 500;
    /// Longest the renderer waits for the state lock before skipping a frame (ms)
    pub const RENDER_LOCK_TIMEOUT_MS: u64 = 25;
    /// Pending events the queue holds before senders block
    pub const EVENT_QUEUE_CAPACITY: usize = 8;
    /// Speaker volume used for tones (0.0 - 1.0)
    pub const EFFECT_VOLUME: f32 = 1.0;
}
