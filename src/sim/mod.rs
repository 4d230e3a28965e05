//! Deterministic game logic
//!
//! Everything in this module is single-threaded and free of timing:
//! - Seeded RNG only
//! - No locking, rendering or platform dependencies
//!
//! The threaded parts (`shared`, `playback`, `game`) build on it.

pub mod event;
pub mod pattern;
pub mod state;
pub mod symbol;
pub mod transition;

pub use event::{GameEvent, InputEvent, InputKey, InputType};
pub use pattern::{Pattern, time_seed};
pub use state::{GameSnapshot, GameState, Phase};
pub use symbol::{Color, Cue, Symbol};
pub use transition::{EffectCommand, Flow, Outcome, apply};
