//! Game state and core types
//!
//! `GameState` is the one record shared between the event loop, the
//! computer player and the renderer. It has no locking of its own; see
//! [`crate::shared::SharedState`].

use serde::{Deserialize, Serialize};

use super::pattern::Pattern;
use super::symbol::Symbol;

/// Current top-level mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Title screen, waiting for confirm
    #[default]
    StartScreen,
    /// Reserved; no transition enters it yet
    Playing,
    /// Computer player owns the display and plays the pattern back
    ComputerPlaying,
    /// Human reproduces the pattern
    HumanPlaying,
    /// Run ended
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::StartScreen => "StartScreen",
            Phase::Playing => "Playing",
            Phase::ComputerPlaying => "ComputerPlaying",
            Phase::HumanPlaying => "HumanPlaying",
            Phase::GameOver => "GameOver",
        }
    }
}

/// Complete game state for one game instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Score (never decreases within a game)
    pub score: u16,
    /// Number of pattern entries currently in play
    pub round: u16,
    /// Pattern for this game, fixed after creation
    pub pattern: Pattern,
    /// Symbol currently highlighted
    pub current_input: Symbol,
    /// Whether `current_input` is held down (solid vs outline, effect on/off)
    pub press: bool,
    /// Current phase
    pub phase: Phase,
}

impl GameState {
    /// Fresh game with a pattern drawn from `seed`
    pub fn new(seed: u64, capacity: usize) -> Self {
        Self::with_pattern(Pattern::generate(seed, capacity))
    }

    pub fn with_pattern(pattern: Pattern) -> Self {
        Self {
            score: 0,
            round: 0,
            pattern,
            current_input: Symbol::None,
            press: false,
            phase: Phase::StartScreen,
        }
    }

    /// Highlight `symbol`, pressed or not. Both fields change together.
    pub fn set_highlight(&mut self, symbol: Symbol, press: bool) {
        self.current_input = symbol;
        self.press = press && symbol.is_active();
    }

    pub fn clear_highlight(&mut self) {
        self.set_highlight(Symbol::None, false);
    }

    /// Leave the start screen and hand the display to the computer player
    pub fn start_game(&mut self, length: u16) {
        let capacity = u16::try_from(self.pattern.len()).unwrap_or(u16::MAX);
        self.round = length.min(capacity);
        self.clear_highlight();
        self.phase = Phase::ComputerPlaying;
    }

    /// Symbols the computer plays back this round
    pub fn revealed(&self) -> &[Symbol] {
        self.pattern.revealed(self.round)
    }

    /// Checks the invariants every lock holder must leave behind
    pub fn is_consistent(&self) -> bool {
        let press_has_symbol = !self.press || self.current_input.is_active();
        let start_screen_at_rest = self.phase != Phase::StartScreen
            || (self.current_input == Symbol::None && !self.press);
        let round_in_range = (self.round as usize) <= self.pattern.len();
        press_has_symbol && start_screen_at_rest && round_in_range
    }

    /// Read-only copy of everything the renderer draws
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            score: self.score,
            round: self.round,
            current_input: self.current_input,
            press: self.press,
        }
    }
}

/// Copy of the drawable part of [`GameState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub score: u16,
    pub round: u16,
    pub current_input: Symbol,
    pub press: bool,
}
