//! Playable symbols and their light/tone cues

use serde::{Deserialize, Serialize};

use super::event::InputKey;

/// One playable input direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Symbol {
    Up,
    Right,
    Down,
    Left,
    Center,
    /// No active input
    #[default]
    None,
}

impl Symbol {
    /// The five symbols a pattern can contain
    pub const ACTIVE: [Symbol; 5] = [
        Symbol::Up,
        Symbol::Right,
        Symbol::Down,
        Symbol::Left,
        Symbol::Center,
    ];

    /// Light color and speaker tone for this symbol (None for `Symbol::None`)
    pub fn cue(self) -> Option<Cue> {
        match self {
            Symbol::None => None,
            active => Some(CUE_TABLE[active as usize]),
        }
    }

    /// Symbol a key drives, if any (Back has none)
    pub fn from_key(key: InputKey) -> Option<Symbol> {
        match key {
            InputKey::Up => Some(Symbol::Up),
            InputKey::Right => Some(Symbol::Right),
            InputKey::Down => Some(Symbol::Down),
            InputKey::Left => Some(Symbol::Left),
            InputKey::Ok => Some(Symbol::Center),
            InputKey::Back => None,
        }
    }

    pub fn is_active(self) -> bool {
        self != Symbol::None
    }
}

/// LED color shown while a symbol is pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Cyan,
    Yellow,
    Magenta,
    White,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
            Color::Magenta => "magenta",
            Color::White => "white",
        }
    }

    /// Which of the (red, green, blue) LED channels are lit
    pub fn channels(&self) -> (bool, bool, bool) {
        match self {
            Color::Blue => (false, false, true),
            Color::Cyan => (false, true, true),
            Color::Yellow => (true, true, false),
            Color::Magenta => (true, false, true),
            Color::White => (true, true, true),
        }
    }
}

/// Light + tone pair emitted for a symbol
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    pub color: Color,
    /// Speaker frequency in Hz
    pub tone_hz: u32,
}

/// Indexed by `Symbol as usize` for the five active symbols
const CUE_TABLE: [Cue; 5] = [
    Cue { color: Color::Blue, tone_hz: 659 },
    Cue { color: Color::Cyan, tone_hz: 1046 },
    Cue { color: Color::Yellow, tone_hz: 880 },
    Cue { color: Color::Magenta, tone_hz: 1175 },
    Cue { color: Color::White, tone_hz: 1319 },
];
