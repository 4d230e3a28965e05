//! Events consumed by the event loop

use serde::{Deserialize, Serialize};

/// Physical keys on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKey {
    Up,
    Down,
    Left,
    Right,
    /// Center/confirm button
    Ok,
    Back,
}

/// Transition kind reported with a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputType {
    Press,
    Release,
    Repeat,
    Short,
    Long,
}

/// A raw key event from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    pub key: InputKey,
    pub kind: InputType,
}

impl InputEvent {
    pub fn new(key: InputKey, kind: InputType) -> Self {
        Self { key, kind }
    }

    pub fn press(key: InputKey) -> Self {
        Self::new(key, InputType::Press)
    }

    pub fn release(key: InputKey) -> Self {
        Self::new(key, InputType::Release)
    }
}

/// Queue entry: a periodic tick or a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Tick,
    Key(InputEvent),
}

impl From<InputEvent> for GameEvent {
    fn from(input: InputEvent) -> Self {
        GameEvent::Key(input)
    }
}
