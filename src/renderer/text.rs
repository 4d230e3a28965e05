//! Text renderer for terminals
//!
//! Draws the fixed layout: title, phase, round counter, start prompt and a
//! d-pad glyph where the pressed symbol is filled.

use std::io::Write;

use parking_lot::Mutex;

use super::Renderer;
use crate::sim::{GameSnapshot, Phase, Symbol};

const TITLE: &str = "Memory Game";
const START_PROMPT: &str = "Press (o) to start";

/// Lines of one frame, top to bottom
pub fn layout(snapshot: &GameSnapshot) -> Vec<String> {
    let mut lines = vec![
        TITLE.to_string(),
        String::new(),
        snapshot.phase.as_str().to_string(),
        format!("Round {}", snapshot.round),
    ];

    if snapshot.phase == Phase::StartScreen {
        lines.push(START_PROMPT.to_string());
    }

    let button = |symbol: Symbol| {
        if snapshot.press && snapshot.current_input == symbol {
            "(#)"
        } else {
            "( )"
        }
    };

    lines.push(String::new());
    lines.push(format!("    {}", button(Symbol::Up)));
    lines.push(format!(
        "{} {} {}",
        button(Symbol::Left),
        button(Symbol::Center),
        button(Symbol::Right)
    ));
    lines.push(format!("    {}", button(Symbol::Down)));
    lines
}

/// Renders frames to stdout, clearing the screen first
pub struct TerminalRenderer {
    out: Mutex<std::io::Stdout>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: Mutex::new(std::io::stdout()),
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn render(&self, snapshot: &GameSnapshot) {
        let mut out = self.out.lock();
        let mut frame = String::from("\x1B[2J\x1B[H");
        for line in layout(snapshot) {
            frame.push_str(&line);
            frame.push('\n');
        }
        if let Err(e) = out.write_all(frame.as_bytes()).and_then(|_| out.flush()) {
            log::warn!("Render error: {:?}", e);
        }
    }
}
