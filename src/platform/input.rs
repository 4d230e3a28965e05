//! Terminal input
//!
//! Stdin is line-buffered, so each typed key arrives as a press immediately
//! followed by its release.

use std::io::BufRead;
use std::sync::mpsc::{SyncSender, TrySendError};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::sim::{GameEvent, InputEvent, InputKey};

/// Key bound to a typed character
pub fn key_for_char(c: char) -> Option<InputKey> {
    match c.to_ascii_lowercase() {
        'w' | 'k' => Some(InputKey::Up),
        's' | 'j' => Some(InputKey::Down),
        'a' | 'h' => Some(InputKey::Left),
        'd' | 'l' => Some(InputKey::Right),
        'o' | ' ' => Some(InputKey::Ok),
        'q' | 'b' => Some(InputKey::Back),
        _ => None,
    }
}

/// Press/release pairs for every bound character; an empty line is Ok
pub fn events_for_line(line: &str) -> Vec<InputEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    let keys: Vec<InputKey> = if line.is_empty() {
        vec![InputKey::Ok]
    } else {
        line.chars().filter_map(key_for_char).collect()
    };

    keys.into_iter()
        .flat_map(|key| [InputEvent::press(key), InputEvent::release(key)])
        .collect()
}

/// Read stdin lines into the queue until EOF or the queue closes
pub fn spawn_stdin_reader(events: SyncSender<GameEvent>) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("stdin-input".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::warn!("Input read failed: {:?}", e);
                        break;
                    }
                };
                for input in events_for_line(&line) {
                    if events.send(input.into()).is_err() {
                        return;
                    }
                }
            }
            log::info!("Input closed");
        })
}

/// Push a tick every `interval`; ticks are dropped while the queue is full
pub fn spawn_ticker(
    events: SyncSender<GameEvent>,
    interval: Duration,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("ticker".to_string())
        .spawn(move || {
            loop {
                std::thread::sleep(interval);
                match events.try_send(GameEvent::Tick) {
                    Ok(()) | Err(TrySendError::Full(_)) => {}
                    Err(TrySendError::Disconnected(_)) => break,
                }
            }
        })
}
