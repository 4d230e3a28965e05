//! Memory Game entry point
//!
//! Loads settings, wires terminal input and rendering to a game instance and
//! runs it until Back (`q`) or end of input.

use std::sync::Arc;

use memory_game::effects::LogEmitter;
use memory_game::game::event_queue;
use memory_game::platform::{spawn_stdin_reader, spawn_ticker};
use memory_game::renderer::TerminalRenderer;
use memory_game::{MemoryGame, Settings};

fn main() {
    env_logger::init();
    std::process::exit(run());
}

fn run() -> i32 {
    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Cannot load settings from {}: {}", path, e);
                return e.exit_code();
            }
        },
        None => Settings::default(),
    };

    let (events, inbox) = event_queue(settings.event_queue_capacity);

    if let Some(interval) = settings.tick_interval() {
        if let Err(e) = spawn_ticker(events.clone(), interval) {
            log::warn!("Ticks disabled: {}", e);
        }
    }
    if let Err(e) = spawn_stdin_reader(events) {
        log::error!("Cannot read input: {}", e);
        return 255;
    }

    let emitter = Arc::new(LogEmitter::new(settings.effect_volume));
    let game = match MemoryGame::new(settings, emitter, Arc::new(TerminalRenderer::new())) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{}", e);
            return e.exit_code();
        }
    };

    log::info!("Keys: w/a/s/d move, o or enter confirm, q back");
    match game.run(inbox) {
        Ok(reason) => {
            log::info!("Memory Game finished ({:?})", reason);
            reason.exit_code()
        }
        Err(e) => {
            log::error!("{}", e);
            e.exit_code()
        }
    }
}
