//! Phase transition rules
//!
//! The event loop calls [`apply`] while holding the state lock, then carries
//! out the returned effect and playback request after releasing it.
//! `ComputerPlaying -> HumanPlaying` is not here: the computer player thread
//! makes that transition itself.

use super::event::{GameEvent, InputEvent, InputKey, InputType};
use super::state::{GameState, Phase};
use super::symbol::{Cue, Symbol};

/// Whether the event loop keeps running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Light/tone change to perform once the lock is released
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectCommand {
    Activate(Cue),
    Deactivate,
}

/// Result of applying one event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub flow: Flow,
    pub effect: Option<EffectCommand>,
    /// The computer player should start playing the revealed pattern
    pub playback_requested: bool,
}

impl Outcome {
    fn idle() -> Self {
        Self {
            flow: Flow::Continue,
            effect: None,
            playback_requested: false,
        }
    }

    fn exit() -> Self {
        Self {
            flow: Flow::Exit,
            ..Self::idle()
        }
    }
}

/// Apply one event to the state according to the current phase
pub fn apply(state: &mut GameState, event: &GameEvent, game_length: u16) -> Outcome {
    let input = match event {
        // Ticks only trigger a redraw
        GameEvent::Tick => return Outcome::idle(),
        GameEvent::Key(input) => input,
    };

    if input.key == InputKey::Back {
        log::info!("Back pressed in {}, exiting", state.phase.as_str());
        return Outcome::exit();
    }

    match state.phase {
        Phase::StartScreen => start_screen(state, input, game_length),
        Phase::HumanPlaying => human_playing(state, input),
        // The computer owns the display; the rest have no rules yet
        Phase::ComputerPlaying | Phase::Playing | Phase::GameOver => Outcome::idle(),
    }
}

fn start_screen(state: &mut GameState, input: &InputEvent, game_length: u16) -> Outcome {
    if input.key != InputKey::Ok || input.kind != InputType::Press {
        return Outcome::idle();
    }

    state.start_game(game_length);
    log::info!("Game started, round {}", state.round);
    Outcome {
        playback_requested: true,
        ..Outcome::idle()
    }
}

fn human_playing(state: &mut GameState, input: &InputEvent) -> Outcome {
    let Some(symbol) = Symbol::from_key(input.key) else {
        return Outcome::idle();
    };

    let effect = match input.kind {
        InputType::Press => {
            state.set_highlight(symbol, true);
            symbol.cue().map(EffectCommand::Activate)
        }
        InputType::Release => {
            state.set_highlight(symbol, false);
            Some(EffectCommand::Deactivate)
        }
        // Follow-ups of a press that already set the highlight
        InputType::Repeat | InputType::Short | InputType::Long => None,
    };

    log::debug!("Human {:?} {:?}", input.kind, symbol);
    Outcome {
        effect,
        ..Outcome::idle()
    }
}
