//! Game instance and event loop
//!
//! [`MemoryGame`] owns every resource of one game: the shared state, the
//! screen, the effect emitter and the computer player thread. The event
//! loop applies transitions under the state lock, performs effects after
//! releasing it and tears everything down in a fixed order on exit.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, SyncSender};

use crate::effects::EffectEmitter;
use crate::error::Result;
use crate::playback::ComputerPlayer;
use crate::renderer::{Renderer, Screen};
use crate::settings::Settings;
use crate::shared::SharedState;
use crate::sim::{EffectCommand, Flow, GameEvent, GameState, apply};

/// Why the event loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The player pressed Back
    BackPressed,
    /// Every event sender is gone
    QueueClosed,
}

impl ExitReason {
    /// Both are normal stops
    pub fn exit_code(&self) -> i32 {
        0
    }
}

/// Bounded FIFO of game events
pub fn event_queue(capacity: usize) -> (SyncSender<GameEvent>, Receiver<GameEvent>) {
    mpsc::sync_channel(capacity)
}

/// One game instance with all of its resources
pub struct MemoryGame {
    settings: Settings,
    state: Arc<SharedState>,
    emitter: Arc<dyn EffectEmitter>,
    screen: Arc<Screen>,
    player: ComputerPlayer,
}

impl MemoryGame {
    /// Allocate state, generate the pattern and start the computer player
    pub fn new(
        settings: Settings,
        emitter: Arc<dyn EffectEmitter>,
        renderer: Arc<dyn Renderer>,
    ) -> Result<Self> {
        settings.validate()?;

        let seed = settings.pattern_seed();
        log::info!("Memory Game start (seed {})", seed);

        let state = Arc::new(SharedState::new(GameState::new(
            seed,
            settings.pattern_capacity,
        )));
        let screen = Arc::new(Screen::new(
            Arc::clone(&state),
            renderer,
            settings.render_lock_timeout(),
        ));
        let player = ComputerPlayer::spawn(
            Arc::clone(&state),
            Arc::clone(&emitter),
            Arc::clone(&screen),
            settings.dwell(),
        )?;

        Ok(Self {
            settings,
            state,
            emitter,
            screen,
            player,
        })
    }

    /// Shared state handle, for observers outside the game
    pub fn shared_state(&self) -> Arc<SharedState> {
        Arc::clone(&self.state)
    }

    /// Process events until Back or a closed queue, then release everything
    pub fn run(self, events: Receiver<GameEvent>) -> Result<ExitReason> {
        self.screen.request_frame();
        let outcome = self.event_loop(&events);
        let released = self.teardown();

        let reason = outcome?;
        released?;
        Ok(reason)
    }

    fn event_loop(&self, events: &Receiver<GameEvent>) -> Result<ExitReason> {
        log::info!("Beginning processing");
        let game_length = self.settings.game_length;

        loop {
            let Ok(event) = events.recv() else {
                log::info!("Event queue closed");
                return Ok(ExitReason::QueueClosed);
            };

            let outcome = self.state.with_lock(|s| apply(s, &event, game_length));

            match outcome.effect {
                Some(EffectCommand::Activate(cue)) => self.emitter.activate(cue),
                Some(EffectCommand::Deactivate) => self.emitter.deactivate(),
                None => {}
            }

            if outcome.flow == Flow::Exit {
                return Ok(ExitReason::BackPressed);
            }
            if outcome.playback_requested {
                self.player.request_playback()?;
            }
            self.screen.request_frame();
        }
    }

    /// Stop the computer player, silence effects, detach the renderer, free state
    fn teardown(self) -> Result<()> {
        log::info!("Ending memory game");
        let stopped = self.player.shutdown();

        log::info!("Stopping effects");
        self.emitter.deactivate();

        log::info!("Detaching renderer");
        self.screen.detach();
        drop(self.screen);

        if Arc::strong_count(&self.state) > 1 {
            log::debug!("Game state still observed elsewhere");
        }
        drop(self.state);

        log::info!("Finished releasing resources");
        stopped
    }
}

impl std::fmt::Debug for MemoryGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryGame")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
