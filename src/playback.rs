//! Computer player thread
//!
//! Plays the revealed part of the pattern back while the game is in
//! `ComputerPlaying`, then hands the turn to the human.
//!
//! The thread sleeps on a command channel between rounds. Shutdown sets the
//! running flag and sends `Stop`; the dwell wait listens on the same channel,
//! so a stop request interrupts it instead of waiting out the delay.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::effects::EffectEmitter;
use crate::error::{GameError, Result};
use crate::renderer::Screen;
use crate::shared::SharedState;
use crate::sim::{Phase, Symbol};

const THREAD_NAME: &str = "computer-player";

/// Messages from the event loop to the computer player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    /// Play the revealed pattern if the game is in `ComputerPlaying`
    Play,
    /// Leave the thread loop
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Finished,
    Cancelled,
}

/// Handle to the running computer player thread
pub struct ComputerPlayer {
    thread: JoinHandle<()>,
    commands: Sender<PlaybackCommand>,
    running: Arc<AtomicBool>,
}

impl ComputerPlayer {
    /// Start the thread. It idles until [`ComputerPlayer::request_playback`].
    pub fn spawn(
        state: Arc<SharedState>,
        emitter: Arc<dyn EffectEmitter>,
        screen: Arc<Screen>,
        dwell: Duration,
    ) -> Result<Self> {
        let (commands, inbox) = mpsc::channel();
        let running = Arc::new(AtomicBool::new(true));

        let worker = PlaybackWorker {
            state,
            emitter,
            screen,
            dwell,
            inbox,
            running: Arc::clone(&running),
        };

        let thread = std::thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || worker.run())
            .map_err(|e| GameError::Init(format!("cannot spawn computer player: {e}")))?;

        Ok(Self {
            thread,
            commands,
            running,
        })
    }

    /// Wake the thread to play the current round
    pub fn request_playback(&self) -> Result<()> {
        self.commands.send(PlaybackCommand::Play).map_err(|_| {
            log::error!("Computer player thread is gone");
            GameError::PlaybackPanicked
        })
    }

    /// Signal shutdown and wait for the thread to finish
    pub fn shutdown(self) -> Result<()> {
        log::info!("Stopping computer player");
        self.running.store(false, Ordering::Release);
        // The thread may already have exited; join reports how
        let _ = self.commands.send(PlaybackCommand::Stop);
        self.thread.join().map_err(|_| GameError::PlaybackPanicked)
    }
}

/// State owned by the playback thread
struct PlaybackWorker {
    state: Arc<SharedState>,
    emitter: Arc<dyn EffectEmitter>,
    screen: Arc<Screen>,
    dwell: Duration,
    inbox: Receiver<PlaybackCommand>,
    running: Arc<AtomicBool>,
}

impl PlaybackWorker {
    fn run(self) {
        log::info!("Computer player thread started");
        while self.is_running() {
            match self.inbox.recv() {
                Ok(PlaybackCommand::Play) => {
                    if self.play_round() == RoundEnd::Cancelled {
                        break;
                    }
                }
                Ok(PlaybackCommand::Stop) | Err(_) => break,
            }
        }
        log::info!("Computer player thread stopped");
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    fn play_round(&self) -> RoundEnd {
        let revealed = self.state.with_lock(|s| {
            (s.phase == Phase::ComputerPlaying).then(|| s.revealed().to_vec())
        });
        let Some(revealed) = revealed else {
            log::debug!("Playback requested outside ComputerPlaying, ignored");
            return RoundEnd::Finished;
        };

        log::info!("Computer playing {} symbols", revealed.len());
        for (index, symbol) in revealed.into_iter().enumerate() {
            if !self.is_running() {
                return RoundEnd::Cancelled;
            }
            if self.press(index, symbol) == RoundEnd::Cancelled {
                return RoundEnd::Cancelled;
            }
        }

        self.state.with_lock(|s| {
            if s.phase == Phase::ComputerPlaying {
                s.phase = Phase::HumanPlaying;
            }
        });
        log::info!("Handing focus to human");
        self.screen.request_frame();
        RoundEnd::Finished
    }

    /// Show one symbol for the dwell time, then release it
    fn press(&self, index: usize, symbol: Symbol) -> RoundEnd {
        let Some(cue) = symbol.cue() else {
            return RoundEnd::Finished;
        };
        log::debug!("Computer plays index {}: {:?}", index, symbol);

        self.emitter.activate(cue);
        self.state.with_lock(|s| s.set_highlight(symbol, true));
        self.screen.request_frame();

        let held = self.hold();

        self.emitter.deactivate();
        self.state.with_lock(|s| s.clear_highlight());
        self.screen.request_frame();

        if held && self.is_running() {
            RoundEnd::Finished
        } else {
            RoundEnd::Cancelled
        }
    }

    /// Wait out the dwell time. False when a stop arrives first.
    fn hold(&self) -> bool {
        let deadline = Instant::now() + self.dwell;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return true;
            }
            match self.inbox.recv_timeout(remaining) {
                Err(RecvTimeoutError::Timeout) => return true,
                // Already playing
                Ok(PlaybackCommand::Play) => continue,
                Ok(PlaybackCommand::Stop) | Err(RecvTimeoutError::Disconnected) => return false,
            }
        }
    }
}
