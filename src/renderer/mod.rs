//! Frame requests and renderers
//!
//! Drawing itself happens in a [`Renderer`]; [`Screen`] decides whether a
//! frame can be drawn right now. Either thread may request a frame, but
//! never while it holds the state lock.

pub mod text;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::shared::SharedState;
use crate::sim::GameSnapshot;

pub use text::{TerminalRenderer, layout};

/// Draws one frame from a read-only copy of the state
pub trait Renderer: Send + Sync {
    fn render(&self, snapshot: &GameSnapshot);
}

/// Connects a renderer to the shared state
pub struct Screen {
    state: Arc<SharedState>,
    renderer: Arc<dyn Renderer>,
    lock_timeout: Duration,
    attached: AtomicBool,
}

impl Screen {
    pub fn new(
        state: Arc<SharedState>,
        renderer: Arc<dyn Renderer>,
        lock_timeout: Duration,
    ) -> Self {
        Self {
            state,
            renderer,
            lock_timeout,
            attached: AtomicBool::new(true),
        }
    }

    /// Draw a frame if the lock frees up in time. Returns whether one was drawn.
    pub fn request_frame(&self) -> bool {
        if !self.is_attached() {
            return false;
        }

        let Some(snapshot) = self.state.try_snapshot(self.lock_timeout) else {
            log::trace!("State busy, frame skipped");
            return false;
        };
        self.renderer.render(&snapshot);
        true
    }

    /// Stop drawing; later requests are no-ops
    pub fn detach(&self) {
        self.attached.store(false, Ordering::Release);
    }

    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Phase};
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Frames(Mutex<Vec<GameSnapshot>>);

    impl Renderer for Frames {
        fn render(&self, snapshot: &GameSnapshot) {
            self.0.lock().push(*snapshot);
        }
    }

    fn screen() -> (Arc<SharedState>, Arc<Frames>, Screen) {
        let state = Arc::new(SharedState::new(GameState::new(1, 20)));
        let frames = Arc::new(Frames::default());
        let screen = Screen::new(
            Arc::clone(&state),
            frames.clone(),
            Duration::from_millis(10),
        );
        (state, frames, screen)
    }

    #[test]
    fn test_frame_draws_current_state() {
        let (state, frames, screen) = screen();
        state.with_lock(|s| s.start_game(10));
        assert!(screen.request_frame());
        let drawn = frames.0.lock();
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].phase, Phase::ComputerPlaying);
    }

    #[test]
    fn test_frame_skipped_while_lock_held() {
        let (state, frames, screen) = screen();
        let drawn = state.with_lock(|_| screen.request_frame());
        assert!(!drawn);
        assert!(frames.0.lock().is_empty());
    }

    #[test]
    fn test_detached_screen_draws_nothing() {
        let (_state, frames, screen) = screen();
        screen.detach();
        assert!(!screen.request_frame());
        assert!(frames.0.lock().is_empty());
    }
}
