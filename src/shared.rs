//! Lock-guarded game state shared between threads
//!
//! All access goes through scoped accessors, so a guard can never escape a
//! call site and every exit path (including a panic in the callback)
//! releases the lock. Acquisitions do not nest: calling back into
//! `SharedState` from inside a callback deadlocks.

use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::sim::{GameSnapshot, GameState, Phase};

/// Single shared [`GameState`] behind one mutex
pub struct SharedState {
    state: Mutex<GameState>,
    /// Notified whenever a `with_lock` callback changes the phase
    phase_changed: Condvar,
}

impl SharedState {
    pub fn new(state: GameState) -> Self {
        Self {
            state: Mutex::new(state),
            phase_changed: Condvar::new(),
        }
    }

    /// Run `f` with exclusive access, blocking until the lock is free
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut GameState) -> R) -> R {
        let mut guard = self.state.lock();
        let before = guard.phase;
        let result = f(&mut guard);
        let changed = guard.phase != before;
        drop(guard);

        if changed {
            self.phase_changed.notify_all();
        }
        result
    }

    /// Run `f` read-only if the lock frees up within `timeout`
    pub fn try_with_lock_for<R>(
        &self,
        timeout: Duration,
        f: impl FnOnce(&GameState) -> R,
    ) -> Option<R> {
        let guard = self.state.try_lock_for(timeout)?;
        Some(f(&guard))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.lock().snapshot()
    }

    /// Best-effort snapshot for the renderer
    pub fn try_snapshot(&self, timeout: Duration) -> Option<GameSnapshot> {
        self.try_with_lock_for(timeout, GameState::snapshot)
    }

    pub fn phase(&self) -> Phase {
        self.state.lock().phase
    }

    /// Block until the phase equals `phase`. Returns false on timeout.
    pub fn wait_for_phase(&self, phase: Phase, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut guard = self.state.lock();
        while guard.phase != phase {
            if self
                .phase_changed
                .wait_until(&mut guard, deadline)
                .timed_out()
            {
                return guard.phase == phase;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Symbol;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_with_lock_mutates_in_place() {
        let shared = SharedState::new(GameState::new(1, 20));
        shared.with_lock(|s| s.start_game(5));
        let snap = shared.snapshot();
        assert_eq!(snap.phase, Phase::ComputerPlaying);
        assert_eq!(snap.round, 5);
    }

    #[test]
    fn test_bounded_read_skips_while_held() {
        let shared = Arc::new(SharedState::new(GameState::new(1, 20)));
        let (held_tx, held_rx) = std::sync::mpsc::channel();
        let (release_tx, release_rx) = std::sync::mpsc::channel::<()>();

        let holder = {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || {
                shared.with_lock(|_| {
                    held_tx.send(()).unwrap();
                    release_rx.recv().unwrap();
                });
            })
        };

        held_rx.recv().unwrap();
        assert!(shared.try_snapshot(Duration::from_millis(10)).is_none());
        release_tx.send(()).unwrap();
        holder.join().unwrap();
        assert!(shared.try_snapshot(Duration::from_millis(10)).is_some());
    }

    #[test]
    fn test_panic_in_callback_releases_lock() {
        let shared = Arc::new(SharedState::new(GameState::new(1, 20)));
        let result = {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || {
                shared.with_lock(|s| {
                    if s.round == 0 {
                        panic!("callback failure");
                    }
                });
            })
            .join()
        };
        assert!(result.is_err());
        assert!(shared.try_snapshot(Duration::from_millis(50)).is_some());
    }

    #[test]
    fn test_wait_for_phase_wakes_on_change() {
        let shared = Arc::new(SharedState::new(GameState::new(1, 20)));
        let writer = {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || {
                std::thread::sleep(Duration::from_millis(20));
                shared.with_lock(|s| s.phase = Phase::HumanPlaying);
            })
        };
        assert!(shared.wait_for_phase(Phase::HumanPlaying, Duration::from_secs(5)));
        writer.join().unwrap();
        assert!(!shared.wait_for_phase(Phase::GameOver, Duration::from_millis(10)));
    }

    #[test]
    fn test_readers_never_see_torn_highlight() {
        let shared = Arc::new(SharedState::new(GameState::new(1, 20)));
        shared.with_lock(|s| s.phase = Phase::HumanPlaying);
        let running = Arc::new(AtomicBool::new(true));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                let running = Arc::clone(&running);
                std::thread::spawn(move || {
                    let mut reads = 0u64;
                    loop {
                        let snap = shared.snapshot();
                        let pair = (snap.current_input, snap.press);
                        assert!(
                            pair == (Symbol::None, false) || pair == (Symbol::Up, true),
                            "torn pair {:?}",
                            pair
                        );
                        reads += 1;
                        if !running.load(Ordering::Relaxed) {
                            break reads;
                        }
                    }
                })
            })
            .collect();

        for _ in 0..20_000 {
            shared.with_lock(|s| s.set_highlight(Symbol::Up, true));
            shared.with_lock(|s| s.clear_highlight());
        }
        running.store(false, Ordering::Relaxed);

        for reader in readers {
            assert!(reader.join().unwrap() > 0);
        }
    }
}
