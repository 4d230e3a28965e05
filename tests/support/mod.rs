// Shared harness that runs a game on its own thread for scenario tests.
use std::{
    sync::{Arc, mpsc::SyncSender},
    thread::JoinHandle,
    time::{Duration, Instant},
};

use memory_game::{
    ExitReason, MemoryGame, Result, Settings, SharedState,
    effects::RecordingEmitter,
    game::event_queue,
    renderer::Renderer,
    sim::{GameEvent, GameSnapshot, InputEvent, InputKey},
};
use parking_lot::Mutex;

// Longest any scenario waits on the game thread.
pub const WAIT: Duration = Duration::from_secs(5);

// Renderer that keeps every frame it was asked to draw.
#[derive(Default)]
pub struct RecordingRenderer {
    frames: Mutex<Vec<GameSnapshot>>,
}

impl RecordingRenderer {
    pub fn frames(&self) -> Vec<GameSnapshot> {
        self.frames.lock().clone()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, snapshot: &GameSnapshot) {
        self.frames.lock().push(*snapshot);
    }
}

// A running game plus the handles a test needs to drive and observe it.
pub struct Harness {
    pub state: Arc<SharedState>,
    pub emitter: Arc<RecordingEmitter>,
    pub renderer: Arc<RecordingRenderer>,
    events: SyncSender<GameEvent>,
    game: JoinHandle<Result<ExitReason>>,
}

// Fixed seed and a short dwell so playback finishes quickly.
pub fn fast_settings() -> Settings {
    Settings {
        seed: Some(12345),
        dwell_ms: 2,
        ..Settings::default()
    }
}

pub fn start(settings: Settings) -> Harness {
    let emitter = Arc::new(RecordingEmitter::new());
    let renderer = Arc::new(RecordingRenderer::default());
    let game = MemoryGame::new(settings, emitter.clone(), renderer.clone())
        .expect("game should initialize");
    let state = game.shared_state();
    let (events, inbox) = event_queue(8);
    let game = std::thread::spawn(move || game.run(inbox));

    Harness {
        state,
        emitter,
        renderer,
        events,
        game,
    }
}

impl Harness {
    pub fn send(&self, key: InputKey, press: bool) {
        let input = if press {
            InputEvent::press(key)
        } else {
            InputEvent::release(key)
        };
        self.events.send(input.into()).expect("game should accept events");
    }

    // Send Back and wait for the game thread to finish its teardown.
    pub fn back(self) -> ExitReason {
        self.send(InputKey::Back, true);
        self.join()
    }

    pub fn join(self) -> ExitReason {
        let Harness { events, game, .. } = self;
        drop(events);
        let started = Instant::now();
        while !game.is_finished() {
            assert!(started.elapsed() < WAIT, "game did not stop in time");
            std::thread::sleep(Duration::from_millis(1));
        }
        game.join()
            .expect("game thread should not panic")
            .expect("game should stop cleanly")
    }
}

// Poll `cond` until it holds or WAIT elapses.
pub fn wait_until(mut cond: impl FnMut() -> bool) -> bool {
    let started = Instant::now();
    while started.elapsed() < WAIT {
        if cond() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(1));
    }
    cond()
}
