//! Light and tone effects
//!
//! The device's LED/speaker live behind [`EffectEmitter`]. The computer
//! player and the human input path both drive it with a [`Cue`] taken from
//! the same symbol table.

use parking_lot::Mutex;

use crate::sim::Cue;

/// Something that can show a cue and turn it off again
pub trait EffectEmitter: Send + Sync {
    /// Light the cue's color and start its tone
    fn activate(&self, cue: Cue);
    /// Reset the light and stop the speaker
    fn deactivate(&self);
}

/// Emitter that only logs, for headless runs and the terminal binary
pub struct LogEmitter {
    volume: f32,
}

impl LogEmitter {
    pub fn new(volume: f32) -> Self {
        Self {
            volume: volume.clamp(0.0, 1.0),
        }
    }
}

impl Default for LogEmitter {
    fn default() -> Self {
        Self::new(crate::consts::EFFECT_VOLUME)
    }
}

impl EffectEmitter for LogEmitter {
    fn activate(&self, cue: Cue) {
        let (r, g, b) = cue.color.channels();
        log::debug!(
            "Effects on: {} (r={} g={} b={}) {} Hz @ {:.2}",
            cue.color.as_str(),
            r as u8,
            g as u8,
            b as u8,
            cue.tone_hz,
            self.volume
        );
    }

    fn deactivate(&self) {
        log::debug!("Effects off");
    }
}

/// One call received by a [`RecordingEmitter`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectCall {
    Activate(Cue),
    Deactivate,
}

/// Emitter that remembers every call in order
#[derive(Default)]
pub struct RecordingEmitter {
    calls: Mutex<Vec<EffectCall>>,
}

impl RecordingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<EffectCall> {
        self.calls.lock().clone()
    }

    /// Whether an activation is currently unmatched by a deactivation
    pub fn is_active(&self) -> bool {
        matches!(self.calls.lock().last(), Some(EffectCall::Activate(_)))
    }
}

impl EffectEmitter for RecordingEmitter {
    fn activate(&self, cue: Cue) {
        self.calls.lock().push(EffectCall::Activate(cue));
    }

    fn deactivate(&self) {
        self.calls.lock().push(EffectCall::Deactivate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Symbol;

    #[test]
    fn test_recording_emitter_keeps_order() {
        let emitter = RecordingEmitter::new();
        let cue = Symbol::Down.cue().unwrap();
        emitter.activate(cue);
        assert!(emitter.is_active());
        emitter.deactivate();
        assert!(!emitter.is_active());
        assert_eq!(
            emitter.calls(),
            vec![EffectCall::Activate(cue), EffectCall::Deactivate]
        );
    }

    /// Collects the levels of records logged from this module
    struct LevelRecorder(Mutex<Vec<log::Level>>);

    impl log::Log for LevelRecorder {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if record.target() == module_path!().trim_end_matches("::tests") {
                self.0.lock().push(record.level());
            }
        }

        fn flush(&self) {}
    }

    static RECORDER: LevelRecorder = LevelRecorder(Mutex::new(Vec::new()));

    #[test]
    fn test_log_emitter_logs_effects_at_debug() {
        let _ = log::set_logger(&RECORDER);
        log::set_max_level(log::LevelFilter::Trace);

        let emitter = LogEmitter::default();
        emitter.activate(Symbol::Center.cue().unwrap());
        emitter.deactivate();

        let levels = RECORDER.0.lock().clone();
        assert_eq!(levels, vec![log::Level::Debug, log::Level::Debug]);
    }

    #[test]
    fn test_log_emitter_clamps_volume() {
        assert_eq!(LogEmitter::new(3.0).volume, 1.0);
        assert_eq!(LogEmitter::new(-1.0).volume, 0.0);
    }
}
