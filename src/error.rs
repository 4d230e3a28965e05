//! Error taxonomy for the game process

/// Errors that stop a game instance
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// A resource needed before the event loop could not be acquired
    #[error("Initialization failed: {0}")]
    Init(String),

    /// Settings were readable but describe an impossible game
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error while reading configuration or spawning threads
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for [`crate::Settings`]
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// The computer player thread panicked before it could be joined
    #[error("Computer player thread panicked")]
    PlaybackPanicked,
}

impl GameError {
    /// Process status code reported for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GameError::Init(_)
            | GameError::InvalidConfig(_)
            | GameError::Io(_)
            | GameError::Config(_) => 255,
            GameError::PlaybackPanicked => 1,
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_failures_use_distinct_status() {
        assert_eq!(GameError::Init("thread".into()).exit_code(), 255);
        assert_eq!(GameError::InvalidConfig("length".into()).exit_code(), 255);
        assert_ne!(GameError::PlaybackPanicked.exit_code(), 0);
    }
}
