// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Feed(String),
    Player(PlayerError),
}

/// Specific error types for the video carousel.
///
/// All of these are handled inside the player: they are logged and turned
/// into safe fallback state, never propagated to the embedding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// The media surface rejected a play command (decode or permission
    /// failure). Playback state keeps reflecting user intent.
    PlayRejected(String),

    /// The media source failed to load or decode. The item renders as a
    /// paused/poster state; position and duration keep their last known
    /// values.
    LoadFailed(String),

    /// The platform refused the fullscreen request. The fullscreen flag is
    /// left unchanged.
    FullscreenDenied(String),
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::PlayRejected(msg) => write!(f, "Play command rejected: {}", msg),
            PlayerError::LoadFailed(msg) => write!(f, "Media failed to load: {}", msg),
            PlayerError::FullscreenDenied(msg) => write!(f, "Fullscreen denied: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Feed(e) => write!(f, "Feed Error: {}", e),
            Error::Player(e) => write!(f, "Player Error: {}", e),
        }
    }
}

impl From<PlayerError> for Error {
    fn from(err: PlayerError) -> Self {
        Error::Player(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
