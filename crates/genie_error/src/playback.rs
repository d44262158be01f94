//! Local media playback failures.

/// Playback failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PlaybackErrorKind {
    /// Nothing to play
    #[display("No media available to play")]
    NoMedia,
    /// Player command could not be started
    #[display("Failed to launch player '{}': {}", command, message)]
    Launch {
        /// Player command
        command: String,
        /// Launch failure
        message: String,
    },
    /// Player exited unsuccessfully
    #[display("Player exited with status {}", _0)]
    Exit(i32),
}

/// Playback error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Playback Error: {} at line {} in {}", kind, line, file)]
pub struct PlaybackError {
    /// The specific failure
    pub kind: PlaybackErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PlaybackError {
    /// Create a new PlaybackError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PlaybackErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
