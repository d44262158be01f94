//! Terminal UI error types.

/// Terminal failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TuiErrorKind {
    /// Terminal could not be prepared
    #[display("Terminal setup failed: {}", _0)]
    TerminalSetup(String),
    /// Terminal could not be restored
    #[display("Terminal restore failed: {}", _0)]
    TerminalRestore(String),
    /// Polling for input failed
    #[display("Event poll failed: {}", _0)]
    EventPoll(String),
    /// Reading input failed
    #[display("Event read failed: {}", _0)]
    EventRead(String),
    /// Drawing a frame failed
    #[display("Rendering failed: {}", _0)]
    Rendering(String),
}

/// TUI error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("TUI Error: {} at line {} in {}", kind, line, file)]
pub struct TuiError {
    /// The specific failure
    pub kind: TuiErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TuiError {
    /// Create a new TuiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TuiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;
