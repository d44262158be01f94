//! Configuration failures.

/// What went wrong while assembling settings.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A layer (bundled, user, local file or environment) could not be read or merged
    #[display("could not load settings: {}", _0)]
    Load(String),
    /// The merged settings do not fit the expected sections
    #[display("settings have an invalid shape: {}", _0)]
    Shape(String),
    /// Command-line arguments could not be turned into a run
    #[display("invalid run arguments: {}", _0)]
    Arguments(String),
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use genie_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Shape("wizard.tick_ms: invalid type".into()));
/// assert!(err.to_string().contains("invalid shape"));
/// assert!(matches!(err.kind, ConfigErrorKind::Shape(_)));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific failure
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
