//! Top-level error wrapper types.

use crate::{ConfigError, IoError, JsonError, PlaybackError, RemoteError, ValidationError};
#[cfg(feature = "tui")]
use crate::TuiError;

/// Every error the wizard can surface.
///
/// # Examples
///
/// ```
/// use genie_error::{GenieError, RemoteError, RemoteErrorKind};
///
/// let err: GenieError = RemoteError::new("openai", RemoteErrorKind::Request("refused".into())).into();
/// assert!(err.is_remote());
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GenieErrorKind {
    /// A local guard failed
    #[from(ValidationError)]
    Validation(ValidationError),
    /// A collaborator service call failed
    #[from(RemoteError)]
    Remote(RemoteError),
    /// Local media playback failed
    #[from(PlaybackError)]
    Playback(PlaybackError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Filesystem error
    #[from(IoError)]
    Io(IoError),
    /// Terminal UI error
    #[cfg(feature = "tui")]
    #[from(TuiError)]
    Tui(TuiError),
}

/// Genie error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Genie Error: {}", _0)]
pub struct GenieError(Box<GenieErrorKind>);

impl GenieError {
    /// Create a new error from a kind.
    pub fn new(kind: GenieErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenieErrorKind {
        &self.0
    }

    /// True when the error came from a local guard.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), GenieErrorKind::Validation(_))
    }

    /// True when the error came from a collaborator service.
    pub fn is_remote(&self) -> bool {
        matches!(self.kind(), GenieErrorKind::Remote(_))
    }

    /// The validation condition, if this is a validation error.
    pub fn validation_kind(&self) -> Option<&crate::ValidationErrorKind> {
        match self.kind() {
            GenieErrorKind::Validation(e) => Some(&e.kind),
            _ => None,
        }
    }
}

impl<T> From<T> for GenieError
where
    T: Into<GenieErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for wizard operations.
pub type GenieResult<T> = std::result::Result<T, GenieError>;
