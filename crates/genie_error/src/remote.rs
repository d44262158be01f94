//! Collaborator service failures.

/// Ways a generative service call can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RemoteErrorKind {
    /// API key environment variable not set
    #[display("API key not configured ({})", _0)]
    MissingCredential(String),
    /// Transport-level failure
    #[display("Request failed: {}", _0)]
    Request(String),
    /// Service answered with a non-success status
    #[display("HTTP {} error: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
    /// Response body did not have the expected shape
    #[display("Unexpected response: {}", _0)]
    Parse(String),
    /// Long-running job reported failure
    #[display("Job failed: {}", _0)]
    JobFailed(String),
    /// Long-running job did not finish in the allotted polls
    #[display("Timed out after {} status checks", _0)]
    Timeout(u32),
}

/// Remote call error with the failing service and source location.
///
/// # Examples
///
/// ```
/// use genie_error::{RemoteError, RemoteErrorKind};
///
/// let err = RemoteError::new("gemini", RemoteErrorKind::Api { status: 503, message: "overloaded".into() });
/// assert!(format!("{}", err).contains("gemini"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Remote Error ({}): {} at line {} in {}", service, kind, line, file)]
pub struct RemoteError {
    /// Service that failed
    pub service: String,
    /// The specific failure
    pub kind: RemoteErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl RemoteError {
    /// Create a new RemoteError with automatic location tracking.
    #[track_caller]
    pub fn new(service: impl Into<String>, kind: RemoteErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            service: service.into(),
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
