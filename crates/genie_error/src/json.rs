//! JSON rendering failures.

/// A document could not be rendered as JSON.
///
/// Response bodies from collaborator services are not covered here; those
/// surface as [`RemoteErrorKind::Parse`](crate::RemoteErrorKind::Parse).
///
/// # Examples
///
/// ```
/// use genie_error::JsonError;
///
/// let err = JsonError::new("run report", "key must be a string");
/// assert_eq!(err.document, "run report");
/// assert!(err.to_string().contains("could not render run report"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: could not render {}: {} at line {} in {}", document, reason, line, file)]
pub struct JsonError {
    /// What was being rendered
    pub document: String,
    /// Serializer message
    pub reason: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError with automatic location tracking.
    #[track_caller]
    pub fn new(document: impl Into<String>, reason: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            document: document.into(),
            reason: reason.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
