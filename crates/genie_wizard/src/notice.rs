//! User-visible notifications.

use derive_getters::Getters;
use genie_error::{GenieError, GenieErrorKind};
use serde::Serialize;

/// How a notice is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// Neutral information
    Info,
    /// An action succeeded
    Success,
    /// An action failed; the wizard stays on the same step
    Error,
}

/// A transient notification for the person using the wizard.
///
/// # Examples
///
/// ```
/// use genie_error::{GenieError, ValidationError, ValidationErrorKind};
/// use genie_wizard::{Notice, Severity};
///
/// let err: GenieError = ValidationError::new(ValidationErrorKind::TextTooShort { min: 10, actual: 2 }).into();
/// let notice = Notice::from_error(&err);
/// assert_eq!(notice.title(), "Text Too Short");
/// assert_eq!(*notice.severity(), Severity::Error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Notice {
    title: String,
    description: String,
    severity: Severity,
}

impl Notice {
    /// Success notice.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Success,
        }
    }

    /// Informational notice.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    /// Error notice describing `err`.
    pub fn from_error(err: &GenieError) -> Self {
        #[allow(unreachable_patterns)]
        let (title, description) = match err.kind() {
            GenieErrorKind::Validation(e) => (e.kind.title().to_string(), e.kind.to_string()),
            GenieErrorKind::Remote(e) => (
                remote_title(&e.service).to_string(),
                format!("{}. Please try again.", e.kind),
            ),
            GenieErrorKind::Playback(e) => ("Playback Failed".to_string(), e.kind.to_string()),
            GenieErrorKind::Config(e) => ("Configuration Error".to_string(), e.kind.to_string()),
            GenieErrorKind::Json(e) => (
                "Data Error".to_string(),
                format!("Could not render {}: {}", e.document, e.reason),
            ),
            GenieErrorKind::Io(e) => ("File Error".to_string(), e.message.clone()),
            other => ("Error".to_string(), other.to_string()),
        };
        Self {
            title,
            description,
            severity: Severity::Error,
        }
    }
}

fn remote_title(service: &str) -> &'static str {
    match service {
        "gemini" => "Text Analysis Failed",
        "google_tts" => "Voice Generation Failed",
        "openai" => "Image Generation Failed",
        "json2video" => "Video Generation Failed",
        "download" => "Download Failed",
        _ => "Request Failed",
    }
}
