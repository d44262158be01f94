//! Local guard failures.

/// Conditions under which a panel refuses to proceed.
///
/// The `Display` text is written for the person using the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Source text is empty or whitespace
    #[display("Please input some text to convert into a video.")]
    TextRequired,
    /// Source text is below the minimum length
    #[display("Please provide at least {min} characters for better video generation (got {actual}).")]
    TextTooShort {
        /// Minimum character count
        min: usize,
        /// Character count supplied
        actual: usize,
    },
    /// A step's required asset has not been produced yet
    #[display("Please generate the {} before proceeding.", _0)]
    MissingAsset(String),
    /// The text analysis sub-step has not completed
    #[display("Text analysis has not completed yet.")]
    AnalysisIncomplete,
    /// Uploaded file has a MIME type outside the allow-list
    #[display("Unsupported file type '{}'. Please upload an MP3, WAV, or MP4 audio file.", _0)]
    UnsupportedMediaType(String),
    /// Uploaded file exceeds the size limit
    #[display("File is {size} bytes. Please upload a file smaller than {max} bytes.")]
    FileTooLarge {
        /// Size of the rejected file
        size: u64,
        /// Maximum accepted size
        max: u64,
    },
    /// Neither music nor an explicit skip has been chosen
    #[display("Please upload background music or choose to skip it.")]
    MusicUndecided,
    /// An asset is held locally but a remote service must fetch it by URL
    #[display("The {} must be reachable at a public URL before the video can be rendered.", _0)]
    UnreachableAsset(String),
    /// Requested voice is not in the catalog
    #[display("Voice '{}' not found.", _0)]
    UnknownVoice(String),
    /// A setting is outside its accepted range
    #[display("Invalid value for '{field}': {reason}")]
    InvalidSetting {
        /// Setting name
        field: String,
        /// Why it was rejected
        reason: String,
    },
    /// A panel action was invoked while a different step is active
    #[display("'{expected}' is not the active step (currently '{actual}').")]
    StepMismatch {
        /// Step the action belongs to
        expected: String,
        /// Step that is active
        actual: String,
    },
}

impl ValidationErrorKind {
    /// Short title for a notification.
    pub fn title(&self) -> &'static str {
        match self {
            Self::TextRequired => "Text Required",
            Self::TextTooShort { .. } => "Text Too Short",
            Self::MissingAsset(_) => "Asset Required",
            Self::AnalysisIncomplete => "Processing In Progress",
            Self::UnsupportedMediaType(_) => "Invalid File Type",
            Self::FileTooLarge { .. } => "File Too Large",
            Self::MusicUndecided => "Music Required",
            Self::UnreachableAsset(_) => "Asset Not Reachable",
            Self::UnknownVoice(_) => "Voice Not Found",
            Self::InvalidSetting { .. } => "Invalid Setting",
            Self::StepMismatch { .. } => "Wrong Step",
        }
    }
}

/// Validation error with source location.
///
/// # Examples
///
/// ```
/// use genie_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::TextTooShort { min: 10, actual: 2 });
/// assert!(format!("{}", err).contains("at least 10"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific condition
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
