//! References to generated or uploaded media.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where a media asset lives.
///
/// # Examples
///
/// ```
/// use genie_core::MediaRef;
///
/// let url = MediaRef::Url("https://cdn.example/v.mp4".to_string());
/// assert_eq!(url.uri(), "https://cdn.example/v.mp4");
///
/// let inline = MediaRef::Inline { mime: "audio/mpeg".into(), data: "SUQz".into() };
/// assert_eq!(inline.uri(), "data:audio/mpeg;base64,SUQz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaRef {
    /// Remote URL
    Url(String),
    /// Local file
    Path(PathBuf),
    /// Base64 payload held in memory
    Inline {
        /// MIME type of the payload
        mime: String,
        /// Base64-encoded bytes
        data: String,
    },
}

impl MediaRef {
    /// A single string form usable as a `src` attribute.
    pub fn uri(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Path(path) => format!("file://{}", path.display()),
            Self::Inline { mime, data } => format!("data:{};base64,{}", mime, data),
        }
    }

    /// True for references that a remote service can fetch.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl std::fmt::Display for MediaRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{}", url),
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Inline { mime, data } => write!(f, "<inline {} ({} base64 chars)>", mime, data.len()),
        }
    }
}

/// The four asset slots of a project.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Final video
    Video,
    /// Background image
    Image,
    /// Voiceover
    Audio,
    /// Background music
    Music,
}

impl AssetKind {
    /// Human label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "background image",
            Self::Audio => "voiceover",
            Self::Music => "background music",
        }
    }

    /// File stem used when downloading the asset.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "background-image",
            Self::Audio => "voiceover",
            Self::Music => "background-music",
        }
    }

    /// Extension used when the source does not carry one.
    pub fn default_extension(&self) -> &'static str {
        match self {
            Self::Video => "mp4",
            Self::Image => "png",
            Self::Audio => "mp3",
            Self::Music => "mp3",
        }
    }
}
