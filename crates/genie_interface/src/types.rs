//! Request and response types exchanged with collaborator services.
//!
//! Only the request intent is fixed here; each client maps it onto its
//! vendor payload.

use derive_builder::Builder;
use derive_getters::Getters;
use genie_core::{AspectRatio, ImageQuality, MediaRef, VideoDuration, VoiceOption};
use serde::Serialize;

/// Text to analyse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    /// Source text
    pub text: String,
}

/// What the analysis service sent back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AnalysisResponse {
    /// Text accepted as-is
    Confirmed,
    /// Normalised replacement text
    Rewritten(String),
}

/// Text to speak with a chosen voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeechRequest {
    /// Text to synthesize
    pub text: String,
    /// Voice identity
    pub voice: VoiceOption,
}

/// Playable audio produced by the speech service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeechResponse {
    /// Audio reference
    pub audio: MediaRef,
}

/// Image generation parameters.
///
/// # Examples
///
/// ```
/// use genie_interface::ImageRequestBuilder;
/// use genie_core::{AspectRatio, ImageQuality};
///
/// let request = ImageRequestBuilder::default()
///     .prompt("A temple at dawn")
///     .style("Divine Temple Architecture")
///     .palette("Saffron Sacred")
///     .quality(ImageQuality::default())
///     .aspect_ratio(AspectRatio::Landscape)
///     .build()
///     .unwrap();
/// assert_eq!(request.style(), "Divine Temple Architecture");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ImageRequest {
    /// Full prompt text
    prompt: String,
    /// Style name
    style: String,
    /// Colour scheme name
    palette: String,
    /// Quality percentage
    quality: ImageQuality,
    /// Orientation of the final video
    aspect_ratio: AspectRatio,
}

/// Generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageResponse {
    /// Image reference
    pub image: MediaRef,
}

/// Everything the assembly service needs to render the final video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct VideoRequest {
    /// Narration text
    text: String,
    /// Voiceover
    audio: MediaRef,
    /// Background image, absent when image generation was turned off
    #[builder(default)]
    image: Option<MediaRef>,
    /// Background music, absent when skipped
    #[builder(default)]
    music: Option<MediaRef>,
    /// Target length
    duration: VideoDuration,
    /// Orientation
    aspect_ratio: AspectRatio,
}

/// Rendered video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoResponse {
    /// Video reference
    pub video: MediaRef,
    /// File size when the service reports it
    pub size_bytes: Option<u64>,
}
