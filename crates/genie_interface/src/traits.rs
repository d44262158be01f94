//! Capability traits, one per collaborator.

use crate::{
    AnalysisRequest, AnalysisResponse, ImageRequest, ImageResponse, SpeechRequest, SpeechResponse,
    VideoRequest, VideoResponse,
};
use async_trait::async_trait;
use genie_core::MediaRef;
use genie_error::GenieResult;

/// Text-analysis service.
#[async_trait]
pub trait TextAnalysis: Send + Sync {
    /// Analyse (and possibly normalise) source text.
    async fn analyze(&self, req: &AnalysisRequest) -> GenieResult<AnalysisResponse>;

    /// Service name used in logs and errors.
    fn service_name(&self) -> &str;
}

/// Speech-synthesis service.
#[async_trait]
pub trait SpeechSynthesis: Send + Sync {
    /// Speak text with the requested voice.
    async fn synthesize(&self, req: &SpeechRequest) -> GenieResult<SpeechResponse>;

    /// Service name used in logs and errors.
    fn service_name(&self) -> &str;
}

/// Image-synthesis service.
#[async_trait]
pub trait ImageSynthesis: Send + Sync {
    /// Produce exactly one image.
    async fn generate_image(&self, req: &ImageRequest) -> GenieResult<ImageResponse>;

    /// Service name used in logs and errors.
    fn service_name(&self) -> &str;
}

/// Video-assembly service.
#[async_trait]
pub trait VideoAssembly: Send + Sync {
    /// Render the final video and wait for the result.
    async fn assemble(&self, req: &VideoRequest) -> GenieResult<VideoResponse>;

    /// Service name used in logs and errors.
    fn service_name(&self) -> &str;
}

/// Retrieves the bytes behind a media reference for download.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Fetch the full payload.
    async fn fetch(&self, media: &MediaRef) -> GenieResult<Vec<u8>>;
}

/// Plays media locally.
#[async_trait]
pub trait MediaPlayer: Send + Sync {
    /// Play a media reference, returning once playback was handed off or finished.
    async fn play(&self, media: &MediaRef) -> GenieResult<()>;
}
