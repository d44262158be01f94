//! The collaborator services a wizard runs against.

use genie_interface::{AssetFetcher, ImageSynthesis, MediaPlayer, SpeechSynthesis, TextAnalysis, VideoAssembly};
use std::sync::Arc;

/// One handle per collaborator.
///
/// Real HTTP clients and test fakes are interchangeable here.
#[derive(Clone)]
pub struct Services {
    /// Text analysis for the processing step
    pub analysis: Arc<dyn TextAnalysis>,
    /// Speech synthesis for the voice step and voice previews
    pub speech: Arc<dyn SpeechSynthesis>,
    /// Image synthesis for the image step
    pub image: Arc<dyn ImageSynthesis>,
    /// Video assembly for the video step
    pub video: Arc<dyn VideoAssembly>,
    /// Downloads on the preview step
    pub fetcher: Arc<dyn AssetFetcher>,
    /// Local playback
    pub player: Arc<dyn MediaPlayer>,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("analysis", &self.analysis.service_name())
            .field("speech", &self.speech.service_name())
            .field("image", &self.image.service_name())
            .field("video", &self.video.service_name())
            .finish_non_exhaustive()
    }
}
