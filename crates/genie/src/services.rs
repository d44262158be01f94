//! Wiring the HTTP clients into wizard services.

use crate::GenieConfig;
use genie_error::GenieResult;
use genie_interface::WithFallback;
use genie_models::{
    CommandPlayer, GeminiAnalysisClient, GoogleTtsClient, HttpAssetFetcher, Json2VideoClient, OpenAiImageClient,
};
use genie_wizard::Services;
use std::sync::Arc;
use tracing::{info, instrument};

/// Build the production services from `config`.
///
/// Each generative service gets its primary key and, when the fallback
/// variable is set, one fallback attempt with the secondary key.
///
/// # Errors
///
/// Returns an error if any primary key variable is unset or blank.
#[instrument(skip_all)]
pub fn build_services(config: &GenieConfig) -> GenieResult<Services> {
    let settings = config.services();

    let (gemini, gemini_fallback) = GeminiAnalysisClient::from_settings(settings.gemini())?;
    let (tts, tts_fallback) = GoogleTtsClient::from_settings(settings.google_tts())?;
    let (openai, openai_fallback) = OpenAiImageClient::from_settings(settings.openai())?;
    let (json2video, json2video_fallback) = Json2VideoClient::from_settings(settings.json2video())?;

    let analysis = WithFallback::new(gemini, gemini_fallback);
    let speech = WithFallback::new(tts, tts_fallback);
    let image = WithFallback::new(openai, openai_fallback);
    let video = WithFallback::new(json2video, json2video_fallback);

    info!(
        gemini_fallback = analysis.has_secondary(),
        tts_fallback = speech.has_secondary(),
        openai_fallback = image.has_secondary(),
        json2video_fallback = video.has_secondary(),
        "Services configured"
    );

    Ok(Services {
        analysis: Arc::new(analysis),
        speech: Arc::new(speech),
        image: Arc::new(image),
        video: Arc::new(video),
        fetcher: Arc::new(HttpAssetFetcher::new()),
        player: Arc::new(CommandPlayer::new(
            config.player().command().clone(),
            config.player().args().clone(),
        )),
    })
}
