//! Mock collaborators.

#![allow(dead_code)]

use async_trait::async_trait;
use genie_core::MediaRef;
use genie_error::{GenieResult, RemoteError, RemoteErrorKind};
use genie_interface::{
    AnalysisRequest, AnalysisResponse, AssetFetcher, ImageRequest, ImageResponse, ImageSynthesis, MediaPlayer,
    SpeechRequest, SpeechResponse, SpeechSynthesis, TextAnalysis, VideoAssembly, VideoRequest, VideoResponse,
};
use genie_wizard::{Services, Wizard, WizardOptions};
use std::sync::{Arc, Mutex};

/// How a mock answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Always succeed
    Success,
    /// Always fail with a remote API error
    Fail,
}

#[derive(Debug, Default)]
struct Calls {
    analysis: usize,
    speech: usize,
    image: usize,
    video: usize,
    fetch: usize,
    play: usize,
    last_image_prompt: Option<String>,
    last_video: Option<VideoRequest>,
    played: Vec<MediaRef>,
}

/// One object implementing every collaborator trait.
pub struct MockServices {
    behavior: Mutex<MockBehavior>,
    rewrite: Option<String>,
    calls: Mutex<Calls>,
}

fn remote_failure(service: &str) -> genie_error::GenieError {
    RemoteError::new(
        service,
        RemoteErrorKind::Api {
            status: 500,
            message: "scripted failure".to_string(),
        },
    )
    .into()
}

impl MockServices {
    /// Mock where every call succeeds.
    pub fn new_success() -> Arc<Self> {
        Self::with_behavior(MockBehavior::Success, None)
    }

    /// Mock where every remote call fails.
    pub fn new_failing() -> Arc<Self> {
        Self::with_behavior(MockBehavior::Fail, None)
    }

    /// Mock whose analysis rewrites the text.
    pub fn new_rewriting(text: impl Into<String>) -> Arc<Self> {
        Self::with_behavior(MockBehavior::Success, Some(text.into()))
    }

    fn with_behavior(behavior: MockBehavior, rewrite: Option<String>) -> Arc<Self> {
        Arc::new(Self {
            behavior: Mutex::new(behavior),
            rewrite,
            calls: Mutex::new(Calls::default()),
        })
    }

    /// Change behavior mid-test.
    pub fn set_behavior(&self, behavior: MockBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    fn failing(&self) -> bool {
        *self.behavior.lock().unwrap() == MockBehavior::Fail
    }

    pub fn analysis_calls(&self) -> usize {
        self.calls.lock().unwrap().analysis
    }

    pub fn speech_calls(&self) -> usize {
        self.calls.lock().unwrap().speech
    }

    pub fn image_calls(&self) -> usize {
        self.calls.lock().unwrap().image
    }

    pub fn video_calls(&self) -> usize {
        self.calls.lock().unwrap().video
    }

    pub fn fetch_calls(&self) -> usize {
        self.calls.lock().unwrap().fetch
    }

    pub fn play_calls(&self) -> usize {
        self.calls.lock().unwrap().play
    }

    pub fn played(&self) -> Vec<MediaRef> {
        self.calls.lock().unwrap().played.clone()
    }

    pub fn last_image_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last_image_prompt.clone()
    }

    pub fn last_video_request(&self) -> Option<VideoRequest> {
        self.calls.lock().unwrap().last_video.clone()
    }

    /// Wire this mock in for every service.
    pub fn services(self: &Arc<Self>) -> Services {
        Services {
            analysis: self.clone(),
            speech: self.clone(),
            image: self.clone(),
            video: self.clone(),
            fetcher: self.clone(),
            player: self.clone(),
        }
    }
}

#[async_trait]
impl TextAnalysis for MockServices {
    async fn analyze(&self, _req: &AnalysisRequest) -> GenieResult<AnalysisResponse> {
        self.calls.lock().unwrap().analysis += 1;
        if self.failing() {
            return Err(remote_failure("gemini"));
        }
        Ok(match &self.rewrite {
            Some(text) => AnalysisResponse::Rewritten(text.clone()),
            None => AnalysisResponse::Confirmed,
        })
    }

    fn service_name(&self) -> &str {
        "mock-analysis"
    }
}

#[async_trait]
impl SpeechSynthesis for MockServices {
    async fn synthesize(&self, req: &SpeechRequest) -> GenieResult<SpeechResponse> {
        self.calls.lock().unwrap().speech += 1;
        if self.failing() {
            return Err(remote_failure("google_tts"));
        }
        Ok(SpeechResponse {
            audio: MediaRef::Url(format!("https://mock.test/voice/{}.mp3", req.voice.id)),
        })
    }

    fn service_name(&self) -> &str {
        "mock-speech"
    }
}

#[async_trait]
impl ImageSynthesis for MockServices {
    async fn generate_image(&self, req: &ImageRequest) -> GenieResult<ImageResponse> {
        let count = {
            let mut calls = self.calls.lock().unwrap();
            calls.image += 1;
            calls.last_image_prompt = Some(req.prompt().clone());
            calls.image
        };
        if self.failing() {
            return Err(remote_failure("openai"));
        }
        Ok(ImageResponse {
            image: MediaRef::Url(format!("https://mock.test/image/{}.png", count)),
        })
    }

    fn service_name(&self) -> &str {
        "mock-image"
    }
}

#[async_trait]
impl VideoAssembly for MockServices {
    async fn assemble(&self, req: &VideoRequest) -> GenieResult<VideoResponse> {
        {
            let mut calls = self.calls.lock().unwrap();
            calls.video += 1;
            calls.last_video = Some(req.clone());
        }
        if self.failing() {
            return Err(remote_failure("json2video"));
        }
        Ok(VideoResponse {
            video: MediaRef::Url("https://mock.test/video/final.mp4".to_string()),
            size_bytes: Some(5 * 1024 * 1024),
        })
    }

    fn service_name(&self) -> &str {
        "mock-video"
    }
}

#[async_trait]
impl AssetFetcher for MockServices {
    async fn fetch(&self, media: &MediaRef) -> GenieResult<Vec<u8>> {
        self.calls.lock().unwrap().fetch += 1;
        Ok(media.uri().into_bytes())
    }
}

#[async_trait]
impl MediaPlayer for MockServices {
    async fn play(&self, media: &MediaRef) -> GenieResult<()> {
        let mut calls = self.calls.lock().unwrap();
        calls.play += 1;
        calls.played.push(media.clone());
        Ok(())
    }
}

/// Options with pacing disabled.
pub fn fast_options() -> WizardOptions {
    WizardOptions::default()
        .with_tick_ms(0)
        .with_share_origin("https://genie.test".to_string())
}

/// Wizard over `mock` with pacing disabled.
pub fn wizard_with(mock: &Arc<MockServices>) -> Wizard {
    Wizard::new(mock.services(), fast_options())
}

/// Drive a fresh wizard forward until `target` is the active step index.
///
/// Uses valid text, image generation on, and skips music.
pub async fn ready_for_step(mock: &Arc<MockServices>, target: usize) -> anyhow::Result<Wizard> {
    let mut wizard = wizard_with(mock);
    if target == 0 {
        return Ok(wizard);
    }
    wizard
        .text_input_mut()
        .set_text("Om Namah Shivaya, the great five-syllable mantra.");
    wizard.commit_and_advance()?;
    if target == 1 {
        return Ok(wizard);
    }
    wizard.analyze_text().await?;
    if target == 2 {
        return Ok(wizard);
    }
    wizard.generate_voiceover().await?;
    wizard.commit_and_advance()?;
    if target == 3 {
        return Ok(wizard);
    }
    wizard.generate_image().await?;
    wizard.commit_and_advance()?;
    if target == 4 {
        return Ok(wizard);
    }
    wizard.skip_music()?;
    wizard.commit_and_advance()?;
    if target == 5 {
        return Ok(wizard);
    }
    wizard.generate_video().await?;
    wizard.commit_and_advance()?;
    Ok(wizard)
}
