//! Test utilities for facade tests.

#![allow(dead_code)]

use async_trait::async_trait;
use genie::{
    AnalysisRequest, AnalysisResponse, AssetFetcher, GenieResult, ImageRequest, ImageResponse, ImageSynthesis,
    MediaPlayer, MediaRef, RemoteError, RemoteErrorKind, Services, SpeechRequest, SpeechResponse, SpeechSynthesis,
    TextAnalysis, VideoAssembly, VideoRequest, VideoResponse, Wizard, WizardOptions,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Succeeds at everything unless told to fail video assembly.
#[derive(Default)]
pub struct MockStudio {
    pub calls: AtomicUsize,
    pub image_calls: AtomicUsize,
    pub fail_video: AtomicBool,
}

impl MockStudio {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn wizard(self: &Arc<Self>) -> Wizard {
        let services = Services {
            analysis: self.clone(),
            speech: self.clone(),
            image: self.clone(),
            video: self.clone(),
            fetcher: self.clone(),
            player: self.clone(),
        };
        Wizard::new(services, WizardOptions::default().with_tick_ms(0))
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl TextAnalysis for MockStudio {
    async fn analyze(&self, _req: &AnalysisRequest) -> GenieResult<AnalysisResponse> {
        self.record();
        Ok(AnalysisResponse::Confirmed)
    }

    fn service_name(&self) -> &str {
        "mock"
    }
}

#[async_trait]
impl SpeechSynthesis for MockStudio {
    async fn synthesize(&self, req: &SpeechRequest) -> GenieResult<SpeechResponse> {
        self.record();
        Ok(SpeechResponse {
            audio: MediaRef::Inline {
                mime: "audio/mpeg".to_string(),
                data: format!("voice-{}", req.voice.id),
            },
        })
    }

    fn service_name(&self) -> &str {
        "mock"
    }
}

#[async_trait]
impl ImageSynthesis for MockStudio {
    async fn generate_image(&self, _req: &ImageRequest) -> GenieResult<ImageResponse> {
        self.record();
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        Ok(ImageResponse {
            image: MediaRef::Url("https://mock.test/bg.jpg".to_string()),
        })
    }

    fn service_name(&self) -> &str {
        "mock"
    }
}

#[async_trait]
impl VideoAssembly for MockStudio {
    async fn assemble(&self, _req: &VideoRequest) -> GenieResult<VideoResponse> {
        self.record();
        if self.fail_video.load(Ordering::SeqCst) {
            return Err(RemoteError::new("json2video", RemoteErrorKind::JobFailed("render error".to_string())).into());
        }
        Ok(VideoResponse {
            video: MediaRef::Url("https://mock.test/out.mp4?sig=abc".to_string()),
            size_bytes: None,
        })
    }

    fn service_name(&self) -> &str {
        "mock"
    }
}

#[async_trait]
impl AssetFetcher for MockStudio {
    async fn fetch(&self, media: &MediaRef) -> GenieResult<Vec<u8>> {
        Ok(media.uri().into_bytes())
    }
}

#[async_trait]
impl MediaPlayer for MockStudio {
    async fn play(&self, _media: &MediaRef) -> GenieResult<()> {
        Ok(())
    }
}
