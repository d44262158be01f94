//! Primary/secondary credential decorator.

use crate::{
    AnalysisRequest, AnalysisResponse, ImageRequest, ImageResponse, ImageSynthesis, SpeechRequest,
    SpeechResponse, SpeechSynthesis, TextAnalysis, VideoAssembly, VideoRequest, VideoResponse,
};
use async_trait::async_trait;
use genie_error::GenieResult;
use std::future::Future;
use tracing::{debug, warn};

/// Wraps a service built with the primary credential and, optionally, the
/// same service built with a secondary credential.
///
/// A remote failure from the primary triggers exactly one attempt on the
/// secondary. Validation failures are returned immediately. There is no
/// further retry and no backoff.
#[derive(Debug, Clone)]
pub struct WithFallback<S> {
    primary: S,
    secondary: Option<S>,
}

impl<S> WithFallback<S> {
    /// Decorate `primary`, falling back to `secondary` when given.
    pub fn new(primary: S, secondary: Option<S>) -> Self {
        Self { primary, secondary }
    }

    /// True when a secondary service is configured.
    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }

    async fn attempt<'a, T, F, Fut>(&'a self, service: &str, call: F) -> GenieResult<T>
    where
        F: Fn(&'a S) -> Fut,
        Fut: Future<Output = GenieResult<T>>,
    {
        match call(&self.primary).await {
            Ok(value) => Ok(value),
            Err(err) if err.is_remote() => match &self.secondary {
                Some(secondary) => {
                    warn!(service, error = %err, "Primary credential failed, trying fallback");
                    call(secondary).await
                }
                None => Err(err),
            },
            Err(err) => {
                debug!(service, error = %err, "Not falling back on local failure");
                Err(err)
            }
        }
    }
}

#[async_trait]
impl<S: TextAnalysis> TextAnalysis for WithFallback<S> {
    async fn analyze(&self, req: &AnalysisRequest) -> GenieResult<AnalysisResponse> {
        self.attempt(self.primary.service_name(), |s| s.analyze(req)).await
    }

    fn service_name(&self) -> &str {
        self.primary.service_name()
    }
}

#[async_trait]
impl<S: SpeechSynthesis> SpeechSynthesis for WithFallback<S> {
    async fn synthesize(&self, req: &SpeechRequest) -> GenieResult<SpeechResponse> {
        self.attempt(self.primary.service_name(), |s| s.synthesize(req)).await
    }

    fn service_name(&self) -> &str {
        self.primary.service_name()
    }
}

#[async_trait]
impl<S: ImageSynthesis> ImageSynthesis for WithFallback<S> {
    async fn generate_image(&self, req: &ImageRequest) -> GenieResult<ImageResponse> {
        self.attempt(self.primary.service_name(), |s| s.generate_image(req)).await
    }

    fn service_name(&self) -> &str {
        self.primary.service_name()
    }
}

#[async_trait]
impl<S: VideoAssembly> VideoAssembly for WithFallback<S> {
    async fn assemble(&self, req: &VideoRequest) -> GenieResult<VideoResponse> {
        self.attempt(self.primary.service_name(), |s| s.assemble(req)).await
    }

    fn service_name(&self) -> &str {
        self.primary.service_name()
    }
}
