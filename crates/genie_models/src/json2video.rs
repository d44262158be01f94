//! json2video assembly client.
//!
//! Rendering is a two-step job: the movie description is submitted, then the
//! project is polled until it reports `done` or `error`.

use crate::{ServiceSettings, http::send_json};
use async_trait::async_trait;
use genie_core::MediaRef;
use genie_error::{GenieResult, RemoteError, RemoteErrorKind, ValidationError, ValidationErrorKind};
use genie_interface::{VideoAssembly, VideoRequest, VideoResponse};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

const SERVICE: &str = "json2video";
const MUSIC_VOLUME: f32 = 0.3;

/// Video assembly through json2video's movie API.
#[derive(Debug, Clone)]
pub struct Json2VideoClient {
    client: Client,
    base_url: String,
    api_key: String,
    poll_interval: Duration,
    max_polls: u32,
}

/// Render state of a submitted movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieStatus {
    /// Still queued or rendering
    Rendering(String),
    /// Finished
    Done {
        /// Download URL
        url: String,
        /// File size in bytes when reported
        size_bytes: Option<u64>,
    },
    /// Rendering failed
    Failed(String),
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    success: bool,
    project: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    movie: Option<MovieState>,
}

#[derive(Debug, Deserialize)]
struct MovieState {
    #[serde(default)]
    status: String,
    url: Option<String>,
    size: Option<u64>,
    message: Option<String>,
}

/// The renderer fetches every source itself, so only URLs are accepted.
fn source(media: &MediaRef, asset: &str) -> Result<String, ValidationError> {
    if media.is_remote() {
        Ok(media.uri())
    } else {
        warn!(asset, media = %media, "Refusing to submit a source the render service cannot fetch");
        Err(ValidationError::new(ValidationErrorKind::UnreachableAsset(asset.to_string())))
    }
}

/// Movie description for a request.
///
/// One scene carries the background (image or solid colour) and the
/// voiceover. Music, when present, plays under the whole movie at reduced
/// volume. Fails when any source is a local path or inline data.
pub fn movie_payload(req: &VideoRequest) -> Result<serde_json::Value, ValidationError> {
    let (width, height) = req.aspect_ratio().resolution();

    let mut scene_elements = Vec::new();
    if let Some(image) = req.image() {
        scene_elements.push(json!({
            "type": "image",
            "src": source(image, "background image")?,
            "duration": -2,
        }));
    }
    scene_elements.push(json!({
        "type": "audio",
        "src": source(req.audio(), "voiceover")?,
    }));

    let mut movie_elements = Vec::new();
    if let Some(music) = req.music() {
        movie_elements.push(json!({
            "type": "audio",
            "src": source(music, "background music")?,
            "volume": MUSIC_VOLUME,
            "duration": -2,
        }));
    }

    Ok(json!({
        "resolution": "custom",
        "width": width,
        "height": height,
        "quality": "high",
        "scenes": [{
            "duration": req.duration().seconds(),
            "background-color": "#000000",
            "elements": scene_elements,
        }],
        "elements": movie_elements,
    }))
}

/// Interpret a status response body.
///
/// # Examples
///
/// ```
/// use genie_models::{parse_status, MovieStatus};
///
/// let body = serde_json::json!({
///     "success": true,
///     "movie": { "status": "done", "url": "https://cdn.test/m.mp4", "size": 2048 }
/// });
/// assert_eq!(
///     parse_status(&body).unwrap(),
///     MovieStatus::Done { url: "https://cdn.test/m.mp4".into(), size_bytes: Some(2048) }
/// );
/// ```
pub fn parse_status(body: &serde_json::Value) -> Result<MovieStatus, RemoteError> {
    let response: StatusResponse = serde_json::from_value(body.clone())
        .map_err(|e| RemoteError::new(SERVICE, RemoteErrorKind::Parse(e.to_string())))?;
    let movie = response
        .movie
        .ok_or_else(|| RemoteError::new(SERVICE, RemoteErrorKind::Parse("status has no movie".to_string())))?;

    match movie.status.as_str() {
        "done" => {
            let url = movie.url.filter(|u| !u.is_empty()).ok_or_else(|| {
                RemoteError::new(SERVICE, RemoteErrorKind::Parse("finished movie has no url".to_string()))
            })?;
            Ok(MovieStatus::Done {
                url,
                size_bytes: movie.size,
            })
        }
        "error" => Ok(MovieStatus::Failed(
            movie.message.unwrap_or_else(|| "rendering failed".to_string()),
        )),
        other => Ok(MovieStatus::Rendering(other.to_string())),
    }
}

impl Json2VideoClient {
    /// Create a client with an explicit key.
    pub fn new(settings: &ServiceSettings, api_key: impl Into<String>) -> Self {
        debug!("Creating new json2video client");
        Self {
            client: Client::new(),
            base_url: settings.base_url().clone(),
            api_key: api_key.into(),
            poll_interval: Duration::from_millis(*settings.poll_interval_ms()),
            max_polls: *settings.max_polls(),
        }
    }

    /// Create the primary client and, when its key is set, a fallback client.
    pub fn from_settings(settings: &ServiceSettings) -> Result<(Self, Option<Self>), RemoteError> {
        let primary = Self::new(settings, settings.primary_key(SERVICE)?);
        let fallback = settings.fallback_key(SERVICE).map(|key| Self::new(settings, key));
        Ok((primary, fallback))
    }

    async fn submit(&self, req: &VideoRequest) -> GenieResult<String> {
        let payload = movie_payload(req)?;
        let request = self
            .client
            .post(format!("{}/movies", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&payload);
        let response: SubmitResponse = send_json(SERVICE, request).await?;

        match response.project {
            Some(project) if response.success => Ok(project),
            _ => Err(RemoteError::new(
                SERVICE,
                RemoteErrorKind::JobFailed(response.message.unwrap_or_else(|| "submission rejected".to_string())),
            )
            .into()),
        }
    }

    async fn status(&self, project: &str) -> GenieResult<MovieStatus> {
        let request = self
            .client
            .get(format!("{}/movies", self.base_url))
            .header("x-api-key", &self.api_key)
            .query(&[("project", project)]);
        let body: serde_json::Value = send_json(SERVICE, request).await?;
        Ok(parse_status(&body)?)
    }
}

#[async_trait]
impl VideoAssembly for Json2VideoClient {
    #[instrument(skip(self, req), fields(duration = req.duration().seconds(), aspect = %req.aspect_ratio()))]
    async fn assemble(&self, req: &VideoRequest) -> GenieResult<VideoResponse> {
        let project = self.submit(req).await?;
        info!(project = %project, "Movie submitted");

        for poll in 1..=self.max_polls {
            tokio::time::sleep(self.poll_interval).await;
            match self.status(&project).await? {
                MovieStatus::Rendering(state) => {
                    debug!(poll, state = %state, "Movie still rendering");
                }
                MovieStatus::Done { url, size_bytes } => {
                    info!(poll, url = %url, "Movie ready");
                    return Ok(VideoResponse {
                        video: MediaRef::Url(url),
                        size_bytes,
                    });
                }
                MovieStatus::Failed(message) => {
                    return Err(RemoteError::new(SERVICE, RemoteErrorKind::JobFailed(message)).into());
                }
            }
        }

        Err(RemoteError::new(SERVICE, RemoteErrorKind::Timeout(self.max_polls)).into())
    }

    fn service_name(&self) -> &str {
        SERVICE
    }
}
