//! OpenAI image generation client.

use crate::{ServiceSettings, http::send_json};
use async_trait::async_trait;
use genie_core::{AspectRatio, MediaRef};
use genie_error::{GenieResult, RemoteError, RemoteErrorKind};
use genie_interface::{ImageRequest, ImageResponse, ImageSynthesis};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

const SERVICE: &str = "openai";
const DEFAULT_MODEL: &str = "dall-e-3";

/// Image generation through `images/generations`.
#[derive(Debug, Clone)]
pub struct OpenAiImageClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    url: Option<String>,
    b64_json: Option<String>,
}

/// Pixel size requested for an orientation.
///
/// # Examples
///
/// ```
/// use genie_core::AspectRatio;
/// use genie_models::image_size;
///
/// assert_eq!(image_size(AspectRatio::Landscape), "1792x1024");
/// assert_eq!(image_size(AspectRatio::Portrait), "1024x1792");
/// ```
pub fn image_size(aspect_ratio: AspectRatio) -> &'static str {
    match aspect_ratio {
        AspectRatio::Landscape => "1792x1024",
        AspectRatio::Portrait => "1024x1792",
    }
}

/// Request body for one image. Quality of 80 % or more asks for `hd`.
pub fn image_body(model: &str, req: &ImageRequest) -> serde_json::Value {
    let quality = if req.quality().percent() >= 80 { "hd" } else { "standard" };
    json!({
        "model": model,
        "prompt": req.prompt(),
        "n": 1,
        "size": image_size(*req.aspect_ratio()),
        "quality": quality,
    })
}

impl OpenAiImageClient {
    /// Create a client with an explicit key.
    pub fn new(settings: &ServiceSettings, api_key: impl Into<String>) -> Self {
        debug!("Creating new OpenAI image client");
        Self {
            client: Client::new(),
            base_url: settings.base_url().clone(),
            model: settings.model_or(DEFAULT_MODEL).to_string(),
            api_key: api_key.into(),
        }
    }

    /// Create the primary client and, when its key is set, a fallback client.
    pub fn from_settings(settings: &ServiceSettings) -> Result<(Self, Option<Self>), RemoteError> {
        let primary = Self::new(settings, settings.primary_key(SERVICE)?);
        let fallback = settings.fallback_key(SERVICE).map(|key| Self::new(settings, key));
        Ok((primary, fallback))
    }
}

#[async_trait]
impl ImageSynthesis for OpenAiImageClient {
    #[instrument(skip(self, req), fields(model = %self.model, style = %req.style()))]
    async fn generate_image(&self, req: &ImageRequest) -> GenieResult<ImageResponse> {
        debug!("Requesting image generation");
        let request = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&image_body(&self.model, req));
        let response: ImagesResponse = send_json(SERVICE, request).await?;

        let datum = response.data.into_iter().next().ok_or_else(|| {
            RemoteError::new(SERVICE, RemoteErrorKind::Parse("response has no images".to_string()))
        })?;
        let image = match (datum.url, datum.b64_json) {
            (Some(url), _) => MediaRef::Url(url),
            (None, Some(data)) => MediaRef::Inline {
                mime: "image/png".to_string(),
                data,
            },
            (None, None) => {
                return Err(RemoteError::new(
                    SERVICE,
                    RemoteErrorKind::Parse("image has neither url nor b64_json".to_string()),
                )
                .into());
            }
        };
        debug!(image = %image, "Image generated");
        Ok(ImageResponse { image })
    }

    fn service_name(&self) -> &str {
        SERVICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genie_core::ImageQuality;
    use genie_interface::ImageRequestBuilder;

    fn request(quality: u8, aspect_ratio: AspectRatio) -> ImageRequest {
        ImageRequestBuilder::default()
            .prompt("A lotus pond")
            .style("Sacred Lotus Garden")
            .palette("Lotus Pink")
            .quality(ImageQuality::new(quality).unwrap())
            .aspect_ratio(aspect_ratio)
            .build()
            .unwrap()
    }

    #[test]
    fn test_body_uses_hd_for_high_quality() {
        let body = image_body("dall-e-3", &request(90, AspectRatio::Landscape));
        assert_eq!(body["quality"], "hd");
        assert_eq!(body["size"], "1792x1024");
        assert_eq!(body["n"], 1);
    }

    #[test]
    fn test_body_uses_standard_below_80() {
        let body = image_body("dall-e-3", &request(60, AspectRatio::Portrait));
        assert_eq!(body["quality"], "standard");
        assert_eq!(body["size"], "1024x1792");
    }
}
