//! Google Cloud Text-to-Speech client.

use crate::{ServiceSettings, http::send_json};
use async_trait::async_trait;
use derive_getters::Getters;
use genie_core::{MediaRef, VoiceGender, VoiceOption};
use genie_error::{GenieResult, RemoteError, RemoteErrorKind};
use genie_interface::{SpeechRequest, SpeechResponse, SpeechSynthesis};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const SERVICE: &str = "google_tts";
const AUDIO_MIME: &str = "audio/mpeg";

/// Speech synthesis through `text:synthesize`.
///
/// Audio comes back base64-encoded and is kept inline as MP3.
#[derive(Debug, Clone)]
pub struct GoogleTtsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Body of a `text:synthesize` call.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct SynthesizeRequest {
    /// Text input
    input: SynthesisInput,
    /// Voice selection
    voice: VoiceSelection,
    /// Output encoding
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfig,
}

/// Text to speak.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct SynthesisInput {
    /// Plain text
    text: String,
}

/// Voice parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct VoiceSelection {
    /// BCP-47 code
    #[serde(rename = "languageCode")]
    language_code: String,
    /// Provider voice name
    name: String,
    /// `MALE` or `FEMALE`
    #[serde(rename = "ssmlGender")]
    ssml_gender: String,
}

/// Audio output parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct AudioConfig {
    /// Encoding name
    #[serde(rename = "audioEncoding")]
    audio_encoding: String,
    /// Playback rate
    #[serde(rename = "speakingRate")]
    speaking_rate: f32,
}

#[derive(Debug, Deserialize)]
struct SynthesizeResponse {
    #[serde(rename = "audioContent")]
    audio_content: Option<String>,
}

/// Build the request body for a voice.
///
/// # Examples
///
/// ```
/// use genie_core::find_voice;
/// use genie_models::synthesize_body;
///
/// let voice = find_voice("hindi-male").unwrap();
/// let body = synthesize_body("Namaste", voice);
/// assert_eq!(body.voice().name(), "hi-IN-Wavenet-B");
/// assert_eq!(body.voice().ssml_gender(), "MALE");
/// ```
pub fn synthesize_body(text: &str, voice: &VoiceOption) -> SynthesizeRequest {
    let ssml_gender = match voice.gender {
        VoiceGender::Male => "MALE",
        VoiceGender::Female => "FEMALE",
    };
    SynthesizeRequest {
        input: SynthesisInput { text: text.to_string() },
        voice: VoiceSelection {
            language_code: voice.language.to_string(),
            name: voice.provider_voice.to_string(),
            ssml_gender: ssml_gender.to_string(),
        },
        audio_config: AudioConfig {
            audio_encoding: "MP3".to_string(),
            speaking_rate: 0.95,
        },
    }
}

impl GoogleTtsClient {
    /// Create a client with an explicit key.
    pub fn new(settings: &ServiceSettings, api_key: impl Into<String>) -> Self {
        debug!("Creating new Google TTS client");
        Self {
            client: Client::new(),
            base_url: settings.base_url().clone(),
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
impl SpeechSynthesis for GoogleTtsClient {
    #[instrument(skip(self, req), fields(voice = req.voice.id, chars = req.text.len()))]
    async fn synthesize(&self, req: &SpeechRequest) -> GenieResult<SpeechResponse> {
        debug!("Requesting speech synthesis");
        let request = self
            .client
            .post(format!("{}/text:synthesize", self.base_url))
            .query(&[("key", self.api_key.as_str())])
            .json(&synthesize_body(&req.text, &req.voice));
        let response: SynthesizeResponse = send_json(SERVICE, request).await?;

        let data = response
            .audio_content
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                RemoteError::new(SERVICE, RemoteErrorKind::Parse("response has no audioContent".to_string()))
            })?;
        debug!(bytes_b64 = data.len(), "Speech synthesized");
        Ok(SpeechResponse {
            audio: MediaRef::Inline {
                mime: AUDIO_MIME.to_string(),
                data,
            },
        })
    }

    fn service_name(&self) -> &str {
        SERVICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genie_core::find_voice;

    #[test]
    fn test_body_serializes_with_api_field_names() {
        let voice = find_voice("en-in-female").unwrap();
        let value = serde_json::to_value(synthesize_body("Hello", voice)).unwrap();
        assert_eq!(value["input"]["text"], "Hello");
        assert_eq!(value["voice"]["languageCode"], "en-IN");
        assert_eq!(value["voice"]["ssmlGender"], "FEMALE");
        assert_eq!(value["audioConfig"]["audioEncoding"], "MP3");
    }
}
