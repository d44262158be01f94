//! Gemini text analysis client.

use crate::{ServiceSettings, http::send_json};
use async_trait::async_trait;
use genie_error::{GenieResult, RemoteError, RemoteErrorKind};
use genie_interface::{AnalysisRequest, AnalysisResponse, TextAnalysis};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const SERVICE: &str = "gemini";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Text analysis through the Gemini `generateContent` endpoint.
///
/// The model is asked to return the narration with spelling and punctuation
/// corrected. An unchanged reply confirms the text; anything else replaces it.
#[derive(Debug, Clone)]
pub struct GeminiAnalysisClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiAnalysisClient {
    /// Create a client with an explicit key.
    pub fn new(settings: &ServiceSettings, api_key: impl Into<String>) -> Self {
        debug!("Creating new Gemini analysis client");
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

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Prompt sent to the model for a piece of narration.
pub fn analysis_prompt(text: &str) -> String {
    format!(
        "You prepare narration for a devotional video voiceover. \
         Correct spelling, punctuation and spacing in the text below without \
         changing its meaning, language or length. Reply with the corrected \
         text only, or with the text unchanged if nothing needs fixing.\n\n{}",
        text
    )
}

/// Decode a `generateContent` reply into an analysis outcome.
///
/// # Examples
///
/// ```
/// use genie_interface::AnalysisResponse;
/// use genie_models::parse_analysis;
///
/// let body = serde_json::json!({
///     "candidates": [{ "content": { "parts": [{ "text": "Om Namah Shivaya." }] } }]
/// });
/// let outcome = parse_analysis("Om Namah Shivaya.", &body).unwrap();
/// assert_eq!(outcome, AnalysisResponse::Confirmed);
/// ```
pub fn parse_analysis(original: &str, body: &serde_json::Value) -> Result<AnalysisResponse, RemoteError> {
    let response: GenerateContentResponse = serde_json::from_value(body.clone())
        .map_err(|e| RemoteError::new(SERVICE, RemoteErrorKind::Parse(e.to_string())))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .ok_or_else(|| RemoteError::new(SERVICE, RemoteErrorKind::Parse("no candidates".to_string())))?;

    let reply = text.trim();
    if reply.is_empty() || reply == original.trim() {
        Ok(AnalysisResponse::Confirmed)
    } else {
        Ok(AnalysisResponse::Rewritten(reply.to_string()))
    }
}

#[async_trait]
impl TextAnalysis for GeminiAnalysisClient {
    #[instrument(skip(self, req), fields(model = %self.model, chars = req.text.len()))]
    async fn analyze(&self, req: &AnalysisRequest) -> GenieResult<AnalysisResponse> {
        debug!("Sending text to Gemini for analysis");
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(analysis_prompt(&req.text)),
                }],
            }],
        };
        let request = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body);
        let reply: serde_json::Value = send_json(SERVICE, request).await?;
        Ok(parse_analysis(&req.text, &reply)?)
    }

    fn service_name(&self) -> &str {
        SERVICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rewritten_reply() {
        let body = json!({
            "candidates": [{ "content": { "parts": [{ "text": "Om namah  shivaya" }] } }]
        });
        let outcome = parse_analysis("om namah  shivaya", &body).unwrap();
        assert_eq!(outcome, AnalysisResponse::Rewritten("Om namah  shivaya".to_string()));
    }

    #[test]
    fn test_multi_part_reply_is_joined() {
        let body = json!({
            "candidates": [{ "content": { "parts": [{ "text": "Hare " }, { "text": "Krishna" }] } }]
        });
        let outcome = parse_analysis("hare krishna", &body).unwrap();
        assert_eq!(outcome, AnalysisResponse::Rewritten("Hare Krishna".to_string()));
    }

    #[test]
    fn test_no_candidates_is_parse_error() {
        let err = parse_analysis("x", &json!({ "candidates": [] })).unwrap_err();
        assert!(matches!(err.kind, RemoteErrorKind::Parse(_)));
    }

    #[test]
    fn test_prompt_contains_text() {
        assert!(analysis_prompt("Jai Shri Ram").ends_with("Jai Shri Ram"));
    }
}
