//! Per-service connection settings.

use derive_getters::Getters;
use genie_error::{RemoteError, RemoteErrorKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Connection settings for one collaborator service.
///
/// Keys are referenced by environment variable name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ServiceSettings {
    /// Base URL without a trailing slash
    base_url: String,
    /// Model identifier, for services that take one
    #[serde(default)]
    model: Option<String>,
    /// Environment variable holding the primary key
    key_env: String,
    /// Environment variable holding the fallback key
    #[serde(default)]
    fallback_key_env: Option<String>,
    /// Delay between job status checks
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,
    /// Status checks before giving up
    #[serde(default = "default_max_polls")]
    max_polls: u32,
}

fn default_poll_interval_ms() -> u64 {
    5_000
}

fn default_max_polls() -> u32 {
    120
}

impl ServiceSettings {
    /// Settings with the given endpoint and key variables and default polling.
    pub fn new(
        base_url: impl Into<String>,
        model: Option<&str>,
        key_env: impl Into<String>,
        fallback_key_env: Option<&str>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.map(str::to_string),
            key_env: key_env.into(),
            fallback_key_env: fallback_key_env.map(str::to_string),
            poll_interval_ms: default_poll_interval_ms(),
            max_polls: default_max_polls(),
        }
    }

    /// Override polling parameters.
    pub fn with_polling(mut self, poll_interval_ms: u64, max_polls: u32) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self.max_polls = max_polls;
        self
    }

    /// Model identifier or the provided default.
    pub fn model_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.model.as_deref().unwrap_or(default)
    }

    /// Read the primary key from the environment.
    pub fn primary_key(&self, service: &str) -> Result<String, RemoteError> {
        resolve_key(service, &self.key_env)
    }

    /// Read the fallback key, if one is configured and set.
    ///
    /// A configured but unset fallback variable is not an error; the
    /// service simply runs without a secondary.
    pub fn fallback_key(&self, service: &str) -> Option<String> {
        let name = self.fallback_key_env.as_deref()?;
        match resolve_key(service, name) {
            Ok(key) => Some(key),
            Err(_) => {
                debug!(service, env = name, "Fallback key not set");
                None
            }
        }
    }
}

/// Settings for all four generative services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ServicesSettings {
    /// Text analysis
    gemini: ServiceSettings,
    /// Speech synthesis
    google_tts: ServiceSettings,
    /// Image generation
    openai: ServiceSettings,
    /// Video assembly
    json2video: ServiceSettings,
}

impl Default for ServicesSettings {
    fn default() -> Self {
        Self {
            gemini: ServiceSettings::new(
                "https://generativelanguage.googleapis.com/v1beta",
                Some("gemini-2.0-flash"),
                "GEMINI_API_KEY",
                Some("GEMINI_API_KEY_FALLBACK"),
            ),
            google_tts: ServiceSettings::new(
                "https://texttospeech.googleapis.com/v1",
                None,
                "GOOGLE_TTS_API_KEY",
                Some("GOOGLE_TTS_API_KEY_FALLBACK"),
            ),
            openai: ServiceSettings::new(
                "https://api.openai.com/v1",
                Some("dall-e-3"),
                "OPENAI_API_KEY",
                Some("OPENAI_API_KEY_FALLBACK"),
            ),
            json2video: ServiceSettings::new(
                "https://api.json2video.com/v2",
                None,
                "JSON2VIDEO_API_KEY",
                Some("JSON2VIDEO_API_KEY_FALLBACK"),
            ),
        }
    }
}

/// Read an API key from the named environment variable.
///
/// Unset and blank variables both count as missing.
#[track_caller]
pub fn resolve_key(service: &str, env_name: &str) -> Result<String, RemoteError> {
    match std::env::var(env_name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(RemoteError::new(
            service,
            RemoteErrorKind::MissingCredential(env_name.to_string()),
        )),
    }
}
