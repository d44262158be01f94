//! HTTP collaborator clients for the Video Narrative Genie wizard.
//!
//! Every client implements one capability trait from `genie_interface`:
//!
//! - [`GeminiAnalysisClient`] - text analysis via `generateContent`
//! - [`GoogleTtsClient`] - speech via Google Cloud Text-to-Speech
//! - [`OpenAiImageClient`] - images via OpenAI `images/generations`
//! - [`Json2VideoClient`] - video assembly via json2video (submit + poll)
//!
//! [`HttpAssetFetcher`] and [`CommandPlayer`] cover downloads and local
//! playback. Credentials are read from the environment variables named in
//! [`ServiceSettings`]; they never live in configuration files.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fetcher;
mod gemini;
mod google_tts;
mod http;
mod json2video;
mod openai_image;
mod player;
mod settings;

pub use fetcher::HttpAssetFetcher;
pub use gemini::{GeminiAnalysisClient, analysis_prompt, parse_analysis};
pub use google_tts::{GoogleTtsClient, SynthesizeRequest, synthesize_body};
pub use json2video::{Json2VideoClient, MovieStatus, movie_payload, parse_status};
pub use openai_image::{OpenAiImageClient, image_body, image_size};
pub use player::CommandPlayer;
pub use settings::{ServiceSettings, ServicesSettings, resolve_key};
