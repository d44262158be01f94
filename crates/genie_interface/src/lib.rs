//! Collaborator service traits for the Video Narrative Genie wizard.
//!
//! Each generative collaborator sits behind one capability trait so the
//! wizard can run against real HTTP clients or deterministic fakes. The
//! [`WithFallback`] decorator adds the single alternate-credential attempt.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fallback;
mod traits;
mod types;

pub use fallback::WithFallback;
pub use traits::{AssetFetcher, ImageSynthesis, MediaPlayer, SpeechSynthesis, TextAnalysis, VideoAssembly};
pub use types::{
    AnalysisRequest, AnalysisResponse, ImageRequest, ImageRequestBuilder, SpeechRequest, SpeechResponse,
    ImageResponse, VideoRequest, VideoRequestBuilder, VideoResponse,
};
