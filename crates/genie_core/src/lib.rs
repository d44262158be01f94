//! Core data types for the Video Narrative Genie wizard.
//!
//! This crate holds the project record that every wizard step reads and
//! writes, together with the fixed catalogs (steps, voices, image styles,
//! colour schemes) and the music intake policy.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod image;
mod media;
mod music;
mod project;
mod settings;
mod step;
mod telemetry;
mod voice;

pub use image::{COLOR_SCHEMES, ColorScheme, IMAGE_STYLES, ImageQuality};
pub use media::{AssetKind, MediaRef};
pub use music::{MusicFile, MusicPolicy, format_file_size, mime_from_extension};
pub use project::{Project, ProjectId};
pub use settings::{AspectRatio, VideoDuration};
pub use step::{ProjectStatus, STEPS, StepDescriptor, StepId};
pub use telemetry::{init_file_tracing, init_tracing, shutdown_tracing};
pub use voice::{VOICES, VoiceGender, VoiceOption, find_voice};
