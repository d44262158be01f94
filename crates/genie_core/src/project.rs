//! The single mutable record describing one video-generation attempt.

use crate::{AspectRatio, MediaRef, VideoDuration, VoiceGender};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Opaque unique project identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct ProjectId(uuid::Uuid);

impl ProjectId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

/// One in-progress video project.
///
/// Media references are written by exactly one step each: audio by voice
/// generation, image by image generation, music by music upload and video by
/// video generation. Every mutator refreshes `updated_at`.
///
/// # Examples
///
/// ```
/// use genie_core::{Project, VoiceGender};
///
/// let mut project = Project::new();
/// assert_eq!(*project.voice_gender(), VoiceGender::Female);
/// assert!(project.audio().is_none());
///
/// project.set_text("Hello world");
/// assert_eq!(project.text(), "Hello world");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Project {
    id: ProjectId,
    text: String,
    voice_gender: VoiceGender,
    voice_language: String,
    audio: Option<MediaRef>,
    image: Option<MediaRef>,
    music: Option<MediaRef>,
    video: Option<MediaRef>,
    /// Size of the rendered video when the assembly service reports it
    video_size_bytes: Option<u64>,
    video_duration: VideoDuration,
    aspect_ratio: AspectRatio,
    generate_image: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

impl Project {
    /// Create a blank project with a fresh id.
    pub fn new() -> Self {
        let now = Utc::now();
        let project = Self {
            id: ProjectId::generate(),
            text: String::new(),
            voice_gender: VoiceGender::Female,
            voice_language: "en-IN".to_string(),
            audio: None,
            image: None,
            music: None,
            video: None,
            video_size_bytes: None,
            video_duration: VideoDuration::default(),
            aspect_ratio: AspectRatio::default(),
            generate_image: true,
            created_at: now,
            updated_at: now,
        };
        debug!(project_id = %project.id, "Created project");
        project
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }

    /// Replace the source text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.touch();
    }

    /// Apply the output settings captured on the text input step.
    pub fn set_output_settings(
        &mut self,
        duration: VideoDuration,
        aspect_ratio: AspectRatio,
        generate_image: bool,
    ) {
        self.video_duration = duration;
        self.aspect_ratio = aspect_ratio;
        self.generate_image = generate_image;
        self.touch();
    }

    /// Record a generated voiceover and the voice that produced it.
    pub fn set_voiceover(&mut self, audio: MediaRef, gender: VoiceGender, language: impl Into<String>) {
        self.audio = Some(audio);
        self.voice_gender = gender;
        self.voice_language = language.into();
        self.touch();
    }

    /// Record a generated background image, replacing any previous one.
    pub fn set_image(&mut self, image: MediaRef) {
        self.image = Some(image);
        self.touch();
    }

    /// Record or clear the background music.
    pub fn set_music(&mut self, music: Option<MediaRef>) {
        self.music = music;
        self.touch();
    }

    /// Record the assembled video.
    pub fn set_video(&mut self, video: MediaRef, size_bytes: Option<u64>) {
        self.video = Some(video);
        self.video_size_bytes = size_bytes;
        self.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutators_refresh_updated_at() {
        let mut project = Project::new();
        let before = *project.updated_at();
        project.set_image(MediaRef::Url("https://img.example/a.png".into()));
        assert!(*project.updated_at() >= before);
        assert_eq!(project.created_at(), &before);
    }

    #[test]
    fn fresh_projects_have_distinct_ids() {
        assert_ne!(Project::new().id(), Project::new().id());
    }
}
