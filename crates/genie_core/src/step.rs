//! The ordered step table and the status labels derived from it.

use serde::{Deserialize, Serialize};

/// Identity of one wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StepId {
    /// Enter source text and output settings
    TextInput,
    /// Text analysis
    Processing,
    /// Voiceover generation
    Voice,
    /// Background image generation
    Image,
    /// Background music upload
    Music,
    /// Final video assembly
    Video,
    /// Preview and download
    Preview,
}

/// Static description of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StepDescriptor {
    /// Stable identifier
    pub id: &'static str,
    /// Short title
    pub title: &'static str,
    /// One-line description
    pub description: &'static str,
}

/// The seven steps in order.
pub static STEPS: [StepDescriptor; 7] = [
    StepDescriptor { id: "text-input", title: "Text Input", description: "Enter your content" },
    StepDescriptor { id: "processing", title: "Processing", description: "AI analysis" },
    StepDescriptor { id: "voice", title: "Voice", description: "Generate audio" },
    StepDescriptor { id: "image", title: "Image", description: "Create visuals" },
    StepDescriptor { id: "music", title: "Music", description: "Add soundtrack" },
    StepDescriptor { id: "video", title: "Video", description: "Generate final video" },
    StepDescriptor { id: "preview", title: "Preview", description: "Download & share" },
];

impl StepId {
    /// All steps in order.
    pub const ALL: [StepId; 7] = [
        StepId::TextInput,
        StepId::Processing,
        StepId::Voice,
        StepId::Image,
        StepId::Music,
        StepId::Video,
        StepId::Preview,
    ];

    /// Position in the step table.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Step at a cursor position, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use genie_core::StepId;
    ///
    /// assert_eq!(StepId::from_index(3), Some(StepId::Image));
    /// assert_eq!(StepId::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<StepId> {
        Self::ALL.get(index).copied()
    }

    /// Static descriptor for this step.
    pub fn descriptor(&self) -> &'static StepDescriptor {
        &STEPS[self.index()]
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.descriptor().id)
    }
}

/// Display label for where a project stands.
///
/// Derived from the cursor, never stored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Entering text
    TextInput,
    /// Analysing text
    Processing,
    /// Generating the voiceover
    VoiceGeneration,
    /// Generating the background image
    ImageGeneration,
    /// Choosing background music
    MusicUpload,
    /// Assembling the video
    VideoGeneration,
    /// Video produced
    Completed,
}

impl ProjectStatus {
    /// Status label for a step, before considering produced assets.
    pub fn for_step(step: StepId) -> Self {
        match step {
            StepId::TextInput => Self::TextInput,
            StepId::Processing => Self::Processing,
            StepId::Voice => Self::VoiceGeneration,
            StepId::Image => Self::ImageGeneration,
            StepId::Music => Self::MusicUpload,
            StepId::Video => Self::VideoGeneration,
            StepId::Preview => Self::Completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_follow_step_order() {
        for (index, step) in StepId::ALL.iter().enumerate() {
            assert_eq!(step.index(), index);
            assert_eq!(step.descriptor().id, STEPS[index].id);
        }
    }

    #[test]
    fn status_labels_are_kebab_case() {
        assert_eq!(ProjectStatus::VoiceGeneration.to_string(), "voice-generation");
        assert_eq!(ProjectStatus::for_step(StepId::Preview).to_string(), "completed");
    }
}
