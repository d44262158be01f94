//! The seven step panels.
//!
//! Each panel owns its local form state and exposes a guard over the
//! project plus that local state. Actions that reach a collaborator live on
//! [`crate::Wizard`], which checks the active step before delegating.

mod image;
mod music;
mod preview;
mod processing;
mod text_input;
mod video;
mod voice;

pub use image::{ImagePanel, image_prompt};
pub use music::MusicPanel;
pub use preview::{PreviewPanel, PreviewSummary, share_link};
pub use processing::ProcessingPanel;
pub use text_input::{EXAMPLE_TEXTS, MIN_TEXT_CHARS, TextInputPanel, validate_text};
pub use video::VideoPanel;
pub use voice::{PREVIEW_SAMPLE_TEXT, VoicePanel};

use genie_core::{Project, StepId};
use genie_error::ValidationError;

/// Shared shape of every step panel.
pub trait StepPanel {
    /// Step this panel belongs to.
    fn step(&self) -> StepId;

    /// Holds when the Next control may be enabled.
    fn guard(&self, project: &Project) -> Result<(), ValidationError>;

    /// True when leaving this step forward should skip the following step.
    fn skips_next(&self, _project: &Project) -> bool {
        false
    }

    /// Sync local state from the project when the step becomes active.
    fn enter(&mut self, _project: &Project) {}

    /// Forget all local state.
    fn reset(&mut self);
}

/// Borrowed view of the panel under the cursor.
#[derive(Debug, Clone, Copy)]
pub enum ActivePanel<'a> {
    /// Step 0
    TextInput(&'a TextInputPanel),
    /// Step 1
    Processing(&'a ProcessingPanel),
    /// Step 2
    Voice(&'a VoicePanel),
    /// Step 3
    Image(&'a ImagePanel),
    /// Step 4
    Music(&'a MusicPanel),
    /// Step 5
    Video(&'a VideoPanel),
    /// Step 6
    Preview(&'a PreviewPanel),
    /// Cursor outside the step table
    NotFound(usize),
}
