//! Step sequencing, panels and the wizard shell for Video Narrative Genie.
//!
//! A [`Wizard`] owns one [`genie_core::Project`] and a [`StepSequencer`]
//! cursor. The cursor is the only record of where the user is; the status
//! label is derived from it. Each of the seven panels guards its Next
//! control, and the wizard checks that a panel action targets the active
//! step before running it.
//!
//! ```no_run
//! # async fn demo(services: genie_wizard::Services) -> genie_error::GenieResult<()> {
//! use genie_wizard::{Wizard, WizardOptions};
//!
//! let mut wizard = Wizard::new(services, WizardOptions::default());
//! wizard.text_input_mut().set_text("Om Namah Shivaya, the five-syllable mantra.");
//! wizard.commit_and_advance()?;
//! wizard.analyze_text().await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod indicator;
mod notice;
mod panels;
mod progress;
mod sequencer;
mod services;
mod wizard;

pub use indicator::{IndicatorEntry, StepIndicator, StepMarker};
pub use notice::{Notice, Severity};
pub use panels::{
    ActivePanel, EXAMPLE_TEXTS, ImagePanel, MIN_TEXT_CHARS, MusicPanel, PREVIEW_SAMPLE_TEXT, PreviewPanel,
    PreviewSummary, ProcessingPanel, StepPanel, TextInputPanel, VideoPanel, VoicePanel, image_prompt, share_link,
    validate_text,
};
pub use progress::{
    ANALYSIS_PHASES, INTAKE_PHASES, Pacer, Phase, PhaseSpec, PhaseStatus, PhaseTracker, ProgressReporter,
    ProgressSnapshot, VIDEO_PHASES,
};
pub use sequencer::StepSequencer;
pub use services::Services;
pub use wizard::{Wizard, WizardOptions, WizardSnapshot};
