//! Driving every step without a terminal.

use derive_builder::Builder;
use derive_getters::Getters;
use genie_core::{AspectRatio, MusicFile, ProjectId};
use genie_error::GenieResult;
use genie_wizard::{PreviewSummary, Wizard};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Inputs for one unattended run.
///
/// # Example
///
/// ```
/// use genie::ScriptBuilder;
///
/// let script = ScriptBuilder::default()
///     .text("Om Namah Shivaya, the five-syllable mantra.")
///     .generate_image(false)
///     .out_dir("out")
///     .build()
///     .unwrap();
/// assert!(!script.generate_image());
/// assert!(script.voice().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Getters)]
#[builder(setter(into))]
pub struct Script {
    /// Source text
    text: String,
    /// Voice id; the catalog default when absent
    #[builder(default)]
    voice: Option<String>,
    /// Whether to generate a background image
    #[builder(default = "true")]
    generate_image: bool,
    /// Music file to upload; music is skipped when absent
    #[builder(default)]
    music: Option<PathBuf>,
    /// Output orientation
    #[builder(default)]
    aspect_ratio: AspectRatio,
    /// Duration as typed; lenient parsing applies
    #[builder(default)]
    duration: Option<String>,
    /// Download directory
    out_dir: PathBuf,
}

/// What an unattended run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct RunReport {
    /// Project identifier
    project_id: ProjectId,
    /// Share URL
    share_link: String,
    /// Preview facts
    summary: PreviewSummary,
    /// Files written
    downloads: Vec<PathBuf>,
}

/// Run `script` through every step of `wizard`, then download all assets.
///
/// The wizard must be on its first step. Any failure stops the run and
/// leaves the wizard on the step that failed.
#[instrument(skip_all, fields(generate_image = script.generate_image, out_dir = %script.out_dir.display()))]
pub async fn run_script(wizard: &mut Wizard, script: &Script) -> GenieResult<RunReport> {
    let form = wizard.text_input_mut();
    form.set_text(script.text.clone());
    if let Some(duration) = &script.duration {
        form.set_duration_input(duration.clone());
    }
    form.set_aspect_ratio(script.aspect_ratio);
    form.set_generate_image(script.generate_image);
    wizard.commit_and_advance()?;

    wizard.analyze_text().await?;
    info!("Text analysed");

    if let Some(voice) = &script.voice {
        wizard.voice_mut().select_voice(voice)?;
    }
    wizard.generate_voiceover().await?;
    wizard.commit_and_advance()?;
    info!(voice = wizard.voice().voice().id, "Voiceover generated");

    if script.generate_image {
        wizard.generate_image().await?;
        wizard.commit_and_advance()?;
        info!("Background image generated");
    }

    match &script.music {
        Some(path) => {
            let file = MusicFile::from_path(path)?;
            wizard.upload_music(file).await?;
        }
        None => {
            wizard.skip_music()?;
        }
    }
    wizard.commit_and_advance()?;

    wizard.generate_video().await?;
    wizard.commit_and_advance()?;
    info!("Video generated");

    let downloads = wizard.download_all(&script.out_dir).await?;
    Ok(RunReport {
        project_id: *wizard.project().id(),
        share_link: wizard.share_link(),
        summary: wizard.preview_summary(),
        downloads,
    })
}
