//! Wizard actions that await a collaborator.

use genie_core::{AssetKind, MusicFile};
use genie_error::GenieResult;
use genie_wizard::{Notice, Wizard};
use std::path::PathBuf;
use tracing::instrument;

/// A long-running wizard action.
///
/// Executing a task borrows the wizard mutably; dropping the future before
/// it resolves leaves the project as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Analyse the source text
    Analyze,
    /// Synthesize the voiceover
    GenerateVoice,
    /// Speak a sample in the given voice
    PreviewVoice(String),
    /// Generate the background image
    GenerateImage,
    /// Take in a music file
    UploadMusic(PathBuf),
    /// Assemble the final video
    GenerateVideo,
    /// Play a project asset
    Play(AssetKind),
    /// Save every asset into a directory
    DownloadAll(PathBuf),
}

impl Task {
    /// Text shown while the task runs.
    pub fn label(&self) -> String {
        match self {
            Self::Analyze => "Analyzing text".to_string(),
            Self::GenerateVoice => "Generating voiceover".to_string(),
            Self::PreviewVoice(id) => format!("Previewing {}", id),
            Self::GenerateImage => "Generating background image".to_string(),
            Self::UploadMusic(path) => format!("Uploading {}", path.display()),
            Self::GenerateVideo => "Generating video".to_string(),
            Self::Play(kind) => format!("Playing {}", kind.label()),
            Self::DownloadAll(dir) => format!("Downloading to {}", dir.display()),
        }
    }

    /// Run the task against `wizard`.
    #[instrument(skip_all, fields(task = %self.label()))]
    pub async fn execute(self, wizard: &mut Wizard) -> GenieResult<Notice> {
        match self {
            Self::Analyze => {
                wizard.analyze_text().await?;
                Ok(Notice::success(
                    "Text Analysis Complete",
                    "Your text is ready for voice generation.",
                ))
            }
            Self::GenerateVoice => {
                wizard.generate_voiceover().await?;
                Ok(Notice::success("Voice Generated", "Your voiceover is ready."))
            }
            Self::PreviewVoice(id) => {
                wizard.preview_voice(&id).await?;
                Ok(Notice::info("Voice Preview", format!("Played a sample of {}.", id)))
            }
            Self::GenerateImage => {
                wizard.generate_image().await?;
                Ok(Notice::success("Image Generated", "Your background image is ready."))
            }
            Self::UploadMusic(path) => {
                let file = MusicFile::from_path(&path)?;
                let name = file.name().clone();
                wizard.upload_music(file).await?;
                Ok(Notice::success("Music Uploaded", format!("{} is ready.", name)))
            }
            Self::GenerateVideo => {
                wizard.generate_video().await?;
                Ok(Notice::success("Video Generated", "Your video is ready to preview."))
            }
            Self::Play(kind) => {
                wizard.play_asset(kind).await?;
                Ok(Notice::info("Playback", format!("Opened the {}.", kind.label())))
            }
            Self::DownloadAll(dir) => {
                let paths = wizard.download_all(&dir).await?;
                Ok(Notice::success(
                    "Download Complete",
                    format!("{} files saved to {}.", paths.len(), dir.display()),
                ))
            }
        }
    }
}
