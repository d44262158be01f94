use super::StepPanel;
use derive_getters::Getters;
use genie_core::{AssetKind, MediaRef, Project, ProjectId, StepId, format_file_size};
use genie_error::{GenieResult, IoError, ValidationError, ValidationErrorKind};
use genie_interface::AssetFetcher;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Share URL for a project.
///
/// # Examples
///
/// ```
/// use genie_core::Project;
/// use genie_wizard::share_link;
///
/// let project = Project::new();
/// let link = share_link("https://genie.example/", project.id());
/// assert_eq!(link, format!("https://genie.example/video/{}", project.id()));
/// ```
pub fn share_link(origin: &str, id: &ProjectId) -> String {
    format!("{}/video/{}", origin.trim_end_matches('/'), id)
}

/// Read-only facts about the finished project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct PreviewSummary {
    /// Length as `m:ss`
    duration: String,
    /// `WIDTHxHEIGHT`
    resolution: String,
    /// Human size, or `unknown`
    size: String,
    /// Container format
    format: String,
    /// Voice gender and language
    voice: String,
    /// Creation date
    created: String,
}

impl PreviewSummary {
    /// Summarise `project`.
    pub fn of(project: &Project) -> Self {
        let (width, height) = project.aspect_ratio().resolution();
        Self {
            duration: project.video_duration().as_clock(),
            resolution: format!("{}x{}", width, height),
            size: project
                .video_size_bytes()
                .as_ref()
                .map(|bytes| format_file_size(*bytes))
                .unwrap_or_else(|| "unknown".to_string()),
            format: "MP4".to_string(),
            voice: format!("{} ({})", project.voice_gender(), project.voice_language()),
            created: project.created_at().format("%B %-d, %Y").to_string(),
        }
    }
}

/// File name for a downloaded asset: the asset's stem plus an extension
/// taken from the source when it has a plausible one.
pub(crate) fn download_name(kind: AssetKind, media: &MediaRef) -> String {
    let extension = match media {
        MediaRef::Url(url) => url_extension(url),
        MediaRef::Path(path) => path.extension().and_then(|e| e.to_str()).map(str::to_string),
        MediaRef::Inline { mime, .. } => mime_extension(mime),
    };
    format!(
        "{}.{}",
        kind.file_stem(),
        extension.as_deref().unwrap_or(kind.default_extension())
    )
}

fn url_extension(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next()?;
    let segment = path.rsplit('/').next()?;
    let (_, extension) = segment.rsplit_once('.')?;
    let plausible = (1..=4).contains(&extension.len()) && extension.chars().all(|c| c.is_ascii_alphanumeric());
    plausible.then(|| extension.to_ascii_lowercase())
}

fn mime_extension(mime: &str) -> Option<String> {
    let extension = match mime {
        "audio/mpeg" | "audio/mp3" => "mp3",
        "audio/wav" => "wav",
        "audio/mp4" => "m4a",
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "video/mp4" => "mp4",
        _ => return None,
    };
    Some(extension.to_string())
}

/// Downloads made from the preview step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewPanel {
    downloads: Vec<PathBuf>,
}

impl PreviewPanel {
    /// Files written so far.
    pub fn downloads(&self) -> &[PathBuf] {
        &self.downloads
    }

    /// Fetch one asset into `dir`.
    #[instrument(skip(self, project, dir, fetcher), fields(dir = %dir.display()))]
    pub(crate) async fn download(
        &mut self,
        project: &Project,
        kind: AssetKind,
        dir: &Path,
        fetcher: &dyn AssetFetcher,
    ) -> GenieResult<PathBuf> {
        let media = match kind {
            AssetKind::Video => project.video(),
            AssetKind::Image => project.image(),
            AssetKind::Audio => project.audio(),
            AssetKind::Music => project.music(),
        }
        .as_ref()
        .ok_or_else(|| ValidationError::new(ValidationErrorKind::MissingAsset(kind.label().to_string())))?;

        let bytes = fetcher.fetch(media).await?;
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| IoError::new(format!("Failed to create {}: {}", dir.display(), e)))?;
        let path = dir.join(download_name(kind, media));
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| IoError::new(format!("Failed to write {}: {}", path.display(), e)))?;

        info!(path = %path.display(), bytes = bytes.len(), "Asset downloaded");
        self.downloads.push(path.clone());
        Ok(path)
    }
}

impl StepPanel for PreviewPanel {
    fn step(&self) -> StepId {
        StepId::Preview
    }

    fn guard(&self, _project: &Project) -> Result<(), ValidationError> {
        Ok(())
    }

    fn reset(&mut self) {
        self.downloads.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genie_core::AspectRatio;

    #[test]
    fn names_follow_source_extension() {
        let url = MediaRef::Url("https://cdn.test/render/abc.MP4?sig=1".into());
        assert_eq!(download_name(AssetKind::Video, &url), "video.mp4");

        let odd = MediaRef::Url("https://cdn.test/render/abc".into());
        assert_eq!(download_name(AssetKind::Image, &odd), "background-image.png");

        let inline = MediaRef::Inline { mime: "audio/mpeg".into(), data: String::new() };
        assert_eq!(download_name(AssetKind::Audio, &inline), "voiceover.mp3");

        let path = MediaRef::Path("/music/bhajan.wav".into());
        assert_eq!(download_name(AssetKind::Music, &path), "background-music.wav");
    }

    #[test]
    fn summary_without_reported_size() {
        let mut project = Project::new();
        project.set_output_settings(genie_core::VideoDuration::new(95).unwrap(), AspectRatio::Portrait, true);
        let summary = PreviewSummary::of(&project);
        assert_eq!(summary.duration(), "1:35");
        assert_eq!(summary.resolution(), "1080x1920");
        assert_eq!(summary.size(), "unknown");
        assert_eq!(summary.format(), "MP4");
        assert_eq!(summary.voice(), "female (en-IN)");
    }
}
