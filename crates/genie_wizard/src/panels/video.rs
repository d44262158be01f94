use super::StepPanel;
use crate::{Notice, Pacer, PhaseTracker, ProgressReporter, VIDEO_PHASES};
use genie_core::{AssetKind, Project, StepId};
use genie_error::{GenieResult, ValidationError, ValidationErrorKind};
use genie_interface::{VideoAssembly, VideoRequest, VideoRequestBuilder, VideoResponse};
use tracing::{debug, info, instrument};

const RENDERING_PHASE: &str = "video-rendering";

#[track_caller]
fn missing(kind: AssetKind) -> ValidationError {
    ValidationError::new(ValidationErrorKind::MissingAsset(kind.label().to_string()))
}

/// Final assembly, tracked through five ordered phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoPanel {
    tracker: PhaseTracker,
}

impl Default for VideoPanel {
    fn default() -> Self {
        Self {
            tracker: PhaseTracker::new(VIDEO_PHASES),
        }
    }
}

impl VideoPanel {
    /// Phase progress.
    pub fn tracker(&self) -> &PhaseTracker {
        &self.tracker
    }

    /// Collect everything the assembly service needs from the project.
    ///
    /// Text and voiceover are always required; the image only when image
    /// generation is on.
    #[track_caller]
    pub fn request(project: &Project) -> Result<VideoRequest, ValidationError> {
        if project.text().trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::TextRequired));
        }
        let audio = project.audio().clone().ok_or_else(|| missing(AssetKind::Audio))?;
        let image = if *project.generate_image() {
            Some(project.image().clone().ok_or_else(|| missing(AssetKind::Image))?)
        } else {
            None
        };

        VideoRequestBuilder::default()
            .text(project.text().clone())
            .audio(audio)
            .image(image)
            .music(project.music().clone())
            .duration(*project.video_duration())
            .aspect_ratio(*project.aspect_ratio())
            .build()
            .map_err(|e| {
                ValidationError::new(ValidationErrorKind::InvalidSetting {
                    field: "video_request".to_string(),
                    reason: e.to_string(),
                })
            })
    }

    /// Run every phase in order. The remote call is made during rendering;
    /// a failure marks the active phase as errored.
    #[instrument(skip_all, fields(service = assembly.service_name()))]
    pub(crate) async fn run(
        &mut self,
        request: &VideoRequest,
        assembly: &dyn VideoAssembly,
        pacer: &Pacer,
        reporter: &ProgressReporter<'_>,
    ) -> GenieResult<VideoResponse> {
        self.tracker.reset();
        reporter.publish(&self.tracker);

        let mut response = None;
        for (index, phase) in VIDEO_PHASES.iter().enumerate() {
            self.tracker.start(index);
            reporter.publish(&self.tracker);

            if phase.id == RENDERING_PHASE {
                let outcome = self
                    .tracker
                    .ramp_while(index, 95, pacer, reporter, assembly.assemble(request))
                    .await;
                match outcome {
                    Ok(rendered) => response = Some(rendered),
                    Err(err) => {
                        self.tracker.fail(index, Notice::from_error(&err).description().clone());
                        reporter.publish(&self.tracker);
                        return Err(err);
                    }
                }
            }

            self.tracker.ramp(index, 100, pacer, reporter).await;
            self.tracker.complete(index);
            reporter.publish(&self.tracker);
            debug!(phase = phase.id, overall = self.tracker.overall(), "Video phase done");
        }

        let response = response.ok_or_else(|| {
            ValidationError::new(ValidationErrorKind::InvalidSetting {
                field: "video_phases".to_string(),
                reason: format!("no {} phase", RENDERING_PHASE),
            })
        })?;
        info!(video = %response.video, "Video assembled");
        Ok(response)
    }
}

impl StepPanel for VideoPanel {
    fn step(&self) -> StepId {
        StepId::Video
    }

    fn guard(&self, project: &Project) -> Result<(), ValidationError> {
        match project.video() {
            Some(_) => Ok(()),
            None => Err(missing(AssetKind::Video)),
        }
    }

    fn reset(&mut self) {
        self.tracker.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genie_core::MediaRef;

    #[test]
    fn request_requires_voiceover() {
        let mut project = Project::new();
        project.set_text("Hare Krishna Hare Rama");
        let err = VideoPanel::request(&project).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingAsset("voiceover".into()));
    }

    #[test]
    fn image_only_required_when_enabled() {
        let mut project = Project::new();
        project.set_text("Hare Krishna Hare Rama");
        project.set_voiceover(MediaRef::Url("a".into()), genie_core::VoiceGender::Male, "hi-IN");
        let err = VideoPanel::request(&project).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::MissingAsset("background image".into()));

        project.set_output_settings(*project.video_duration(), *project.aspect_ratio(), false);
        let request = VideoPanel::request(&project).unwrap();
        assert!(request.image().is_none());
    }
}
