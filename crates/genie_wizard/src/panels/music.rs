use super::StepPanel;
use crate::{INTAKE_PHASES, Pacer, PhaseTracker, ProgressReporter};
use genie_core::{MediaRef, MusicFile, MusicPolicy, Project, StepId};
use genie_error::{ValidationError, ValidationErrorKind};
use tracing::{debug, instrument};

/// Background music intake, or an explicit decision to go without.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicPanel {
    policy: MusicPolicy,
    skipped: bool,
    file: Option<MusicFile>,
    tracker: PhaseTracker,
}

impl Default for MusicPanel {
    fn default() -> Self {
        Self::new(MusicPolicy::default())
    }
}

impl MusicPanel {
    /// Panel enforcing `policy`.
    pub fn new(policy: MusicPolicy) -> Self {
        Self {
            policy,
            skipped: false,
            file: None,
            tracker: PhaseTracker::new(INTAKE_PHASES),
        }
    }

    /// Accepted types and size.
    pub fn policy(&self) -> &MusicPolicy {
        &self.policy
    }

    /// True after an explicit skip.
    pub fn skipped(&self) -> bool {
        self.skipped
    }

    /// The accepted file, if any.
    pub fn file(&self) -> Option<&MusicFile> {
        self.file.as_ref()
    }

    /// Intake progress.
    pub fn tracker(&self) -> &PhaseTracker {
        &self.tracker
    }

    /// Validate `file` and ramp the intake progress. Rejected files leave
    /// the panel untouched.
    #[instrument(skip_all, fields(name = %file.name(), mime = %file.mime(), size = file.size()))]
    pub(crate) async fn intake(
        &mut self,
        file: MusicFile,
        pacer: &Pacer,
        reporter: &ProgressReporter<'_>,
    ) -> Result<MediaRef, ValidationError> {
        self.policy.check(&file)?;

        self.tracker.reset();
        self.tracker.start(0);
        reporter.publish(&self.tracker);
        self.tracker.ramp(0, 100, pacer, reporter).await;
        self.tracker.complete(0);
        reporter.publish(&self.tracker);

        let media = MediaRef::Path(file.path().clone());
        debug!("Music accepted");
        self.file = Some(file);
        self.skipped = false;
        Ok(media)
    }

    pub(crate) fn skip(&mut self) {
        debug!("Music skipped");
        self.skipped = true;
    }

    pub(crate) fn clear(&mut self) {
        self.skipped = false;
        self.file = None;
        self.tracker.reset();
    }
}

impl StepPanel for MusicPanel {
    fn step(&self) -> StepId {
        StepId::Music
    }

    fn guard(&self, project: &Project) -> Result<(), ValidationError> {
        if project.music().is_some() || self.skipped {
            Ok(())
        } else {
            Err(ValidationError::new(ValidationErrorKind::MusicUndecided))
        }
    }

    fn reset(&mut self) {
        self.clear();
    }
}
