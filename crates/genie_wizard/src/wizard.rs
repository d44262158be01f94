//! The wizard shell: project, cursor and panels under one owner.

use crate::panels::{
    ActivePanel, ImagePanel, MusicPanel, PreviewPanel, PreviewSummary, ProcessingPanel, StepPanel, TextInputPanel,
    VideoPanel, VoicePanel, share_link,
};
use crate::{IndicatorEntry, Pacer, ProgressReporter, ProgressSnapshot, Services, StepIndicator, StepSequencer};
use derive_getters::Getters;
use genie_core::{AssetKind, MusicFile, MusicPolicy, Project, ProjectStatus, StepId};
use genie_error::{GenieResult, PlaybackError, PlaybackErrorKind, ValidationError, ValidationErrorKind};
use genie_interface::AnalysisResponse;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Runtime options for a wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct WizardOptions {
    /// Progress tick in milliseconds; zero disables pacing
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,
    /// Origin used for share links
    #[serde(default = "default_share_origin")]
    share_origin: String,
}

fn default_tick_ms() -> u64 {
    100
}

fn default_share_origin() -> String {
    "http://localhost:8080".to_string()
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            share_origin: default_share_origin(),
        }
    }
}

/// Immutable view of the wizard after a mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct WizardSnapshot {
    /// Project at this point
    project: Project,
    /// Cursor value
    cursor: usize,
    /// Step under the cursor
    step: Option<StepId>,
    /// Derived status label
    status: ProjectStatus,
    /// Indicator row
    indicator: Vec<IndicatorEntry>,
    /// Whether Next is enabled
    can_advance: bool,
}

/// Owns the project and the cursor, and routes every action to the active
/// panel.
///
/// Actions that call a collaborator are futures that write the project only
/// after the call has resolved. Dropping such a future abandons the call and
/// leaves the project as it was.
pub struct Wizard {
    project: Project,
    sequencer: StepSequencer,
    text_input: TextInputPanel,
    processing: ProcessingPanel,
    voice: VoicePanel,
    image: ImagePanel,
    music: MusicPanel,
    video: VideoPanel,
    preview: PreviewPanel,
    services: Services,
    pacer: Pacer,
    options: WizardOptions,
    progress: watch::Sender<ProgressSnapshot>,
}

impl std::fmt::Debug for Wizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wizard")
            .field("project", self.project.id())
            .field("cursor", &self.sequencer.cursor())
            .field("services", &self.services)
            .finish_non_exhaustive()
    }
}

impl Wizard {
    /// Wizard on a blank project at the first step.
    pub fn new(services: Services, options: WizardOptions) -> Self {
        Self::with_music_policy(services, options, MusicPolicy::default())
    }

    /// Wizard with a custom music intake policy.
    pub fn with_music_policy(services: Services, options: WizardOptions, policy: MusicPolicy) -> Self {
        let (progress, _) = watch::channel(ProgressSnapshot::default());
        let project = Project::new();
        let mut text_input = TextInputPanel::default();
        text_input.enter(&project);
        info!(project_id = %project.id(), "Wizard started");
        Self {
            project,
            sequencer: StepSequencer::new(),
            text_input,
            processing: ProcessingPanel::default(),
            voice: VoicePanel::default(),
            image: ImagePanel::default(),
            music: MusicPanel::new(policy),
            video: VideoPanel::default(),
            preview: PreviewPanel::default(),
            services,
            pacer: Pacer::new(options.tick_ms),
            options,
            progress,
        }
    }

    /// The project.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Cursor value.
    pub fn cursor(&self) -> usize {
        self.sequencer.cursor()
    }

    /// Step under the cursor.
    pub fn current_step(&self) -> Option<StepId> {
        self.sequencer.current()
    }

    /// Options this wizard was built with.
    pub fn options(&self) -> &WizardOptions {
        &self.options
    }

    /// Status label derived from the cursor and the project.
    pub fn status(&self) -> ProjectStatus {
        match self.sequencer.current() {
            Some(StepId::Video) if self.project.video().is_some() => ProjectStatus::Completed,
            Some(step) => ProjectStatus::for_step(step),
            None => ProjectStatus::Completed,
        }
    }

    /// Indicator row for the current cursor.
    pub fn indicator(&self) -> Vec<IndicatorEntry> {
        StepIndicator::entries(&self.sequencer)
    }

    /// Watch sub-phase progress.
    pub fn subscribe(&self) -> watch::Receiver<ProgressSnapshot> {
        self.progress.subscribe()
    }

    /// Immutable copy of the current state.
    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            project: self.project.clone(),
            cursor: self.sequencer.cursor(),
            step: self.sequencer.current(),
            status: self.status(),
            indicator: self.indicator(),
            can_advance: self.can_advance(),
        }
    }

    /// Panel under the cursor.
    pub fn active_panel(&self) -> ActivePanel<'_> {
        match self.sequencer.current() {
            Some(StepId::TextInput) => ActivePanel::TextInput(&self.text_input),
            Some(StepId::Processing) => ActivePanel::Processing(&self.processing),
            Some(StepId::Voice) => ActivePanel::Voice(&self.voice),
            Some(StepId::Image) => ActivePanel::Image(&self.image),
            Some(StepId::Music) => ActivePanel::Music(&self.music),
            Some(StepId::Video) => ActivePanel::Video(&self.video),
            Some(StepId::Preview) => ActivePanel::Preview(&self.preview),
            None => ActivePanel::NotFound(self.sequencer.cursor()),
        }
    }

    /// Text input panel.
    pub fn text_input(&self) -> &TextInputPanel {
        &self.text_input
    }

    /// Text input form for editing.
    pub fn text_input_mut(&mut self) -> &mut TextInputPanel {
        &mut self.text_input
    }

    /// Processing panel.
    pub fn processing(&self) -> &ProcessingPanel {
        &self.processing
    }

    /// Voice panel.
    pub fn voice(&self) -> &VoicePanel {
        &self.voice
    }

    /// Voice form for editing.
    pub fn voice_mut(&mut self) -> &mut VoicePanel {
        &mut self.voice
    }

    /// Image panel.
    pub fn image(&self) -> &ImagePanel {
        &self.image
    }

    /// Image form for editing.
    pub fn image_mut(&mut self) -> &mut ImagePanel {
        &mut self.image
    }

    /// Music panel.
    pub fn music(&self) -> &MusicPanel {
        &self.music
    }

    /// Video panel.
    pub fn video(&self) -> &VideoPanel {
        &self.video
    }

    /// Preview panel.
    pub fn preview(&self) -> &PreviewPanel {
        &self.preview
    }

    fn panel(&self, step: StepId) -> &dyn StepPanel {
        match step {
            StepId::TextInput => &self.text_input,
            StepId::Processing => &self.processing,
            StepId::Voice => &self.voice,
            StepId::Image => &self.image,
            StepId::Music => &self.music,
            StepId::Video => &self.video,
            StepId::Preview => &self.preview,
        }
    }

    fn enter_current(&mut self) {
        let project = &self.project;
        match self.sequencer.current() {
            Some(StepId::TextInput) => self.text_input.enter(project),
            Some(StepId::Processing) => self.processing.enter(project),
            Some(StepId::Voice) => self.voice.enter(project),
            Some(StepId::Image) => self.image.enter(project),
            Some(StepId::Music) => self.music.enter(project),
            Some(StepId::Video) => self.video.enter(project),
            Some(StepId::Preview) => self.preview.enter(project),
            None => debug!(cursor = self.sequencer.cursor(), "Cursor outside step table"),
        }
    }

    #[track_caller]
    fn require(&self, step: StepId) -> Result<(), ValidationError> {
        match self.sequencer.current() {
            Some(current) if current == step => Ok(()),
            current => Err(ValidationError::new(ValidationErrorKind::StepMismatch {
                expected: step.to_string(),
                actual: current.map_or_else(|| format!("#{}", self.sequencer.cursor()), |s| s.to_string()),
            })),
        }
    }

    /// Guard of the active panel.
    pub fn check_guard(&self) -> Result<(), ValidationError> {
        match self.sequencer.current() {
            Some(step) => self.panel(step).guard(&self.project),
            None => Err(ValidationError::new(ValidationErrorKind::StepMismatch {
                expected: "a wizard step".to_string(),
                actual: format!("#{}", self.sequencer.cursor()),
            })),
        }
    }

    /// True when Next is enabled.
    pub fn can_advance(&self) -> bool {
        self.check_guard().is_ok()
    }

    /// Re-check the active guard, write the step's fields and move on.
    ///
    /// Leaving the voice step skips image generation when it is turned off.
    #[instrument(skip(self), fields(cursor = self.sequencer.cursor()))]
    pub fn commit_and_advance(&mut self) -> GenieResult<WizardSnapshot> {
        if let Err(err) = self.check_guard() {
            debug!(error = %err.kind, "Guard refused advance");
            return Err(err.into());
        }
        let skip = self
            .sequencer
            .current()
            .is_some_and(|step| self.panel(step).skips_next(&self.project));

        if self.sequencer.current() == Some(StepId::TextInput) {
            self.text_input.apply(&mut self.project);
            self.processing.reset();
        }

        self.sequencer.advance(skip);
        self.enter_current();
        info!(cursor = self.sequencer.cursor(), status = %self.status(), "Advanced");
        Ok(self.snapshot())
    }

    /// Go back one step. Never touches the project.
    pub fn retreat(&mut self) -> WizardSnapshot {
        self.sequencer.retreat();
        self.enter_current();
        debug!(cursor = self.sequencer.cursor(), "Retreated");
        self.snapshot()
    }

    /// Analyse the project text and, on success, move to the voice step.
    #[instrument(skip(self))]
    pub async fn analyze_text(&mut self) -> GenieResult<WizardSnapshot> {
        self.require(StepId::Processing)?;
        let reporter = ProgressReporter::new(StepId::Processing, &self.progress);
        let text = self.project.text().clone();

        let outcome = self
            .processing
            .run(&text, self.services.analysis.as_ref(), &self.pacer, &reporter)
            .await;
        match outcome {
            Ok(AnalysisResponse::Rewritten(rewritten)) => {
                debug!("Analysis rewrote the text");
                self.project.set_text(rewritten);
            }
            Ok(AnalysisResponse::Confirmed) => debug!("Analysis confirmed the text"),
            Err(err) => {
                warn!(error = %err, "Text analysis failed");
                return Err(err);
            }
        }

        self.sequencer.advance(false);
        self.enter_current();
        Ok(self.snapshot())
    }

    /// Synthesize the voiceover from the edited text and selected voice.
    #[instrument(skip(self), fields(voice = self.voice.voice().id))]
    pub async fn generate_voiceover(&mut self) -> GenieResult<WizardSnapshot> {
        self.require(StepId::Voice)?;
        let request = self.voice.request()?;

        let response = match self.services.speech.synthesize(&request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "Voice generation failed");
                return Err(err);
            }
        };

        self.project.set_text(request.text);
        self.project
            .set_voiceover(response.audio, request.voice.gender, request.voice.language);
        info!("Voiceover stored");
        Ok(self.snapshot())
    }

    /// Speak a short sample in `voice_id` without touching the project.
    #[instrument(skip(self))]
    pub async fn preview_voice(&self, voice_id: &str) -> GenieResult<()> {
        self.require(StepId::Voice)?;
        let request = VoicePanel::preview_request(voice_id)?;
        let sample = self.services.speech.synthesize(&request).await?;
        self.services.player.play(&sample.audio).await
    }

    /// Play one of the project's assets.
    #[instrument(skip(self))]
    pub async fn play_asset(&self, kind: AssetKind) -> GenieResult<()> {
        let media = match kind {
            AssetKind::Video => self.project.video(),
            AssetKind::Image => self.project.image(),
            AssetKind::Audio => self.project.audio(),
            AssetKind::Music => self.project.music(),
        };
        match media {
            Some(media) => self.services.player.play(media).await,
            None => Err(PlaybackError::new(PlaybackErrorKind::NoMedia).into()),
        }
    }

    /// Generate the background image, replacing any previous one.
    #[instrument(skip(self), fields(style = self.image.style()))]
    pub async fn generate_image(&mut self) -> GenieResult<WizardSnapshot> {
        self.require(StepId::Image)?;
        let request = self.image.request(&self.project)?;

        let response = match self.services.image.generate_image(&request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "Image generation failed");
                return Err(err);
            }
        };

        self.project.set_image(response.image);
        info!("Background image stored");
        Ok(self.snapshot())
    }

    /// Take in a local music file.
    #[instrument(skip(self, file), fields(name = %file.name()))]
    pub async fn upload_music(&mut self, file: MusicFile) -> GenieResult<WizardSnapshot> {
        self.require(StepId::Music)?;
        let reporter = ProgressReporter::new(StepId::Music, &self.progress);
        let media = match self.music.intake(file, &self.pacer, &reporter).await {
            Ok(media) => media,
            Err(err) => {
                warn!(error = %err.kind, "Music rejected");
                return Err(err.into());
            }
        };
        self.project.set_music(Some(media));
        Ok(self.snapshot())
    }

    /// Continue without music.
    pub fn skip_music(&mut self) -> GenieResult<WizardSnapshot> {
        self.require(StepId::Music)?;
        self.music.skip();
        Ok(self.snapshot())
    }

    /// Drop the uploaded music and any skip decision.
    pub fn remove_music(&mut self) -> GenieResult<WizardSnapshot> {
        self.require(StepId::Music)?;
        self.music.clear();
        self.project.set_music(None);
        Ok(self.snapshot())
    }

    /// Assemble the final video.
    #[instrument(skip(self))]
    pub async fn generate_video(&mut self) -> GenieResult<WizardSnapshot> {
        self.require(StepId::Video)?;
        let request = VideoPanel::request(&self.project)?;
        let reporter = ProgressReporter::new(StepId::Video, &self.progress);

        let response = match self
            .video
            .run(&request, self.services.video.as_ref(), &self.pacer, &reporter)
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "Video generation failed");
                return Err(err);
            }
        };

        self.project.set_video(response.video, response.size_bytes);
        Ok(self.snapshot())
    }

    /// Summary shown on the preview step.
    pub fn preview_summary(&self) -> PreviewSummary {
        PreviewSummary::of(&self.project)
    }

    /// Share URL for the project.
    pub fn share_link(&self) -> String {
        share_link(&self.options.share_origin, self.project.id())
    }

    /// Download one asset into `dir`.
    pub async fn download(&mut self, kind: AssetKind, dir: &Path) -> GenieResult<PathBuf> {
        self.require(StepId::Preview)?;
        self.preview
            .download(&self.project, kind, dir, self.services.fetcher.as_ref())
            .await
    }

    /// Download every asset the project has into `dir`.
    pub async fn download_all(&mut self, dir: &Path) -> GenieResult<Vec<PathBuf>> {
        self.require(StepId::Preview)?;
        let mut paths = Vec::new();
        for kind in [AssetKind::Video, AssetKind::Image, AssetKind::Audio, AssetKind::Music] {
            let present = match kind {
                AssetKind::Video => self.project.video().is_some(),
                AssetKind::Image => self.project.image().is_some(),
                AssetKind::Audio => self.project.audio().is_some(),
                AssetKind::Music => self.project.music().is_some(),
            };
            if present {
                paths.push(self.download(kind, dir).await?);
            }
        }
        Ok(paths)
    }

    /// Start over with a fresh project at the first step.
    pub fn create_new(&mut self) -> WizardSnapshot {
        let previous = *self.project.id();
        self.project = Project::new();
        self.sequencer.reset();
        self.text_input.reset();
        self.processing.reset();
        self.voice.reset();
        self.image.reset();
        self.music.reset();
        self.video.reset();
        self.preview.reset();
        self.text_input.enter(&self.project);
        self.progress.send_replace(ProgressSnapshot::default());
        info!(previous = %previous, project_id = %self.project.id(), "New project created");
        self.snapshot()
    }
}
