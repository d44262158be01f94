//! Sub-phase progress for the long-running steps.
//!
//! Processing, music intake and video generation each run an ordered list
//! of phases. A phase ramps from 0 to 100 before the next one starts, and
//! every change is published on a watch channel so any number of observers
//! can follow along.

use derive_getters::Getters;
use genie_core::StepId;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, trace};

/// Lifecycle of one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PhaseStatus {
    /// Not started
    Pending,
    /// Running
    Processing,
    /// Reached 100
    Completed,
    /// Failed; carries a message on the phase
    Error,
}

/// Static definition of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSpec {
    /// Stable identifier
    pub id: &'static str,
    /// Short title
    pub title: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Nominal duration used for pacing
    pub weight_ms: u64,
}

/// The single analysis phase of the processing step.
pub const ANALYSIS_PHASES: &[PhaseSpec] = &[PhaseSpec {
    id: "text-analysis",
    title: "Text Analysis",
    description: "Analyzing text with Gemini AI",
    weight_ms: 1_000,
}];

/// Music intake.
pub const INTAKE_PHASES: &[PhaseSpec] = &[PhaseSpec {
    id: "upload",
    title: "Uploading Music",
    description: "Checking and storing the audio file",
    weight_ms: 2_000,
}];

/// Video generation phases in execution order.
pub const VIDEO_PHASES: &[PhaseSpec] = &[
    PhaseSpec {
        id: "preparation",
        title: "Preparing Assets",
        description: "Organizing audio, image, and text components",
        weight_ms: 2_000,
    },
    PhaseSpec {
        id: "audio-sync",
        title: "Audio Synchronization",
        description: "Syncing voiceover with background music",
        weight_ms: 3_000,
    },
    PhaseSpec {
        id: "visual-composition",
        title: "Visual Composition",
        description: "Composing background image with text overlays",
        weight_ms: 4_000,
    },
    PhaseSpec {
        id: "video-rendering",
        title: "Video Rendering",
        description: "Rendering final video with json2video API",
        weight_ms: 5_000,
    },
    PhaseSpec {
        id: "finalization",
        title: "Finalization",
        description: "Optimizing and preparing for download",
        weight_ms: 2_000,
    },
];

/// Runtime state of one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Phase {
    /// Stable identifier
    #[getter(skip)]
    id: &'static str,
    /// Short title
    #[getter(skip)]
    title: &'static str,
    /// One-line description
    #[getter(skip)]
    description: &'static str,
    /// Nominal duration used for pacing
    weight_ms: u64,
    /// Lifecycle
    status: PhaseStatus,
    /// Percentage, never decreasing while the phase runs
    progress: u8,
    /// Failure message when `status` is `Error`
    error: Option<String>,
}

impl Phase {
    /// Get field `id` from instance of `Phase`.
    pub fn id(&self) -> &&'static str {
        &self.id
    }

    /// Get field `title` from instance of `Phase`.
    pub fn title(&self) -> &&'static str {
        &self.title
    }

    /// Get field `description` from instance of `Phase`.
    pub fn description(&self) -> &&'static str {
        &self.description
    }
}

impl From<&PhaseSpec> for Phase {
    fn from(spec: &PhaseSpec) -> Self {
        Self {
            id: spec.id,
            title: spec.title,
            description: spec.description,
            weight_ms: spec.weight_ms,
            status: PhaseStatus::Pending,
            progress: 0,
            error: None,
        }
    }
}

/// Ordered phases of one step.
///
/// # Examples
///
/// ```
/// use genie_wizard::{PhaseTracker, VIDEO_PHASES};
///
/// let mut tracker = PhaseTracker::new(VIDEO_PHASES);
/// tracker.start(0);
/// tracker.complete(0);
/// assert_eq!(tracker.overall(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseTracker {
    #[serde(skip)]
    specs: &'static [PhaseSpec],
    phases: Vec<Phase>,
}

impl PhaseTracker {
    /// Tracker with every phase pending.
    pub fn new(specs: &'static [PhaseSpec]) -> Self {
        Self {
            specs,
            phases: specs.iter().map(Phase::from).collect(),
        }
    }

    /// All phases in order.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Phase at `index`.
    pub fn phase(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }

    /// Put every phase back to pending.
    pub fn reset(&mut self) {
        self.phases = self.specs.iter().map(Phase::from).collect();
    }

    /// Mark `index` as running. Earlier phases must already be complete.
    pub fn start(&mut self, index: usize) {
        debug_assert!(
            self.phases[..index].iter().all(|p| p.status == PhaseStatus::Completed),
            "phases start in declared order"
        );
        if let Some(phase) = self.phases.get_mut(index) {
            debug!(phase = phase.id, "Phase started");
            phase.status = PhaseStatus::Processing;
            phase.progress = 0;
            phase.error = None;
        }
    }

    /// Raise the progress of `index`. Lower values are ignored.
    pub fn raise(&mut self, index: usize, progress: u8) {
        if let Some(phase) = self.phases.get_mut(index) {
            phase.progress = phase.progress.max(progress.min(100));
            trace!(phase = phase.id, progress = phase.progress, "Phase progress");
        }
    }

    /// Mark `index` finished at 100.
    pub fn complete(&mut self, index: usize) {
        if let Some(phase) = self.phases.get_mut(index) {
            debug!(phase = phase.id, "Phase completed");
            phase.status = PhaseStatus::Completed;
            phase.progress = 100;
        }
    }

    /// Mark `index` failed with `message`. Progress stays where it was.
    pub fn fail(&mut self, index: usize, message: impl Into<String>) {
        if let Some(phase) = self.phases.get_mut(index) {
            let message = message.into();
            debug!(phase = phase.id, error = %message, "Phase failed");
            phase.status = PhaseStatus::Error;
            phase.error = Some(message);
        }
    }

    /// True when every phase is complete.
    pub fn is_complete(&self) -> bool {
        self.phases.iter().all(|p| p.status == PhaseStatus::Completed)
    }

    /// First phase that is not complete.
    pub fn active_index(&self) -> Option<usize> {
        self.phases.iter().position(|p| p.status != PhaseStatus::Completed)
    }

    /// Mean progress across phases, rounded down.
    pub fn overall(&self) -> u8 {
        if self.phases.is_empty() {
            return 0;
        }
        let total: u32 = self.phases.iter().map(|p| u32::from(p.progress)).sum();
        (total / self.phases.len() as u32) as u8
    }

    /// Ramp `index` by `increment` per tick up to `ceiling`.
    pub(crate) async fn ramp(&mut self, index: usize, ceiling: u8, pacer: &Pacer, reporter: &ProgressReporter<'_>) {
        let increment = pacer.increment(self.phases.get(index).map_or(0, |p| p.weight_ms));
        while self.phases.get(index).is_some_and(|p| p.progress < ceiling) {
            pacer.tick().await;
            let next = self.phases[index].progress.saturating_add(increment).min(ceiling);
            self.raise(index, next);
            reporter.publish(self);
        }
    }

    /// Ramp `index` towards `ceiling` while `work` runs, returning its output
    /// as soon as it resolves.
    pub(crate) async fn ramp_while<F: Future>(
        &mut self,
        index: usize,
        ceiling: u8,
        pacer: &Pacer,
        reporter: &ProgressReporter<'_>,
        work: F,
    ) -> F::Output {
        let increment = pacer.increment(self.phases.get(index).map_or(0, |p| p.weight_ms));
        tokio::pin!(work);
        loop {
            let below = self.phases.get(index).is_some_and(|p| p.progress < ceiling);
            tokio::select! {
                biased;
                output = &mut work => return output,
                _ = pacer.tick(), if below => {
                    let next = self.phases[index].progress.saturating_add(increment).min(ceiling);
                    self.raise(index, next);
                    reporter.publish(self);
                }
            }
        }
    }
}

/// Published view of a step's phases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Getters)]
pub struct ProgressSnapshot {
    /// Step the phases belong to; `None` when idle
    step: Option<StepId>,
    /// Phase states
    phases: Vec<Phase>,
    /// Mean progress
    overall: u8,
}

/// Publishes [`ProgressSnapshot`]s for one step.
#[derive(Debug, Clone, Copy)]
pub struct ProgressReporter<'a> {
    step: StepId,
    tx: &'a watch::Sender<ProgressSnapshot>,
}

impl<'a> ProgressReporter<'a> {
    /// Reporter for `step` on `tx`.
    pub fn new(step: StepId, tx: &'a watch::Sender<ProgressSnapshot>) -> Self {
        Self { step, tx }
    }

    /// Publish the tracker's current state.
    pub fn publish(&self, tracker: &PhaseTracker) {
        self.tx.send_replace(ProgressSnapshot {
            step: Some(self.step),
            phases: tracker.phases().to_vec(),
            overall: tracker.overall(),
        });
    }
}

/// Paces simulated progress.
///
/// A zero tick makes every ramp finish in one increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    tick: Duration,
}

impl Pacer {
    /// Pacer with a tick of `tick_ms` milliseconds.
    pub fn new(tick_ms: u64) -> Self {
        Self {
            tick: Duration::from_millis(tick_ms),
        }
    }

    /// Wait one tick.
    pub async fn tick(&self) {
        if self.tick.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.tick).await;
        }
    }

    /// Percentage added per tick for a phase of `weight_ms`.
    ///
    /// # Examples
    ///
    /// ```
    /// use genie_wizard::Pacer;
    ///
    /// assert_eq!(Pacer::new(100).increment(2_000), 5);
    /// assert_eq!(Pacer::new(100).increment(5_000), 2);
    /// assert_eq!(Pacer::new(0).increment(5_000), 100);
    /// ```
    pub fn increment(&self, weight_ms: u64) -> u8 {
        let tick_ms = self.tick.as_millis() as u64;
        if tick_ms == 0 {
            return 100;
        }
        let ticks = (weight_ms / tick_ms).max(1);
        (100 / ticks).clamp(1, 100) as u8
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_is_monotonic() {
        let mut tracker = PhaseTracker::new(ANALYSIS_PHASES);
        tracker.start(0);
        tracker.raise(0, 40);
        tracker.raise(0, 20);
        assert_eq!(*tracker.phases()[0].progress(), 40);
    }

    #[test]
    fn overall_is_mean() {
        let mut tracker = PhaseTracker::new(VIDEO_PHASES);
        tracker.start(0);
        tracker.complete(0);
        tracker.start(1);
        tracker.raise(1, 50);
        assert_eq!(tracker.overall(), 30);
        assert_eq!(tracker.active_index(), Some(1));
    }

    #[test]
    fn fail_keeps_progress() {
        let mut tracker = PhaseTracker::new(ANALYSIS_PHASES);
        tracker.start(0);
        tracker.raise(0, 30);
        tracker.fail(0, "boom");
        let phase = &tracker.phases()[0];
        assert_eq!(*phase.status(), PhaseStatus::Error);
        assert_eq!(*phase.progress(), 30);
        assert_eq!(phase.error().as_deref(), Some("boom"));
    }

    #[tokio::test]
    async fn ramp_publishes_until_ceiling() {
        let (tx, rx) = watch::channel(ProgressSnapshot::default());
        let reporter = ProgressReporter::new(StepId::Music, &tx);
        let mut tracker = PhaseTracker::new(INTAKE_PHASES);
        tracker.start(0);
        tracker.ramp(0, 100, &Pacer::new(0), &reporter).await;
        assert_eq!(rx.borrow().overall, 100);
        assert_eq!(rx.borrow().step, Some(StepId::Music));
    }
}
