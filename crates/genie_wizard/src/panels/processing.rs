use super::StepPanel;
use crate::{ANALYSIS_PHASES, Notice, Pacer, PhaseTracker, ProgressReporter};
use genie_core::{Project, StepId};
use genie_error::{GenieResult, ValidationError, ValidationErrorKind};
use genie_interface::{AnalysisRequest, AnalysisResponse, TextAnalysis};
use tracing::{debug, instrument};

/// Text analysis with a single tracked sub-step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingPanel {
    tracker: PhaseTracker,
}

impl Default for ProcessingPanel {
    fn default() -> Self {
        Self {
            tracker: PhaseTracker::new(ANALYSIS_PHASES),
        }
    }
}

impl ProcessingPanel {
    /// The analysis sub-step.
    pub fn tracker(&self) -> &PhaseTracker {
        &self.tracker
    }

    /// True once the analysis sub-step has completed.
    pub fn is_complete(&self) -> bool {
        self.tracker.is_complete()
    }

    /// Analyse `text`, ramping the sub-step while the call runs.
    #[instrument(skip_all, fields(service = analysis.service_name()))]
    pub(crate) async fn run(
        &mut self,
        text: &str,
        analysis: &dyn TextAnalysis,
        pacer: &Pacer,
        reporter: &ProgressReporter<'_>,
    ) -> GenieResult<AnalysisResponse> {
        self.tracker.reset();
        self.tracker.start(0);
        reporter.publish(&self.tracker);

        let request = AnalysisRequest { text: text.to_string() };
        let outcome = self
            .tracker
            .ramp_while(0, 90, pacer, reporter, analysis.analyze(&request))
            .await;

        match outcome {
            Ok(response) => {
                self.tracker.ramp(0, 100, pacer, reporter).await;
                self.tracker.complete(0);
                reporter.publish(&self.tracker);
                debug!(rewritten = matches!(response, AnalysisResponse::Rewritten(_)), "Analysis finished");
                Ok(response)
            }
            Err(err) => {
                self.tracker.fail(0, Notice::from_error(&err).description().clone());
                reporter.publish(&self.tracker);
                Err(err)
            }
        }
    }
}

impl StepPanel for ProcessingPanel {
    fn step(&self) -> StepId {
        StepId::Processing
    }

    fn guard(&self, _project: &Project) -> Result<(), ValidationError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(ValidationError::new(ValidationErrorKind::AnalysisIncomplete))
        }
    }

    fn reset(&mut self) {
        self.tracker.reset();
    }
}
