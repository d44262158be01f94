//! Step indicator markers.

use crate::StepSequencer;
use genie_core::{STEPS, StepDescriptor};
use serde::Serialize;

/// How one step is drawn in the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum StepMarker {
    /// Before the cursor
    Completed,
    /// Under the cursor
    Current,
    /// After the cursor
    Pending,
}

/// One entry of the indicator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndicatorEntry {
    /// Step position
    pub index: usize,
    /// Static step description
    pub descriptor: &'static StepDescriptor,
    /// Marker for this step
    pub marker: StepMarker,
}

/// Maps the cursor onto markers for all seven steps.
pub struct StepIndicator;

impl StepIndicator {
    /// Markers for every step given the sequencer's cursor.
    pub fn entries(sequencer: &StepSequencer) -> Vec<IndicatorEntry> {
        STEPS
            .iter()
            .enumerate()
            .map(|(index, descriptor)| IndicatorEntry {
                index,
                descriptor,
                marker: Self::marker(sequencer.cursor(), index),
            })
            .collect()
    }

    /// Marker for step `index` at `cursor`.
    pub fn marker(cursor: usize, index: usize) -> StepMarker {
        match index.cmp(&cursor) {
            std::cmp::Ordering::Less => StepMarker::Completed,
            std::cmp::Ordering::Equal => StepMarker::Current,
            std::cmp::Ordering::Greater => StepMarker::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_follow_cursor() {
        let mut sequencer = StepSequencer::new();
        sequencer.advance(false);
        sequencer.advance(false);
        let markers: Vec<StepMarker> = StepIndicator::entries(&sequencer).iter().map(|e| e.marker).collect();
        assert_eq!(markers[0], StepMarker::Completed);
        assert_eq!(markers[1], StepMarker::Completed);
        assert_eq!(markers[2], StepMarker::Current);
        assert!(markers[3..].iter().all(|m| *m == StepMarker::Pending));
    }

    #[test]
    fn past_end_marks_everything_completed() {
        let markers: Vec<StepMarker> = (0..7).map(|i| StepIndicator::marker(9, i)).collect();
        assert!(markers.iter().all(|m| *m == StepMarker::Completed));
    }
}
