//! The authoritative step cursor.

use genie_core::{STEPS, StepDescriptor, StepId};
use serde::Serialize;
use tracing::debug;

/// Integer cursor over the seven step descriptors.
///
/// The cursor is not clamped at the top; a cursor past the last step maps
/// to no step and the shell renders a placeholder for it.
///
/// # Examples
///
/// ```
/// use genie_wizard::StepSequencer;
/// use genie_core::StepId;
///
/// let mut sequencer = StepSequencer::new();
/// sequencer.advance(false);
/// sequencer.advance(true);
/// assert_eq!(sequencer.current(), Some(StepId::Music));
/// assert_eq!(sequencer.completed_steps(), vec![0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StepSequencer {
    cursor: usize,
}

impl StepSequencer {
    /// Cursor at the first step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor value.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Step under the cursor, if the cursor is in range.
    pub fn current(&self) -> Option<StepId> {
        StepId::from_index(self.cursor)
    }

    /// Descriptor under the cursor, if the cursor is in range.
    pub fn descriptor(&self) -> Option<&'static StepDescriptor> {
        STEPS.get(self.cursor)
    }

    /// Move forward one step, or two when `skip` is set.
    pub fn advance(&mut self, skip: bool) -> usize {
        let from = self.cursor;
        self.cursor += if skip { 2 } else { 1 };
        debug!(from, to = self.cursor, skip, "Cursor advanced");
        self.cursor
    }

    /// Move back one step, stopping at zero.
    pub fn retreat(&mut self) -> usize {
        let from = self.cursor;
        self.cursor = self.cursor.saturating_sub(1);
        debug!(from, to = self.cursor, "Cursor retreated");
        self.cursor
    }

    /// Return to the first step.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// True when `index` is strictly before the cursor.
    pub fn is_completed(&self, index: usize) -> bool {
        index < self.cursor
    }

    /// Indices of every step before the cursor.
    pub fn completed_steps(&self) -> Vec<usize> {
        (0..self.cursor.min(STEPS.len())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retreat_floors_at_zero() {
        let mut sequencer = StepSequencer::new();
        assert_eq!(sequencer.retreat(), 0);
        sequencer.advance(false);
        assert_eq!(sequencer.retreat(), 0);
    }

    #[test]
    fn cursor_past_end_has_no_step() {
        let mut sequencer = StepSequencer::new();
        for _ in 0..7 {
            sequencer.advance(false);
        }
        assert_eq!(sequencer.cursor(), 7);
        assert_eq!(sequencer.current(), None);
        assert!(sequencer.descriptor().is_none());
        assert_eq!(sequencer.completed_steps().len(), 7);
    }

    #[test]
    fn skip_moves_two() {
        let mut sequencer = StepSequencer::new();
        sequencer.advance(false);
        sequencer.advance(false);
        assert_eq!(sequencer.current(), Some(StepId::Voice));
        sequencer.advance(true);
        assert_eq!(sequencer.current(), Some(StepId::Music));
        assert!(sequencer.is_completed(3));
    }
}
