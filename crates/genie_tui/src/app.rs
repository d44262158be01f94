//! Application state and core TUI types.

use genie_wizard::{Notice, ProgressSnapshot, WizardSnapshot};
use std::collections::VecDeque;
use std::path::PathBuf;

/// Most notices kept on screen at once.
const MAX_NOTICES: usize = 3;

/// Application mode determines how keys are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppMode {
    /// Keys drive navigation and panel actions
    Navigate,
    /// Keys are typed into a text field
    Edit(EditField),
    /// A long-running step is in flight
    Busy,
}

/// Text fields that accept typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EditField {
    /// Source text on the first step
    Text,
    /// Video duration on the first step
    Duration,
    /// Narration on the voice step
    Narration,
    /// Extra prompt elements on the image step
    Embellishment,
    /// Path of a music file to upload
    MusicPath,
}

impl EditField {
    /// Field title.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Duration => "Duration (seconds)",
            Self::Narration => "Narration",
            Self::Embellishment => "Additional elements",
            Self::MusicPath => "Music file path",
        }
    }
}

/// Main application state.
pub struct App {
    /// Current mode
    pub mode: AppMode,
    /// Wizard state as of the last completed action
    pub snapshot: WizardSnapshot,
    /// Latest sub-phase progress
    pub progress: ProgressSnapshot,
    /// Label of the running task
    pub busy_label: Option<String>,
    /// Recent notices, newest last
    pub notices: VecDeque<Notice>,
    /// Music path being typed
    pub music_path: String,
    /// Where downloads are written
    pub download_dir: PathBuf,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance around a wizard snapshot.
    pub fn new(snapshot: WizardSnapshot, download_dir: PathBuf) -> Self {
        Self {
            mode: AppMode::Navigate,
            snapshot,
            progress: ProgressSnapshot::default(),
            busy_label: None,
            notices: VecDeque::with_capacity(MAX_NOTICES),
            music_path: String::new(),
            download_dir,
            should_quit: false,
        }
    }

    /// Replace the cached wizard state.
    pub fn refresh(&mut self, snapshot: WizardSnapshot) {
        self.snapshot = snapshot;
    }

    /// Show a notice, dropping the oldest past the limit.
    pub fn notify(&mut self, notice: Notice) {
        if self.notices.len() == MAX_NOTICES {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
    }

    /// Newest notice.
    pub fn latest_notice(&self) -> Option<&Notice> {
        self.notices.back()
    }

    /// Start typing into `field`.
    pub fn enter_edit(&mut self, field: EditField) {
        self.mode = AppMode::Edit(field);
    }

    /// Stop typing.
    pub fn leave_edit(&mut self) {
        self.mode = AppMode::Navigate;
    }

    /// Mark a task as running.
    pub fn start_busy(&mut self, label: impl Into<String>) {
        self.busy_label = Some(label.into());
        self.mode = AppMode::Busy;
    }

    /// Mark the running task as finished.
    pub fn finish_busy(&mut self) {
        self.busy_label = None;
        if self.mode == AppMode::Busy {
            self.mode = AppMode::Navigate;
        }
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genie_wizard::Severity;

    fn snapshot() -> WizardSnapshot {
        crate::task::tests::idle_wizard().snapshot()
    }

    #[test]
    fn notices_keep_the_newest_three() {
        let mut app = App::new(snapshot(), PathBuf::from("/tmp"));
        for n in 0..5 {
            app.notify(Notice::info(format!("notice {}", n), ""));
        }
        assert_eq!(app.notices.len(), 3);
        assert_eq!(app.notices.front().map(|n| n.title().as_str()), Some("notice 2"));
        assert_eq!(app.latest_notice().map(|n| *n.severity()), Some(Severity::Info));
    }

    #[test]
    fn busy_returns_to_navigation() {
        let mut app = App::new(snapshot(), PathBuf::from("/tmp"));
        app.start_busy("Generating video");
        assert_eq!(app.mode, AppMode::Busy);
        app.finish_busy();
        assert_eq!(app.mode, AppMode::Navigate);
        assert!(app.busy_label.is_none());
    }
}
