//! Terminal front end for the Video Narrative Genie wizard.
//!
//! Renders the step indicator, the active panel and transient notices with
//! ratatui. Long-running steps are raced against keyboard input so progress
//! keeps redrawing and Esc abandons the work.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod events;
mod runner;
mod task;
mod ui;

pub use app::{App, AppMode, EditField};
pub use events::{Event, EventHandler};
pub use runner::run_tui;
pub use task::Task;
