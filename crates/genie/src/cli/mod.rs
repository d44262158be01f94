//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the genie binary.

mod catalog;
mod commands;
mod run;
mod tui_handler;

pub use catalog::{print_steps, print_voices};
pub use commands::{Cli, Commands};
pub use run::{RunArgs, run_unattended};
pub use tui_handler::launch_tui;
