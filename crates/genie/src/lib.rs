//! Video Narrative Genie
//!
//! Turns a passage of text into a narrated video through a seven-step
//! wizard: text input, analysis, voiceover, background image, background
//! music, video assembly and preview. Every generative step is delegated to
//! an HTTP service (Gemini, Google Text-to-Speech, OpenAI images,
//! json2video).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use genie::{GenieConfig, ScriptBuilder, Wizard, build_services, run_script};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GenieConfig::load()?;
//!     let mut wizard = Wizard::new(build_services(&config)?, config.wizard_options());
//!
//!     let script = ScriptBuilder::default()
//!         .text("Om Namah Shivaya, the five-syllable mantra.")
//!         .out_dir("out")
//!         .build()?;
//!     let report = run_script(&mut wizard, &script).await?;
//!     println!("Share: {}", report.share_link());
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `tui` - Terminal user interface (default)
//! - `otel` - OpenTelemetry span export
//! - `api` - Enable tests that call the real services
//!
//! # Architecture
//!
//! - `genie_error` - Error types
//! - `genie_core` - Project, catalogs and tracing setup
//! - `genie_interface` - Collaborator traits and the fallback decorator
//! - `genie_models` - HTTP clients
//! - `genie_wizard` - Steps, panels and the wizard shell
//! - `genie_tui` - Terminal UI
//!
//! This crate re-exports everything for convenience.

mod config;
mod headless;
mod services;

pub use config::{GenieConfig, PlayerSection, ShareSection, WizardSection};
pub use headless::{RunReport, Script, ScriptBuilder, run_script};
pub use services::build_services;

pub use genie_core::*;
pub use genie_error::*;
pub use genie_interface::*;
pub use genie_models::*;
pub use genie_wizard::*;

#[cfg(feature = "tui")]
pub use genie_tui::run_tui;
