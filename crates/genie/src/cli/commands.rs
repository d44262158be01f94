//! CLI command definitions.

use clap::{Parser, Subcommand};
use genie_core::AspectRatio;
use std::path::PathBuf;

/// Video Narrative Genie - turn a passage of text into a narrated video
#[derive(Parser, Debug)]
#[command(name = "genie")]
#[command(about = "Turn a passage of text into a narrated video", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive wizard
    Tui {
        /// Directory for downloads from the preview step
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Run every step unattended and download the results
    Run {
        /// File holding the source text, or - for stdin
        #[arg(long)]
        text: String,

        /// Voice id (see `genie voices`)
        #[arg(long)]
        voice: Option<String>,

        /// Skip background image generation
        #[arg(long)]
        no_image: bool,

        /// Background music file; music is skipped when absent
        #[arg(long)]
        music: Option<PathBuf>,

        /// Aspect ratio, 16:9 or 9:16
        #[arg(long, default_value = "16:9")]
        aspect: AspectRatio,

        /// Video length in seconds (5-300)
        #[arg(long)]
        duration: Option<String>,

        /// Download directory
        #[arg(long, default_value = "genie-output")]
        out: PathBuf,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the wizard steps
    Steps,

    /// Print the voice catalog
    Voices,
}
