//! Genie CLI binary.
//!
//! This binary provides command-line access to the wizard:
//! - Interactive terminal wizard
//! - Unattended runs from a text file
//! - Step and voice catalog listings

use clap::Parser;
use genie::{GenieConfig, init_file_tracing, init_tracing, shutdown_tracing};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, RunArgs, launch_tui, print_steps, print_voices, run_unattended};

    // Keys may come from a .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let directives = if cli.verbose { "debug" } else { "info,genie=debug" };

    match cli.command {
        Commands::Tui { out } => {
            let log_path = GenieConfig::log_path();
            let _log_guard = init_file_tracing(&log_path, directives)?;
            let config = GenieConfig::load()?;
            launch_tui(&config, out).await?;
        }

        Commands::Run {
            text,
            voice,
            no_image,
            music,
            aspect,
            duration,
            out,
            json,
        } => {
            init_tracing(directives)?;
            let config = GenieConfig::load()?;
            let args = RunArgs {
                text,
                voice,
                no_image,
                music,
                aspect,
                duration,
                out,
                json,
            };
            run_unattended(&config, args).await?;
        }

        Commands::Steps => print_steps(),

        Commands::Voices => print_voices(),
    }

    shutdown_tracing();
    Ok(())
}
