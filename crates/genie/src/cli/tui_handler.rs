//! TUI launch command handler.

use genie::{GenieConfig, GenieResult};
use std::path::PathBuf;

/// Launch the interactive wizard.
#[cfg(feature = "tui")]
pub async fn launch_tui(config: &GenieConfig, out: Option<PathBuf>) -> GenieResult<()> {
    use genie::{Wizard, build_services, run_tui};

    let download_dir = out
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    tracing::info!(download_dir = %download_dir.display(), "Launching TUI");

    let wizard = Wizard::new(build_services(config)?, config.wizard_options());
    run_tui(wizard, download_dir).await?;

    Ok(())
}

#[cfg(not(feature = "tui"))]
pub async fn launch_tui(_config: &GenieConfig, _out: Option<PathBuf>) -> GenieResult<()> {
    eprintln!("Error: TUI feature not enabled. Rebuild with --features tui");
    std::process::exit(1);
}
