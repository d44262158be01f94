//! Unattended run command handler.

use genie::{
    ConfigError, ConfigErrorKind, GenieConfig, GenieResult, IoError, JsonError, ScriptBuilder, Wizard, build_services,
    run_script,
};
use genie_core::AspectRatio;
use std::io::Read;
use std::path::PathBuf;

/// Arguments of `genie run`.
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Text file path or `-`
    pub text: String,
    /// Voice id
    pub voice: Option<String>,
    /// Skip image generation
    pub no_image: bool,
    /// Music file
    pub music: Option<PathBuf>,
    /// Aspect ratio
    pub aspect: AspectRatio,
    /// Duration as typed
    pub duration: Option<String>,
    /// Download directory
    pub out: PathBuf,
    /// Print the report as JSON
    pub json: bool,
}

fn read_text(source: &str) -> GenieResult<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| IoError::new(format!("Failed to read stdin: {}", e)))?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(source).map_err(|e| IoError::new(format!("Failed to read {}: {}", source, e)))?)
    }
}

/// Drive all seven steps and print where the results went.
pub async fn run_unattended(config: &GenieConfig, args: RunArgs) -> GenieResult<()> {
    let text = read_text(&args.text)?;
    let script = ScriptBuilder::default()
        .text(text)
        .voice(args.voice)
        .generate_image(!args.no_image)
        .music(args.music)
        .aspect_ratio(args.aspect)
        .duration(args.duration)
        .out_dir(args.out)
        .build()
        .map_err(|e| ConfigError::new(ConfigErrorKind::Arguments(e.to_string())))?;

    tracing::info!("Starting unattended run");
    let mut wizard = Wizard::new(build_services(config)?, config.wizard_options());
    let report = run_script(&mut wizard, &script).await?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| JsonError::new("run report", e.to_string()))?;
        println!("{}", rendered);
        return Ok(());
    }

    let summary = report.summary();
    println!("Project:    {}", report.project_id());
    println!("Duration:   {}", summary.duration());
    println!("Resolution: {}", summary.resolution());
    println!("Size:       {}", summary.size());
    println!("Voice:      {}", summary.voice());
    println!("Share:      {}", report.share_link());
    for path in report.downloads() {
        println!("Saved:      {}", path.display());
    }
    Ok(())
}
