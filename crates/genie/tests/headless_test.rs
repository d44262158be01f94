//! Unattended runs against mock services.

mod test_utils;

use genie::{AspectRatio, ProjectStatus, ScriptBuilder, StepId, run_script};
use std::io::Write;
use std::sync::atomic::Ordering;
use test_utils::MockStudio;

#[tokio::test]
async fn run_without_image_downloads_video_and_voiceover() -> anyhow::Result<()> {
    let studio = MockStudio::new();
    let mut wizard = studio.wizard();
    let out = tempfile::tempdir()?;
    let script = ScriptBuilder::default()
        .text("Om Namah Shivaya, the five-syllable mantra.")
        .voice(Some("hindi-male".to_string()))
        .generate_image(false)
        .aspect_ratio(AspectRatio::Portrait)
        .duration(Some("45".to_string()))
        .out_dir(out.path())
        .build()?;

    let report = run_script(&mut wizard, &script).await?;

    assert_eq!(studio.image_calls.load(Ordering::SeqCst), 0);
    assert_eq!(wizard.current_step(), Some(StepId::Preview));
    assert_eq!(report.summary().duration(), "0:45");
    assert_eq!(report.summary().resolution(), "1080x1920");
    assert_eq!(report.summary().size(), "unknown");
    assert_eq!(report.summary().voice(), "male (hi-IN)");
    assert!(report.share_link().ends_with(&report.project_id().to_string()));

    let names: Vec<String> = report
        .downloads()
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    assert_eq!(names, vec!["video.mp4", "voiceover.mp3"]);
    Ok(())
}

#[tokio::test]
async fn run_with_image_and_music_downloads_everything() -> anyhow::Result<()> {
    let studio = MockStudio::new();
    let mut wizard = studio.wizard();
    let out = tempfile::tempdir()?;
    let mut music = tempfile::Builder::new().suffix(".wav").tempfile()?;
    music.write_all(&[0u8; 4096])?;
    music.flush()?;

    let script = ScriptBuilder::default()
        .text("Hare Krishna Hare Krishna, Krishna Krishna Hare Hare.")
        .music(Some(music.path().to_path_buf()))
        .out_dir(out.path())
        .build()?;

    let report = run_script(&mut wizard, &script).await?;
    assert_eq!(studio.image_calls.load(Ordering::SeqCst), 1);
    assert_eq!(report.downloads().len(), 4);
    assert!(out.path().join("background-image.jpg").exists());
    assert!(out.path().join("background-music.wav").exists());
    Ok(())
}

#[tokio::test]
async fn failed_render_stops_on_the_video_step() -> anyhow::Result<()> {
    let studio = MockStudio::new();
    studio.fail_video.store(true, Ordering::SeqCst);
    let mut wizard = studio.wizard();
    let out = tempfile::tempdir()?;
    let script = ScriptBuilder::default()
        .text("Jai Shri Ram, Jai Jai Ram.")
        .out_dir(out.path())
        .build()?;

    let err = run_script(&mut wizard, &script).await.unwrap_err();
    assert!(err.is_remote());
    assert_eq!(wizard.current_step(), Some(StepId::Video));
    assert_eq!(wizard.status(), ProjectStatus::VideoGeneration);
    assert!(wizard.project().video().is_none());
    assert_eq!(std::fs::read_dir(out.path())?.count(), 0);
    Ok(())
}

#[tokio::test]
async fn short_text_is_refused_before_any_call() -> anyhow::Result<()> {
    let studio = MockStudio::new();
    let mut wizard = studio.wizard();
    let script = ScriptBuilder::default().text("Om").out_dir("unused").build()?;

    let err = run_script(&mut wizard, &script).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(studio.calls.load(Ordering::SeqCst), 0);
    assert_eq!(wizard.cursor(), 0);
    Ok(())
}
