//! Step navigation, guards and derived status.

mod test_utils;

use genie_core::{ProjectStatus, StepId};
use genie_error::ValidationErrorKind;
use genie_wizard::{ActivePanel, StepMarker};
use test_utils::{MockServices, ready_for_step, wizard_with};

#[test]
fn text_guard_tracks_minimum_length() {
    let mock = MockServices::new_success();
    let mut wizard = wizard_with(&mock);
    assert_eq!(wizard.cursor(), 0);
    assert!(!wizard.can_advance());

    wizard.text_input_mut().set_text("Hello world");
    assert!(wizard.can_advance());

    wizard.text_input_mut().set_text("Hi");
    let err = wizard.check_guard().unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::TextTooShort { min: 10, actual: 2 });
    assert!(!wizard.can_advance());
}

#[test]
fn refused_advance_keeps_cursor_and_project() {
    let mock = MockServices::new_success();
    let mut wizard = wizard_with(&mock);
    wizard.text_input_mut().set_text("   ");
    let before = wizard.project().clone();

    let err = wizard.commit_and_advance().unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationErrorKind::TextRequired));
    assert_eq!(wizard.cursor(), 0);
    assert_eq!(wizard.project(), &before);
}

#[test]
fn committing_text_writes_output_settings() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = wizard_with(&mock);
    wizard.text_input_mut().set_text("Hello world");
    wizard.text_input_mut().set_duration_input("abc");
    wizard.text_input_mut().toggle_aspect_ratio();
    wizard.text_input_mut().set_generate_image(false);

    let snapshot = wizard.commit_and_advance()?;
    assert_eq!(*snapshot.cursor(), 1);
    assert_eq!(*snapshot.step(), Some(StepId::Processing));
    assert_eq!(wizard.project().text(), "Hello world");
    assert_eq!(wizard.project().video_duration().seconds(), 30);
    assert_eq!(wizard.project().aspect_ratio().to_string(), "9:16");
    assert!(!wizard.project().generate_image());
    Ok(())
}

#[tokio::test]
async fn retreat_moves_back_without_touching_project() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = ready_for_step(&mock, 2).await?;
    let before = wizard.project().clone();

    let snapshot = wizard.retreat();
    assert_eq!(*snapshot.cursor(), 1);
    assert_eq!(wizard.project(), &before);

    wizard.retreat();
    wizard.retreat();
    assert_eq!(wizard.cursor(), 0);
    Ok(())
}

#[tokio::test]
async fn voice_step_skips_image_when_disabled() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = wizard_with(&mock);
    wizard.text_input_mut().set_text("Hare Krishna Hare Rama");
    wizard.text_input_mut().set_generate_image(false);
    wizard.commit_and_advance()?;
    wizard.analyze_text().await?;
    assert_eq!(wizard.cursor(), 2);

    wizard.generate_voiceover().await?;
    let snapshot = wizard.commit_and_advance()?;
    assert_eq!(*snapshot.cursor(), 4);
    assert_eq!(*snapshot.status(), ProjectStatus::MusicUpload);
    assert_eq!(mock.image_calls(), 0);
    Ok(())
}

#[tokio::test]
async fn voice_step_requires_audio() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = ready_for_step(&mock, 2).await?;
    let err = wizard.commit_and_advance().unwrap_err();
    assert!(matches!(err.validation_kind(), Some(ValidationErrorKind::MissingAsset(_))));
    assert_eq!(wizard.cursor(), 2);
    Ok(())
}

#[tokio::test]
async fn actions_for_inactive_steps_are_rejected() {
    let mock = MockServices::new_success();
    let mut wizard = wizard_with(&mock);

    let err = wizard.generate_image().await.unwrap_err();
    assert!(matches!(
        err.validation_kind(),
        Some(ValidationErrorKind::StepMismatch { .. })
    ));
    assert!(wizard.generate_video().await.is_err());
    assert!(wizard.skip_music().is_err());
    assert_eq!(mock.image_calls(), 0);
    assert_eq!(mock.video_calls(), 0);
    assert!(wizard.project().image().is_none());
}

#[tokio::test]
async fn advancing_past_preview_lands_outside_the_table() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = ready_for_step(&mock, 6).await?;
    assert_eq!(wizard.current_step(), Some(StepId::Preview));
    assert!(wizard.can_advance());

    wizard.commit_and_advance()?;
    assert_eq!(wizard.cursor(), 7);
    assert!(matches!(wizard.active_panel(), ActivePanel::NotFound(7)));
    assert_eq!(wizard.status(), ProjectStatus::Completed);
    assert!(!wizard.can_advance());
    Ok(())
}

#[tokio::test]
async fn status_follows_cursor_and_video() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = wizard_with(&mock);
    assert_eq!(wizard.status(), ProjectStatus::TextInput);

    let mut wizard_at_video = ready_for_step(&mock, 5).await?;
    assert_eq!(wizard_at_video.status(), ProjectStatus::VideoGeneration);
    wizard_at_video.generate_video().await?;
    assert_eq!(wizard_at_video.status(), ProjectStatus::Completed);

    wizard.text_input_mut().set_text("Hello world");
    wizard.commit_and_advance()?;
    assert_eq!(wizard.status(), ProjectStatus::Processing);
    Ok(())
}

#[tokio::test]
async fn indicator_marks_completed_current_and_pending() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let wizard = ready_for_step(&mock, 3).await?;
    let markers: Vec<StepMarker> = wizard.indicator().iter().map(|entry| entry.marker).collect();
    assert_eq!(markers.len(), 7);
    assert!(markers[..3].iter().all(|m| *m == StepMarker::Completed));
    assert_eq!(markers[3], StepMarker::Current);
    assert!(markers[4..].iter().all(|m| *m == StepMarker::Pending));
    Ok(())
}
