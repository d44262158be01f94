//! Processing, voice, image and music steps against mock services.

mod test_utils;

use genie_core::{MediaRef, MusicFile, VoiceGender};
use genie_error::{GenieErrorKind, ValidationErrorKind};
use genie_wizard::PhaseStatus;
use std::io::Write;
use test_utils::{MockBehavior, MockServices, ready_for_step, wizard_with};

const SOURCE_TEXT: &str = "Om Namah Shivaya, the great five-syllable mantra.";

#[tokio::test]
async fn confirmed_analysis_advances_to_voice() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = ready_for_step(&mock, 1).await?;

    let snapshot = wizard.analyze_text().await?;
    assert_eq!(*snapshot.cursor(), 2);
    assert_eq!(wizard.project().text(), SOURCE_TEXT);
    assert_eq!(wizard.voice().text(), SOURCE_TEXT);

    let phase = wizard.processing().tracker().phase(0).expect("analysis phase");
    assert_eq!(*phase.status(), PhaseStatus::Completed);
    assert_eq!(*phase.progress(), 100);
    assert_eq!(mock.analysis_calls(), 1);
    Ok(())
}

#[tokio::test]
async fn rewritten_analysis_replaces_text() -> anyhow::Result<()> {
    let mock = MockServices::new_rewriting("Om Namah Shivaya, rendered more clearly.");
    let mut wizard = ready_for_step(&mock, 1).await?;

    wizard.analyze_text().await?;
    assert_eq!(wizard.project().text(), "Om Namah Shivaya, rendered more clearly.");
    assert_eq!(wizard.voice().text(), "Om Namah Shivaya, rendered more clearly.");
    Ok(())
}

#[tokio::test]
async fn failed_analysis_stays_on_processing() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = ready_for_step(&mock, 1).await?;
    mock.set_behavior(MockBehavior::Fail);
    let before = wizard.project().clone();

    let err = wizard.analyze_text().await.unwrap_err();
    assert!(err.is_remote());
    assert_eq!(wizard.cursor(), 1);
    assert_eq!(wizard.project(), &before);

    let phase = wizard.processing().tracker().phase(0).expect("analysis phase");
    assert_eq!(*phase.status(), PhaseStatus::Error);
    assert!(phase.error().is_some());
    assert!(!wizard.can_advance());

    mock.set_behavior(MockBehavior::Success);
    wizard.analyze_text().await?;
    assert_eq!(wizard.cursor(), 2);
    Ok(())
}

#[tokio::test]
async fn voiceover_records_audio_and_voice() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = ready_for_step(&mock, 2).await?;

    wizard.generate_voiceover().await?;
    assert_eq!(
        wizard.project().audio(),
        &Some(MediaRef::Url("https://mock.test/voice/hindi-female.mp3".to_string()))
    );
    assert_eq!(*wizard.project().voice_gender(), VoiceGender::Female);
    assert_eq!(wizard.project().voice_language(), "hi-IN");
    assert!(wizard.can_advance());

    wizard.voice_mut().select_voice("hindi-male")?;
    wizard.generate_voiceover().await?;
    assert_eq!(
        wizard.project().audio(),
        &Some(MediaRef::Url("https://mock.test/voice/hindi-male.mp3".to_string()))
    );
    assert_eq!(*wizard.project().voice_gender(), VoiceGender::Male);
    assert_eq!(mock.speech_calls(), 2);
    Ok(())
}

#[tokio::test]
async fn voiceover_uses_edited_text() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = ready_for_step(&mock, 2).await?;
    wizard.voice_mut().set_text("Edited narration for the voiceover.");

    wizard.generate_voiceover().await?;
    assert_eq!(wizard.project().text(), "Edited narration for the voiceover.");
    Ok(())
}

#[tokio::test]
async fn blank_voice_text_is_rejected_locally() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = ready_for_step(&mock, 2).await?;
    wizard.voice_mut().set_text("  ");

    let err = wizard.generate_voiceover().await.unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationErrorKind::TextRequired));
    assert_eq!(mock.speech_calls(), 0);
    Ok(())
}

#[tokio::test]
async fn failed_voiceover_leaves_audio_unset() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = ready_for_step(&mock, 2).await?;
    mock.set_behavior(MockBehavior::Fail);

    assert!(wizard.generate_voiceover().await.is_err());
    assert!(wizard.project().audio().is_none());
    assert!(!wizard.can_advance());
    Ok(())
}

#[tokio::test]
async fn voice_preview_plays_without_storing() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let wizard = ready_for_step(&mock, 2).await?;

    wizard.preview_voice("hindi-male").await?;
    assert_eq!(mock.play_calls(), 1);
    assert_eq!(
        mock.played(),
        vec![MediaRef::Url("https://mock.test/voice/hindi-male.mp3".to_string())]
    );
    assert!(wizard.project().audio().is_none());

    let err = wizard.preview_voice("klingon").await.unwrap_err();
    assert!(matches!(err.validation_kind(), Some(ValidationErrorKind::UnknownVoice(_))));
    Ok(())
}

#[tokio::test]
async fn playing_a_missing_asset_is_a_playback_error() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let wizard = ready_for_step(&mock, 2).await?;

    let err = wizard.play_asset(genie_core::AssetKind::Audio).await.unwrap_err();
    assert!(matches!(err.kind(), GenieErrorKind::Playback(_)));
    assert_eq!(mock.play_calls(), 0);
    Ok(())
}

#[tokio::test]
async fn image_regeneration_overwrites_previous() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = ready_for_step(&mock, 3).await?;
    assert!(!wizard.can_advance());

    wizard.generate_image().await?;
    assert_eq!(
        wizard.project().image(),
        &Some(MediaRef::Url("https://mock.test/image/1.png".to_string()))
    );
    let prompt = mock.last_image_prompt().expect("prompt sent");
    assert!(prompt.contains(SOURCE_TEXT));
    assert!(prompt.contains(wizard.image().style()));

    wizard.generate_image().await?;
    assert_eq!(
        wizard.project().image(),
        &Some(MediaRef::Url("https://mock.test/image/2.png".to_string()))
    );
    assert!(wizard.can_advance());
    Ok(())
}

#[tokio::test]
async fn failed_image_keeps_previous_image() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = ready_for_step(&mock, 3).await?;
    wizard.generate_image().await?;
    mock.set_behavior(MockBehavior::Fail);

    assert!(wizard.generate_image().await.is_err());
    assert_eq!(
        wizard.project().image(),
        &Some(MediaRef::Url("https://mock.test/image/1.png".to_string()))
    );
    Ok(())
}

#[tokio::test]
async fn small_mp3_is_accepted() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = ready_for_step(&mock, 4).await?;
    let mut file = tempfile::Builder::new().suffix(".mp3").tempfile()?;
    file.write_all(&vec![0u8; 2 * 1024 * 1024])?;
    file.flush()?;

    let music = MusicFile::from_path(file.path())?;
    assert_eq!(music.mime(), "audio/mpeg");
    wizard.upload_music(music).await?;

    assert_eq!(wizard.project().music(), &Some(MediaRef::Path(file.path().to_path_buf())));
    assert!(wizard.can_advance());
    let phase = wizard.music().tracker().phase(0).expect("upload phase");
    assert_eq!(*phase.status(), PhaseStatus::Completed);
    Ok(())
}

#[tokio::test]
async fn oversized_wav_is_rejected() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = ready_for_step(&mock, 4).await?;
    let music = MusicFile::new("chant.wav", "audio/wav", 12 * 1024 * 1024, "/tmp/chant.wav");

    let err = wizard.upload_music(music).await.unwrap_err();
    assert!(matches!(err.validation_kind(), Some(ValidationErrorKind::FileTooLarge { .. })));
    assert!(wizard.project().music().is_none());
    assert_eq!(
        wizard.check_guard().unwrap_err().kind,
        ValidationErrorKind::MusicUndecided
    );
    Ok(())
}

#[tokio::test]
async fn unsupported_type_is_rejected() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = ready_for_step(&mock, 4).await?;
    let music = MusicFile::new("notes.txt", "text/plain", 1024, "/tmp/notes.txt");

    let err = wizard.upload_music(music).await.unwrap_err();
    assert_eq!(
        err.validation_kind(),
        Some(&ValidationErrorKind::UnsupportedMediaType("text/plain".to_string()))
    );
    assert!(wizard.project().music().is_none());
    Ok(())
}

#[tokio::test]
async fn skip_and_remove_music() -> anyhow::Result<()> {
    let mock = MockServices::new_success();
    let mut wizard = ready_for_step(&mock, 4).await?;

    wizard.skip_music()?;
    assert!(wizard.can_advance());
    assert!(wizard.project().music().is_none());

    wizard.remove_music()?;
    assert!(!wizard.can_advance());

    let music = MusicFile::new("bhajan.mp3", "audio/mpeg", 1024, "/tmp/bhajan.mp3");
    wizard.upload_music(music).await?;
    assert!(wizard.project().music().is_some());

    wizard.remove_music()?;
    assert!(wizard.project().music().is_none());
    assert!(!wizard.can_advance());
    Ok(())
}

#[test]
fn fresh_wizard_starts_on_text_input() {
    let mock = MockServices::new_success();
    let wizard = wizard_with(&mock);
    assert!(wizard.project().text().is_empty());
    assert_eq!(wizard.cursor(), 0);
}
