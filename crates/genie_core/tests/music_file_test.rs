use genie_core::{MusicFile, MusicPolicy};
use genie_error::ValidationErrorKind;
use std::io::Write;

#[test]
fn from_path_infers_mime_and_size() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("theme.mp3");
    let mut file = std::fs::File::create(&path)?;
    file.write_all(&[0u8; 2048])?;

    let music = MusicFile::from_path(&path)?;
    assert_eq!(music.name(), "theme.mp3");
    assert_eq!(music.mime(), "audio/mpeg");
    assert_eq!(*music.size(), 2048);
    assert!(MusicPolicy::default().check(&music).is_ok());
    Ok(())
}

#[test]
fn from_path_reports_missing_file() {
    let result = MusicFile::from_path("/definitely/not/here.wav");
    assert!(result.is_err());
}

#[test]
fn oversized_wav_is_rejected_with_size_reason() {
    let music = MusicFile::new("long.wav", "audio/wav", 12 * 1024 * 1024, "long.wav");
    let err = MusicPolicy::default().check(&music).unwrap_err();
    assert_eq!(
        err.kind,
        ValidationErrorKind::FileTooLarge {
            size: 12 * 1024 * 1024,
            max: 10 * 1024 * 1024
        }
    );
    assert_eq!(err.kind.title(), "File Too Large");
}
