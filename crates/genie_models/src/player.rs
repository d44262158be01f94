//! Local playback through an external command.

use crate::fetcher::decode_inline;
use async_trait::async_trait;
use genie_core::MediaRef;
use genie_error::{GenieResult, IoError, PlaybackError, PlaybackErrorKind};
use genie_interface::MediaPlayer;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Hands media to a desktop player such as `xdg-open` or `mpv`.
///
/// Inline payloads are written to a temporary file first.
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    command: String,
    args: Vec<String>,
}

impl CommandPlayer {
    /// Player invoking `command` with `args` followed by the media location.
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    async fn location(&self, media: &MediaRef) -> GenieResult<String> {
        match media {
            MediaRef::Url(url) => Ok(url.clone()),
            MediaRef::Path(path) => Ok(path.display().to_string()),
            MediaRef::Inline { mime, data } => {
                let extension = mime.rsplit('/').next().unwrap_or("bin");
                let path = std::env::temp_dir().join(format!("genie-preview.{}", extension));
                let bytes = decode_inline(data)?;
                tokio::fs::write(&path, bytes)
                    .await
                    .map_err(|e| IoError::new(format!("Failed to write {}: {}", path.display(), e)))?;
                Ok(path.display().to_string())
            }
        }
    }
}

impl Default for CommandPlayer {
    fn default() -> Self {
        Self::new("xdg-open", Vec::new())
    }
}

#[async_trait]
impl MediaPlayer for CommandPlayer {
    #[instrument(skip(self, media), fields(command = %self.command))]
    async fn play(&self, media: &MediaRef) -> GenieResult<()> {
        let location = self.location(media).await?;
        debug!(location = %location, "Launching player");

        let status = Command::new(&self.command)
            .args(&self.args)
            .arg(&location)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()
            .await
            .map_err(|e| {
                PlaybackError::new(PlaybackErrorKind::Launch {
                    command: self.command.clone(),
                    message: e.to_string(),
                })
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(PlaybackError::new(PlaybackErrorKind::Exit(status.code().unwrap_or(-1))).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_command_is_launch_error() {
        let player = CommandPlayer::new("genie-no-such-player-binary", Vec::new());
        let err = player.play(&MediaRef::Url("https://a.test/x.mp3".into())).await.unwrap_err();
        assert!(matches!(
            err.kind(),
            genie_error::GenieErrorKind::Playback(PlaybackError {
                kind: PlaybackErrorKind::Launch { .. },
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_successful_command() {
        let player = CommandPlayer::new("true", Vec::new());
        assert!(player.play(&MediaRef::Url("https://a.test/x.mp3".into())).await.is_ok());
    }
}
