//! Asset downloads.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use genie_core::MediaRef;
use genie_error::{GenieResult, IoError, RemoteError, RemoteErrorKind};
use genie_interface::AssetFetcher;
use reqwest::Client;
use tracing::{debug, error, instrument};

const SERVICE: &str = "download";

/// Fetches remote URLs over HTTP, reads local files, and decodes inline
/// base64 payloads.
#[derive(Debug, Clone, Default)]
pub struct HttpAssetFetcher {
    client: Client,
}

impl HttpAssetFetcher {
    /// Create a fetcher with a fresh HTTP client.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Decode an inline base64 payload.
pub(crate) fn decode_inline(data: &str) -> Result<Vec<u8>, IoError> {
    STANDARD
        .decode(data.trim())
        .map_err(|e| IoError::new(format!("Invalid inline media payload: {}", e)))
}

#[async_trait]
impl AssetFetcher for HttpAssetFetcher {
    #[instrument(skip(self, media), fields(media = %media))]
    async fn fetch(&self, media: &MediaRef) -> GenieResult<Vec<u8>> {
        match media {
            MediaRef::Url(url) => {
                debug!("Downloading asset");
                let response = self.client.get(url).send().await.map_err(|e| {
                    error!(error = ?e, "Download failed");
                    RemoteError::new(SERVICE, RemoteErrorKind::Request(e.to_string()))
                })?;
                let status = response.status();
                if !status.is_success() {
                    return Err(RemoteError::new(
                        SERVICE,
                        RemoteErrorKind::Api {
                            status: status.as_u16(),
                            message: format!("GET {} failed", url),
                        },
                    )
                    .into());
                }
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| RemoteError::new(SERVICE, RemoteErrorKind::Request(e.to_string())))?;
                Ok(bytes.to_vec())
            }
            MediaRef::Path(path) => tokio::fs::read(path)
                .await
                .map_err(|e| IoError::new(format!("Failed to read {}: {}", path.display(), e)).into()),
            MediaRef::Inline { data, .. } => Ok(decode_inline(data)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_inline_payload_is_decoded() {
        let fetcher = HttpAssetFetcher::new();
        let media = MediaRef::Inline {
            mime: "audio/mpeg".into(),
            data: STANDARD.encode(b"ID3 sample"),
        };
        assert_eq!(fetcher.fetch(&media).await.unwrap(), b"ID3 sample".to_vec());
    }

    #[tokio::test]
    async fn test_local_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("music.mp3");
        std::fs::write(&path, b"abc").unwrap();
        let fetcher = HttpAssetFetcher::new();
        assert_eq!(fetcher.fetch(&MediaRef::Path(path)).await.unwrap(), b"abc".to_vec());
    }

    #[tokio::test]
    async fn test_bad_inline_payload_is_io_error() {
        let fetcher = HttpAssetFetcher::new();
        let media = MediaRef::Inline {
            mime: "audio/mpeg".into(),
            data: "***".into(),
        };
        assert!(fetcher.fetch(&media).await.is_err());
    }
}
