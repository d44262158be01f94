//! Background music intake policy.

use genie_error::{GenieResult, IoError, ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A locally supplied audio file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct MusicFile {
    name: String,
    mime: String,
    size: u64,
    path: PathBuf,
}

impl MusicFile {
    /// Describe a file without touching the filesystem.
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
            path: path.into(),
        }
    }

    /// Describe a file on disk, inferring its MIME type from the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file metadata cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> GenieResult<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)
            .map_err(|e| IoError::new(format!("Failed to read {}: {}", path.display(), e)))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(mime_from_extension)
            .unwrap_or("application/octet-stream");
        Ok(Self::new(name, mime, metadata.len(), path))
    }
}

/// MIME type for a file extension, as browsers report it.
pub fn mime_from_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "m4a" | "mp4" => "audio/mp4",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        _ => "application/octet-stream",
    }
}

/// Accepted MIME types and maximum size for background music.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MusicPolicy {
    /// Allowed MIME types
    pub allowed_types: &'static [&'static str],
    /// Maximum size in bytes
    pub max_bytes: u64,
}

impl Default for MusicPolicy {
    fn default() -> Self {
        Self {
            allowed_types: &["audio/mp3", "audio/wav", "audio/mpeg", "audio/mp4"],
            max_bytes: 10 * 1024 * 1024,
        }
    }
}

impl MusicPolicy {
    /// Check a file against the policy. Type is checked before size.
    ///
    /// # Examples
    ///
    /// ```
    /// use genie_core::{MusicFile, MusicPolicy};
    ///
    /// let policy = MusicPolicy::default();
    /// let ok = MusicFile::new("a.mp3", "audio/mpeg", 2_000_000, "a.mp3");
    /// let big = MusicFile::new("b.wav", "audio/wav", 12_000_000, "b.wav");
    /// assert!(policy.check(&ok).is_ok());
    /// assert!(policy.check(&big).is_err());
    /// ```
    #[track_caller]
    pub fn check(&self, file: &MusicFile) -> Result<(), ValidationError> {
        if !self.allowed_types.contains(&file.mime.as_str()) {
            return Err(ValidationError::new(ValidationErrorKind::UnsupportedMediaType(
                file.mime.clone(),
            )));
        }
        if file.size > self.max_bytes {
            return Err(ValidationError::new(ValidationErrorKind::FileTooLarge {
                size: file.size,
                max: self.max_bytes,
            }));
        }
        Ok(())
    }
}

/// Render a byte count as Bytes/KB/MB/GB with up to two decimals.
///
/// # Examples
///
/// ```
/// use genie_core::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_is_checked_before_size() {
        let file = MusicFile::new("huge.ogg", "audio/ogg", 50 * 1024 * 1024, "huge.ogg");
        let err = MusicPolicy::default().check(&file).unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::UnsupportedMediaType(_)));
    }

    #[test]
    fn exactly_ten_mebibytes_is_accepted() {
        let file = MusicFile::new("edge.mp3", "audio/mp3", 10 * 1024 * 1024, "edge.mp3");
        assert!(MusicPolicy::default().check(&file).is_ok());
    }

    #[test]
    fn extension_mapping() {
        assert_eq!(mime_from_extension("MP3"), "audio/mpeg");
        assert_eq!(mime_from_extension("m4a"), "audio/mp4");
        assert_eq!(mime_from_extension("txt"), "application/octet-stream");
    }
}
