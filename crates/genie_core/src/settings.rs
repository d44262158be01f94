//! Output settings chosen on the text input step.

use genie_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Target video length in seconds, bounded to 5..=300.
///
/// # Examples
///
/// ```
/// use genie_core::VideoDuration;
///
/// assert_eq!(VideoDuration::parse_lenient("abc").seconds(), 30);
/// assert_eq!(VideoDuration::parse_lenient("1000").seconds(), 300);
/// assert_eq!(VideoDuration::parse_lenient("2").seconds(), 5);
/// assert!(VideoDuration::new(301).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct VideoDuration(u16);

impl VideoDuration {
    /// Shortest accepted duration.
    pub const MIN: u16 = 5;
    /// Longest accepted duration.
    pub const MAX: u16 = 300;
    /// Duration used when nothing valid was entered.
    pub const DEFAULT: u16 = 30;

    /// Create a duration, rejecting values outside 5..=300.
    #[track_caller]
    pub fn new(seconds: u16) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&seconds) {
            Ok(Self(seconds))
        } else {
            Err(ValidationError::new(ValidationErrorKind::InvalidSetting {
                field: "video_duration".to_string(),
                reason: format!("must be between {} and {} seconds, got {}", Self::MIN, Self::MAX, seconds),
            }))
        }
    }

    /// Clamp any integer into range.
    pub fn clamped(seconds: i64) -> Self {
        Self(seconds.clamp(Self::MIN as i64, Self::MAX as i64) as u16)
    }

    /// Parse free-form input the way the duration field does: anything that
    /// is not an integer falls back to 30, integers are clamped.
    pub fn parse_lenient(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(0) | Err(_) => Self(Self::DEFAULT),
            Ok(seconds) => Self::clamped(seconds),
        }
    }

    /// Length in seconds.
    pub fn seconds(&self) -> u16 {
        self.0
    }

    /// `m:ss` rendering.
    pub fn as_clock(&self) -> String {
        format!("{}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Default for VideoDuration {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u16> for VideoDuration {
    type Error = ValidationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VideoDuration> for u16 {
    fn from(value: VideoDuration) -> Self {
        value.0
    }
}

/// Video orientation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum AspectRatio {
    /// Widescreen
    #[default]
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Landscape,
    /// Vertical
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16")]
    Portrait,
}

impl AspectRatio {
    /// Output resolution as (width, height).
    pub fn resolution(&self) -> (u32, u32) {
        match self {
            Self::Landscape => (1920, 1080),
            Self::Portrait => (1080, 1920),
        }
    }

    /// The other orientation.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Landscape => Self::Portrait,
            Self::Portrait => Self::Landscape,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn clock_format_pads_seconds() {
        assert_eq!(VideoDuration::clamped(154).as_clock(), "2:34");
        assert_eq!(VideoDuration::clamped(5).as_clock(), "0:05");
    }

    #[test]
    fn aspect_ratio_parses_literal_ratios() {
        assert_eq!(AspectRatio::from_str("9:16").ok(), Some(AspectRatio::Portrait));
        assert_eq!(AspectRatio::Landscape.to_string(), "16:9");
        assert!(AspectRatio::from_str("4:3").is_err());
    }

    #[test]
    fn duration_rejects_out_of_range_on_deserialize() {
        assert!(serde_json::from_str::<VideoDuration>("4").is_err());
        assert_eq!(serde_json::from_str::<VideoDuration>("60").ok().map(|d| d.seconds()), Some(60));
    }
}
