//! Image generation catalogs.

use genie_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Selectable image styles. The first entry is the default.
pub const IMAGE_STYLES: &[&str] = &[
    "Divine Temple Architecture",
    "Sacred Lotus Garden",
    "Mystical Mountain Sunset",
    "Golden Mandala Background",
    "Ancient Sanskrit Scrolls",
    "Celestial Star Field",
    "Peaceful River Ganga",
    "Holy Fire Ceremony",
];

/// A named three-colour palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorScheme {
    /// Palette name
    pub name: &'static str,
    /// Hex colours, darkest first
    pub colors: [&'static str; 3],
}

/// Selectable palettes. The first entry is the default.
pub const COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme { name: "Saffron Sacred", colors: ["#ff6600", "#ffaa44", "#ffe699"] },
    ColorScheme { name: "Divine Blue", colors: ["#1e3a8a", "#3b82f6", "#93c5fd"] },
    ColorScheme { name: "Lotus Pink", colors: ["#ec4899", "#f472b6", "#fbcfe8"] },
    ColorScheme { name: "Golden Temple", colors: ["#f59e0b", "#fbbf24", "#fef3c7"] },
    ColorScheme { name: "Emerald Vishnu", colors: ["#059669", "#10b981", "#86efac"] },
    ColorScheme { name: "Crimson Shakti", colors: ["#dc2626", "#ef4444", "#fca5a5"] },
];

/// Image quality percentage: 50..=100 in steps of 10.
///
/// # Examples
///
/// ```
/// use genie_core::ImageQuality;
///
/// assert_eq!(ImageQuality::default().percent(), 80);
/// assert_eq!(ImageQuality::default().step_up().step_up().step_up().percent(), 100);
/// assert!(ImageQuality::new(55).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ImageQuality(u8);

impl ImageQuality {
    const MIN: u8 = 50;
    const MAX: u8 = 100;
    const STEP: u8 = 10;

    /// Create a quality value.
    #[track_caller]
    pub fn new(percent: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&percent) && percent % Self::STEP == 0 {
            Ok(Self(percent))
        } else {
            Err(ValidationError::new(ValidationErrorKind::InvalidSetting {
                field: "image_quality".to_string(),
                reason: format!("must be a multiple of 10 between 50 and 100, got {}", percent),
            }))
        }
    }

    /// Percentage value.
    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Next step up, saturating at 100.
    pub fn step_up(&self) -> Self {
        Self((self.0 + Self::STEP).min(Self::MAX))
    }

    /// Next step down, saturating at 50.
    pub fn step_down(&self) -> Self {
        Self(self.0.saturating_sub(Self::STEP).max(Self::MIN))
    }
}

impl Default for ImageQuality {
    fn default() -> Self {
        Self(80)
    }
}

impl TryFrom<u8> for ImageQuality {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageQuality> for u8 {
    fn from(value: ImageQuality) -> Self {
        value.0
    }
}
