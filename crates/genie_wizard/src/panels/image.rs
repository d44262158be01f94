use super::StepPanel;
use genie_core::{AspectRatio, AssetKind, COLOR_SCHEMES, ColorScheme, IMAGE_STYLES, ImageQuality, Project, StepId};
use genie_error::{ValidationError, ValidationErrorKind};
use genie_interface::{ImageRequest, ImageRequestBuilder};

/// Assemble the image prompt from the narration and the panel settings.
///
/// # Examples
///
/// ```
/// use genie_core::{AspectRatio, COLOR_SCHEMES, ImageQuality};
/// use genie_wizard::image_prompt;
///
/// let prompt = image_prompt(
///     "Om Namah Shivaya",
///     "Divine Temple Architecture",
///     &COLOR_SCHEMES[0],
///     ImageQuality::default(),
///     "",
///     false,
///     AspectRatio::Landscape,
/// );
/// assert!(prompt.contains("\"Om Namah Shivaya\""));
/// assert!(prompt.contains("Saffron Sacred"));
/// assert!(prompt.contains("No text or watermarks, 16:9 aspect ratio"));
/// ```
pub fn image_prompt(
    text: &str,
    style: &str,
    scheme: &ColorScheme,
    quality: ImageQuality,
    embellishment: &str,
    include_text: bool,
    aspect_ratio: AspectRatio,
) -> String {
    let text_rule = if include_text {
        "Leave calm space for an elegant title overlay"
    } else {
        "No text or watermarks"
    };
    let mut prompt = format!(
        "Create a stunning, devotional Hindu religious background image based on this content: \"{text}\".\n\n\
         Style requirements:\n\
         - High resolution, cinematic quality in {style} style\n\
         - Traditional Hindu iconography and symbols\n\
         - Warm, divine lighting using the {scheme} color scheme ({colors})\n\
         - Sacred elements like lotus flowers, Om symbols, temple architecture\n\
         - Peaceful, spiritual atmosphere evoking bhakti and devotion\n\
         - Suitable for video background with {quality}% quality\n\
         - {text_rule}, {aspect_ratio} aspect ratio\n\
         - Traditional patterns, mandala designs and sacred geometry\n",
        scheme = scheme.name,
        colors = scheme.colors.join(", "),
        quality = quality.percent(),
    );
    let embellishment = embellishment.trim();
    if !embellishment.is_empty() {
        prompt.push_str(&format!("\nAdditional elements: {}\n", embellishment));
    }
    prompt
}

/// Style, palette and quality settings for the background image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImagePanel {
    style: usize,
    scheme: usize,
    quality: ImageQuality,
    embellishment: String,
    include_text: bool,
    text_overlay: bool,
}

impl ImagePanel {
    /// Selected style name.
    pub fn style(&self) -> &'static str {
        IMAGE_STYLES[self.style]
    }

    /// Select a style by position in [`IMAGE_STYLES`].
    #[track_caller]
    pub fn select_style(&mut self, index: usize) -> Result<(), ValidationError> {
        if index >= IMAGE_STYLES.len() {
            return Err(out_of_range("style", IMAGE_STYLES.len()));
        }
        self.style = index;
        Ok(())
    }

    /// Select the next style.
    pub fn cycle_style(&mut self) {
        self.style = (self.style + 1) % IMAGE_STYLES.len();
    }

    /// Selected colour scheme.
    pub fn scheme(&self) -> &'static ColorScheme {
        &COLOR_SCHEMES[self.scheme]
    }

    /// Select a colour scheme by position in [`COLOR_SCHEMES`].
    #[track_caller]
    pub fn select_scheme(&mut self, index: usize) -> Result<(), ValidationError> {
        if index >= COLOR_SCHEMES.len() {
            return Err(out_of_range("color_scheme", COLOR_SCHEMES.len()));
        }
        self.scheme = index;
        Ok(())
    }

    /// Select the next colour scheme.
    pub fn cycle_scheme(&mut self) {
        self.scheme = (self.scheme + 1) % COLOR_SCHEMES.len();
    }

    /// Selected quality.
    pub fn quality(&self) -> ImageQuality {
        self.quality
    }

    /// Set quality to a multiple of 10 between 50 and 100.
    pub fn set_quality(&mut self, percent: u8) -> Result<(), ValidationError> {
        self.quality = ImageQuality::new(percent)?;
        Ok(())
    }

    /// Raise quality by one step.
    pub fn quality_up(&mut self) {
        self.quality = self.quality.step_up();
    }

    /// Lower quality by one step.
    pub fn quality_down(&mut self) {
        self.quality = self.quality.step_down();
    }

    /// Free-text additions to the prompt.
    pub fn embellishment(&self) -> &str {
        &self.embellishment
    }

    /// Replace the free-text additions.
    pub fn set_embellishment(&mut self, embellishment: impl Into<String>) {
        self.embellishment = embellishment.into();
    }

    /// Append typed characters to the additions.
    pub fn push_str(&mut self, input: &str) {
        self.embellishment.push_str(input);
    }

    /// Remove the last character of the additions.
    pub fn pop_char(&mut self) {
        self.embellishment.pop();
    }

    /// Whether room is left for on-image text.
    pub fn include_text(&self) -> bool {
        self.include_text
    }

    /// Toggle on-image text.
    pub fn set_include_text(&mut self, include_text: bool) {
        self.include_text = include_text;
    }

    /// Whether the narration is overlaid as captions.
    pub fn text_overlay(&self) -> bool {
        self.text_overlay
    }

    /// Toggle caption overlay.
    pub fn set_text_overlay(&mut self, text_overlay: bool) {
        self.text_overlay = text_overlay;
    }

    /// Prompt for the current project and settings.
    pub fn prompt(&self, project: &Project) -> String {
        image_prompt(
            project.text(),
            self.style(),
            self.scheme(),
            self.quality,
            &self.embellishment,
            self.include_text || self.text_overlay,
            *project.aspect_ratio(),
        )
    }

    /// Image request for the current project and settings.
    #[track_caller]
    pub(crate) fn request(&self, project: &Project) -> Result<ImageRequest, ValidationError> {
        ImageRequestBuilder::default()
            .prompt(self.prompt(project))
            .style(self.style())
            .palette(self.scheme().name)
            .quality(self.quality)
            .aspect_ratio(*project.aspect_ratio())
            .build()
            .map_err(|e| {
                ValidationError::new(ValidationErrorKind::InvalidSetting {
                    field: "image_request".to_string(),
                    reason: e.to_string(),
                })
            })
    }
}

#[track_caller]
fn out_of_range(field: &str, len: usize) -> ValidationError {
    ValidationError::new(ValidationErrorKind::InvalidSetting {
        field: field.to_string(),
        reason: format!("choose 1 to {}", len),
    })
}

impl StepPanel for ImagePanel {
    fn step(&self) -> StepId {
        StepId::Image
    }

    fn guard(&self, project: &Project) -> Result<(), ValidationError> {
        match project.image() {
            Some(_) => Ok(()),
            None => Err(ValidationError::new(ValidationErrorKind::MissingAsset(
                AssetKind::Image.label().to_string(),
            ))),
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
