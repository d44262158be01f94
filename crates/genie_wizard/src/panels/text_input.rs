use super::StepPanel;
use genie_core::{AspectRatio, Project, StepId, VideoDuration};
use genie_error::{ValidationError, ValidationErrorKind};
use tracing::debug;

/// Minimum source text length in characters.
pub const MIN_TEXT_CHARS: usize = 10;

/// Built-in texts that can be loaded into the draft.
pub const EXAMPLE_TEXTS: [&str; 3] = [
    "Welcome to our innovative platform that transforms your ideas into stunning videos. Our advanced AI technology analyzes your content and creates professional-quality videos in minutes.",
    "Imagine a world where technology seamlessly integrates with human creativity. This is the future we are building - a place where artificial intelligence empowers storytellers to bring their visions to life.",
    "The art of storytelling has evolved through the ages, from cave paintings to digital media. Today, we stand at the threshold of a new era where AI becomes the brush and creativity becomes limitless.",
];

/// Check source text: non-blank and at least [`MIN_TEXT_CHARS`] characters.
///
/// # Examples
///
/// ```
/// use genie_wizard::validate_text;
///
/// assert!(validate_text("Hello world").is_ok());
/// assert!(validate_text("Hi").is_err());
/// assert!(validate_text("   ").is_err());
/// ```
#[track_caller]
pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::TextRequired));
    }
    let actual = text.chars().count();
    if actual < MIN_TEXT_CHARS {
        return Err(ValidationError::new(ValidationErrorKind::TextTooShort {
            min: MIN_TEXT_CHARS,
            actual,
        }));
    }
    Ok(())
}

/// Source text and output settings being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputPanel {
    text: String,
    duration_input: String,
    duration: VideoDuration,
    aspect_ratio: AspectRatio,
    generate_image: bool,
}

impl Default for TextInputPanel {
    fn default() -> Self {
        let duration = VideoDuration::default();
        Self {
            text: String::new(),
            duration_input: duration.seconds().to_string(),
            duration,
            aspect_ratio: AspectRatio::default(),
            generate_image: true,
        }
    }
}

impl TextInputPanel {
    /// Draft text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character count shown under the text box.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace the draft text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append typed characters.
    pub fn push_str(&mut self, input: &str) {
        self.text.push_str(input);
    }

    /// Remove the last character.
    pub fn pop_char(&mut self) {
        self.text.pop();
    }

    /// Load one of [`EXAMPLE_TEXTS`].
    #[track_caller]
    pub fn load_example(&mut self, index: usize) -> Result<(), ValidationError> {
        let example = EXAMPLE_TEXTS.get(index).ok_or_else(|| {
            ValidationError::new(ValidationErrorKind::InvalidSetting {
                field: "example".to_string(),
                reason: format!("choose 1 to {}", EXAMPLE_TEXTS.len()),
            })
        })?;
        self.text = example.to_string();
        Ok(())
    }

    /// Raw duration entry.
    pub fn duration_input(&self) -> &str {
        &self.duration_input
    }

    /// Accept free-text duration entry. Non-numeric input means 30 seconds;
    /// numbers are clamped to 5..=300.
    pub fn set_duration_input(&mut self, input: impl Into<String>) {
        self.duration_input = input.into();
        self.duration = VideoDuration::parse_lenient(&self.duration_input);
    }

    /// Parsed duration.
    pub fn duration(&self) -> VideoDuration {
        self.duration
    }

    /// Selected aspect ratio.
    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    /// Select an aspect ratio.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: AspectRatio) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Switch between the two aspect ratios.
    pub fn toggle_aspect_ratio(&mut self) {
        self.aspect_ratio = self.aspect_ratio.toggled();
    }

    /// Whether the image step will be visited.
    pub fn generate_image(&self) -> bool {
        self.generate_image
    }

    /// Turn image generation on or off.
    pub fn set_generate_image(&mut self, generate_image: bool) {
        self.generate_image = generate_image;
    }

    /// Write the draft into the project.
    pub(crate) fn apply(&self, project: &mut Project) {
        debug!(chars = self.char_count(), duration = self.duration.seconds(), "Committing text input");
        project.set_text(self.text.clone());
        project.set_output_settings(self.duration, self.aspect_ratio, self.generate_image);
    }
}

impl StepPanel for TextInputPanel {
    fn step(&self) -> StepId {
        StepId::TextInput
    }

    fn guard(&self, _project: &Project) -> Result<(), ValidationError> {
        validate_text(&self.text)
    }

    fn enter(&mut self, project: &Project) {
        self.text = project.text().clone();
        self.duration = *project.video_duration();
        self.duration_input = self.duration.seconds().to_string();
        self.aspect_ratio = *project.aspect_ratio();
        self.generate_image = *project.generate_image();
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_entry_is_lenient() {
        let mut panel = TextInputPanel::default();
        panel.set_duration_input("abc");
        assert_eq!(panel.duration().seconds(), 30);
        panel.set_duration_input("1000");
        assert_eq!(panel.duration().seconds(), 300);
        panel.set_duration_input("2");
        assert_eq!(panel.duration().seconds(), 5);
        assert_eq!(panel.duration_input(), "2");
    }

    #[test]
    fn examples_load() {
        let mut panel = TextInputPanel::default();
        panel.load_example(2).unwrap();
        assert!(panel.text().starts_with("The art of storytelling"));
        assert!(panel.load_example(3).is_err());
    }

    #[test]
    fn blank_text_is_required_not_short() {
        let err = validate_text("    ").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TextRequired);
    }
}
