use super::StepPanel;
use genie_core::{AssetKind, Project, StepId, VOICES, VoiceOption, find_voice};
use genie_error::{ValidationError, ValidationErrorKind};
use genie_interface::SpeechRequest;

/// Text spoken when previewing a voice.
pub const PREVIEW_SAMPLE_TEXT: &str = "Namaste. This is how your narration will sound.";

/// Voice selection and an editable copy of the narration text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoicePanel {
    voice: &'static VoiceOption,
    text: String,
}

impl Default for VoicePanel {
    fn default() -> Self {
        Self {
            voice: &VOICES[0],
            text: String::new(),
        }
    }
}

impl VoicePanel {
    /// Selected voice.
    pub fn voice(&self) -> &'static VoiceOption {
        self.voice
    }

    /// Select a voice by id.
    #[track_caller]
    pub fn select_voice(&mut self, id: &str) -> Result<(), ValidationError> {
        self.voice =
            find_voice(id).ok_or_else(|| ValidationError::new(ValidationErrorKind::UnknownVoice(id.to_string())))?;
        Ok(())
    }

    /// Select the next voice in the catalog.
    pub fn cycle_voice(&mut self) {
        let index = VOICES.iter().position(|v| v.id == self.voice.id).unwrap_or(0);
        self.voice = &VOICES[(index + 1) % VOICES.len()];
    }

    /// Narration text as edited on this step.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the narration text.
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

    /// Synthesis request for the edited text.
    #[track_caller]
    pub(crate) fn request(&self) -> Result<SpeechRequest, ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::TextRequired));
        }
        Ok(SpeechRequest {
            text: self.text.clone(),
            voice: *self.voice,
        })
    }

    /// Synthesis request for a short sample in `voice_id`.
    #[track_caller]
    pub(crate) fn preview_request(voice_id: &str) -> Result<SpeechRequest, ValidationError> {
        let voice = find_voice(voice_id)
            .ok_or_else(|| ValidationError::new(ValidationErrorKind::UnknownVoice(voice_id.to_string())))?;
        Ok(SpeechRequest {
            text: PREVIEW_SAMPLE_TEXT.to_string(),
            voice: *voice,
        })
    }
}

impl StepPanel for VoicePanel {
    fn step(&self) -> StepId {
        StepId::Voice
    }

    fn guard(&self, project: &Project) -> Result<(), ValidationError> {
        match project.audio() {
            Some(_) => Ok(()),
            None => Err(ValidationError::new(ValidationErrorKind::MissingAsset(
                AssetKind::Audio.label().to_string(),
            ))),
        }
    }

    fn skips_next(&self, project: &Project) -> bool {
        !*project.generate_image()
    }

    fn enter(&mut self, project: &Project) {
        self.text = project.text().clone();
        if project.audio().is_none() {
            return;
        }
        if let Some(voice) = VOICES
            .iter()
            .find(|v| v.gender == *project.voice_gender() && v.language == project.voice_language())
        {
            self.voice = voice;
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_around() {
        let mut panel = VoicePanel::default();
        for _ in 0..VOICES.len() {
            panel.cycle_voice();
        }
        assert_eq!(panel.voice().id, VOICES[0].id);
    }

    #[test]
    fn unknown_voice_is_rejected() {
        let mut panel = VoicePanel::default();
        let err = panel.select_voice("klingon").unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::UnknownVoice("klingon".into()));
        assert_eq!(panel.voice().id, "hindi-female");
    }

    #[test]
    fn empty_text_cannot_be_synthesized() {
        let panel = VoicePanel::default();
        assert_eq!(panel.request().unwrap_err().kind, ValidationErrorKind::TextRequired);
    }
}
