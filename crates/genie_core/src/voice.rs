//! Voice catalog.

use serde::{Deserialize, Serialize};

/// Gender of a synthesized voice.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    /// Male voice
    Male,
    /// Female voice
    Female,
}

/// One selectable voice identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VoiceOption {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Voice gender
    pub gender: VoiceGender,
    /// BCP-47 language code
    pub language: &'static str,
    /// Accent description
    pub accent: &'static str,
    /// Voice name understood by the speech service
    pub provider_voice: &'static str,
}

/// Voices offered on the voice generation step. The first entry is the
/// default selection.
pub const VOICES: &[VoiceOption] = &[
    VoiceOption {
        id: "hindi-female",
        name: "Hindi Female Voice",
        gender: VoiceGender::Female,
        language: "hi-IN",
        accent: "Indian",
        provider_voice: "hi-IN-Wavenet-A",
    },
    VoiceOption {
        id: "hindi-male",
        name: "Hindi Male Voice",
        gender: VoiceGender::Male,
        language: "hi-IN",
        accent: "Indian",
        provider_voice: "hi-IN-Wavenet-B",
    },
    VoiceOption {
        id: "en-in-female",
        name: "English (India) Female Voice",
        gender: VoiceGender::Female,
        language: "en-IN",
        accent: "Indian",
        provider_voice: "en-IN-Wavenet-A",
    },
];

/// Look a voice up by id.
///
/// # Examples
///
/// ```
/// use genie_core::{find_voice, VoiceGender};
///
/// assert_eq!(find_voice("hindi-male").map(|v| v.gender), Some(VoiceGender::Male));
/// assert!(find_voice("klingon").is_none());
/// ```
pub fn find_voice(id: &str) -> Option<&'static VoiceOption> {
    VOICES.iter().find(|voice| voice.id == id)
}
