//! Static catalog listings.

use genie_core::{STEPS, VOICES};

/// Print the step table.
pub fn print_steps() {
    for (index, step) in STEPS.iter().enumerate() {
        println!("{}. {:<12} {:<12} {}", index + 1, step.id, step.title, step.description);
    }
}

/// Print the voice catalog.
pub fn print_voices() {
    for voice in VOICES {
        println!(
            "{:<14} {:<30} {:<7} {:<6} {}",
            voice.id, voice.name, voice.gender, voice.language, voice.accent
        );
    }
}
