//! Jingle - procedural sound effects for a children's vocabulary quiz
//!
//! Synthesizes the quiz's feedback jingles, click and background loop from
//! plain waveforms and hands them out as self-contained
//! `data:audio/wav;base64,...` URIs.

pub mod bank;
pub mod config;
pub mod encode;
pub mod export;
pub mod recipes;
pub mod synth;

pub use bank::{PlaybackHints, SoundBank};
pub use config::JingleConfig;
pub use recipes::Sound;

use encode::buffer_to_data_uri;

/// Rising arpeggio played on a right answer
pub fn generate_correct_sound() -> String {
    buffer_to_data_uri(&recipes::correct())
}

/// Falling "uh-oh" played on a wrong answer
pub fn generate_incorrect_sound() -> String {
    buffer_to_data_uri(&recipes::incorrect())
}

/// Short chirp for button presses
pub fn generate_click_sound() -> String {
    buffer_to_data_uri(&recipes::click())
}

/// Loopable melody with a bass line, meant to play on repeat
pub fn generate_background_music() -> String {
    buffer_to_data_uri(&recipes::background())
}

/// Data URI for any sound
pub fn generate(sound: Sound) -> String {
    buffer_to_data_uri(&sound.render())
}
