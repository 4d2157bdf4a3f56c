//! Fixed sound recipes
//!
//! Each recipe renders the same buffer on every call; there is no state and
//! no randomness.

mod effects;
mod music;

pub use effects::{
    click, correct, incorrect, CLICK_DURATION, CORRECT_DURATION, CORRECT_TONES,
    INCORRECT_DURATION, INCORRECT_TONES,
};
pub use music::{background, BACKGROUND_DURATION, BASS_LINE, MELODY};

use crate::synth::SampleBuffer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The sounds the quiz plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sound {
    /// Answer was right
    Correct,
    /// Answer was wrong
    Incorrect,
    /// Button press
    Click,
    /// Looping music under the quiz
    BackgroundMusic,
}

impl Sound {
    pub const ALL: [Sound; 4] = [
        Sound::Correct,
        Sound::Incorrect,
        Sound::Click,
        Sound::BackgroundMusic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Sound::Correct => "correct",
            Sound::Incorrect => "incorrect",
            Sound::Click => "click",
            Sound::BackgroundMusic => "background_music",
        }
    }

    /// Length of the rendered buffer in seconds
    pub fn duration(self) -> f64 {
        match self {
            Sound::Correct => CORRECT_DURATION,
            Sound::Incorrect => INCORRECT_DURATION,
            Sound::Click => CLICK_DURATION,
            Sound::BackgroundMusic => BACKGROUND_DURATION,
        }
    }

    /// Number of mixed tone events (the click is a single swept chirp)
    pub fn tone_count(self) -> usize {
        match self {
            Sound::Correct => CORRECT_TONES.len(),
            Sound::Incorrect => INCORRECT_TONES.len(),
            Sound::Click => 1,
            Sound::BackgroundMusic => MELODY.len() + BASS_LINE.len(),
        }
    }

    /// Whether the host should loop playback
    pub fn loops(self) -> bool {
        matches!(self, Sound::BackgroundMusic)
    }

    /// Render the recipe into a fresh buffer
    pub fn render(self) -> SampleBuffer {
        match self {
            Sound::Correct => correct(),
            Sound::Incorrect => incorrect(),
            Sound::Click => click(),
            Sound::BackgroundMusic => background(),
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a sound name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sound '{0}' (expected one of: correct, incorrect, click, background_music)")]
pub struct UnknownSound(pub String);

impl FromStr for Sound {
    type Err = UnknownSound;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "correct" => Ok(Sound::Correct),
            "incorrect" => Ok(Sound::Incorrect),
            "click" => Ok(Sound::Click),
            "background_music" | "background" | "music" => Ok(Sound::BackgroundMusic),
            _ => Err(UnknownSound(s.to_string())),
        }
    }
}
