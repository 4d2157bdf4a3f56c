//! Pre-rendered sound bank
//!
//! Renders every sound once so the host can look effects up by name and
//! hand the URIs to its player.

pub use crate::config::PlaybackHints;

use crate::config::PlaybackConfig;
use crate::encode::buffer_to_data_uri;
use crate::recipes::Sound;
use std::collections::HashMap;

/// Data URIs for every sound, rendered up front
#[derive(Debug, Clone)]
pub struct SoundBank {
    uris: HashMap<Sound, String>,
    playback: PlaybackConfig,
}

impl SoundBank {
    /// Render all sounds
    pub fn generate(playback: &PlaybackConfig) -> Self {
        let uris = Sound::ALL
            .into_iter()
            .map(|sound| {
                let buffer = sound.render();
                let uri = buffer_to_data_uri(&buffer);
                tracing::debug!(
                    sound = sound.name(),
                    samples = buffer.len(),
                    peak = buffer.peak(),
                    uri_len = uri.len(),
                    "rendered sound"
                );
                (sound, uri)
            })
            .collect();

        Self {
            uris,
            playback: playback.clone(),
        }
    }

    /// Data URI for a sound
    pub fn get(&self, sound: Sound) -> &str {
        // Every variant is inserted by `generate`
        self.uris.get(&sound).map(String::as_str).unwrap_or_default()
    }

    /// Look a sound up by name ("correct", "click", ...)
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let sound = name.parse::<Sound>().ok()?;
        self.uris.get(&sound).map(String::as_str)
    }

    /// Playback volume and looping for a sound
    pub fn hints(&self, sound: Sound) -> PlaybackHints {
        self.playback.hints(sound)
    }

    pub fn len(&self) -> usize {
        self.uris.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::generate(&PlaybackConfig::default())
    }
}
