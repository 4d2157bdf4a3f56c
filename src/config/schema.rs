//! Configuration schema definitions

use crate::recipes::Sound;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Main configuration for Jingle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JingleConfig {
    /// Where and how rendered sounds are written
    #[serde(default)]
    pub export: ExportConfig,

    /// Volume and looping hints handed to the player
    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl JingleConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.export.directory.as_os_str().is_empty() {
            bail!("Export directory must not be empty");
        }
        if self.export.sounds.is_empty() {
            bail!("Export must list at least one sound");
        }

        let mut seen = HashSet::new();
        for sound in &self.export.sounds {
            if !seen.insert(sound) {
                bail!("Sound '{}' is listed more than once", sound);
            }
        }

        if !(0.0..=1.0).contains(&self.playback.music_volume) {
            bail!("Music volume must be between 0.0 and 1.0");
        }
        if !(0.0..=1.0).contains(&self.playback.effects_volume) {
            bail!("Effects volume must be between 0.0 and 1.0");
        }

        Ok(())
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output directory (default: sounds)
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// File format (default: wav)
    #[serde(default)]
    pub format: ExportFormat,

    /// Sounds to export (default: all)
    #[serde(default = "default_sounds")]
    pub sounds: Vec<Sound>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            format: ExportFormat::default(),
            sounds: default_sounds(),
        }
    }
}

fn default_directory() -> PathBuf { PathBuf::from("sounds") }
fn default_sounds() -> Vec<Sound> { Sound::ALL.to_vec() }

/// Exported file format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Raw WAV bytes (`<name>.wav`)
    #[default]
    Wav,
    /// Data URI text (`<name>.uri`)
    Uri,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Wav => "wav",
            ExportFormat::Uri => "uri",
        }
    }
}

/// Playback hints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Background music volume 0.0-1.0 (default: 0.3)
    #[serde(default = "default_music_volume")]
    pub music_volume: f32,

    /// Sound effect volume 0.0-1.0 (default: 1.0)
    #[serde(default = "default_effects_volume")]
    pub effects_volume: f32,
}

impl PlaybackConfig {
    /// Volume and looping the player should use for a sound
    pub fn hints(&self, sound: Sound) -> PlaybackHints {
        let volume = if sound.loops() {
            self.music_volume
        } else {
            self.effects_volume
        };
        PlaybackHints {
            volume,
            looping: sound.loops(),
        }
    }
}

/// How the host should play a sound
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackHints {
    /// Player volume 0.0-1.0
    pub volume: f32,
    /// Restart from the beginning when finished
    pub looping: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            music_volume: default_music_volume(),
            effects_volume: default_effects_volume(),
        }
    }
}

fn default_music_volume() -> f32 { 0.3 }
fn default_effects_volume() -> f32 { 1.0 }
