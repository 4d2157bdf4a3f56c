//! Writing rendered sounds to disk

use crate::config::{ExportConfig, ExportFormat};
use crate::encode::{encode_wav, to_data_uri};
use crate::recipes::Sound;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Render a sound and write it as a WAV file
pub fn write_wav(sound: Sound, path: &Path) -> Result<()> {
    let wav = encode_wav(&sound.render());
    fs::write(path, &wav).with_context(|| format!("failed to write WAV file: {:?}", path))?;
    tracing::debug!(sound = sound.name(), bytes = wav.len(), path = %path.display(), "wrote WAV");
    Ok(())
}

/// Render a sound and write its data URI as text
pub fn write_uri(sound: Sound, path: &Path) -> Result<()> {
    let uri = to_data_uri(&encode_wav(&sound.render()));
    fs::write(path, &uri).with_context(|| format!("failed to write URI file: {:?}", path))?;
    tracing::debug!(sound = sound.name(), bytes = uri.len(), path = %path.display(), "wrote URI");
    Ok(())
}

/// File name a sound is exported under
pub fn file_name(sound: Sound, format: ExportFormat) -> String {
    format!("{}.{}", sound.name(), format.extension())
}

/// Export every configured sound, returning the written paths in order
pub fn export_sounds(config: &ExportConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&config.directory)
        .with_context(|| format!("failed to create export directory: {:?}", config.directory))?;

    let mut written = Vec::with_capacity(config.sounds.len());
    for &sound in &config.sounds {
        let path = config.directory.join(file_name(sound, config.format));
        if path.exists() {
            tracing::warn!(path = %path.display(), "overwriting existing file");
        }

        match config.format {
            ExportFormat::Wav => write_wav(sound, &path)?,
            ExportFormat::Uri => write_uri(sound, &path)?,
        }
        written.push(path);
    }

    tracing::info!(
        count = written.len(),
        directory = %config.directory.display(),
        "exported sounds"
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{decode_data_uri, HEADER_LEN};
    use crate::synth::samples_for;
    use tempfile::TempDir;

    #[test]
    fn test_file_names() {
        assert_eq!(file_name(Sound::Correct, ExportFormat::Wav), "correct.wav");
        assert_eq!(
            file_name(Sound::BackgroundMusic, ExportFormat::Uri),
            "background_music.uri"
        );
    }

    #[test]
    fn test_export_wav() {
        let dir = TempDir::new().unwrap();
        let config = ExportConfig {
            directory: dir.path().join("nested/sounds"),
            format: ExportFormat::Wav,
            sounds: vec![Sound::Click, Sound::Correct],
        };

        let written = export_sounds(&config).unwrap();
        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("click.wav"));

        let reader = hound::WavReader::open(&written[0]).unwrap();
        assert_eq!(reader.spec().sample_rate, 44100);
        assert_eq!(reader.duration() as usize, samples_for(0.1));
    }

    #[test]
    fn test_export_uri() {
        let dir = TempDir::new().unwrap();
        let config = ExportConfig {
            directory: dir.path().to_path_buf(),
            format: ExportFormat::Uri,
            sounds: vec![Sound::Incorrect],
        };

        let written = export_sounds(&config).unwrap();
        let text = fs::read_to_string(&written[0]).unwrap();
        assert_eq!(text, crate::generate_incorrect_sound());

        let wav = decode_data_uri(&text).unwrap();
        assert_eq!(wav.len(), HEADER_LEN + 2 * samples_for(0.5));
    }

    #[test]
    fn test_export_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("click.wav");
        fs::write(&path, b"stale").unwrap();

        let config = ExportConfig {
            directory: dir.path().to_path_buf(),
            format: ExportFormat::Wav,
            sounds: vec![Sound::Click],
        };
        export_sounds(&config).unwrap();
        assert_eq!(fs::read(&path).unwrap(), encode_wav(&Sound::Click.render()));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing/click.wav");
        let err = write_wav(Sound::Click, &path).unwrap_err();
        assert!(err.to_string().contains("failed to write WAV file"));
    }
}
