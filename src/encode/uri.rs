//! `data:` URI wrapping for encoded WAV streams

use super::wav::{encode_wav, HEADER_LEN};
use crate::synth::SampleBuffer;
use base64::{engine::general_purpose, Engine as _};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

/// Scheme and MIME prefix of every generated URI
pub const DATA_URI_PREFIX: &str = "data:audio/wav;base64,";

#[derive(Debug, Error)]
pub enum UriError {
    #[error("not a WAV data URI (expected prefix 'data:audio/wav;base64,')")]
    MissingPrefix,
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("payload is not a readable WAV stream: {0}")]
    InvalidWav(#[from] hound::Error),
    #[error("neither a WAV file nor a data URI")]
    NotText(#[from] std::string::FromUtf8Error),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Wrap WAV bytes as a self-contained data URI
pub fn to_data_uri(wav: &[u8]) -> String {
    let payload = general_purpose::STANDARD.encode(wav);
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + payload.len());
    uri.push_str(DATA_URI_PREFIX);
    uri.push_str(&payload);
    uri
}

/// Encode a buffer straight to a playable data URI
pub fn buffer_to_data_uri(buffer: &SampleBuffer) -> String {
    to_data_uri(&encode_wav(buffer))
}

/// Recover the WAV bytes from a data URI
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, UriError> {
    let payload = uri
        .trim()
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or(UriError::MissingPrefix)?;
    Ok(general_purpose::STANDARD.decode(payload)?)
}

/// Format summary of a decoded WAV stream
#[derive(Debug, Clone, PartialEq)]
pub struct WavInfo {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    /// Samples per channel
    pub sample_count: u32,
    /// Size of the `data` chunk as declared in the header
    pub data_size: u32,
    /// Largest absolute amplitude, normalized to [0, 1]
    pub peak: f64,
}

impl WavInfo {
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.sample_count as f64 / self.sample_rate as f64
    }
}

/// Read format and level information from WAV bytes
pub fn inspect_wav(wav: &[u8]) -> Result<WavInfo, UriError> {
    let mut reader = hound::WavReader::new(Cursor::new(wav))?;
    let spec = reader.spec();
    let sample_count = reader.duration();
    let data_size = declared_data_size(wav).unwrap_or(0);

    let peak = match spec.sample_format {
        hound::SampleFormat::Float => {
            let mut peak = 0.0f64;
            for sample in reader.samples::<f32>() {
                peak = peak.max((sample? as f64).abs());
            }
            peak
        }
        hound::SampleFormat::Int => {
            let full_scale = (1i64 << (spec.bits_per_sample.max(1) - 1)) as f64;
            let mut peak = 0.0f64;
            for sample in reader.samples::<i32>() {
                peak = peak.max((sample? as f64).abs() / full_scale);
            }
            peak
        }
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        sample_count,
        data_size,
        peak,
    })
}

/// Decode a data URI and inspect the WAV stream inside it
pub fn inspect_data_uri(uri: &str) -> Result<WavInfo, UriError> {
    inspect_wav(&decode_data_uri(uri)?)
}

/// Inspect a file holding either raw WAV bytes or a data URI as text
pub fn inspect_file(path: &Path) -> Result<WavInfo, UriError> {
    let bytes = std::fs::read(path)?;
    if bytes.starts_with(b"RIFF") {
        return inspect_wav(&bytes);
    }

    let text = String::from_utf8(bytes)?;
    tracing::debug!(path = %path.display(), "reading data URI");
    inspect_data_uri(&text)
}

// Only meaningful for the canonical 44-byte layout
fn declared_data_size(wav: &[u8]) -> Option<u32> {
    if wav.len() < HEADER_LEN || &wav[36..40] != b"data" {
        return None;
    }
    Some(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]))
}
