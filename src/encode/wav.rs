//! 16-bit PCM mono WAV encoding

use crate::synth::{SampleBuffer, SAMPLE_RATE};

/// Size of the canonical RIFF/fmt/data header
pub const HEADER_LEN: usize = 44;

const CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
const BLOCK_ALIGN: u16 = CHANNELS * (BITS_PER_SAMPLE / 8);

/// Convert a float sample to signed 16-bit PCM.
///
/// Out-of-range input is clamped to [-1, 1] first. Negative values scale by
/// 32768 and the rest by 32767, truncating toward zero. NaN becomes 0.
pub fn quantize(sample: f32) -> i16 {
    let s = (sample as f64).clamp(-1.0, 1.0);
    if s < 0.0 {
        (s * 32768.0) as i16
    } else {
        (s * 32767.0) as i16
    }
}

/// Encode a buffer as a complete WAV byte stream
pub fn encode_wav(buffer: &SampleBuffer) -> Vec<u8> {
    encode_samples(buffer.samples())
}

/// Encode raw float samples at [`SAMPLE_RATE`] as a WAV byte stream
pub fn encode_samples(samples: &[f32]) -> Vec<u8> {
    let byte_rate = SAMPLE_RATE * BLOCK_ALIGN as u32;
    let data_size = (samples.len() * BLOCK_ALIGN as usize) as u32;
    let file_size = 36 + data_size;

    let mut buf = Vec::with_capacity(HEADER_LEN + data_size as usize);

    // RIFF header
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt chunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    buf.extend_from_slice(&CHANNELS.to_le_bytes());
    buf.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&BLOCK_ALIGN.to_le_bytes());
    buf.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data chunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for &sample in samples {
        buf.extend_from_slice(&quantize(sample).to_le_bytes());
    }

    buf
}
