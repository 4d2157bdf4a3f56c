//! Additive tone mixer
//!
//! Tones are summed into a fixed-length sample buffer. Nothing here limits
//! the result: overlapping tones may exceed [-1, 1] and are clamped only when
//! the buffer is encoded.

use super::envelope::Envelope;
use super::waveform::Waveform;
use serde::{Deserialize, Serialize};

/// Fixed output sample rate in Hz
pub const SAMPLE_RATE: u32 = 44100;

/// Number of samples covering `seconds`, rounded down
pub fn samples_for(seconds: f64) -> usize {
    (seconds * SAMPLE_RATE as f64).floor().max(0.0) as usize
}

/// Signed sample index of a point in time, rounded down
fn start_index(seconds: f64) -> i64 {
    (seconds * SAMPLE_RATE as f64).floor() as i64
}

/// A single scheduled tone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneEvent {
    /// Offset from the start of the buffer, in seconds
    pub start_time: f64,
    /// Frequency in Hz
    pub frequency: f64,
    /// Length in seconds
    pub duration: f64,
    /// Gain multiplier, 0.0-1.0
    pub volume: f64,
    pub waveform: Waveform,
}

impl ToneEvent {
    pub const fn new(
        start_time: f64,
        frequency: f64,
        duration: f64,
        volume: f64,
        waveform: Waveform,
    ) -> Self {
        Self {
            start_time,
            frequency,
            duration,
            volume,
            waveform,
        }
    }

    /// Value this tone contributes at its `i`-th sample, before mixing
    fn contribution(&self, i: usize, envelope: &Envelope) -> f64 {
        let t = i as f64 / SAMPLE_RATE as f64;
        self.waveform.sample(t, self.frequency) * envelope.gain(t, self.duration) * self.volume
    }
}

/// Mono 32-bit float sample buffer at [`SAMPLE_RATE`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleBuffer {
    samples: Vec<f32>,
}

impl SampleBuffer {
    /// A silent buffer of `duration` seconds
    pub fn new(duration: f64) -> Self {
        Self::with_len(samples_for(duration))
    }

    /// A silent buffer of exactly `len` samples
    pub fn with_len(len: usize) -> Self {
        Self {
            samples: vec![0.0; len],
        }
    }

    pub fn from_samples(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / SAMPLE_RATE as f64
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Largest absolute sample value
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |peak, s| peak.max(s.abs()))
    }

    /// Mix a tone using the standard tone envelope
    pub fn add_tone(&mut self, tone: &ToneEvent) {
        self.add_tone_with(tone, &Envelope::TONE);
    }

    /// Mix a tone into the buffer, summing with what is already there.
    ///
    /// Samples that land before the start or past the end of the buffer are
    /// dropped; the rest of the tone keeps its position.
    pub fn add_tone_with(&mut self, tone: &ToneEvent, envelope: &Envelope) {
        let start = start_index(tone.start_time);
        let total = samples_for(tone.duration);

        // Head of a tone scheduled before zero
        let skip = usize::try_from(start.min(0).unsigned_abs()).unwrap_or(usize::MAX);
        let first = usize::try_from(start.max(0)).unwrap_or(usize::MAX);
        if first >= self.samples.len() || skip >= total {
            return;
        }

        let count = (total - skip).min(self.samples.len() - first);
        let end = first.saturating_add(count);
        for (k, slot) in self.samples[first..end].iter_mut().enumerate() {
            *slot = (*slot as f64 + tone.contribution(skip + k, envelope)) as f32;
        }
    }

    /// Mix every tone in order
    pub fn add_tones<'a, I>(&mut self, tones: I)
    where
        I: IntoIterator<Item = &'a ToneEvent>,
    {
        for tone in tones {
            self.add_tone(tone);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone(start_time: f64, frequency: f64, duration: f64) -> ToneEvent {
        ToneEvent::new(start_time, frequency, duration, 0.5, Waveform::Sine)
    }

    #[test]
    fn test_buffer_length_is_floored() {
        assert_eq!(SampleBuffer::new(0.6).len(), 26460);
        assert_eq!(SampleBuffer::new(0.1).len(), 4410);
        assert_eq!(SampleBuffer::new(3.4).len(), 149940);
        assert_eq!(SampleBuffer::new(1.0 / 44100.0 * 2.5).len(), 2);
        assert!(SampleBuffer::new(0.0).is_empty());
    }

    #[test]
    fn test_new_buffer_is_silent() {
        let buffer = SampleBuffer::new(0.5);
        assert!(buffer.samples().iter().all(|&s| s == 0.0));
        assert_eq!(buffer.peak(), 0.0);
    }

    #[test]
    fn test_tone_occupies_its_range() {
        let mut buffer = SampleBuffer::new(0.5);
        buffer.add_tone(&tone(0.1, 440.0, 0.2));

        let start = samples_for(0.1);
        let end = start + samples_for(0.2);
        assert!(buffer.samples()[..start].iter().all(|&s| s == 0.0));
        assert!(buffer.samples()[end..].iter().all(|&s| s == 0.0));
        assert!(buffer.samples()[start..end].iter().any(|&s| s != 0.0));
    }

    #[test]
    fn test_overflowing_tone_is_truncated() {
        let mut buffer = SampleBuffer::new(0.1);
        buffer.add_tone(&tone(0.05, 440.0, 1.0));
        assert_eq!(buffer.len(), 4410);

        // Entirely past the end
        let mut buffer = SampleBuffer::new(0.1);
        buffer.add_tone(&tone(0.2, 440.0, 0.1));
        assert!(buffer.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_endless_tone_is_truncated() {
        let mut buffer = SampleBuffer::new(0.1);
        buffer.add_tone(&ToneEvent::new(0.01, 440.0, 1e300, 0.5, Waveform::Sine));
        assert_eq!(buffer.len(), 4410);
        assert!(buffer.samples()[..441].iter().all(|&s| s == 0.0));
        assert!(buffer.samples()[441..].iter().any(|&s| s != 0.0));

        let mut buffer = SampleBuffer::new(0.1);
        buffer.add_tone(&ToneEvent::new(0.05, 440.0, f64::INFINITY, 0.5, Waveform::Square));
        assert!(buffer.peak() > 0.0);

        // Start far past the end
        let mut buffer = SampleBuffer::new(0.1);
        buffer.add_tone(&ToneEvent::new(1e300, 440.0, 1e300, 0.5, Waveform::Sine));
        assert_eq!(buffer.peak(), 0.0);
    }

    #[test]
    fn test_early_tone_loses_only_its_head() {
        let early = ToneEvent::new(-0.05, 440.0, 0.2, 0.5, Waveform::Sine);
        let mut buffer = SampleBuffer::new(0.3);
        buffer.add_tone(&early);

        let skipped = 2205;
        let envelope = Envelope::TONE;
        for &idx in &[0usize, 1, 100, 4000] {
            let expected = (0.0f64 + early.contribution(skipped + idx, &envelope)) as f32;
            assert_eq!(buffer.samples()[idx], expected, "sample {}", idx);
        }
        assert_ne!(buffer.samples()[1], 0.0);

        // Tone ends 0.15s into the buffer
        let end = samples_for(0.2) - skipped;
        assert!(buffer.samples()[end..].iter().all(|&s| s == 0.0));

        // Entirely before zero
        let mut buffer = SampleBuffer::new(0.3);
        buffer.add_tone(&ToneEvent::new(-1.0, 440.0, 0.2, 0.5, Waveform::Sine));
        assert_eq!(buffer.peak(), 0.0);
    }

    #[test]
    fn test_disjoint_tones_match_separate_renders() {
        let a = tone(0.0, 523.25, 0.2);
        let b = ToneEvent::new(0.25, 392.0, 0.2, 0.15, Waveform::Triangle);

        let mut both = SampleBuffer::new(0.5);
        both.add_tone(&a);
        both.add_tone(&b);

        let mut only_a = SampleBuffer::new(0.5);
        only_a.add_tone(&a);
        let mut only_b = SampleBuffer::new(0.5);
        only_b.add_tone(&b);

        let split = samples_for(0.25);
        let stitched: Vec<f32> = only_a.samples()[..split]
            .iter()
            .chain(&only_b.samples()[split..])
            .copied()
            .collect();
        assert_eq!(both.samples(), stitched.as_slice());
    }

    #[test]
    fn test_overlapping_tones_sum() {
        let a = ToneEvent::new(0.0, 1046.5, 0.4, 0.3, Waveform::Triangle);
        let b = ToneEvent::new(0.1, 1318.5, 0.4, 0.3, Waveform::Square);

        let mut both = SampleBuffer::new(0.6);
        both.add_tones([&a, &b]);

        let mut only_a = SampleBuffer::new(0.6);
        only_a.add_tone(&a);
        let mut only_b = SampleBuffer::new(0.6);
        only_b.add_tone(&b);

        for i in 0..both.len() {
            let expected = only_a.samples()[i] + only_b.samples()[i];
            assert!(
                (both.samples()[i] - expected).abs() < 1e-6,
                "sample {} mixed to {}, expected {}",
                i,
                both.samples()[i],
                expected
            );
        }
    }

    #[test]
    fn test_mixing_is_not_limited() {
        let loud = ToneEvent::new(0.0, 100.0, 0.5, 1.0, Waveform::Square);
        let mut buffer = SampleBuffer::new(0.5);
        for _ in 0..3 {
            buffer.add_tone(&loud);
        }
        assert!(buffer.peak() > 1.0);
    }
}
