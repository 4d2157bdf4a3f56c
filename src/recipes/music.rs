//! Looping background melody

use crate::synth::{SampleBuffer, ToneEvent, Waveform};

/// Loop length in seconds
pub const BACKGROUND_DURATION: f64 = 3.4;

const LEAD_VOLUME: f64 = 0.1;
const BASS_VOLUME: f64 = 0.15;

const fn lead(start_time: f64, frequency: f64, duration: f64) -> ToneEvent {
    ToneEvent::new(start_time, frequency, duration, LEAD_VOLUME, Waveform::Square)
}

const fn bass(start_time: f64, frequency: f64, duration: f64) -> ToneEvent {
    ToneEvent::new(start_time, frequency, duration, BASS_VOLUME, Waveform::Triangle)
}

/// Bouncy C major lead line
pub const MELODY: [ToneEvent; 14] = [
    // C arpeggio
    lead(0.0, 523.25, 0.2),
    lead(0.2, 659.25, 0.2),
    lead(0.4, 783.99, 0.2),
    lead(0.6, 659.25, 0.2),
    // Repeat, holding the G
    lead(0.8, 523.25, 0.2),
    lead(1.0, 659.25, 0.2),
    lead(1.2, 783.99, 0.4),
    // F chord
    lead(1.6, 698.46, 0.2),
    lead(1.8, 880.00, 0.2),
    lead(2.0, 1046.5, 0.2),
    lead(2.2, 880.00, 0.2),
    // G chord resolving to C
    lead(2.4, 783.99, 0.2),
    lead(2.6, 987.77, 0.2),
    lead(2.8, 1046.5, 0.6),
];

/// Root-fifth bass under the melody
pub const BASS_LINE: [ToneEvent; 8] = [
    bass(0.0, 261.63, 0.4),
    bass(0.4, 392.00, 0.4),
    bass(0.8, 261.63, 0.4),
    bass(1.2, 392.00, 0.4),
    bass(1.6, 349.23, 0.4),
    bass(2.0, 440.00, 0.4),
    bass(2.4, 392.00, 0.4),
    // Runs past the loop point and is cut off
    bass(2.8, 261.63, 0.8),
];

pub fn background() -> SampleBuffer {
    let mut buffer = SampleBuffer::new(BACKGROUND_DURATION);
    buffer.add_tones(&MELODY);
    buffer.add_tones(&BASS_LINE);
    buffer
}
