//! Short feedback effects: correct, incorrect and click

use crate::synth::{exponential_decay, SampleBuffer, ToneEvent, Waveform, SAMPLE_RATE};
use std::f64::consts::PI;

pub const CORRECT_DURATION: f64 = 0.6;
pub const INCORRECT_DURATION: f64 = 0.5;
pub const CLICK_DURATION: f64 = 0.1;

/// Rising C6-E6-G6 arpeggio
pub const CORRECT_TONES: [ToneEvent; 3] = [
    ToneEvent::new(0.0, 1046.5, 0.4, 0.3, Waveform::Triangle),
    ToneEvent::new(0.1, 1318.5, 0.4, 0.3, Waveform::Triangle),
    ToneEvent::new(0.2, 1568.0, 0.4, 0.3, Waveform::Triangle),
];

/// Falling E5 to C#5 "uh-oh"
pub const INCORRECT_TONES: [ToneEvent; 2] = [
    ToneEvent::new(0.0, 659.3, 0.3, 0.3, Waveform::Sine),
    ToneEvent::new(0.15, 554.4, 0.35, 0.3, Waveform::Sine),
];

// Click chirp parameters
const CLICK_BASE_FREQUENCY: f64 = 800.0;
const CLICK_SWEEP_RATE: f64 = 4000.0;
const CLICK_DECAY_RATE: f64 = 50.0;
const CLICK_VOLUME: f64 = 0.2;

pub fn correct() -> SampleBuffer {
    let mut buffer = SampleBuffer::new(CORRECT_DURATION);
    buffer.add_tones(&CORRECT_TONES);
    buffer
}

pub fn incorrect() -> SampleBuffer {
    let mut buffer = SampleBuffer::new(INCORRECT_DURATION);
    buffer.add_tones(&INCORRECT_TONES);
    buffer
}

/// Upward chirp from 800 Hz with a fast exponential decay.
///
/// Written straight into the buffer rather than mixed, and shaped by
/// `exp(-50t)` instead of the tone envelope.
pub fn click() -> SampleBuffer {
    let mut buffer = SampleBuffer::new(CLICK_DURATION);
    for (i, slot) in buffer.samples_mut().iter_mut().enumerate() {
        let t = i as f64 / SAMPLE_RATE as f64;
        let frequency = CLICK_BASE_FREQUENCY + t * CLICK_SWEEP_RATE;
        *slot = ((2.0 * PI * frequency * t).sin()
            * exponential_decay(t, CLICK_DECAY_RATE)
            * CLICK_VOLUME) as f32;
    }
    buffer
}
