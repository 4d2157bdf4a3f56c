//! Periodic waveform shapes
//!
//! Every shape is a pure function of absolute time and frequency, so a tone
//! can be rendered sample by sample without carrying oscillator state.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Waveform types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
    Sawtooth,
}

impl Waveform {
    /// Evaluate the waveform at time `t` (seconds) for `frequency` (Hz)
    pub fn sample(self, t: f64, frequency: f64) -> f64 {
        match self {
            Waveform::Sine => sine(t, frequency),
            Waveform::Triangle => triangle(t, frequency),
            Waveform::Square => square(t, frequency),
            Waveform::Sawtooth => sawtooth(t, frequency),
        }
    }
}

pub fn sine(t: f64, frequency: f64) -> f64 {
    (2.0 * PI * frequency * t).sin()
}

/// Triangle folded out of a sine through arcsine
pub fn triangle(t: f64, frequency: f64) -> f64 {
    sine(t, frequency).asin() * (2.0 / PI)
}

/// Sign of the sine. Zero crossings map to 0.
pub fn square(t: f64, frequency: f64) -> f64 {
    let s = sine(t, frequency);
    if s > 0.0 {
        1.0
    } else if s < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Rising ramp over [-1, 1), centered on each period boundary
pub fn sawtooth(t: f64, frequency: f64) -> f64 {
    let phase = t * frequency;
    2.0 * (phase - (phase + 0.5).floor())
}
