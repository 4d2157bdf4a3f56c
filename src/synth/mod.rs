//! Synthesis primitives
//!
//! Contains waveform shapes, the amplitude envelope, and the additive mixer
//! that renders tone events into a sample buffer.

mod envelope;
mod mixer;
mod waveform;

pub use envelope::{exponential_decay, Envelope, DECAY_FLOOR};
pub use mixer::{samples_for, SampleBuffer, ToneEvent, SAMPLE_RATE};
pub use waveform::{sawtooth, sine, square, triangle, Waveform};
