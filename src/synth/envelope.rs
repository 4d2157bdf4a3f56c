//! Amplitude envelopes
//!
//! A stateless attack-decay-release curve evaluated at a tone's local time,
//! plus the exponential decay used by the click chirp.

/// Level the decay stage falls to before the release ramp takes over
pub const DECAY_FLOOR: f64 = 0.5;

/// Attack-decay-release envelope
///
/// Rises linearly from 0 to 1 over `attack`, falls to [`DECAY_FLOOR`] over
/// `decay`, then ramps from the floor to 0 at the end of the tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// Attack time in seconds
    pub attack: f64,
    /// Decay time in seconds
    pub decay: f64,
}

impl Envelope {
    /// The envelope every mixed tone is shaped with
    pub const TONE: Envelope = Envelope {
        attack: 0.05,
        decay: 0.1,
    };

    pub const fn new(attack: f64, decay: f64) -> Self {
        Self { attack, decay }
    }

    /// Gain at local time `t` for a tone lasting `duration` seconds.
    ///
    /// Always within [0, 1]. A tone too short to reach its release stage is
    /// silent once it gets there.
    pub fn gain(&self, t: f64, duration: f64) -> f64 {
        let attack = self.attack;
        let decay = self.decay;

        let level = if t < attack {
            t / attack
        } else if t < attack + decay {
            1.0 - (t - attack) / decay * DECAY_FLOOR
        } else {
            let release = duration - attack - decay;
            if release <= 0.0 {
                return 0.0;
            }
            DECAY_FLOOR * (1.0 - (t - attack - decay) / release)
        };

        // max/min rather than clamp so NaN collapses to silence
        level.max(0.0).min(1.0)
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::TONE
    }
}

/// Exponential decay `exp(-rate * t)`, used directly by the click chirp
pub fn exponential_decay(t: f64, rate: f64) -> f64 {
    (-t * rate).exp()
}
