// src/dsp_components/agc.rs

//! Automatic gain control: an asymmetric envelope follower that drives a gain toward a target.

use crate::params::Source;

/// Smoothing factor applied while the envelope is rising.
pub const DEFAULT_ATTACK: f64 = 0.01;
/// Smoothing factor applied while the envelope is falling.
pub const DEFAULT_DECAY: f64 = 0.0005;
/// Below this envelope the gain is held rather than recomputed.
pub const PEAK_FLOOR: f64 = 1e-4;

pub const WHITE_NOISE_TARGET: f64 = 0.5;
// Pink noise carries more low-frequency energy; a higher target evens out perceived loudness.
pub const PINK_NOISE_TARGET: f64 = 0.66;
pub const SINE_TONE_TARGET: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct Agc {
    target_level: f64,
    current_gain: f64,
    peak: f64,
    attack: f64,
    decay: f64,
}

impl Agc {
    pub fn new(target_level: f64) -> Self {
        Self::with_coefficients(target_level, DEFAULT_ATTACK, DEFAULT_DECAY)
    }

    pub fn with_coefficients(target_level: f64, attack: f64, decay: f64) -> Self {
        Self {
            target_level,
            current_gain: 1.0,
            peak: 0.0,
            attack,
            decay,
        }
    }

    /// The AGC tuned for a given source.
    pub fn for_source(source: Source) -> Self {
        match source {
            Source::WhiteNoise => Self::new(WHITE_NOISE_TARGET),
            Source::PinkNoise => Self::new(PINK_NOISE_TARGET),
            Source::SineTone => Self::new(SINE_TONE_TARGET),
        }
    }

    #[inline]
    pub fn process(&mut self, sample: f64) -> f64 {
        let magnitude = sample.abs();

        if magnitude > self.peak {
            self.peak = self.peak * (1.0 - self.attack) + magnitude * self.attack;
        } else {
            self.peak = self.peak * (1.0 - self.decay) + magnitude * self.decay;
        }

        if self.peak > PEAK_FLOOR {
            self.current_gain = self.target_level / self.peak;
        }

        sample * self.current_gain
    }
}

#[cfg(test)]
impl Agc {
    pub fn gain(&self) -> f64 {
        self.current_gain
    }

    pub fn peak(&self) -> f64 {
        self.peak
    }

    pub fn target_level(&self) -> f64 {
        self.target_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gain_converges_on_constant_input() {
        for &level in &[0.05, 0.25, 1.0, 3.0] {
            let mut agc = Agc::new(0.5);
            for i in 0..5_000 {
                let sample = if i % 2 == 0 { level } else { -level };
                agc.process(sample);
            }
            assert_relative_eq!(agc.gain(), 0.5 / level, max_relative = 1e-6);
            assert_relative_eq!(agc.process(level), 0.5, max_relative = 1e-6);
        }
    }

    #[test]
    fn silence_holds_the_gain() {
        let mut agc = Agc::new(0.66);
        for _ in 0..1_000_000 {
            let out = agc.process(0.0);
            assert_eq!(out, 0.0);
        }
        assert_eq!(agc.gain(), 1.0);
        assert!(agc.peak().is_finite());
    }

    #[test]
    fn gain_is_frozen_once_signal_decays_below_floor() {
        let mut agc = Agc::new(0.5);
        for _ in 0..2_000 {
            agc.process(0.2);
        }
        for _ in 0..100_000 {
            let out = agc.process(0.0);
            assert!(out.is_finite());
        }
        let frozen = agc.gain();
        assert!(agc.peak() <= PEAK_FLOOR);
        assert!(frozen.is_finite());
        assert_relative_eq!(agc.process(0.0), 0.0);
        assert_eq!(agc.gain(), frozen);
    }

    #[test]
    fn attack_is_faster_than_decay() {
        let mut rising = Agc::new(0.5);
        for _ in 0..100 {
            rising.process(1.0);
        }
        let risen = rising.peak();

        let mut falling = Agc::new(0.5);
        for _ in 0..5_000 {
            falling.process(1.0);
        }
        let before = falling.peak();
        for _ in 0..100 {
            falling.process(0.0);
        }
        let fallen = before - falling.peak();

        assert!(risen > fallen * 5.0);
    }

    #[test]
    fn per_source_targets() {
        assert_eq!(Agc::for_source(Source::WhiteNoise).target_level(), 0.5);
        assert_eq!(Agc::for_source(Source::PinkNoise).target_level(), 0.66);
        assert_eq!(Agc::for_source(Source::SineTone).target_level(), 0.5);
    }
}
