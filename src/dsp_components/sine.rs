// src/dsp_components/sine.rs

//! Phase-accumulating sine oscillator.
use std::f64::consts::TAU;

#[derive(Debug, Clone)]
pub struct SineOscillator {
    phase: f64,
    sample_rate: f64,
}

impl SineOscillator {
    pub fn new(sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            sample_rate,
        }
    }

    /// Returns the sample at the current phase shifted by `offset_fraction` of a cycle,
    /// then advances the phase by one sample at `coarse_hz + fine_hz`.
    #[inline]
    pub fn next_sample(&mut self, offset_fraction: f64, coarse_hz: f64, fine_hz: f64) -> f64 {
        let sample = (self.phase + TAU * offset_fraction).sin();

        self.phase += TAU * (coarse_hz + fine_hz) / self.sample_rate;
        if !(0.0..TAU).contains(&self.phase) {
            self.phase = self.phase.rem_euclid(TAU);
        }

        sample
    }
}

#[cfg(test)]
impl SineOscillator {
    pub fn phase(&self) -> f64 {
        self.phase
    }
}
