// src/dsp_components/pan.rs

//! Constant-power (circular) stereo panning.
use std::f64::consts::FRAC_PI_4;

/// Splits a mono sample into `(left, right)` for a position in -1..1.
///
/// `left² + right²` always equals `sample²`, so loudness holds steady across the field.
#[inline]
pub fn circular_pan(sample: f64, position: f64) -> (f64, f64) {
    let angle = (position + 1.0) * FRAC_PI_4;
    (sample * angle.cos(), sample * angle.sin())
}
