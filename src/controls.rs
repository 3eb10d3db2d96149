// src/controls.rs

//! Mappings from 0-100 control-surface positions to engine parameter values.

pub const CONTROL_MIN: f64 = 0.0;
pub const CONTROL_MAX: f64 = 100.0;
pub const CONTROL_CENTER: f64 = 50.0;

pub const SINE_MIN_HZ: f64 = 150.0;
pub const SINE_MAX_HZ: f64 = 14000.0;

/// Clamps a control value into 0-100. Non-finite input snaps to the centre.
pub fn clamp_control(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(CONTROL_MIN, CONTROL_MAX)
    } else {
        CONTROL_CENTER
    }
}

/// 0-100 to a pan position in -1..1.
pub fn pan_from_control(value: f64) -> f64 {
    clamp_control(value) / 50.0 - 1.0
}

/// 0-100 to a linear volume in 0..1.
pub fn volume_from_control(value: f64) -> f64 {
    clamp_control(value) / 100.0
}

/// 0-100 to a phase offset in percent of a cycle, -50..50.
pub fn offset_from_control(value: f64) -> f64 {
    clamp_control(value) - 50.0
}

/// Exponential frequency curve: 150 Hz at 0, 14 kHz at 100.
pub fn coarse_hz(value: f64) -> f64 {
    SINE_MIN_HZ * (SINE_MAX_HZ / SINE_MIN_HZ).powf(clamp_control(value) / 100.0)
}

/// Fine offset in Hz around the coarse setting.
///
/// The fine control behaves like two half-sliders: below 50 it moves toward the coarse
/// curve point one step down, above 50 toward the point one step up. At the curve ends the
/// three-point window is pinned to 0..2 and 98..100.
pub fn fine_hz(coarse_control: f64, fine_control: f64) -> f64 {
    let centre = clamp_control(coarse_control).clamp(CONTROL_MIN + 1.0, CONTROL_MAX - 1.0);
    let lower = coarse_hz(centre - 1.0);
    let middle = coarse_hz(centre);
    let upper = coarse_hz(centre + 1.0);

    let fine = clamp_control(fine_control);
    if fine < CONTROL_CENTER {
        -((100.0 - fine * 2.0) / 100.0) * (middle - lower)
    } else if fine > CONTROL_CENTER {
        ((fine - 50.0) * 2.0 / 100.0) * (upper - middle)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn coarse_curve_endpoints() {
        assert_relative_eq!(coarse_hz(0.0), 150.0, epsilon = 1e-9);
        assert_relative_eq!(coarse_hz(100.0), 14000.0, epsilon = 1e-6);
        assert_relative_eq!(
            coarse_hz(50.0),
            150.0 * (14000.0_f64 / 150.0).sqrt(),
            epsilon = 1e-9
        );
        assert!(coarse_hz(30.0) < coarse_hz(31.0));
    }

    #[test]
    fn fine_is_zero_at_centre() {
        for coarse in [0.0, 1.0, 37.0, 50.0, 99.0, 100.0] {
            assert_eq!(fine_hz(coarse, 50.0), 0.0);
        }
    }

    #[test]
    fn fine_extremes_reach_neighbouring_curve_points() {
        let coarse = 40.0;
        assert_relative_eq!(
            coarse_hz(coarse) + fine_hz(coarse, 0.0),
            coarse_hz(39.0),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            coarse_hz(coarse) + fine_hz(coarse, 100.0),
            coarse_hz(41.0),
            epsilon = 1e-9
        );
        assert!(fine_hz(coarse, 25.0) < 0.0);
        assert!(fine_hz(coarse, 75.0) > 0.0);
    }

    #[test]
    fn fine_window_is_pinned_at_curve_ends() {
        assert_relative_eq!(
            fine_hz(0.0, 100.0),
            coarse_hz(2.0) - coarse_hz(1.0),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            fine_hz(100.0, 0.0),
            -(coarse_hz(99.0) - coarse_hz(98.0)),
            epsilon = 1e-9
        );
    }

    #[test]
    fn linear_control_mappings() {
        assert_eq!(pan_from_control(0.0), -1.0);
        assert_eq!(pan_from_control(50.0), 0.0);
        assert_eq!(pan_from_control(100.0), 1.0);
        assert_eq!(volume_from_control(0.0), 0.0);
        assert_eq!(volume_from_control(100.0), 1.0);
        assert_eq!(offset_from_control(0.0), -50.0);
        assert_eq!(offset_from_control(100.0), 50.0);
    }

    #[test]
    fn out_of_range_controls_are_clamped() {
        assert_eq!(pan_from_control(250.0), 1.0);
        assert_eq!(volume_from_control(-3.0), 0.0);
        assert_eq!(pan_from_control(f64::NAN), 0.0);
        assert_eq!(offset_from_control(f64::INFINITY), 0.0);
    }
}
