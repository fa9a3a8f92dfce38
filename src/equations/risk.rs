//! Risk-calibration model: expected harm over psychological buffers.

use crate::math::{clamp01, stabilized_div};

pub const W_COPING: f64 = 0.35;
pub const W_RESCUE: f64 = 0.35;
pub const W_REVERSIBILITY: f64 = 0.15;
pub const W_CONTROL: f64 = 0.15;

/// `clamp01(L) * clamp01(S)`
pub fn expected_harm(likelihood: f64, severity: f64) -> f64 {
    clamp01(likelihood) * clamp01(severity)
}

/// Weighted resource composite, bounded to `[0, 1]`.
pub fn buffer_score(coping: f64, rescue: f64, reversibility: f64, control: f64) -> f64 {
    clamp01(
        W_COPING * coping
            + W_RESCUE * rescue
            + W_REVERSIBILITY * reversibility
            + W_CONTROL * control,
    )
}

/// Expected harm over buffers. Exceeds 1 when harm outweighs resources.
/// `buffers` is clamped like the other inputs, so the result is always
/// finite and non-negative.
pub fn pressure_score(likelihood: f64, severity: f64, buffers: f64) -> f64 {
    stabilized_div(expected_harm(likelihood, severity), clamp01(buffers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_is_unbounded_above_one() {
        let pressure = pressure_score(0.8, 0.8, 0.2);
        assert!((pressure - 2.56).abs() < 1e-9);
    }

    #[test]
    fn expected_harm_clamps_factors() {
        assert_eq!(expected_harm(1.5, 0.5), 0.5);
        assert_eq!(expected_harm(-0.2, 0.9), 0.0);
    }

    #[test]
    fn buffer_score_weights_sum_to_one() {
        assert!((buffer_score(1.0, 1.0, 1.0, 1.0) - 1.0).abs() < 1e-12);
        assert_eq!(buffer_score(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(buffer_score(3.0, 3.0, 3.0, 3.0), 1.0);
        assert!((buffer_score(1.0, 0.0, 0.0, 0.0) - 0.35).abs() < 1e-12);
    }

    #[test]
    fn pressure_never_negative() {
        for buffers in [0.0, 0.5, 1.0] {
            assert!(pressure_score(0.0, 1.0, buffers) >= 0.0);
        }
    }

    #[test]
    fn pressure_clamps_out_of_range_buffers() {
        for buffers in [-0.05, -0.3, -7.0] {
            let pressure = pressure_score(0.8, 0.8, buffers);
            assert!(pressure.is_finite() && pressure >= 0.0, "{buffers} -> {pressure}");
            assert!((pressure - 12.8).abs() < 1e-9);
        }
        assert_eq!(pressure_score(0.8, 0.8, 4.0), pressure_score(0.8, 0.8, 1.0));
    }
}
