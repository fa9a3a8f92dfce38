pub type Score = f64;

/// Shared denominator stabilizer for pressure-style ratios.
pub const EPSILON: f64 = 0.05;

pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, 1.0)
}

/// `numerator / (EPSILON + denominator)`. Monotone in both arguments for
/// non-negative denominators and never divides by anything below `EPSILON`.
pub fn stabilized_div(numerator: f64, denominator: f64) -> f64 {
    numerator / (EPSILON + denominator)
}
