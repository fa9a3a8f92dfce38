use crate::types::scoring::{ScoreResult, Variable};
use crate::types::state::BioState;

pub const RPE_GAIN: f64 = 1.5;

pub const FORMULA: &str = "Frustration = Expected_Reward - Received_Reward";
pub const PROTOCOL: &str = "RESET_DOPAMINE";
pub const FIX: &str = "Update Priors. Your expectation was a hallucination. Accept reality data.";

/// Reward prediction error, scaled by [`RPE_GAIN`].
pub fn eq_frustration(state: &BioState) -> ScoreResult {
    let s = state.clamped();
    let rpe = (s.reward_expected - s.reward_received).max(0.0);
    ScoreResult {
        score: (rpe * RPE_GAIN).min(1.0),
        formula: FORMULA,
        vars: vec![
            Variable::new("Expected", s.reward_expected),
            Variable::new("Received", s.reward_received),
        ],
        protocol: PROTOCOL,
        fix: FIX,
    }
}
