use crate::types::scoring::{ScoreResult, Variable};
use crate::types::state::BioState;

/// Added to coping so that zero self-efficacy still yields a finite ratio.
pub const COPING_FLOOR: f64 = 0.1;

pub const FORMULA: &str = "Anxiety = (Threat × Uncertainty) / Coping";
pub const PROTOCOL: &str = "DIALOGUEPOD";
pub const FIX: &str = "Reduce Uncertainty (Info Gathering) or Increase Coping (Micro-wins).";

/// Entropy model: uncertainty amplifies threat, coping attenuates it.
///
/// `min(1, threat * (1 + uncertainty) / (coping + 0.1))`
pub fn eq_anxiety(state: &BioState) -> ScoreResult {
    let s = state.clamped();
    let numerator = s.threat_prob * (1.0 + s.uncertainty);
    let denominator = s.coping + COPING_FLOOR;
    ScoreResult {
        score: (numerator / denominator).min(1.0),
        formula: FORMULA,
        vars: vec![
            Variable::new("Threat", s.threat_prob),
            Variable::new("Uncertainty", s.uncertainty),
            Variable::new("Coping", s.coping),
        ],
        protocol: PROTOCOL,
        fix: FIX,
    }
}
