use crate::types::scoring::{ScoreResult, Variable};
use crate::types::state::BioState;

pub const FORMULA: &str = "Loneliness = Social_Required - Social_Observed";
pub const PROTOCOL: &str = "SEEK_TRIBE";
pub const FIX: &str = "Homeostatic deficit. Must intake social calories immediately.";

pub fn eq_loneliness(state: &BioState) -> ScoreResult {
    let s = state.clamped();
    ScoreResult {
        score: s.social_deficit(),
        formula: FORMULA,
        vars: vec![
            Variable::new("Required", s.social_req),
            Variable::new("Observed", s.social_obs),
        ],
        protocol: PROTOCOL,
        fix: FIX,
    }
}
