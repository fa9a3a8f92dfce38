use crate::types::scoring::{ScoreResult, Variable};
use crate::types::state::BioState;

pub const FORMULA: &str = "Hopelessness = Current_Pain × (1 - Agency)";
pub const PROTOCOL: &str = "MICRO_WINS";
pub const FIX: &str = "Agency is 0. Hack the system by doing 1 tiny mechanical task.";

/// Learned helplessness. Pain is the worse of social deficit and threat.
pub fn eq_hopelessness(state: &BioState) -> ScoreResult {
    let s = state.clamped();
    let pain = (s.social_req - s.social_obs).max(s.threat_prob);
    ScoreResult {
        score: (pain * (1.0 - s.agency)).min(1.0),
        formula: FORMULA,
        vars: vec![Variable::new("Pain", pain), Variable::new("Agency", s.agency)],
        protocol: PROTOCOL,
        fix: FIX,
    }
}
