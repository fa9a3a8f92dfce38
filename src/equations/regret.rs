use crate::types::scoring::{ScoreResult, Variable};
use crate::types::state::BioState;

pub const FORMULA: &str = "Regret = (Best_Option - Chosen_Option) × Irreversibility";
pub const PROTOCOL: &str = "EGOSNAP";
pub const FIX: &str = "The past is a read-only file. Reduce 'Counterfactual Value' to 0.";

/// Counterfactual comparison gated by irreversibility.
pub fn eq_regret(state: &BioState) -> ScoreResult {
    let s = state.clamped();
    let foregone = (s.counterfactual_val - s.reward_received).max(0.0);
    let permanence = 1.0 - s.reversibility;
    ScoreResult {
        score: (foregone * permanence).min(1.0),
        formula: FORMULA,
        vars: vec![
            Variable::new("Best_Option", s.counterfactual_val),
            Variable::new("Chosen", s.reward_received),
            Variable::new("Permanent", permanence),
        ],
        protocol: PROTOCOL,
        fix: FIX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_reversibility_nullifies_regret() {
        for counterfactual in [0.0, 0.4, 1.0] {
            for received in [0.0, 0.3, 1.0] {
                let state = BioState {
                    counterfactual_val: counterfactual,
                    reward_received: received,
                    reversibility: 1.0,
                    ..BioState::default()
                };
                assert_eq!(eq_regret(&state).score, 0.0);
            }
        }
    }

    #[test]
    fn regret_matches_router_placeholder() {
        let state = BioState {
            counterfactual_val: 0.9,
            reward_received: 0.2,
            reversibility: 0.1,
            ..BioState::default()
        };
        let result = eq_regret(&state);
        assert!((result.score - 0.63).abs() < 1e-9);
        assert!((result.var("Permanent").unwrap_or_default() - 0.9).abs() < 1e-12);
    }
}
