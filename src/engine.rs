//! Scoring engines. The real engine runs the transfer functions; the demo
//! engine fabricates scores for presentation work and is only ever chosen
//! through explicit configuration.

use crate::equations::{self, Construct};
use crate::types::config::EngineMode;
use crate::types::report::RankedScore;
use crate::types::scoring::ScoreResult;
use crate::types::state::BioState;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

pub trait Engine: Send + Sync {
    fn name(&self) -> &'static str;

    fn evaluate(&self, construct: Construct, state: &BioState) -> ScoreResult;

    fn score_all(&self, state: &BioState) -> Vec<RankedScore> {
        equations::rank(
            Construct::ALL
                .into_iter()
                .map(|construct| (construct, self.evaluate(construct, state))),
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeEngine;

impl Engine for ComputeEngine {
    fn name(&self) -> &'static str {
        "compute"
    }

    fn evaluate(&self, construct: Construct, state: &BioState) -> ScoreResult {
        equations::evaluate(construct, state)
    }
}

/// Random scores, reproducible per `(seed, construct)`. Formula, variables,
/// protocol and fix text still come from the real equation.
#[derive(Debug, Clone, Copy)]
pub struct DemoEngine {
    pub seed: u64,
}

impl Engine for DemoEngine {
    fn name(&self) -> &'static str {
        "demo"
    }

    fn evaluate(&self, construct: Construct, state: &BioState) -> ScoreResult {
        let offset = Construct::ALL
            .iter()
            .position(|candidate| *candidate == construct)
            .unwrap_or_default() as u64;
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(offset));
        ScoreResult {
            score: rng.gen_range(0.0..=1.0),
            ..equations::evaluate(construct, state)
        }
    }
}

pub fn select(mode: EngineMode, seed: u64) -> Box<dyn Engine> {
    debug!(?mode, seed, "selecting scoring engine");
    match mode {
        EngineMode::Compute => Box::new(ComputeEngine),
        EngineMode::Demo => {
            warn!(seed, "demo engine selected; scores are fabricated");
            Box::new(DemoEngine { seed })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_engine_matches_equations() {
        let state = BioState::default();
        let engine = select(EngineMode::Compute, 0);
        assert_eq!(engine.name(), "compute");
        for construct in Construct::ALL {
            assert_eq!(
                engine.evaluate(construct, &state),
                equations::evaluate(construct, &state)
            );
        }
        assert_eq!(engine.score_all(&state), equations::score_all(&state));
    }

    #[test]
    fn demo_engine_is_deterministic_per_seed() {
        let state = BioState::default();
        let first = DemoEngine { seed: 11 }.score_all(&state);
        let second = DemoEngine { seed: 11 }.score_all(&state);
        assert_eq!(first, second);
        assert!(first
            .iter()
            .all(|ranked| (0.0..=1.0).contains(&ranked.score)));
    }

    #[test]
    fn demo_engine_keeps_static_metadata() {
        let result = DemoEngine { seed: 3 }.evaluate(Construct::Regret, &BioState::default());
        assert_eq!(result.protocol, "EGOSNAP");
        assert_eq!(result.formula, equations::regret::FORMULA);
    }
}
