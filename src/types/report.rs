use crate::band::{band, Band};
use crate::diagnostics::Driver;
use crate::equations::Construct;
use crate::math::Score;
use crate::scenario::Scenario;
use crate::types::scoring::ScoreResult;
use serde::Serialize;

/// One row of a ranked batch evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedScore {
    pub construct: Construct,
    pub name: &'static str,
    pub score: Score,
    pub score_0_100: f64,
    pub band: Band,
    pub result: ScoreResult,
}

impl RankedScore {
    pub fn new(construct: Construct, result: ScoreResult) -> Self {
        Self {
            construct,
            name: construct.display_name(),
            score: result.score,
            score_0_100: result.percent(),
            band: band(result.score),
            result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calibration {
    pub expected_harm: f64,
    pub buffers: f64,
    pub pressure_low: f64,
    pub pressure_mid: f64,
    pub pressure_high: f64,
    pub band: Band,
    pub driver: Driver,
}

/// Everything the CLI renders for `solve` and single-construct `score`.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub detected: Construct,
    /// Set when the router matched no keyword and fell back to anxiety.
    pub fallback: bool,
    pub ranked: RankedScore,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalibrationReport {
    pub scenario: Option<Scenario>,
    pub calibration: Calibration,
}
