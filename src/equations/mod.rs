pub mod anxiety;
pub mod frustration;
pub mod hopelessness;
pub mod loneliness;
pub mod regret;
pub mod risk;

use crate::band::band;
use crate::diagnostics::dominant_driver;
use crate::error::NeurometricError;
use crate::types::report::{Calibration, RankedScore};
use crate::types::scoring::ScoreResult;
use crate::types::state::{BioState, CalibrationInput};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Construct {
    Anxiety,
    Frustration,
    Regret,
    Loneliness,
    Hopelessness,
}

impl Construct {
    /// Declaration order; also the tie-break order of [`score_all`].
    pub const ALL: [Construct; 5] = [
        Construct::Anxiety,
        Construct::Frustration,
        Construct::Regret,
        Construct::Loneliness,
        Construct::Hopelessness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Construct::Anxiety => "anxiety",
            Construct::Frustration => "frustration",
            Construct::Regret => "regret",
            Construct::Loneliness => "loneliness",
            Construct::Hopelessness => "hopelessness",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Construct::Anxiety => "Anxiety",
            Construct::Frustration => "Frustration",
            Construct::Regret => "Regret",
            Construct::Loneliness => "Loneliness",
            Construct::Hopelessness => "Hopelessness",
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Construct {
    type Err = NeurometricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Construct::ALL
            .into_iter()
            .find(|construct| construct.as_str() == wanted)
            .ok_or_else(|| NeurometricError::UnknownConstruct(s.to_string()))
    }
}

pub fn evaluate(construct: Construct, state: &BioState) -> ScoreResult {
    match construct {
        Construct::Anxiety => anxiety::eq_anxiety(state),
        Construct::Frustration => frustration::eq_frustration(state),
        Construct::Regret => regret::eq_regret(state),
        Construct::Loneliness => loneliness::eq_loneliness(state),
        Construct::Hopelessness => hopelessness::eq_hopelessness(state),
    }
}

pub fn score_all(state: &BioState) -> Vec<RankedScore> {
    rank(
        Construct::ALL
            .into_iter()
            .map(|construct| (construct, evaluate(construct, state))),
    )
}

/// Sorts by descending score. The sort is stable, so exact ties keep the
/// order in which results were supplied.
pub fn rank(results: impl IntoIterator<Item = (Construct, ScoreResult)>) -> Vec<RankedScore> {
    let mut ranked = results
        .into_iter()
        .map(|(construct, result)| RankedScore::new(construct, result))
        .collect::<Vec<_>>();
    ranked.sort_by(|left, right| right.score.total_cmp(&left.score));
    ranked
}

/// Runs the risk-calibration model over a three-point likelihood estimate.
pub fn calibrate(input: &CalibrationInput) -> Calibration {
    let ci = input.clamped();
    let buffers = risk::buffer_score(ci.coping, ci.rescue, ci.reversibility, ci.control);
    let pressure_mid = risk::pressure_score(ci.l_mid, ci.s, buffers);
    Calibration {
        expected_harm: risk::expected_harm(ci.l_mid, ci.s),
        buffers,
        pressure_low: risk::pressure_score(ci.l_low, ci.s, buffers),
        pressure_mid,
        pressure_high: risk::pressure_score(ci.l_high, ci.s, buffers),
        band: band(pressure_mid),
        driver: dominant_driver(&ci),
    }
}
