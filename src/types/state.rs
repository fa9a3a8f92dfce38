use crate::error::{validate_finite, Result};
use crate::math::clamp01;
use serde::{Deserialize, Serialize};

/// Normalized inputs for the five emotion equations.
///
/// Every field is read as a value in `[0, 1]`. Construction never rejects a
/// finite value; [`BioState::clamped`] coerces it into range and each
/// equation works on the clamped copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BioState {
    // prediction / entropy
    pub threat_prob: f64,
    pub uncertainty: f64,
    pub coping: f64,

    // reward
    pub reward_expected: f64,
    pub reward_received: f64,

    // social
    pub social_req: f64,
    pub social_obs: f64,
    pub judgment_weight: f64,

    // agency / time
    pub agency: f64,
    pub counterfactual_val: f64,
    pub reversibility: f64,
}

impl Default for BioState {
    fn default() -> Self {
        Self {
            threat_prob: 0.5,
            uncertainty: 0.5,
            coping: 0.5,
            reward_expected: 0.8,
            reward_received: 0.2,
            social_req: 0.8,
            social_obs: 0.2,
            judgment_weight: 0.5,
            agency: 0.5,
            counterfactual_val: 0.8,
            reversibility: 0.2,
        }
    }
}

impl BioState {
    pub fn clamped(&self) -> Self {
        Self {
            threat_prob: clamp01(self.threat_prob),
            uncertainty: clamp01(self.uncertainty),
            coping: clamp01(self.coping),
            reward_expected: clamp01(self.reward_expected),
            reward_received: clamp01(self.reward_received),
            social_req: clamp01(self.social_req),
            social_obs: clamp01(self.social_obs),
            judgment_weight: clamp01(self.judgment_weight),
            agency: clamp01(self.agency),
            counterfactual_val: clamp01(self.counterfactual_val),
            reversibility: clamp01(self.reversibility),
        }
    }

    /// Homeostatic social deficit, `max(0, required - observed)`.
    pub fn social_deficit(&self) -> f64 {
        (self.social_req - self.social_obs).max(0.0)
    }
}

/// Partially specified [`BioState`]. Missing fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateInput {
    pub threat_prob: Option<f64>,
    pub uncertainty: Option<f64>,
    pub coping: Option<f64>,
    pub reward_expected: Option<f64>,
    pub reward_received: Option<f64>,
    pub social_req: Option<f64>,
    pub social_obs: Option<f64>,
    pub judgment_weight: Option<f64>,
    pub agency: Option<f64>,
    pub counterfactual_val: Option<f64>,
    pub reversibility: Option<f64>,
}

impl StateInput {
    pub fn into_state(self) -> Result<BioState> {
        let defaults = BioState::default();
        let pick = |field: &str, value: Option<f64>, fallback: f64| -> Result<f64> {
            value.map_or(Ok(fallback), |v| validate_finite(field, v))
        };
        let state = BioState {
            threat_prob: pick("threat_prob", self.threat_prob, defaults.threat_prob)?,
            uncertainty: pick("uncertainty", self.uncertainty, defaults.uncertainty)?,
            coping: pick("coping", self.coping, defaults.coping)?,
            reward_expected: pick(
                "reward_expected",
                self.reward_expected,
                defaults.reward_expected,
            )?,
            reward_received: pick(
                "reward_received",
                self.reward_received,
                defaults.reward_received,
            )?,
            social_req: pick("social_req", self.social_req, defaults.social_req)?,
            social_obs: pick("social_obs", self.social_obs, defaults.social_obs)?,
            judgment_weight: pick(
                "judgment_weight",
                self.judgment_weight,
                defaults.judgment_weight,
            )?,
            agency: pick("agency", self.agency, defaults.agency)?,
            counterfactual_val: pick(
                "counterfactual_val",
                self.counterfactual_val,
                defaults.counterfactual_val,
            )?,
            reversibility: pick("reversibility", self.reversibility, defaults.reversibility)?,
        };
        Ok(state.clamped())
    }
}

/// Inputs for the risk-calibration model: a three-point likelihood estimate,
/// a severity, and four buffers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationInput {
    pub l_low: f64,
    pub l_mid: f64,
    pub l_high: f64,
    pub s: f64,
    pub coping: f64,
    pub rescue: f64,
    /// 0 = feels permanent, 1 = clearly reversible
    pub reversibility: f64,
    /// 0 = no agency, 1 = high agency
    pub control: f64,
}

impl CalibrationInput {
    /// Validates finiteness of every field and clamps the result.
    pub fn checked(self) -> Result<Self> {
        let input = Self {
            l_low: validate_finite("l_low", self.l_low)?,
            l_mid: validate_finite("l_mid", self.l_mid)?,
            l_high: validate_finite("l_high", self.l_high)?,
            s: validate_finite("severity", self.s)?,
            coping: validate_finite("coping", self.coping)?,
            rescue: validate_finite("rescue", self.rescue)?,
            reversibility: validate_finite("reversibility", self.reversibility)?,
            control: validate_finite("control", self.control)?,
        };
        Ok(input.clamped())
    }

    pub fn clamped(&self) -> Self {
        Self {
            l_low: clamp01(self.l_low),
            l_mid: clamp01(self.l_mid),
            l_high: clamp01(self.l_high),
            s: clamp01(self.s),
            coping: clamp01(self.coping),
            rescue: clamp01(self.rescue),
            reversibility: clamp01(self.reversibility),
            control: clamp01(self.control),
        }
    }
}
