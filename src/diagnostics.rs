//! Dominant-driver diagnostics for the risk-calibration model.
//!
//! A fixed decision list, evaluated top to bottom; the first rule that fires
//! names the driver.

use crate::equations::risk::buffer_score;
use crate::types::state::CalibrationInput;
use serde::Serialize;

pub const RARE_CATASTROPHE_SEVERITY: f64 = 0.80;
pub const RARE_CATASTROPHE_LIKELIHOOD: f64 = 0.20;
pub const WEAK_BUFFER_GAP: f64 = 0.55;
pub const AMBIGUITY_SPAN: f64 = 0.35;
pub const LOW_CONTROL: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Driver {
    RareCatastrophe,
    WeakBuffers,
    Ambiguity,
    LowControl,
    Mixed,
}

impl Driver {
    pub fn explanation(&self) -> &'static str {
        match self {
            Driver::RareCatastrophe => {
                "Severity is high while likelihood is low: classic 'rare catastrophe' fear."
            }
            Driver::WeakBuffers => {
                "Buffers feel weak (coping/rescue/control/reversibility): helplessness amplification."
            }
            Driver::Ambiguity => {
                "Uncertainty is large (wide probability range): ambiguity-driven anxiety."
            }
            Driver::LowControl => "Low perceived control: nervous system stays on high alert.",
            Driver::Mixed => "No single driver dominates: mixed factors.",
        }
    }
}

pub fn dominant_driver(input: &CalibrationInput) -> Driver {
    let ci = input.clamped();
    let buffers = buffer_score(ci.coping, ci.rescue, ci.reversibility, ci.control);
    let likelihood_span = (ci.l_high - ci.l_low).abs();

    if ci.s >= RARE_CATASTROPHE_SEVERITY && ci.l_mid <= RARE_CATASTROPHE_LIKELIHOOD {
        Driver::RareCatastrophe
    } else if 1.0 - buffers >= WEAK_BUFFER_GAP {
        Driver::WeakBuffers
    } else if likelihood_span >= AMBIGUITY_SPAN {
        Driver::Ambiguity
    } else if ci.control <= LOW_CONTROL {
        Driver::LowControl
    } else {
        Driver::Mixed
    }
}
