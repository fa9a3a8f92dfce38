use serde::Serialize;
use std::fmt;

/// Upper (exclusive) edges of Low, Medium and High. Anything at or above the
/// last cutpoint is Extreme.
pub const CUTPOINTS: [f64; 3] = [0.25, 0.60, 1.10];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Low,
    Medium,
    High,
    Extreme,
}

impl Band {
    const ORDERED: [Band; 4] = [Band::Low, Band::Medium, Band::High, Band::Extreme];

    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Low => "Low",
            Band::Medium => "Medium",
            Band::High => "High",
            Band::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn band(score: f64) -> Band {
    CUTPOINTS
        .iter()
        .position(|cut| score < *cut)
        .map(|index| Band::ORDERED[index])
        .unwrap_or(Band::Extreme)
}
