use crate::math::Score;
use serde::Serialize;

/// A named input echoed back next to a score, post-clamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Variable {
    pub name: &'static str,
    pub value: f64,
}

impl Variable {
    pub fn new(name: &'static str, value: f64) -> Self {
        Self { name, value }
    }
}

/// Output of one transfer function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: Score,
    pub formula: &'static str,
    pub vars: Vec<Variable>,
    pub protocol: &'static str,
    pub fix: &'static str,
}

impl ScoreResult {
    pub fn percent(&self) -> f64 {
        self.score * 100.0
    }

    pub fn var(&self, name: &str) -> Option<f64> {
        self.vars
            .iter()
            .find(|variable| variable.name == name)
            .map(|variable| variable.value)
    }
}
