pub mod json;
pub mod md;
pub mod table;

use crate::error::NeurometricError;
use crate::types::report::{CalibrationReport, RankedScore, SolveReport};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Md,
    Json,
}

pub fn render_solve(
    report: &SolveReport,
    format: OutputFormat,
) -> Result<String, NeurometricError> {
    match format {
        OutputFormat::Table => Ok(table::solve(report)),
        OutputFormat::Md => Ok(md::solve(report)),
        OutputFormat::Json => json::to_json(report).map_err(NeurometricError::Json),
    }
}

/// Renders at most `top` rows; `ranked` is expected to be sorted already.
pub fn render_ranking(
    ranked: &[RankedScore],
    top: usize,
    format: OutputFormat,
) -> Result<String, NeurometricError> {
    let rows = &ranked[..top.min(ranked.len())];
    match format {
        OutputFormat::Table => Ok(table::ranking(rows)),
        OutputFormat::Md => Ok(md::ranking(rows)),
        OutputFormat::Json => json::to_json(rows).map_err(NeurometricError::Json),
    }
}

pub fn render_calibration(
    report: &CalibrationReport,
    format: OutputFormat,
) -> Result<String, NeurometricError> {
    match format {
        OutputFormat::Table => Ok(table::calibration(report)),
        OutputFormat::Md => Ok(md::calibration(report)),
        OutputFormat::Json => json::to_json(report).map_err(NeurometricError::Json),
    }
}
