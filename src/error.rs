use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeurometricError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("input required")]
    EmptyInput,

    #[error("unknown construct: {0}")]
    UnknownConstruct(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NeurometricError>;

/// Rejects NaN and infinities before they reach the scoring core.
pub fn validate_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NeurometricError::InvalidInput(format!(
            "{field} must be a finite number (got {value})"
        )))
    }
}
