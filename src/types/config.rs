use crate::error::NeurometricError;
use crate::report::OutputFormat;
use serde::Deserialize;

pub const DEFAULT_TOP: usize = 5;
pub const DEFAULT_SEED: u64 = 7;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NeurometricConfig {
    pub output: Option<OutputConfig>,
    pub engine: Option<EngineConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub top: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineMode {
    #[default]
    Compute,
    Demo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub mode: EngineMode,
    pub seed: Option<u64>,
}

impl NeurometricConfig {
    pub fn format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|output| output.format)
            .unwrap_or_default()
    }

    pub fn top(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|output| output.top)
            .unwrap_or(DEFAULT_TOP)
    }

    pub fn engine_mode(&self) -> EngineMode {
        self.engine
            .as_ref()
            .map(|engine| engine.mode)
            .unwrap_or_default()
    }

    pub fn seed(&self) -> u64 {
        self.engine
            .as_ref()
            .and_then(|engine| engine.seed)
            .unwrap_or(DEFAULT_SEED)
    }

    pub fn validate(&self) -> Result<(), NeurometricError> {
        if self.top() == 0 {
            return Err(NeurometricError::ConfigParse(
                "output.top must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: NeurometricConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.format(), OutputFormat::Table);
        assert_eq!(cfg.top(), DEFAULT_TOP);
        assert_eq!(cfg.engine_mode(), EngineMode::Compute);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parses_output_and_engine_sections() {
        let cfg: NeurometricConfig = toml::from_str(
            r#"
[output]
format = "json"
top = 3

[engine]
mode = "demo"
seed = 99
"#,
        )
        .expect("config should parse");
        assert_eq!(cfg.format(), OutputFormat::Json);
        assert_eq!(cfg.top(), 3);
        assert_eq!(cfg.engine_mode(), EngineMode::Demo);
        assert_eq!(cfg.seed(), 99);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_top() {
        let cfg: NeurometricConfig =
            toml::from_str("[output]\ntop = 0\n").expect("config should parse");
        assert!(matches!(
            cfg.validate(),
            Err(NeurometricError::ConfigParse(message)) if message.contains("output.top")
        ));
    }

    #[test]
    fn seed_is_kept_while_mode_stays_compute() {
        let cfg: NeurometricConfig =
            toml::from_str("[engine]\nseed = 4\n").expect("config should parse");
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.engine_mode(), EngineMode::Compute);
        assert_eq!(cfg.seed(), 4);
    }

    #[test]
    fn unknown_engine_mode_fails_to_parse() {
        let parsed = toml::from_str::<NeurometricConfig>("[engine]\nmode = \"oracle\"\n");
        assert!(parsed.is_err());
    }
}
