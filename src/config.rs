use crate::error::{NeurometricError, Result};
use crate::types::config::NeurometricConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "neurometric.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".neurometric/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/neurometric/config.toml";

/// Loads and validates configuration for `root`. Layers are merged global,
/// then `neurometric.toml`, then the local override; with no files at all the
/// defaults apply.
pub fn load_config(root: &Path) -> Result<NeurometricConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<NeurometricConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: NeurometricConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| NeurometricError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| NeurometricError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use crate::types::config::{EngineMode, DEFAULT_TOP};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert_eq!(cfg.top(), DEFAULT_TOP);
        assert_eq!(cfg.engine_mode(), EngineMode::Compute);
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[output]
format = "md"
top = 2
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[output]
top = 4

[engine]
mode = "demo"
seed = 21
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".neurometric"))
            .expect("local override dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[engine]
seed = 5
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed");

        assert_eq!(cfg.format(), OutputFormat::Md);
        assert_eq!(cfg.top(), 4);
        assert_eq!(cfg.engine_mode(), EngineMode::Demo);
        assert_eq!(cfg.seed(), 5);
    }

    #[test]
    fn load_config_surfaces_parse_errors_with_path() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[output\n")
            .expect("broken config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(matches!(err, NeurometricError::ConfigParse(message) if message.contains(DEFAULT_CONFIG_FILE)));
    }

    #[test]
    fn load_config_runs_validation() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[output]\ntop = 0\n")
            .expect("config should write");

        assert!(load_config_with_global(root.path(), None).is_err());
    }
}
