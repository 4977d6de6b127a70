//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DashpushError, DashpushResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

/// Load configuration and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> DashpushResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DashpushError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// An unreadable or invalid file falls back to the next source rather than
/// failing the run.
pub fn load_or_default(invocation_dir: &Path) -> (Config, Vec<ConfigWarning>) {
    let project_config = invocation_dir.join("dashpush.toml");
    if project_config.exists() {
        if let Ok(loaded) = load_with_warnings(&project_config) {
            return loaded;
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join("dashpush/config.toml");
        if user_config.exists() {
            if let Ok(loaded) = load_with_warnings(&user_config) {
                return loaded;
            }
        }
    }

    (Config::default(), Vec::new())
}
