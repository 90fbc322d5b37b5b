use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::delegate;

/// Environment override for the script resolution directory. Takes precedence
/// over the config file.
pub const SCRIPTS_DIR_ENV: &str = "REPO_AUDIT_SCRIPTS_DIR";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directory to resolve audit scripts in, instead of the binary's own.
    #[serde(default)]
    pub scripts_dir: Option<PathBuf>,
    /// Interpreter for the scripts (default: bash).
    #[serde(default)]
    pub interpreter: Option<String>,
}

impl Config {
    /// Directory audit scripts are resolved in: the loaded override if any,
    /// otherwise the directory containing the current executable.
    pub fn scripts_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.scripts_dir {
            return Ok(dir.clone());
        }
        delegate::exe_dir()
    }

    pub fn interpreter(&self) -> &str {
        self.interpreter.as_deref().unwrap_or("bash")
    }
}

/// Load config from ~/.config/repo-audit/config.toml, or return defaults.
/// The `REPO_AUDIT_SCRIPTS_DIR` env var wins over the file's `scripts_dir`.
pub fn load() -> Result<Config> {
    let path = config_path();
    let mut config = if path.exists() {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?
    } else {
        Config::default()
    };
    if let Ok(dir) = std::env::var(SCRIPTS_DIR_ENV) {
        config.scripts_dir = Some(PathBuf::from(dir));
    }
    Ok(config)
}

fn config_path() -> PathBuf {
    dirs_config_dir().join("repo-audit").join("config.toml")
}

fn dirs_config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.interpreter(), "bash");
        assert!(config.scripts_dir.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config =
            toml::from_str("scripts_dir = \"/opt/audit\"\ninterpreter = \"sh\"\n").unwrap();
        assert_eq!(config.scripts_dir, Some(PathBuf::from("/opt/audit")));
        assert_eq!(config.interpreter(), "sh");
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.scripts_dir.is_none());
        assert!(config.interpreter.is_none());
    }

    #[test]
    fn test_scripts_dir_uses_loaded_override() {
        let config = Config {
            scripts_dir: Some(PathBuf::from("/opt/audit")),
            interpreter: None,
        };
        assert_eq!(config.scripts_dir().unwrap(), PathBuf::from("/opt/audit"));
    }
}
