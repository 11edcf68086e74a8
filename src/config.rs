//! Application configuration.
//!
//! Configuration is loaded from a TOML file at:
//! 1. `$MAILCASE_CONFIG` (environment variable)
//! 2. `~/.config/mailcase/config.toml` (Linux/macOS)
//!    `%APPDATA%\mailcase\config.toml` (Windows)
//! 3. Built-in defaults

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General behavior settings.
    pub general: GeneralConfig,
}

/// General behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Root directory for case workspaces. Defaults to `./cases`.
    pub cases_dir: Option<PathBuf>,
    /// Override cache directory for process logs.
    pub cache_dir: Option<PathBuf>,
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            cases_dir: None,
            cache_dir: None,
            log_level: "warn".to_string(),
        }
    }
}

/// Load configuration, searching standard locations.
///
/// Returns the default configuration if no file is found or on parse error.
pub fn load_config() -> Config {
    if let Some(path) = config_file_path() {
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str::<Config>(&contents) {
                    Ok(cfg) => {
                        tracing::info!(path = %path.display(), "Loaded config");
                        return cfg;
                    }
                    Err(e) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %e,
                            "Failed to parse config, using defaults"
                        );
                    }
                },
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to read config file, using defaults"
                    );
                }
            }
        }
    }
    Config::default()
}

/// Determine the config file path (checking env var first, then standard dirs).
pub fn config_file_path() -> Option<PathBuf> {
    // 1. Environment variable override
    if let Ok(env_path) = std::env::var("MAILCASE_CONFIG") {
        return Some(PathBuf::from(env_path));
    }

    // 2. Standard config directory
    dirs::config_dir().map(|d| d.join("mailcase").join("config.toml"))
}

/// Root directory under which case workspaces are created.
pub fn cases_root(config: &Config) -> PathBuf {
    if let Some(ref dir) = config.general.cases_dir {
        return dir.clone();
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("cases")
}

/// Return the cache directory for process logs.
pub fn cache_dir(config: &Config) -> PathBuf {
    if let Some(ref dir) = config.general.cache_dir {
        return dir.clone();
    }
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mailcase")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert!(cfg.general.cases_dir.is_none());
        assert_eq!(cfg.general.log_level, "warn");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: Config = toml::from_str("[general]\ncases_dir = \"/tmp/cases\"\n").unwrap();
        assert_eq!(cfg.general.cases_dir, Some(PathBuf::from("/tmp/cases")));
        assert_eq!(cfg.general.log_level, "warn");
    }

    #[test]
    fn test_cases_root_prefers_config() {
        let mut cfg = Config::default();
        cfg.general.cases_dir = Some(PathBuf::from("/srv/cases"));
        assert_eq!(cases_root(&cfg), PathBuf::from("/srv/cases"));
    }
}
