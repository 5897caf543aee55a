//! Configuration: optional ~/.brainy/config.yaml.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dashboard::DEFAULT_NOTIFICATIONS_LIMIT;
use crate::error::{BrainyError, Result};
use crate::events::feed::{DEFAULT_FEATURED_LIMIT, DEFAULT_RECOMMENDED_LIMIT, DEFAULT_TRENDING_LIMIT};
use crate::leaderboard::DEFAULT_LEADERBOARD_LIMIT;

const DEFAULT_TYPING_DELAY_MS: u64 = 800;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BrainyConfig {
    /// Pause before BrainyBot answers, in milliseconds.
    pub typing_delay_ms: u64,
    pub featured_limit: usize,
    pub trending_limit: usize,
    pub recommended_limit: usize,
    pub leaderboard_limit: usize,
    pub notifications_limit: usize,
    /// Default tracing filter when RUST_LOG is unset.
    pub log_level: String,
}

impl Default for BrainyConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
            featured_limit: DEFAULT_FEATURED_LIMIT,
            trending_limit: DEFAULT_TRENDING_LIMIT,
            recommended_limit: DEFAULT_RECOMMENDED_LIMIT,
            leaderboard_limit: DEFAULT_LEADERBOARD_LIMIT,
            notifications_limit: DEFAULT_NOTIFICATIONS_LIMIT,
            log_level: "info".to_string(),
        }
    }
}

impl BrainyConfig {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}

/// ~/.brainy/config.yaml, or ./.brainy/config.yaml without a home dir.
pub fn default_config_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".brainy");
    path.push("config.yaml");
    path
}

/// Load config from `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<BrainyConfig> {
    if !path.exists() {
        return Ok(BrainyConfig::default());
    }
    let content = std::fs::read_to_string(path).map_err(|e| BrainyError::io(path, e))?;
    serde_yaml::from_str(&content)
        .map_err(|e| BrainyError::Config(format!("{}: {e}", path.display())))
}

/// Save config to `path`, creating parent directories as needed.
pub fn save_config(path: &Path, config: &BrainyConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| BrainyError::io(parent, e))?;
    }
    let yaml = serde_yaml::to_string(config).map_err(|e| BrainyError::Config(e.to_string()))?;
    std::fs::write(path, yaml).map_err(|e| BrainyError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_app() {
        let config = BrainyConfig::default();
        assert_eq!(config.typing_delay(), Duration::from_millis(800));
        assert_eq!(config.featured_limit, 4);
        assert_eq!(config.trending_limit, 6);
        assert_eq!(config.leaderboard_limit, 50);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, BrainyConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config: BrainyConfig = serde_yaml::from_str("typing_delay_ms: 0\n").unwrap();
        assert_eq!(config.typing_delay_ms, 0);
        assert_eq!(config.trending_limit, 6);
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "typing_delay_ms: [oops").unwrap();
        assert!(matches!(load_config(&path), Err(BrainyError::Config(_))));
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = BrainyConfig {
            leaderboard_limit: 10,
            ..BrainyConfig::default()
        };
        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }
}
