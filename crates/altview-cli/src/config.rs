use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (`--config`, with tilde expansion)
/// 2. ALTVIEW_CONFIG environment variable (with tilde expansion)
/// 3. `<config dir>/altview/config.toml` (XDG on Linux)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("ALTVIEW_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    let config_dir = dirs::config_dir()
        .context("Could not determine config path: no config directory found")?;
    Ok(config_dir.join("altview").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Feed document used when `--feed` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed: Option<PathBuf>,

    /// List beta apps on the apps page
    pub include_beta: bool,

    /// Screenshots previewed per app on the apps page
    pub preview_screenshots: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed: None,
            include_beta: false,
            preview_screenshots: 2,
        }
    }
}

impl Config {
    /// A missing file is not an error: defaults apply
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.feed, None);
        assert!(!config.include_beta);
        assert_eq!(config.preview_screenshots, 2);
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("missing.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_load_partial_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "feed = \"/srv/feed.json\"\ninclude_beta = true\n")?;

        let config = Config::load_from(&path)?;
        assert_eq!(config.feed, Some(PathBuf::from("/srv/feed.json")));
        assert!(config.include_beta);
        assert_eq!(config.preview_screenshots, 2);
        Ok(())
    }

    #[test]
    fn test_invalid_file_is_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "preview_screenshots = \"many\"")?;

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config"));
        Ok(())
    }

    #[test]
    fn test_round_trip_through_toml() -> Result<()> {
        let config = Config {
            feed: Some(PathBuf::from("feed.json")),
            include_beta: true,
            preview_screenshots: 3,
        };
        let parsed: Config = toml::from_str(&config.to_toml()?)?;
        assert_eq!(parsed, config);
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some(Path::new("/tmp/altview.toml")))?;
        assert_eq!(path, PathBuf::from("/tmp/altview.toml"));
        Ok(())
    }
}
