use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default API host. The original frontend mixed a local dev host into some
/// call sites; here every caller goes through this config instead.
pub const DEFAULT_API_BASE_URL: &str = "https://blog-backend-pgsc.onrender.com";

/// Default web origin used to build canonical post URLs for sharing.
pub const DEFAULT_WEB_ORIGIN: &str = "http://localhost:3000";

/// Resolve the client data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. MYBLOG_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.myblog (fallback for systems without XDG)
pub fn resolve_data_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("MYBLOG_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("myblog"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".myblog"));
    }

    Err(Error::Config(
        "Could not determine data path: no HOME directory or XDG data directory found".to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL all API calls target.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Origin used to build `{origin}/blog/{id}` share URLs.
    #[serde(default = "default_web_origin")]
    pub web_origin: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_web_origin() -> String {
    DEFAULT_WEB_ORIGIN.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            web_origin: default_web_origin(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.web_origin, DEFAULT_WEB_ORIGIN);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = Config::path_in(temp_dir.path());

        let config = Config {
            api_base_url: "http://localhost:5000".to_string(),
            web_origin: "http://localhost:3000".to_string(),
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.api_base_url, "http://localhost:5000");

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "api_base_url = \"http://localhost:5000\"\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.web_origin, DEFAULT_WEB_ORIGIN);

        Ok(())
    }
}
