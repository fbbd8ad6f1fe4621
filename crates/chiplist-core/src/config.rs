use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ChiplistError, Result};

/// Root application configuration, loaded from `~/.config/chiplist/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Where the item list comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub path: String,
    /// Request timeout. Unset means wait for the server indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Read items from a local JSON file instead of the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub placeholder: String,
    pub dropdown_max_rows: u16,
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

// ─── Defaults ──────────────────────────────────────────────

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            port: 8080,
            path: "/items".to_string(),
            timeout_secs: None,
            items_file: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder: "Type to search...".to_string(),
            dropdown_max_rows: 8,
            tick_rate_ms: 250,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

// ─── Load / Save ───────────────────────────────────────────

impl AppConfig {
    /// Standard config file path: `~/.config/chiplist/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("CHIPLIST_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("chiplist")
            .join("config.toml")
    }

    /// Load config from disk, falling back to defaults if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        Self::load_from(&path)
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the standard path.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        self.save_to(&path)
    }

    /// Save config to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !matches!(self.source.scheme.as_str(), "http" | "https") {
            return Err(ChiplistError::Config(format!(
                "source.scheme must be http or https, got '{}'",
                self.source.scheme
            )));
        }
        if self.source.host.trim().is_empty() {
            return Err(ChiplistError::Config("source.host is empty".to_string()));
        }
        if self.ui.dropdown_max_rows == 0 {
            return Err(ChiplistError::Config(
                "ui.dropdown_max_rows must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    // ─── Derived values ────────────────────────────────────

    /// Full URL of the item endpoint, e.g. `http://localhost:8080/items`.
    pub fn endpoint_url(&self) -> String {
        let s = &self.source;
        let path = if s.path.starts_with('/') {
            s.path.clone()
        } else {
            format!("/{}", s.path)
        };
        format!("{}://{}:{}{}", s.scheme, s.host, s.port, path)
    }

    /// Point the source at `url`, e.g. from a `--url` flag.
    pub fn set_endpoint(&mut self, url: &str) -> Result<()> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| ChiplistError::InvalidUrl(format!("{url}: {e}")))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| ChiplistError::InvalidUrl(format!("{url}: missing host")))?;
        let port = parsed
            .port_or_known_default()
            .ok_or_else(|| ChiplistError::InvalidUrl(format!("{url}: missing port")))?;

        self.source.scheme = parsed.scheme().to_string();
        self.source.host = host.to_string();
        self.source.port = port;
        self.source.path = parsed.path().to_string();
        self.validate()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.source.timeout_secs.map(Duration::from_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms.max(1))
    }
}
