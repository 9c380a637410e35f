//! Configuration for the ERP rate viewer.
//!
//! TOML settings layered under `ERPVIEW_*` environment variables, and
//! translation to `erpview_core::ServiceConfig`. The CLI applies its flag
//! overrides on top of what this crate resolves.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use erpview_core::KeyMode;
use erpview_core::ServiceConfig;
use erpview_core::config::{DEFAULT_ADDRESS_URL, DEFAULT_RATES_URL};

/// Prefix for environment overrides; nested keys are joined with `__`.
pub const ENV_PREFIX: &str = "ERPVIEW_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Account whose saved addresses `favorites` shows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub api: ApiSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// `zone` or `record`.
    #[serde(default = "default_key_mode")]
    pub key_mode: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: default_timeout(),
            key_mode: default_key_mode(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_key_mode() -> String {
    KeyMode::default().to_string()
}

/// Upstream service locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_rates_url")]
    pub rates_url: String,

    #[serde(default = "default_address_url")]
    pub address_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            rates_url: default_rates_url(),
            address_url: default_address_url(),
        }
    }
}

fn default_rates_url() -> String {
    DEFAULT_RATES_URL.into()
}
fn default_address_url() -> String {
    DEFAULT_ADDRESS_URL.into()
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    /// Build the core service config. URLs are validated here.
    pub fn to_service_config(&self) -> Result<ServiceConfig, ConfigError> {
        Ok(ServiceConfig {
            rates_url: parse_url("api.rates_url", &self.api.rates_url)?,
            address_url: parse_url("api.address_url", &self.api.address_url)?,
            timeout: Duration::from_secs(self.defaults.timeout),
        })
    }

    pub fn key_mode(&self) -> Result<KeyMode, ConfigError> {
        self.defaults
            .key_mode
            .parse()
            .map_err(|_| ConfigError::Validation {
                field: "defaults.key_mode".into(),
                reason: format!("expected 'zone' or 'record', got '{}'", self.defaults.key_mode),
            })
    }
}

/// Parse a base URL, rejecting anything that can't carry a path.
pub fn parse_url(field: &str, raw: &str) -> Result<Url, ConfigError> {
    let url: Url = raw.parse().map_err(|e| ConfigError::Validation {
        field: field.into(),
        reason: format!("invalid URL '{raw}': {e}"),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::Validation {
            field: field.into(),
            reason: format!("'{raw}' cannot be used as a base URL"),
        });
    }
    Ok(url)
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "traffooze", "erpview").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("erpview");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file path + environment. A missing file is not an
/// error; its layer is simply empty.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if loading fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_file() {
        Jail::expect_with(|_jail| {
            let cfg = load_config_from(Path::new("missing.toml")).map_err(|e| e.to_string())?;
            assert_eq!(cfg, Config::default());
            assert_eq!(cfg.defaults.timeout, 30);
            assert_eq!(cfg.defaults.output, "table");
            assert_eq!(cfg.key_mode().unwrap(), KeyMode::Zone);
            Ok(())
        });
    }

    #[test]
    fn file_then_env_precedence() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                username = "alice"

                [defaults]
                timeout = 10
                key_mode = "record"

                [api]
                rates_url = "http://localhost:5000"
                "#,
            )?;
            jail.set_env("ERPVIEW_DEFAULTS__TIMEOUT", "5");
            jail.set_env("ERPVIEW_API__ADDRESS_URL", "http://localhost:3000");

            let cfg = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;
            assert_eq!(cfg.username.as_deref(), Some("alice"));
            assert_eq!(cfg.defaults.timeout, 5);
            assert_eq!(cfg.defaults.output, "table");
            assert_eq!(cfg.key_mode().unwrap(), KeyMode::RepresentativeRecord);

            let service = cfg.to_service_config().map_err(|e| e.to_string())?;
            assert_eq!(service.rates_url.as_str(), "http://localhost:5000/");
            assert_eq!(service.address_url.as_str(), "http://localhost:3000/");
            assert_eq!(service.timeout, Duration::from_secs(5));
            Ok(())
        });
    }

    #[test]
    fn bad_values_rejected() {
        let mut cfg = Config::default();
        cfg.api.rates_url = "not a url".into();
        assert!(matches!(
            cfg.to_service_config(),
            Err(ConfigError::Validation { .. })
        ));

        cfg.api.rates_url = "mailto:someone@example.com".into();
        assert!(cfg.to_service_config().is_err());

        cfg.defaults.key_mode = "zone-id".into();
        assert!(cfg.key_mode().is_err());
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.username = Some("bob".into());
        cfg.defaults.output = "json".into();
        save_config_to(&cfg, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("username = \"bob\""));

        let loaded: Config = toml::from_str(&text).unwrap();
        assert_eq!(loaded, cfg);
    }
}
