//! CLI configuration: thin wrapper around `erpview_config`.
//!
//! Loads the shared config and applies `GlobalOpts` flag overrides
//! (--rates-url, --timeout, etc.) on top of it.

use std::time::Duration;

use clap::ValueEnum;
use tracing::warn;

use erpview_core::{KeyMode, ServiceConfig};

use crate::cli::{GlobalOpts, KeyModeArg, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use erpview_config::{Config, config_path, parse_url, save_config};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Load the config file + env, falling back to defaults when unreadable.
pub fn load_config_or_default() -> Config {
    erpview_config::load_config().unwrap_or_else(|e| {
        warn!(error = %e, path = %config_path().display(), "ignoring unreadable config");
        Config::default()
    })
}

/// Settings every command sees after flags are applied.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output: OutputFormat,
    pub quiet: bool,
    pub key_mode: KeyMode,
    pub username: Option<String>,
    pub config: Config,
}

/// Resolve output, key mode and username. Flags win over the config file.
pub fn resolve_settings(global: &GlobalOpts, config: Config) -> Result<Settings, CliError> {
    let output = match global.output {
        Some(format) => format,
        None => OutputFormat::from_str(&config.defaults.output, true).map_err(|_| {
            CliError::Validation {
                field: "defaults.output".into(),
                reason: format!(
                    "expected table, json, json-compact, yaml or plain, got '{}'",
                    config.defaults.output
                ),
            }
        })?,
    };

    let key_mode = match global.key_mode {
        Some(KeyModeArg::Zone) => KeyMode::Zone,
        Some(KeyModeArg::Record) => KeyMode::RepresentativeRecord,
        None => config.key_mode()?,
    };

    Ok(Settings {
        output,
        quiet: global.quiet,
        key_mode,
        username: config.username.clone(),
        config,
    })
}

/// Like [`resolve_settings`], but an invalid `[defaults]` value is logged and
/// replaced by its default. The `config` subcommands use this so a broken
/// file can still be shown or rewritten.
pub fn lenient_settings(global: &GlobalOpts, config: Config) -> Settings {
    let output = global.output.unwrap_or_else(|| {
        OutputFormat::from_str(&config.defaults.output, true).unwrap_or_else(|_| {
            warn!(value = %config.defaults.output, "ignoring invalid defaults.output");
            OutputFormat::Table
        })
    });

    let key_mode = match global.key_mode {
        Some(KeyModeArg::Zone) => KeyMode::Zone,
        Some(KeyModeArg::Record) => KeyMode::RepresentativeRecord,
        None => config.key_mode().unwrap_or_else(|e| {
            warn!(error = %e, "ignoring invalid defaults.key_mode");
            KeyMode::default()
        }),
    };

    Settings {
        output,
        quiet: global.quiet,
        key_mode,
        username: config.username.clone(),
        config,
    }
}

/// Translate config + global flags into a `ServiceConfig`.
pub fn resolve_service(global: &GlobalOpts, config: &Config) -> Result<ServiceConfig, CliError> {
    let mut service = config.to_service_config()?;

    if let Some(ref raw) = global.rates_url {
        service.rates_url = parse_url("rates-url", raw)?;
    }
    if let Some(ref raw) = global.address_url {
        service.address_url = parse_url("address-url", raw)?;
    }
    if let Some(secs) = global.timeout {
        service.timeout = Duration::from_secs(secs);
    }

    Ok(service)
}
