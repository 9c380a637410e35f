//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, KeyModeArg};
use crate::config::{self, Config, Settings};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Apply the global flag overrides to a loaded config.
fn with_overrides(mut cfg: Config, global: &GlobalOpts) -> Result<Config, CliError> {
    if let Some(ref raw) = global.rates_url {
        config::parse_url("rates-url", raw)?;
        cfg.api.rates_url.clone_from(raw);
    }
    if let Some(ref raw) = global.address_url {
        config::parse_url("address-url", raw)?;
        cfg.api.address_url.clone_from(raw);
    }
    if let Some(secs) = global.timeout {
        cfg.defaults.timeout = secs;
    }
    if let Some(mode) = global.key_mode {
        cfg.defaults.key_mode = match mode {
            KeyModeArg::Zone => "zone".into(),
            KeyModeArg::Record => "record".into(),
        };
    }
    Ok(cfg)
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts, settings: &Settings) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = with_overrides(settings.config.clone(), global)?;
            let out = output::render_single(
                settings.output,
                &cfg,
                |c| toml::to_string_pretty(c).unwrap_or_else(|e| format!("# {e}")),
                |c| {
                    format!(
                        "rates_url={}\naddress_url={}\ntimeout={}",
                        c.api.rates_url, c.api.address_url, c.defaults.timeout
                    )
                },
            );
            output::print_output(&out, settings.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), false);
            Ok(())
        }

        ConfigCommand::Init { username, force } => {
            let path = config::config_path();
            if path.exists() && !force {
                return Err(CliError::Validation {
                    field: "config".into(),
                    reason: format!(
                        "{} already exists; pass --force to overwrite it",
                        path.display()
                    ),
                });
            }

            let mut cfg = with_overrides(Config::default(), global)?;
            cfg.username = username.filter(|u| !u.trim().is_empty());

            let written = config::save_config(&cfg)?;
            if !settings.quiet {
                eprintln!("✓ Configuration written to {}", written.display());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::Cli;

    #[test]
    fn overrides_land_in_config() {
        let cli = Cli::try_parse_from([
            "erpview",
            "--rates-url",
            "http://localhost:5000",
            "--key-mode",
            "record",
            "config",
            "show",
        ])
        .unwrap();

        let cfg = with_overrides(Config::default(), &cli.global).unwrap();
        assert_eq!(cfg.api.rates_url, "http://localhost:5000");
        assert_eq!(cfg.defaults.key_mode, "record");
        assert_eq!(cfg.defaults.timeout, 30);
        assert_eq!(cfg.key_mode().unwrap(), erpview_core::KeyMode::RepresentativeRecord);
    }
}
