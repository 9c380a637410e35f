//! Clap derive structures for the `erpview` CLI.
//!
//! Defines the command tree, global flags, and shared value enums. This file
//! is also compiled by `build.rs` for man page generation, so it may only
//! depend on `clap` and `clap_complete`.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// erpview -- ERP toll rates from the command line
#[derive(Debug, Parser)]
#[command(
    name = "erpview",
    version,
    about = "Look up ERP toll charges by zone, vehicle type, day and time",
    long_about = "Look up Electronic Road Pricing toll charges.\n\n\
        Loads the published rate table and time-window catalogue, picks a\n\
        default selection per zone, and resolves the charge for each zone.\n\
        Selections can be narrowed for every zone or for a single zone.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Rate service base URL (serves /erp and /erp_time)
    #[arg(long, env = "ERPVIEW_RATES_URL", global = true)]
    pub rates_url: Option<String>,

    /// Address service base URL (serves /get-address/)
    #[arg(long, env = "ERPVIEW_ADDRESS_URL", global = true)]
    pub address_url: Option<String>,

    /// Output format [default: table]
    #[arg(long, short = 'o', env = "ERPVIEW_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Request timeout in seconds [default: 30]
    #[arg(long, env = "ERPVIEW_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// How selection rows are keyed [default: zone]
    #[arg(long, env = "ERPVIEW_KEY_MODE", global = true)]
    pub key_mode: Option<KeyModeArg>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Value Enums ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeyModeArg {
    /// One row per zone id
    Zone,
    /// One row per zone, keyed by the id of its first record
    Record,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the resolved charge for every zone
    #[command(alias = "r")]
    Rates(RatesArgs),

    /// List the time-window catalogue
    #[command(alias = "times")]
    TimeWindows,

    /// List the vehicle types and day types a selection can use
    Options,

    /// Show the gantry locations covered by each zone
    Zones(ZonesArgs),

    /// Show saved home and work locations
    #[command(alias = "fav")]
    Favorites(FavoritesArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Rates ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RatesArgs {
    /// Vehicle type for every zone (e.g. "Taxis", "hgv", "any")
    #[arg(long)]
    pub vehicle: Option<String>,

    /// Day type for every zone ("Weekdays", "weekend", "any")
    #[arg(long)]
    pub day: Option<String>,

    /// Time window for every zone (e.g. "08:00 to 08:30", "any")
    #[arg(long)]
    pub time: Option<String>,

    /// Set one zone's field: ZONE:FIELD=VALUE (FIELD is vehicle, day or time)
    #[arg(long = "set", value_name = "ZONE:FIELD=VALUE")]
    pub set: Vec<String>,

    /// Clear one zone's field so it matches anything: ZONE:FIELD
    #[arg(long = "clear", value_name = "ZONE:FIELD")]
    pub clear: Vec<String>,

    /// Only print these zones
    #[arg(long, short = 'z')]
    pub zone: Vec<String>,
}

// ── Zones ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ZonesArgs {
    /// Zone code to show (all known zones when omitted)
    pub zone: Option<String>,
}

// ── Favorites ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FavoritesArgs {
    /// Account to look up (defaults to `username` from the config file)
    #[arg(long, short = 'u', env = "ERPVIEW_USERNAME")]
    pub username: Option<String>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,

    /// Write a config file with default settings
    Init {
        /// Username to store for `favorites`
        #[arg(long)]
        username: Option<String>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
