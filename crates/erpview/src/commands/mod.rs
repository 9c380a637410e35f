//! Command dispatch: bridges CLI args -> core service -> output formatting.

pub mod config_cmd;
pub mod favorites;
pub mod options;
pub mod rates;
pub mod time_windows;
pub mod util;
pub mod zones;

use erpview_core::RateService;

use crate::cli::Command;
use crate::config::Settings;
use crate::error::CliError;

/// Dispatch a service-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    service: &RateService,
    settings: &Settings,
) -> Result<(), CliError> {
    match cmd {
        Command::Rates(args) => rates::handle(service, args, settings).await,
        Command::TimeWindows => time_windows::handle(service, settings).await,
        Command::Favorites(args) => favorites::handle(service, args, settings).await,
        // Offline commands are handled before dispatch
        Command::Options | Command::Zones(_) | Command::Config(_) | Command::Completions(_) => {
            unreachable!()
        }
    }
}
