//! Time-window catalogue command handler.

use tabled::Tabled;

use erpview_core::RateService;

use crate::config::Settings;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct WindowRow {
    #[tabled(rename = "Time Window")]
    window: String,
}

pub async fn handle(service: &RateService, settings: &Settings) -> Result<(), CliError> {
    let windows = service.fetch_time_windows().await?;
    let out = output::render_list(
        settings.output,
        &windows,
        |w| WindowRow { window: w.clone() },
        String::clone,
    );
    output::print_output(&out, settings.quiet);
    Ok(())
}
