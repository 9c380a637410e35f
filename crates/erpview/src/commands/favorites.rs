//! Favorite locations command handler.

use tabled::Tabled;

use erpview_core::{FavoriteLocation, RateService};

use crate::cli::FavoritesArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct FavoriteRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Address")]
    address: String,
}

pub async fn handle(
    service: &RateService,
    args: FavoritesArgs,
    settings: &Settings,
) -> Result<(), CliError> {
    let username = args
        .username
        .or_else(|| settings.username.clone())
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| CliError::Validation {
            field: "username".into(),
            reason: "pass --username or set `username` in the config file".into(),
        })?;

    let favorites = service.favorites(&username).await;
    let out = output::render_list(
        settings.output,
        &favorites,
        |f: &FavoriteLocation| FavoriteRow {
            title: f.title.clone(),
            address: f.address.clone(),
        },
        |f| format!("{}\t{}", f.title, f.address),
    );
    output::print_output(&out, settings.quiet);
    Ok(())
}
