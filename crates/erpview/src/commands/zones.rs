//! Zone location catalogue command handler.

use serde::Serialize;
use tabled::Tabled;

use erpview_core::{known_zones, zone_locations};

use crate::cli::ZonesArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct ZoneEntry {
    zone: &'static str,
    locations: &'static [&'static str],
}

#[derive(Tabled)]
struct ZoneTableRow {
    #[tabled(rename = "Zone")]
    zone: &'static str,
    #[tabled(rename = "Locations")]
    locations: String,
}

pub fn handle(args: &ZonesArgs, settings: &Settings) -> Result<(), CliError> {
    let entries: Vec<ZoneEntry> = match args.zone.as_deref() {
        Some(wanted) => {
            let zone = known_zones()
                .find(|z| z.eq_ignore_ascii_case(wanted))
                .ok_or_else(|| CliError::NotFound {
                    resource_type: "zone".into(),
                    identifier: wanted.into(),
                    list_command: "zones".into(),
                })?;
            vec![ZoneEntry {
                zone,
                locations: zone_locations(zone),
            }]
        }
        None => known_zones()
            .map(|zone| ZoneEntry {
                zone,
                locations: zone_locations(zone),
            })
            .collect(),
    };

    // A single zone in plain mode lists its locations, one per line.
    let single = args.zone.is_some();
    let out = output::render_list(
        settings.output,
        &entries,
        |e| ZoneTableRow {
            zone: e.zone,
            locations: e.locations.join("\n"),
        },
        |e| {
            if single {
                e.locations.join("\n")
            } else {
                e.zone.to_owned()
            }
        },
    );
    output::print_output(&out, settings.quiet);
    Ok(())
}
