//! Rate table command handler.

use tabled::Tabled;
use tracing::warn;

use erpview_core::{RateBoard, RateRow, RateService, SelectionField};

use crate::cli::RatesArgs;
use crate::config::Settings;
use crate::error::CliError;
use crate::output;

use super::util::{self, FieldEdit};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct RateTableRow {
    #[tabled(rename = "Zone")]
    zone: String,
    #[tabled(rename = "Vehicle Type")]
    vehicle: String,
    #[tabled(rename = "Day Type")]
    day: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Charge")]
    charge: String,
}

fn table_row(r: &RateRow) -> RateTableRow {
    RateTableRow {
        zone: r.zone_id.clone(),
        vehicle: output::or_any(r.vehicle_type.as_deref()),
        day: output::or_any(r.day_type.as_deref()),
        time: output::or_any(r.time_range.as_deref()),
        charge: r.charge.clone(),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    service: &RateService,
    args: RatesArgs,
    settings: &Settings,
) -> Result<(), CliError> {
    // Parse every edit before touching the network.
    let broad = broad_edits(&args)?;
    let mut targeted = args
        .set
        .iter()
        .map(|raw| util::parse_set(raw))
        .collect::<Result<Vec<_>, _>>()?;
    for raw in &args.clear {
        targeted.push(util::parse_clear(raw)?);
    }

    let mut board = service.load_board(settings.key_mode).await;

    for (field, value) in broad {
        warn_unknown_window(&board, field, value.as_deref());
        board.set_field_all(field, value.as_deref());
    }
    for edit in targeted {
        apply_edit(&mut board, edit)?;
    }

    let rows: Vec<RateRow> = board
        .rows()
        .into_iter()
        .filter(|r| {
            args.zone.is_empty() || args.zone.iter().any(|z| z.eq_ignore_ascii_case(&r.zone_id))
        })
        .collect();

    let out = output::render_list(settings.output, &rows, table_row, |r| {
        format!("{}\t{}", r.zone_id, r.charge)
    });
    output::print_output(&out, settings.quiet);
    Ok(())
}

/// `--vehicle`, `--day` and `--time`, validated, in that order.
fn broad_edits(args: &RatesArgs) -> Result<Vec<(SelectionField, Option<String>)>, CliError> {
    [
        (SelectionField::VehicleType, args.vehicle.as_deref()),
        (SelectionField::DayType, args.day.as_deref()),
        (SelectionField::TimeRange, args.time.as_deref()),
    ]
    .into_iter()
    .filter_map(|(field, raw)| raw.map(|raw| (field, raw)))
    .map(|(field, raw)| Ok((field, util::normalize_value(field, raw)?)))
    .collect()
}

fn apply_edit(board: &mut RateBoard, edit: FieldEdit) -> Result<(), CliError> {
    let Some(zone_id) = board
        .zones()
        .iter()
        .find(|z| z.zone_id.eq_ignore_ascii_case(&edit.zone))
        .map(|z| z.zone_id.clone())
    else {
        return Err(CliError::NotFound {
            resource_type: "zone".into(),
            identifier: edit.zone,
            list_command: "rates".into(),
        });
    };

    warn_unknown_window(board, edit.field, edit.value.as_deref());
    board.set_field(&zone_id, edit.field, edit.value);
    Ok(())
}

/// Time windows outside the catalogue are allowed but almost never match.
fn warn_unknown_window(board: &RateBoard, field: SelectionField, value: Option<&str>) {
    if field != SelectionField::TimeRange {
        return;
    }
    if let Some(window) = value {
        if !board.time_windows().iter().any(|w| w == window) {
            warn!(window, "time window is not in the catalogue");
        }
    }
}
