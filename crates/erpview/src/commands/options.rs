//! Selectable vehicle and day types.

use serde::Serialize;
use tabled::Tabled;

use erpview_core::{DayType, VehicleType};

use crate::config::Settings;
use crate::output;

/// One choice for one selection field.
#[derive(Debug, Serialize)]
struct OptionEntry {
    field: &'static str,
    value: &'static str,
}

#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: &'static str,
}

fn entries() -> Vec<OptionEntry> {
    let vehicles = VehicleType::ALL.into_iter().map(|v| OptionEntry {
        field: "vehicle",
        value: v.as_str(),
    });
    let days = DayType::ALL.into_iter().map(|d| OptionEntry {
        field: "day",
        value: d.as_str(),
    });
    vehicles.chain(days).collect()
}

pub fn handle(settings: &Settings) {
    let out = output::render_list(
        settings.output,
        &entries(),
        |e| OptionRow {
            field: e.field,
            value: e.value,
        },
        |e| e.value.to_owned(),
    );
    output::print_output(&out, settings.quiet);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicles_then_days() {
        let all = entries();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0].value, "Heavy Goods Vehicles/Small Buses");
        assert_eq!(all[7].field, "day");
        assert_eq!(all[7].value, "weekend");
    }
}
