//! Shared helpers for command handlers.

use erpview_core::{DayType, SelectionField, VehicleType};

use crate::error::CliError;

/// Words that clear a field instead of setting it.
const WILDCARDS: [&str; 2] = ["any", "*"];

/// One targeted selection edit from `--set` or `--clear`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub zone: String,
    pub field: SelectionField,
    pub value: Option<String>,
}

/// Parse `ZONE:FIELD=VALUE`. The value may itself contain `:`.
pub fn parse_set(raw: &str) -> Result<FieldEdit, CliError> {
    let (target, value) = raw.split_once('=').ok_or_else(|| CliError::Validation {
        field: "set".into(),
        reason: format!("expected ZONE:FIELD=VALUE, got '{raw}'"),
    })?;
    let (zone, field) = parse_target(target, "set")?;
    Ok(FieldEdit {
        zone,
        field,
        value: normalize_value(field, value)?,
    })
}

/// Parse `ZONE:FIELD`.
pub fn parse_clear(raw: &str) -> Result<FieldEdit, CliError> {
    let (zone, field) = parse_target(raw, "clear")?;
    Ok(FieldEdit {
        zone,
        field,
        value: None,
    })
}

fn parse_target(raw: &str, flag: &str) -> Result<(String, SelectionField), CliError> {
    let usage = || CliError::Validation {
        field: flag.into(),
        reason: format!("expected ZONE:FIELD (FIELD is vehicle, day or time), got '{raw}'"),
    };
    let (zone, field) = raw.split_once(':').ok_or_else(usage)?;
    let zone = zone.trim();
    if zone.is_empty() {
        return Err(usage());
    }
    let field: SelectionField = field.trim().parse().map_err(|_| usage())?;
    Ok((zone.to_owned(), field))
}

/// Check a user-supplied value and return the spelling records use.
///
/// Vehicle and day types accept any case and the short aliases; `any`
/// clears the field. Time windows pass through unchanged.
pub fn normalize_value(field: SelectionField, raw: &str) -> Result<Option<String>, CliError> {
    let raw = raw.trim();
    if WILDCARDS.iter().any(|w| w.eq_ignore_ascii_case(raw)) {
        return Ok(None);
    }

    match field {
        SelectionField::VehicleType => raw
            .parse::<VehicleType>()
            .map(|v| Some(v.to_string()))
            .map_err(|_| CliError::Validation {
                field: "vehicle".into(),
                reason: format!(
                    "'{raw}' is not a vehicle type. Expected one of: {}",
                    VehicleType::ALL.map(VehicleType::as_str).join(", ")
                ),
            }),
        SelectionField::DayType => raw
            .parse::<DayType>()
            .map(|d| Some(d.to_string()))
            .map_err(|_| CliError::Validation {
                field: "day".into(),
                reason: format!(
                    "'{raw}' is not a day type. Expected one of: {}",
                    DayType::ALL.map(DayType::as_str).join(", ")
                ),
            }),
        SelectionField::TimeRange => Ok(Some(raw.to_owned())),
    }
}
