// ── Charge resolution ──
//
// Filters the record list down to one zone's current selection and picks
// the charge to display. Total over every input: no match is a value,
// not an error.

use std::fmt;

use crate::model::TollRecord;
use crate::selection::ZoneSelection;

/// Text shown when no record matches a selection.
pub const NO_DATA: &str = "no available data";

/// Outcome of resolving one zone's selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Charge {
    /// Charge of the first matching record, in dollars.
    Amount(f64),
    NoData,
}

impl Charge {
    pub fn amount(self) -> Option<f64> {
        match self {
            Self::Amount(a) => Some(a),
            Self::NoData => None,
        }
    }
}

impl fmt::Display for Charge {
    /// `$2`, `$1.5`, or the no-data sentinel.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(a) => write!(f, "${a}"),
            Self::NoData => f.write_str(NO_DATA),
        }
    }
}

/// Whether `record` belongs to `zone_id` and agrees with every set field of
/// `selection`.
pub fn record_matches(record: &TollRecord, zone_id: &str, selection: &ZoneSelection) -> bool {
    record.zone_id == zone_id
        && selection
            .vehicle_type
            .as_deref()
            .is_none_or(|v| record.vehicle_type == v)
        && selection
            .day_type
            .as_deref()
            .is_none_or(|d| record.day_type == d)
        && selection
            .time_range
            .as_deref()
            .is_none_or(|t| record.has_time_range(t))
}

/// Records matching a zone's selection, in original order.
pub fn matching_records<'a>(
    records: &'a [TollRecord],
    zone_id: &'a str,
    selection: &'a ZoneSelection,
) -> impl Iterator<Item = &'a TollRecord> + 'a {
    records
        .iter()
        .filter(move |r| record_matches(r, zone_id, selection))
}

/// Resolve the charge displayed for `zone_id` under `selection`.
///
/// The first matching record in list order wins. Several matches with
/// different charges are possible and are not reconciled.
pub fn resolve_charge(records: &[TollRecord], zone_id: &str, selection: &ZoneSelection) -> Charge {
    matching_records(records, zone_id, selection)
        .next()
        .map_or(Charge::NoData, |r| Charge::Amount(r.charge_amount))
}
