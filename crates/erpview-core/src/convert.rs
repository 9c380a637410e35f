// ── API-to-domain type conversions ──
//
// Bridges raw `erpview_api` response types into `erpview_core::model`
// domain types. Records that break the model's invariants are dropped
// one at a time so a single bad row never empties the table.

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use erpview_api::{AddressResponse, RawTollRecord};

use crate::model::{FavoriteLocation, RecordId, TollRecord, favorite_locations};

/// Why a raw record was dropped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectedRecord {
    #[error("record {id} has no zone")]
    EmptyZone { id: RecordId },

    #[error("record {id} has no usable charge amount")]
    MissingCharge { id: RecordId },

    #[error("record {id} has a negative charge ({amount})")]
    NegativeCharge { id: RecordId, amount: f64 },
}

// ── Helpers ────────────────────────────────────────────────────────

/// Integer ids stay numeric; anything else is kept as text.
fn record_id(raw: &Value) -> RecordId {
    match raw {
        Value::Number(n) => n
            .as_i64()
            .map_or_else(|| RecordId::Text(n.to_string()), RecordId::Number),
        Value::String(s) => RecordId::Text(s.clone()),
        Value::Null => RecordId::Text(String::new()),
        other => RecordId::Text(other.to_string()),
    }
}

/// Accept a JSON number or a numeric string.
fn charge_amount(raw: Option<&Value>) -> Option<f64> {
    match raw? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|a: &f64| a.is_finite())
}

// ── Toll records ───────────────────────────────────────────────────

impl TryFrom<RawTollRecord> for TollRecord {
    type Error = RejectedRecord;

    fn try_from(raw: RawTollRecord) -> Result<Self, Self::Error> {
        let id = record_id(&raw.id);

        if raw.zone_id.trim().is_empty() {
            return Err(RejectedRecord::EmptyZone { id });
        }
        let Some(amount) = charge_amount(raw.charge_amount.as_ref()) else {
            return Err(RejectedRecord::MissingCharge { id });
        };
        if amount < 0.0 {
            return Err(RejectedRecord::NegativeCharge { id, amount });
        }

        Ok(Self {
            id,
            zone_id: raw.zone_id,
            vehicle_type: raw.vehicle_type,
            day_type: raw.day_type,
            start_time: raw.start_time,
            end_time: raw.end_time,
            charge_amount: amount,
            default_vehicle_type: raw.default_vehicle_type,
            default_day_type: raw.default_day_type,
            default_start_time: raw.default_start_time,
        })
    }
}

/// Convert a fetched record list, keeping service order and logging drops.
pub fn records_from_raw(raw: Vec<RawTollRecord>) -> Vec<TollRecord> {
    let total = raw.len();
    let records: Vec<TollRecord> = raw
        .into_iter()
        .filter_map(|r| {
            TollRecord::try_from(r)
                .inspect_err(|e| warn!(reason = %e, "dropping toll record"))
                .ok()
        })
        .collect();

    if records.len() < total {
        warn!(
            kept = records.len(),
            dropped = total - records.len(),
            "some toll records were unusable"
        );
    }
    records
}

// ── Favorites ──────────────────────────────────────────────────────

/// Favorites from a saved-address response: home then work, or nothing.
pub fn favorites_from_response(resp: &AddressResponse) -> Vec<FavoriteLocation> {
    favorite_locations(resp.home_address.as_deref(), resp.work_address.as_deref())
}
