// ── Rate board ──
//
// Owns the loaded dataset and the live selections for one session. Every
// replacement of either input rebuilds the zone index and resets all
// selections to their defaults, discarding user edits.

use serde::Serialize;
use tracing::debug;

use crate::index::{ZoneIndex, ZoneRow, rebuild_index};
use crate::model::TollRecord;
use crate::resolve::{Charge, resolve_charge};
use crate::selection::{KeyMode, RowKey, SelectionField, Selections, ZoneSelection};

/// One rendered row: a zone, its selection and the resolved charge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateRow {
    pub zone_id: String,
    pub vehicle_type: Option<String>,
    pub day_type: Option<String>,
    pub time_range: Option<String>,
    /// Display text: `$2` or the no-data sentinel.
    pub charge: String,
    pub charge_amount: Option<f64>,
}

/// Session state behind the rate table.
#[derive(Debug, Clone, Default)]
pub struct RateBoard {
    records: Vec<TollRecord>,
    time_windows: Vec<String>,
    key_mode: KeyMode,
    index: ZoneIndex,
    selections: Selections,
    rebuilds: u64,
}

impl RateBoard {
    pub fn new(key_mode: KeyMode) -> Self {
        Self {
            key_mode,
            ..Self::default()
        }
    }

    // ── Dataset replacement ──────────────────────────────────────────

    /// Replace the record list and reset selections.
    pub fn replace_records(&mut self, records: Vec<TollRecord>) {
        self.records = records;
        self.rebuild();
    }

    /// Replace the time-window catalogue and reset selections.
    pub fn replace_time_windows(&mut self, time_windows: Vec<String>) {
        self.time_windows = time_windows;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.index = rebuild_index(&self.records, &self.time_windows, self.key_mode);
        self.selections = self.index.defaults().clone();
        self.rebuilds += 1;
        debug!(
            rebuild = self.rebuilds,
            zones = self.index.len(),
            records = self.records.len(),
            windows = self.time_windows.len(),
            "zone index rebuilt, selections reset"
        );
    }

    // ── Selection edits ──────────────────────────────────────────────

    /// Set one field of one zone's selection. Returns `false` for an
    /// unknown zone.
    pub fn set_field(
        &mut self,
        zone_id: &str,
        field: SelectionField,
        value: Option<String>,
    ) -> bool {
        let Some(key) = self.index.row(zone_id).map(|row| row.key.clone()) else {
            return false;
        };
        self.set_field_by_key(&key, field, value);
        true
    }

    /// Set one field of the row stored under `key`.
    pub fn set_field_by_key(&mut self, key: &RowKey, field: SelectionField, value: Option<String>) {
        self.selections = self.selections.set_field(key, field, value);
    }

    /// Set the same field on every zone.
    pub fn set_field_all(&mut self, field: SelectionField, value: Option<&str>) {
        let keys: Vec<RowKey> = self.index.zones().iter().map(|z| z.key.clone()).collect();
        for key in keys {
            self.set_field_by_key(&key, field, value.map(str::to_owned));
        }
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn records(&self) -> &[TollRecord] {
        &self.records
    }

    pub fn time_windows(&self) -> &[String] {
        &self.time_windows
    }

    pub fn zones(&self) -> &[ZoneRow] {
        self.index.zones()
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn key_mode(&self) -> KeyMode {
        self.key_mode
    }

    /// How many times the index has been rebuilt this session.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Current selection for a zone; all-unset when the zone has no row.
    pub fn selection(&self, zone_id: &str) -> ZoneSelection {
        self.index
            .row(zone_id)
            .and_then(|row| self.selections.get(&row.key))
            .cloned()
            .unwrap_or_default()
    }

    pub fn charge(&self, zone_id: &str) -> Charge {
        resolve_charge(&self.records, zone_id, &self.selection(zone_id))
    }

    /// One row per zone, in first-seen order.
    pub fn rows(&self) -> Vec<RateRow> {
        self.index
            .zones()
            .iter()
            .map(|zone| {
                let selection = self
                    .selections
                    .get(&zone.key)
                    .cloned()
                    .unwrap_or_default();
                let charge = resolve_charge(&self.records, &zone.zone_id, &selection);
                RateRow {
                    zone_id: zone.zone_id.clone(),
                    vehicle_type: selection.vehicle_type,
                    day_type: selection.day_type,
                    time_range: selection.time_range,
                    charge: charge.to_string(),
                    charge_amount: charge.amount(),
                }
            })
            .collect()
    }
}
