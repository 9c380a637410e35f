// ── Per-zone selection state ──
//
// A `Selections` map holds one `ZoneSelection` per table row. Entries are
// `Arc`-shared so an update to one row hands every other row back the
// very same allocation; a consumer watching one key can compare pointers.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::model::{RecordId, TollRecord};

// ── ZoneSelection ───────────────────────────────────────────────────

/// The user's current filter choice for one zone.
///
/// `None` means unset, and an unset field does not constrain matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneSelection {
    pub vehicle_type: Option<String>,
    pub day_type: Option<String>,
    pub time_range: Option<String>,
}

impl ZoneSelection {
    pub fn set(&mut self, field: SelectionField, value: Option<String>) {
        let slot = match field {
            SelectionField::VehicleType => &mut self.vehicle_type,
            SelectionField::DayType => &mut self.day_type,
            SelectionField::TimeRange => &mut self.time_range,
        };
        *slot = value;
    }

    /// Builder-style `set`.
    pub fn with(mut self, field: SelectionField, value: impl Into<String>) -> Self {
        self.set(field, Some(value.into()));
        self
    }
}

/// One column of a zone's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum SelectionField {
    #[strum(to_string = "vehicle", serialize = "vehicle-type", serialize = "vehicle_type")]
    VehicleType,
    #[strum(to_string = "day", serialize = "day-type", serialize = "day_type")]
    DayType,
    #[strum(to_string = "time", serialize = "time-range", serialize = "time_range")]
    TimeRange,
}

// ── Row keys ────────────────────────────────────────────────────────

/// How selection rows are keyed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum KeyMode {
    /// Key by zone id. Stable across reloads that reorder records.
    #[default]
    #[strum(to_string = "zone")]
    Zone,
    /// Key by the id of the zone's first record, as the web table did.
    #[strum(to_string = "record", serialize = "representative-record")]
    RepresentativeRecord,
}

impl KeyMode {
    /// Row key for a zone whose first record is `representative`.
    pub fn key_for(self, representative: &TollRecord) -> RowKey {
        match self {
            Self::Zone => RowKey::Zone(representative.zone_id.clone()),
            Self::RepresentativeRecord => RowKey::Record(representative.id.clone()),
        }
    }
}

/// Key of one row in a [`Selections`] map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowKey {
    Zone(String),
    Record(RecordId),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zone(z) => write!(f, "{z}"),
            Self::Record(id) => write!(f, "{id}"),
        }
    }
}

// ── Selections ──────────────────────────────────────────────────────

/// Ordered mapping from row key to that row's selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selections {
    entries: IndexMap<RowKey, Arc<ZoneSelection>>,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &RowKey) -> Option<&ZoneSelection> {
        self.entries.get(key).map(Arc::as_ref)
    }

    /// The shared handle for a row, for identity comparisons.
    pub fn get_shared(&self, key: &RowKey) -> Option<&Arc<ZoneSelection>> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &RowKey> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RowKey, &ZoneSelection)> {
        self.entries.iter().map(|(k, v)| (k, Arc::as_ref(v)))
    }

    /// Insert or replace a whole row.
    pub fn insert(&mut self, key: RowKey, selection: ZoneSelection) {
        self.entries.insert(key, Arc::new(selection));
    }

    /// See [`set_field`].
    pub fn set_field(&self, key: &RowKey, field: SelectionField, value: Option<String>) -> Self {
        set_field(self, key, field, value)
    }
}

impl FromIterator<(RowKey, ZoneSelection)> for Selections {
    fn from_iter<I: IntoIterator<Item = (RowKey, ZoneSelection)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k, Arc::new(v)))
                .collect(),
        }
    }
}

/// Return a copy of `selections` with `selections[key][field] = value`.
///
/// Every other row keeps its existing `Arc`. A key with no row yet gets a
/// fresh row holding just this field. The value is not checked against the
/// fixed enumerations; an unknown value simply never matches a record.
pub fn set_field(
    selections: &Selections,
    key: &RowKey,
    field: SelectionField,
    value: Option<String>,
) -> Selections {
    let mut updated = selections
        .get(key)
        .cloned()
        .unwrap_or_default();
    updated.set(field, value);

    let mut entries = selections.entries.clone();
    entries.insert(key.clone(), Arc::new(updated));
    Selections { entries }
}
