// ── Zone index ──
//
// Derives the distinct zones of a record list and the default selection
// for each. Rebuilding is a pure function of its inputs; the caller runs it
// again whenever either input changes and replaces its previous result.

use indexmap::IndexMap;
use tracing::trace;

use crate::model::{DayType, RecordId, TollRecord, VehicleType};
use crate::selection::{KeyMode, RowKey, Selections, ZoneSelection};

/// One distinct zone, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRow {
    pub zone_id: String,
    /// Id of the first record carrying this zone.
    pub representative_id: RecordId,
    /// Key of this zone's entry in the selections map.
    pub key: RowKey,
}

/// Distinct zones plus their default selections.
#[derive(Debug, Clone, Default)]
pub struct ZoneIndex {
    zones: Vec<ZoneRow>,
    defaults: Selections,
    key_mode: KeyMode,
}

impl ZoneIndex {
    pub fn zones(&self) -> &[ZoneRow] {
        &self.zones
    }

    pub fn zone_ids(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(|z| z.zone_id.as_str())
    }

    pub fn row(&self, zone_id: &str) -> Option<&ZoneRow> {
        self.zones.iter().find(|z| z.zone_id == zone_id)
    }

    pub fn defaults(&self) -> &Selections {
        &self.defaults
    }

    pub fn key_mode(&self) -> KeyMode {
        self.key_mode
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// Build the zone index for `records`.
///
/// Zones appear in the order their first record appears. Each zone's
/// default selection comes from that first record (see
/// [`default_selection`]). An empty record list gives an empty index.
pub fn rebuild_index(
    records: &[TollRecord],
    time_windows: &[String],
    key_mode: KeyMode,
) -> ZoneIndex {
    let mut first_seen: IndexMap<&str, &TollRecord> = IndexMap::new();
    for record in records {
        first_seen.entry(record.zone_id.as_str()).or_insert(record);
    }

    let fallback_window = time_windows.first().map(String::as_str);
    let mut zones = Vec::with_capacity(first_seen.len());
    let mut defaults = Selections::new();

    for (zone_id, representative) in first_seen {
        let key = key_mode.key_for(representative);
        let selection = default_selection(representative, fallback_window);
        trace!(zone = zone_id, %key, ?selection, "zone default");

        defaults.insert(key.clone(), selection);
        zones.push(ZoneRow {
            zone_id: zone_id.to_owned(),
            representative_id: representative.id.clone(),
            key,
        });
    }

    ZoneIndex {
        zones,
        defaults,
        key_mode,
    }
}

/// Initial selection for a zone whose first record is `representative`.
///
/// Each field takes the record's own default when it has a non-empty one,
/// else the first vehicle type, the first day type, and `fallback_window`.
///
/// `default_start_time` is a bare start time while `fallback_window` is a
/// full `"start to end"` key. A bare start time never equals a record's
/// time-range key, so such a zone resolves to no data until the user picks
/// a window. This is kept as observed rather than normalised.
pub fn default_selection(
    representative: &TollRecord,
    fallback_window: Option<&str>,
) -> ZoneSelection {
    ZoneSelection {
        vehicle_type: Some(
            non_empty(representative.default_vehicle_type.as_deref())
                .unwrap_or(VehicleType::default().as_str())
                .to_owned(),
        ),
        day_type: Some(
            non_empty(representative.default_day_type.as_deref())
                .unwrap_or(DayType::default().as_str())
                .to_owned(),
        ),
        time_range: non_empty(representative.default_start_time.as_deref())
            .or(fallback_window)
            .map(str::to_owned),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
