// ── Toll record domain type ──

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between start and end in a time-range key.
pub const TIME_RANGE_SEPARATOR: &str = " to ";

/// Build the time-range key `"{start} to {end}"`.
pub fn time_range_key(start: &str, end: &str) -> String {
    format!("{start}{TIME_RANGE_SEPARATOR}{end}")
}

// ── RecordId ────────────────────────────────────────────────────────

/// Opaque record identifier assigned by the rate service.
///
/// The service has shipped both integer and string ids; both are kept
/// verbatim so equality matches what the service considers the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

// ── TollRecord ──────────────────────────────────────────────────────

/// One priced entry for a zone under a specific condition.
///
/// Category fields stay as strings: a value outside the fixed
/// enumerations is kept and simply never matches a chooser value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TollRecord {
    pub id: RecordId,
    pub zone_id: String,
    pub vehicle_type: String,
    pub day_type: String,
    pub start_time: String,
    pub end_time: String,
    /// Non-negative charge in dollars.
    pub charge_amount: f64,

    // Only consulted when building a zone's initial selection.
    pub default_vehicle_type: Option<String>,
    pub default_day_type: Option<String>,
    pub default_start_time: Option<String>,
}

impl TollRecord {
    /// This record's time-range key.
    pub fn time_range(&self) -> String {
        time_range_key(&self.start_time, &self.end_time)
    }

    /// Whether `key` equals this record's time-range key, without allocating.
    pub fn has_time_range(&self, key: &str) -> bool {
        key.strip_prefix(self.start_time.as_str())
            .and_then(|rest| rest.strip_prefix(TIME_RANGE_SEPARATOR))
            .is_some_and(|end| end == self.end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn time_range_key_format() {
        assert_eq!(time_range_key("08:00", "08:30"), "08:00 to 08:30");
    }

    #[test]
    fn has_time_range_matches_exact_key_only() {
        let r = record(1, "AY1", "Taxis", "Weekdays", "08:00", "08:30", 2.0);
        assert!(r.has_time_range("08:00 to 08:30"));
        assert_eq!(r.time_range(), "08:00 to 08:30");
        assert!(!r.has_time_range("08:00 to 08:3"));
        assert!(!r.has_time_range("08:00 to 08:30 "));
        assert!(!r.has_time_range("08:00-08:30"));
        assert!(!r.has_time_range("08:00"));
    }

    #[test]
    fn record_id_display() {
        assert_eq!(RecordId::from(5).to_string(), "5");
        assert_eq!(RecordId::from("64a0f1").to_string(), "64a0f1");
        assert_ne!(RecordId::from(5), RecordId::from("5"));
    }
}
