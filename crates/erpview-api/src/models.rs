// Wire types for the rate and address services.
//
// Field names follow the services' JSON exactly. Everything beyond the
// record id is defaulted so one malformed record never fails a whole
// fetch; `erpview-core` decides what to keep.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One toll record from `GET /erp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTollRecord {
    /// Opaque id; seen as both numbers and strings.
    #[serde(rename = "_id", default)]
    pub id: Value,
    #[serde(rename = "ZoneID", default)]
    pub zone_id: String,
    #[serde(rename = "VehicleType", default)]
    pub vehicle_type: String,
    #[serde(rename = "DayType", default)]
    pub day_type: String,
    #[serde(rename = "StartTime", default)]
    pub start_time: String,
    #[serde(rename = "EndTime", default)]
    pub end_time: String,
    /// Usually a number, occasionally a numeric string.
    #[serde(rename = "ChargeAmount", default)]
    pub charge_amount: Option<Value>,
    #[serde(rename = "defaultVehicleType", default)]
    pub default_vehicle_type: Option<String>,
    #[serde(rename = "defaultDayType", default)]
    pub default_day_type: Option<String>,
    #[serde(rename = "defaultStartTime", default)]
    pub default_start_time: Option<String>,
}

/// Body of `POST /get-address/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressRequest {
    pub username: String,
}

/// Response of `POST /get-address/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    #[serde(default)]
    pub home_address: Option<String>,
    #[serde(default)]
    pub work_address: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_record() {
        let raw: RawTollRecord = serde_json::from_value(json!({
            "_id": 1,
            "ZoneID": "AY1",
            "VehicleType": "Taxis",
            "DayType": "Weekdays",
            "StartTime": "08:00",
            "EndTime": "08:30",
            "ChargeAmount": 2,
            "defaultDayType": "weekend"
        }))
        .unwrap();

        assert_eq!(raw.id, json!(1));
        assert_eq!(raw.zone_id, "AY1");
        assert_eq!(raw.charge_amount, Some(json!(2)));
        assert_eq!(raw.default_day_type.as_deref(), Some("weekend"));
        assert!(raw.default_vehicle_type.is_none());
    }

    #[test]
    fn missing_fields_default() {
        let raw: RawTollRecord = serde_json::from_value(json!({ "_id": "abc" })).unwrap();
        assert!(raw.zone_id.is_empty());
        assert!(raw.charge_amount.is_none());
    }

    #[test]
    fn address_uses_camel_case() {
        let resp: AddressResponse = serde_json::from_value(json!({
            "homeAddress": "1 Home Rd",
            "workAddress": "2 Work St"
        }))
        .unwrap();
        assert_eq!(resp.home_address.as_deref(), Some("1 Home Rd"));
        assert_eq!(resp.work_address.as_deref(), Some("2 Work St"));
    }
}
