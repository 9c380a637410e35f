// ── Fixed rate categories ──
//
// The rate service tags every record with one of these values. The
// canonical spellings are the exact strings the service emits, including
// the lower-case "weekend".

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Vehicle category a toll record applies to.
///
/// The first variant is the fallback default for a zone whose
/// representative record names no default of its own.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum VehicleType {
    #[default]
    #[serde(rename = "Heavy Goods Vehicles/Small Buses")]
    #[strum(to_string = "Heavy Goods Vehicles/Small Buses", serialize = "hgv")]
    HeavyGoodsSmallBuses,
    #[serde(rename = "Passenger Cars/Light Goods Vehicles/Taxis")]
    #[strum(
        to_string = "Passenger Cars/Light Goods Vehicles/Taxis",
        serialize = "car",
        serialize = "cars"
    )]
    PassengerCars,
    #[serde(rename = "Light Goods Vehicles")]
    #[strum(to_string = "Light Goods Vehicles", serialize = "lgv")]
    LightGoods,
    #[serde(rename = "Very Heavy Goods Vehicles/Big Buses")]
    #[strum(to_string = "Very Heavy Goods Vehicles/Big Buses", serialize = "vhgv")]
    VeryHeavyGoodsBigBuses,
    #[serde(rename = "Taxis")]
    #[strum(to_string = "Taxis", serialize = "taxi")]
    Taxis,
    #[serde(rename = "Motorcycles")]
    #[strum(to_string = "Motorcycles", serialize = "motorcycle")]
    Motorcycles,
}

impl VehicleType {
    /// All categories in chooser order.
    pub const ALL: [Self; 6] = [
        Self::HeavyGoodsSmallBuses,
        Self::PassengerCars,
        Self::LightGoods,
        Self::VeryHeavyGoodsBigBuses,
        Self::Taxis,
        Self::Motorcycles,
    ];

    /// The exact string used on the wire.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Day category a toll record applies to.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum DayType {
    #[default]
    #[serde(rename = "Weekdays")]
    #[strum(to_string = "Weekdays", serialize = "weekday")]
    Weekdays,
    #[serde(rename = "weekend")]
    #[strum(to_string = "weekend", serialize = "weekends")]
    Weekend,
}

impl DayType {
    /// All categories in chooser order.
    pub const ALL: [Self; 2] = [Self::Weekdays, Self::Weekend];

    /// The exact string used on the wire.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn fallback_is_first_in_chooser_order() {
        assert_eq!(VehicleType::default(), VehicleType::ALL[0]);
        assert_eq!(DayType::default(), DayType::ALL[0]);
        assert_eq!(VehicleType::iter().next(), Some(VehicleType::default()));
    }

    #[test]
    fn wire_spellings() {
        assert_eq!(
            VehicleType::default().as_str(),
            "Heavy Goods Vehicles/Small Buses"
        );
        assert_eq!(VehicleType::Taxis.to_string(), "Taxis");
        assert_eq!(DayType::Weekdays.as_str(), "Weekdays");
        assert_eq!(DayType::Weekend.as_str(), "weekend");
    }

    #[test]
    fn parses_case_insensitively_and_aliases() {
        assert_eq!(
            "motorcycles".parse::<VehicleType>().unwrap(),
            VehicleType::Motorcycles
        );
        assert_eq!("taxi".parse::<VehicleType>().unwrap(), VehicleType::Taxis);
        assert_eq!(
            "very heavy goods vehicles/big buses"
                .parse::<VehicleType>()
                .unwrap(),
            VehicleType::VeryHeavyGoodsBigBuses
        );
        assert_eq!("Weekend".parse::<DayType>().unwrap(), DayType::Weekend);
        assert!("Sundays".parse::<DayType>().is_err());
    }

    #[test]
    fn serde_uses_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&DayType::Weekend).unwrap(),
            "\"weekend\""
        );
        let v: VehicleType =
            serde_json::from_str("\"Passenger Cars/Light Goods Vehicles/Taxis\"").unwrap();
        assert_eq!(v, VehicleType::PassengerCars);
    }
}
