// ── Zone location catalogue ──
//
// Gantry locations covered by each known zone code. The rate service
// only ships zone codes, so this table is maintained by hand.

/// Known zones and the gantry locations each one covers.
const ZONE_LOCATIONS: &[(&str, &[&str])] = &[
    ("AY1", &["AYE to City before Alexandra Road"]),
    (
        "AYC",
        &[
            "Clementi Avenue 6 into AYE (City)",
            "AYE to City Before Clementi Avenue 6",
        ],
    ),
    ("AYT", &["AYE to Tuas Before Clementi Road"]),
    ("BKE", &["Bt Timah Expressway (Sb betw Dairy Farm Rd and PIE)"]),
    ("BKZ", &["Upper Boon Keng Road"]),
    (
        "BMC",
        &[
            "Victoria Street",
            "Nicoll Highway",
            "Bencoolen Street",
            "Queen Street",
            "North Bridge Road",
            "Beach Road",
            "Temasek Boulevard",
            "Republic Boulevard",
            "River Valley Road",
        ],
    ),
    (
        "CBD",
        &[
            "Eu Tong Sen Street",
            "Lim Teck Kim Road",
            "Anson Road",
            "Tanjong Pagar Road",
            "Havelock Road/Clemenceau Ave",
            "Havelock Road/CTE Exit",
            "Merchant Road/Clemenceau Ave",
            "Merchant Road/CTE Exit",
            "Central Boulevard",
            "Slip Road from Westbound MCE towards Maxwell Road",
            "Sheares Avenue towards Sheares Link",
        ],
    ),
];

/// Zone codes with a known location list, in catalogue order.
pub fn known_zones() -> impl Iterator<Item = &'static str> {
    ZONE_LOCATIONS.iter().map(|(zone, _)| *zone)
}

/// Gantry locations for a zone code (case-insensitive); empty when unknown.
pub fn zone_locations(zone_id: &str) -> &'static [&'static str] {
    ZONE_LOCATIONS
        .iter()
        .find(|(zone, _)| zone.eq_ignore_ascii_case(zone_id))
        .map(|(_, locations)| *locations)
        .unwrap_or_default()
}
