// ── Favorite location domain type ──

use serde::{Deserialize, Serialize};

/// A saved address shown on the favorites panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteLocation {
    /// Display title ("Home" or "Work").
    pub title: String,
    pub address: String,
}

impl FavoriteLocation {
    pub fn new(title: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            address: address.into(),
        }
    }
}

/// Build the favorites list from a user's saved home and work addresses.
///
/// Both must be present and non-empty; otherwise the user has no usable
/// favorites and the list is empty.
pub fn favorite_locations(home: Option<&str>, work: Option<&str>) -> Vec<FavoriteLocation> {
    match (non_empty(home), non_empty(work)) {
        (Some(home), Some(work)) => vec![
            FavoriteLocation::new("Home", home),
            FavoriteLocation::new("Work", work),
        ],
        _ => Vec::new(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_addresses_give_home_then_work() {
        let favs = favorite_locations(Some("10 Clementi Ave"), Some("1 Raffles Pl"));
        assert_eq!(
            favs,
            vec![
                FavoriteLocation::new("Home", "10 Clementi Ave"),
                FavoriteLocation::new("Work", "1 Raffles Pl"),
            ]
        );
    }

    #[test]
    fn one_missing_gives_nothing() {
        assert!(favorite_locations(Some("10 Clementi Ave"), None).is_empty());
        assert!(favorite_locations(None, Some("1 Raffles Pl")).is_empty());
        assert!(favorite_locations(Some(""), Some("1 Raffles Pl")).is_empty());
    }
}
