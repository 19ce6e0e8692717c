//! Quick-select farming regions

use serde::Serialize;

use crate::types::Location;

/// A preset region offered next to the map
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Region {
    pub id: &'static str,
    pub label: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl Region {
    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude, self.label)
    }
}

pub const QUICK_SELECT_REGIONS: [Region; 5] = [
    Region {
        id: "punjab",
        label: "Punjab, India",
        latitude: 31.1471,
        longitude: 75.3412,
    },
    Region {
        id: "maharashtra",
        label: "Maharashtra, India",
        latitude: 19.7515,
        longitude: 75.7139,
    },
    Region {
        id: "karnataka",
        label: "Karnataka, India",
        latitude: 15.3173,
        longitude: 75.7139,
    },
    Region {
        id: "gujarat",
        label: "Gujarat, India",
        latitude: 22.2587,
        longitude: 71.1924,
    },
    Region {
        id: "westbengal",
        label: "West Bengal, India",
        latitude: 22.9868,
        longitude: 87.855,
    },
];

/// Look up a preset by id ("punjab") or label ("Punjab, India"), ignoring case
pub fn find_region(key: &str) -> Option<&'static Region> {
    let key = key.trim().to_lowercase();
    QUICK_SELECT_REGIONS
        .iter()
        .find(|r| r.id == key || r.label.to_lowercase() == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_region_by_id_and_label() {
        assert_eq!(find_region("punjab").map(|r| r.label), Some("Punjab, India"));
        assert_eq!(
            find_region("West Bengal, India").map(|r| r.id),
            Some("westbengal")
        );
        assert!(find_region("kerala").is_none());
    }

    #[test]
    fn test_region_location_uses_label() {
        let location = QUICK_SELECT_REGIONS[2].location();
        assert_eq!(location.display_name, "Karnataka, India");
        assert_eq!(location.latitude, 15.3173);
    }
}
