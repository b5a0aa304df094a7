use sealine_shared::is_real_price;
use serde::{Deserialize, Serialize};

/// Cabin amenity flags carried by the cabin catalog feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinFacilities {
    #[serde(default)]
    pub balcony: bool,
    #[serde(default)]
    pub bathtub: bool,
    #[serde(default)]
    pub seaview: bool,
    #[serde(default)]
    pub large_bed: bool,
    #[serde(default)]
    pub private_jacuzzi: bool,
}

/// One cabin type as the cabin catalog describes it. `boat_name` is the
/// free-text join key back to the ship catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinCatalogEntry {
    pub cabin_id: String,
    pub cabin_name: String,
    /// The name the availability backend knows this cabin by.
    #[serde(default)]
    pub cabin_name_api: String,
    pub boat_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub total_capacity: u32,
    /// May carry the upstream placeholder sentinel; check
    /// [`CabinCatalogEntry::has_real_price`] before aggregating.
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub facilities: CabinFacilities,
    #[serde(default)]
    pub image_main: String,
    /// Filled by optional image enrichment, empty otherwise.
    #[serde(default)]
    pub images: Vec<String>,
}

impl CabinCatalogEntry {
    /// The name the availability feed is most likely to use for this cabin.
    pub fn api_name(&self) -> &str {
        if self.cabin_name_api.is_empty() {
            &self.cabin_name
        } else {
            &self.cabin_name_api
        }
    }

    pub fn has_real_price(&self) -> bool {
        is_real_price(self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealine_shared::PLACEHOLDER_PRICE;

    #[test]
    fn test_cabin_entry_deserialization() {
        let json = r#"
            {
                "cabinId": "c-101",
                "cabinName": "Master Suite",
                "cabinNameApi": "MASTER SUITE",
                "boatName": "Aurora Liveaboard",
                "totalCapacity": 2,
                "price": 5200000,
                "facilities": { "balcony": true, "seaview": true }
            }
        "#;
        let cabin: CabinCatalogEntry = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(cabin.cabin_id, "c-101");
        assert_eq!(cabin.api_name(), "MASTER SUITE");
        assert!(cabin.facilities.balcony);
        assert!(!cabin.facilities.bathtub);
        assert!(cabin.has_real_price());
    }

    #[test]
    fn test_placeholder_price_is_not_real() {
        let json = format!(
            r#"{{ "cabinId": "c-1", "cabinName": "Twin", "boatName": "X", "price": {} }}"#,
            PLACEHOLDER_PRICE
        );
        let cabin: CabinCatalogEntry = serde_json::from_str(&json).unwrap();
        assert!(!cabin.has_real_price());
        // Missing cabinNameApi falls back to the display name.
        assert_eq!(cabin.api_name(), "Twin");
    }
}
