use serde::{Deserialize, Serialize};

/// One ship as the marketing catalog describes it. Immutable per fetch;
/// the whole catalog is replaced wholesale on reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipCatalogEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Free text from the feed ("4D3N", "4 days"). Parsed on demand.
    #[serde(default)]
    pub trip_length_days: String,
    #[serde(default)]
    pub trip_name: String,
    /// Free-text destination list ("Labuan Bajo, Komodo").
    #[serde(default)]
    pub destinations: String,
    #[serde(default)]
    pub image_main: String,
    #[serde(default)]
    pub images: Vec<String>,
}
