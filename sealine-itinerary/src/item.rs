use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One reserved cabin on one departure date.
///
/// There is deliberately no generated id: the (cabin, ship, date) triple is
/// the identity used for presence checks and toggling, and it survives
/// serialization untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryLineItem {
    pub cabin_name: String,
    pub ship_name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub guest_count: u32,
    #[serde(default)]
    pub added_at_epoch_ms: i64,
}

impl ItineraryLineItem {
    /// Identity check against the reservation triple.
    pub fn matches(&self, cabin_name: &str, ship_name: &str, date: NaiveDate) -> bool {
        self.cabin_name == cabin_name && self.ship_name == ship_name && self.date == date
    }
}
