//! User-selected search criteria and the query-string shape they travel in.
//!
//! The storefront keeps the current search in the URL (`destinations`,
//! `dateFrom`, `dateTo`, `duration`, `guests`), so criteria must parse from
//! and re-serialize back into exactly those keys. Bad values never reject
//! the action; they fall back to the component defaults.

use sealine_shared::{format_iso_date, parse_iso_date, DateRange};
use serde::{Deserialize, Serialize};

/// Fallback when a duration value is missing a parsable number.
pub const DEFAULT_TRIP_DURATION_DAYS: u32 = 3;
/// Fallback when a guest count value is missing a parsable number.
pub const DEFAULT_GUEST_COUNT: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    Name,
    #[default]
    Recommended,
}

impl SortKey {
    /// Parse a sort query parameter. Unknown values fall back to the
    /// default ordering rather than erroring.
    pub fn from_param(raw: &str) -> Self {
        match raw.trim() {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "name" => SortKey::Name,
            _ => SortKey::Recommended,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Name => "name",
            SortKey::Recommended => "recommended",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Free-text query against ship name, trip name and destinations.
    pub query: Option<String>,
    /// Selected destination ids, slug form ("komodo-national-park").
    pub destinations: Vec<String>,
    /// Explicit travel window. None means browse mode.
    pub date_range: Option<DateRange>,
    /// Exact trip length filter, in days.
    pub duration_days: Option<u32>,
    /// Minimum guest capacity any cabin must offer.
    pub min_guests: Option<u32>,
    pub sort: SortKey,
}

impl SearchCriteria {
    /// Build criteria from URL query pairs.
    ///
    /// Only the persisted keys are read here (`destinations`, `dateFrom`,
    /// `dateTo`, `duration`, `guests`). Present-but-unparsable values take
    /// the component defaults; absent keys leave the filter off entirely.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut criteria = SearchCriteria::default();
        let mut date_from = None;
        let mut date_to = None;

        for (key, value) in pairs {
            match key {
                "destinations" => {
                    criteria.destinations = value
                        .split(',')
                        .map(str::trim)
                        .filter(|id| !id.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                "dateFrom" => date_from = Some(value.to_string()),
                "dateTo" => date_to = Some(value.to_string()),
                "duration" => {
                    criteria.duration_days = Some(parse_count(value, DEFAULT_TRIP_DURATION_DAYS));
                }
                "guests" => {
                    criteria.min_guests = Some(parse_count(value, DEFAULT_GUEST_COUNT));
                }
                _ => {}
            }
        }

        // A valid dateFrom is required for a range; dateTo alone is ignored
        // and an unparsable dateTo degrades to a single-day window.
        if let Some(from) = date_from.as_deref().and_then(parse_iso_date) {
            let to = date_to.as_deref().and_then(parse_iso_date).unwrap_or(from);
            criteria.date_range = Some(DateRange::new(from, to));
        }

        criteria
    }

    /// Serialize current criteria back into the persisted query keys, in a
    /// stable order. Unset filters are omitted.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if !self.destinations.is_empty() {
            pairs.push(("destinations".to_string(), self.destinations.join(",")));
        }
        if let Some(range) = &self.date_range {
            pairs.push(("dateFrom".to_string(), format_iso_date(range.from)));
            pairs.push(("dateTo".to_string(), format_iso_date(range.to)));
        }
        if let Some(duration) = self.duration_days {
            pairs.push(("duration".to_string(), duration.to_string()));
        }
        if let Some(guests) = self.min_guests {
            pairs.push(("guests".to_string(), guests.to_string()));
        }
        pairs
    }

    pub fn has_date_range(&self) -> bool {
        self.date_range.is_some()
    }
}

fn parse_count(raw: &str, default: u32) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(default)
}

/// Extract the trip length in days from the catalog's free-text trip length
/// field ("4D3N", "4 days / 3 nights"). The first integer wins; text with
/// no number takes the duration default.
pub fn parse_trip_length_days(raw: &str) -> u32 {
    let mut digits = String::new();
    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if !digits.is_empty() {
            break;
        }
    }
    digits.parse().unwrap_or(DEFAULT_TRIP_DURATION_DAYS)
}
