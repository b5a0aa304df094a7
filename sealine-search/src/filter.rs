//! Pure, synchronous filtering and sorting of the reconciled ship list.
//!
//! Criteria compose with AND semantics. Missing data never excludes: a
//! ship with no destination text survives any destination filter, and a
//! ship with no real price sorts to the bottom instead of the top.

use crate::model::EnrichedShip;
use sealine_core::criteria::{parse_trip_length_days, SearchCriteria, SortKey};
use sealine_core::matching::{destination_matches, normalized_contains};

pub fn filter_and_sort(ships: Vec<EnrichedShip>, criteria: &SearchCriteria) -> Vec<EnrichedShip> {
    let mut ships: Vec<EnrichedShip> = ships
        .into_iter()
        .filter(|ship| matches_criteria(ship, criteria))
        .collect();
    sort_ships(&mut ships, criteria.sort);
    ships
}

fn matches_criteria(ship: &EnrichedShip, criteria: &SearchCriteria) -> bool {
    if let Some(query) = criteria.query.as_deref() {
        if !query.trim().is_empty()
            && !(normalized_contains(&ship.ship.name, query)
                || normalized_contains(&ship.ship.trip_name, query)
                || normalized_contains(&ship.ship.destinations, query))
        {
            return false;
        }
    }

    // A ship with no destination data is "unknown", not excluded.
    if !criteria.destinations.is_empty() && !ship.ship.destinations.trim().is_empty() {
        let any_selected = criteria
            .destinations
            .iter()
            .any(|id| destination_matches(id, &ship.ship.destinations));
        if !any_selected {
            return false;
        }
    }

    if let Some(duration) = criteria.duration_days {
        if parse_trip_length_days(&ship.ship.trip_length_days) != duration {
            return false;
        }
    }

    if let Some(guests) = criteria.min_guests {
        if !ship
            .cabins
            .iter()
            .any(|c| c.cabin.total_capacity >= guests)
        {
            return false;
        }
    }

    if criteria.has_date_range() && !ship.is_available {
        return false;
    }

    true
}

/// Ascending price position: unset/zero prices count as infinite so
/// priceless ships sink to the end.
fn price_rank(ship: &EnrichedShip) -> i64 {
    if ship.lowest_valid_price > 0 {
        ship.lowest_valid_price
    } else {
        i64::MAX
    }
}

fn sort_ships(ships: &mut [EnrichedShip], key: SortKey) {
    match key {
        SortKey::PriceLow => ships.sort_by_key(price_rank),
        SortKey::PriceHigh => ships.sort_by_key(|s| std::cmp::Reverse(s.lowest_valid_price)),
        SortKey::Name => ships.sort_by(|a, b| a.ship.name.to_lowercase().cmp(&b.ship.name.to_lowercase())),
        SortKey::Recommended => ships.sort_by(|a, b| {
            b.available_cabin_count
                .cmp(&a.available_cabin_count)
                .then_with(|| price_rank(a).cmp(&price_rank(b)))
        }),
    }
}
