//! Joins the three feeds into one consistent list of [`EnrichedShip`]s.
//!
//! The catalog names a ship one way, the availability feed another, and the
//! cabin catalog a third; every join here goes through the matcher. Ships
//! keep the catalog feed's relative order; operators with inventory but no
//! catalog entry are appended afterwards as synthetic ships so bookable
//! inventory never disappears from the storefront.

use crate::model::{EnrichedCabin, EnrichedShip};
use sealine_availability::{AvailabilitySnapshot, OperatorAvailability};
use sealine_catalog::{CabinCatalogEntry, CatalogSnapshot, ShipCatalogEntry};
use sealine_core::matching::{boat_names_match, cabin_names_match};
use sealine_shared::DateRange;
use std::collections::HashSet;
use tracing::warn;

/// Imagery for ships the catalog does not know.
pub const SYNTHETIC_SHIP_IMAGE: &str = "/images/ship-placeholder.jpg";

/// Build the reconciled ship list from the current snapshots.
///
/// Pure with respect to its inputs; callers rebuild the whole list on every
/// criteria change instead of patching ships in place.
pub fn reconcile(
    catalog: &CatalogSnapshot,
    availability: &AvailabilitySnapshot,
    date_range: Option<&DateRange>,
) -> Vec<EnrichedShip> {
    let mut ships = Vec::with_capacity(catalog.ships.len());
    let mut matched_operators: HashSet<String> = HashSet::new();

    for ship_entry in &catalog.ships {
        let ship_cabins: Vec<&CabinCatalogEntry> = catalog
            .cabins
            .iter()
            .filter(|c| boat_names_match(&c.boat_name, &ship_entry.name))
            .collect();

        let operator = availability
            .operators
            .values()
            .find(|op| boat_names_match(&op.operator_name, &ship_entry.name));
        if let Some(op) = operator {
            matched_operators.insert(op.operator_name.clone());
        }

        ships.push(build_catalog_ship(
            ship_entry,
            &ship_cabins,
            operator,
            availability,
            date_range,
        ));
    }

    // Second pass over the operators: inventory the catalog has no entry
    // for still gets a (synthetic) ship. Sorted so output order is stable.
    let mut operator_names: Vec<&String> = availability.operators.keys().collect();
    operator_names.sort();
    for name in operator_names {
        let operator = &availability.operators[name];
        if operator.total_available_cabins == 0 || matched_operators.contains(&operator.operator_name)
        {
            continue;
        }
        ships.push(build_synthetic_ship(operator, availability));
    }

    ships
}

fn build_catalog_ship(
    entry: &ShipCatalogEntry,
    ship_cabins: &[&CabinCatalogEntry],
    operator: Option<&OperatorAvailability>,
    availability: &AvailabilitySnapshot,
    date_range: Option<&DateRange>,
) -> EnrichedShip {
    let is_available = operator
        .map(|op| op.total_available_cabins > 0)
        .unwrap_or(false);

    let (cabins, available_cabin_count) = if date_range.is_some() {
        targeted_cabins(entry, ship_cabins, operator)
    } else {
        browse_cabins(ship_cabins, operator, availability)
    };

    let lowest_valid_price = EnrichedShip::compute_lowest_valid_price(&cabins);
    EnrichedShip {
        ship: entry.clone(),
        cabins,
        is_available,
        available_cabin_count,
        lowest_valid_price,
        synthetic: false,
    }
}

/// Targeted mode: only cabins the operator confirmed for the window
/// survive, carrying the confirmed dates.
fn targeted_cabins(
    entry: &ShipCatalogEntry,
    ship_cabins: &[&CabinCatalogEntry],
    operator: Option<&OperatorAvailability>,
) -> (Vec<EnrichedCabin>, u32) {
    let Some(operator) = operator else {
        return (Vec::new(), 0);
    };

    let mut kept = Vec::new();
    for cabin in ship_cabins {
        let confirmed = operator
            .cabins
            .iter()
            .find(|ac| ac.available_count > 0 && cabin_names_match(&ac.name, cabin.api_name()));
        if let Some(confirmed) = confirmed {
            kept.push(EnrichedCabin {
                cabin: (*cabin).clone(),
                available_dates: confirmed.available_dates.clone(),
            });
        }
    }

    if kept.is_empty() && operator.total_available_cabins > 0 {
        // The operator has inventory under cabin names the catalog does not
        // recognize. Trust the operator's total and surface the mismatch
        // instead of hiding the ship.
        warn!(
            "Operator '{}' reports {} available cabins but none matched catalog cabin names for ship '{}'",
            operator.operator_name, operator.total_available_cabins, entry.name
        );
        return (kept, operator.total_available_cabins);
    }

    let count = kept.len() as u32;
    (kept, count)
}

/// Browse mode: never drop a cabin; tag each with the best date source we
/// have — its own confirmed dates, the operator's ship-level dates, or the
/// global browse pool.
fn browse_cabins(
    ship_cabins: &[&CabinCatalogEntry],
    operator: Option<&OperatorAvailability>,
    availability: &AvailabilitySnapshot,
) -> (Vec<EnrichedCabin>, u32) {
    let cabins: Vec<EnrichedCabin> = ship_cabins
        .iter()
        .map(|cabin| {
            let dates = operator
                .and_then(|op| {
                    op.cabins
                        .iter()
                        .find(|ac| cabin_names_match(&ac.name, cabin.api_name()))
                        .filter(|ac| !ac.available_dates.is_empty())
                        .map(|ac| ac.available_dates.clone())
                })
                .or_else(|| {
                    operator
                        .filter(|op| !op.available_dates.is_empty())
                        .map(|op| op.available_dates.clone())
                })
                .unwrap_or_else(|| availability.browse_pool.clone());
            EnrichedCabin {
                cabin: (*cabin).clone(),
                available_dates: dates,
            }
        })
        .collect();

    let count = operator
        .map(|op| op.total_available_cabins)
        .unwrap_or(cabins.len() as u32);
    (cabins, count)
}

fn build_synthetic_ship(
    operator: &OperatorAvailability,
    availability: &AvailabilitySnapshot,
) -> EnrichedShip {
    let cabins: Vec<EnrichedCabin> = operator
        .cabins
        .iter()
        .map(|ac| {
            let dates = if !ac.available_dates.is_empty() {
                ac.available_dates.clone()
            } else if !operator.available_dates.is_empty() {
                operator.available_dates.clone()
            } else {
                availability.browse_pool.clone()
            };
            EnrichedCabin {
                cabin: synthetic_cabin(&operator.operator_name, &ac.name),
                available_dates: dates,
            }
        })
        .collect();

    EnrichedShip {
        ship: ShipCatalogEntry {
            name: operator.operator_name.clone(),
            description: None,
            trip_length_days: String::new(),
            trip_name: String::new(),
            destinations: String::new(),
            image_main: SYNTHETIC_SHIP_IMAGE.to_string(),
            images: Vec::new(),
        },
        cabins,
        is_available: true,
        available_cabin_count: operator.total_available_cabins,
        lowest_valid_price: 0,
        synthetic: true,
    }
}

fn synthetic_cabin(operator_name: &str, cabin_name: &str) -> CabinCatalogEntry {
    let slug = |s: &str| {
        s.chars()
            .map(|c| {
                if c.is_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect::<String>()
    };
    CabinCatalogEntry {
        cabin_id: format!("dyn-{}-{}", slug(operator_name), slug(cabin_name)),
        cabin_name: cabin_name.to_string(),
        cabin_name_api: cabin_name.to_string(),
        boat_name: operator_name.to_string(),
        description: None,
        total_capacity: 0,
        price: 0,
        facilities: Default::default(),
        image_main: SYNTHETIC_SHIP_IMAGE.to_string(),
        images: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sealine_availability::CabinAvailability;
    use std::collections::HashMap;

    fn date(s: &str) -> NaiveDate {
        sealine_shared::parse_iso_date(s).unwrap()
    }

    fn ship(name: &str, destinations: &str) -> ShipCatalogEntry {
        serde_json::from_str(&format!(
            r#"{{ "name": "{}", "destinations": "{}", "tripLengthDays": "4D3N" }}"#,
            name, destinations
        ))
        .unwrap()
    }

    fn cabin(id: &str, name: &str, boat: &str, price: i64, capacity: u32) -> CabinCatalogEntry {
        serde_json::from_str(&format!(
            r#"{{ "cabinId": "{}", "cabinName": "{}", "boatName": "{}", "price": {}, "totalCapacity": {} }}"#,
            id, name, boat, price, capacity
        ))
        .unwrap()
    }

    fn operator(name: &str, total: u32, cabins: Vec<(&str, u32, Vec<&str>)>) -> OperatorAvailability {
        let cabins: Vec<CabinAvailability> = cabins
            .into_iter()
            .map(|(n, count, dates)| CabinAvailability {
                name: n.to_string(),
                available_count: count,
                available_dates: dates.into_iter().map(date).collect(),
            })
            .collect();
        let mut all_dates: Vec<NaiveDate> =
            cabins.iter().flat_map(|c| c.available_dates.clone()).collect();
        all_dates.sort();
        all_dates.dedup();
        OperatorAvailability {
            operator_name: name.to_string(),
            total_available_cabins: total,
            cabins,
            available_dates: all_dates,
        }
    }

    fn snapshot(operators: Vec<OperatorAvailability>) -> AvailabilitySnapshot {
        let mut s = AvailabilitySnapshot {
            operators: operators
                .into_iter()
                .map(|op| (op.operator_name.clone(), op))
                .collect::<HashMap<_, _>>(),
            browse_pool: Vec::new(),
        };
        s.rebuild_browse_pool();
        s
    }

    #[test]
    fn test_targeted_join_across_drifting_names() {
        // Catalog says "Aurora Liveaboard", the feed says "MV Aurora".
        let catalog = CatalogSnapshot {
            ships: vec![ship("Aurora Liveaboard", "Labuan Bajo, Komodo")],
            cabins: vec![
                cabin("c-1", "Master Suite", "Aurora Liveaboard", 5_200_000, 2),
                cabin("c-2", "Budget Twin", "Aurora Liveaboard", 1_500_000, 2),
            ],
        };
        let availability = snapshot(vec![operator(
            "MV Aurora",
            3,
            vec![("MASTER SUITE", 2, vec!["2026-01-12"])],
        )]);
        let range = DateRange::new(date("2026-01-10"), date("2026-01-17"));

        let ships = reconcile(&catalog, &availability, Some(&range));

        assert_eq!(ships.len(), 1);
        let aurora = &ships[0];
        assert!(aurora.is_available);
        assert!(!aurora.synthetic);
        // Only the operator-confirmed cabin survives a targeted search.
        assert_eq!(aurora.cabins.len(), 1);
        assert_eq!(aurora.cabins[0].cabin.cabin_name, "Master Suite");
        assert_eq!(aurora.cabins[0].available_dates, vec![date("2026-01-12")]);
        assert_eq!(aurora.available_cabin_count, 1);
        assert_eq!(aurora.lowest_valid_price, 5_200_000);
    }

    #[test]
    fn test_targeted_zero_matches_trusts_operator_total() {
        let catalog = CatalogSnapshot {
            ships: vec![ship("Aurora Liveaboard", "")],
            cabins: vec![cabin("c-1", "Master Suite", "Aurora Liveaboard", 5_200_000, 2)],
        };
        // Operator inventory exists, but under a cabin name the catalog
        // does not recognize.
        let availability = snapshot(vec![operator(
            "MV Aurora",
            3,
            vec![("OWNER CABIN", 3, vec!["2026-01-12"])],
        )]);
        let range = DateRange::new(date("2026-01-10"), date("2026-01-17"));

        let ships = reconcile(&catalog, &availability, Some(&range));

        assert!(ships[0].cabins.is_empty());
        assert_eq!(ships[0].available_cabin_count, 3);
        assert!(ships[0].is_available);
    }

    #[test]
    fn test_browse_mode_keeps_all_cabins_with_date_fallbacks() {
        let catalog = CatalogSnapshot {
            ships: vec![ship("Aurora Liveaboard", "")],
            cabins: vec![
                cabin("c-1", "Master Suite", "Aurora Liveaboard", 5_200_000, 2),
                cabin("c-2", "Budget Twin", "Aurora Liveaboard", 1_500_000, 2),
            ],
        };
        let availability = snapshot(vec![operator(
            "MV Aurora",
            3,
            vec![("MASTER SUITE", 2, vec!["2026-01-12"])],
        )]);

        let ships = reconcile(&catalog, &availability, None);

        let aurora = &ships[0];
        assert_eq!(aurora.cabins.len(), 2);
        // Cabin-specific dates win; the unmatched cabin falls back to the
        // operator's ship-level dates.
        assert_eq!(aurora.cabins[0].available_dates, vec![date("2026-01-12")]);
        assert_eq!(aurora.cabins[1].available_dates, vec![date("2026-01-12")]);
        assert_eq!(aurora.available_cabin_count, 3);
    }

    #[test]
    fn test_browse_mode_without_any_availability() {
        let catalog = CatalogSnapshot {
            ships: vec![ship("Aurora Liveaboard", "")],
            cabins: vec![cabin("c-1", "Master Suite", "Aurora Liveaboard", 5_200_000, 2)],
        };
        let availability = AvailabilitySnapshot::default();

        let ships = reconcile(&catalog, &availability, None);

        let aurora = &ships[0];
        assert!(!aurora.is_available);
        assert_eq!(aurora.cabins.len(), 1);
        // Empty list, never absent.
        assert!(aurora.cabins[0].available_dates.is_empty());
    }

    #[test]
    fn test_unmatched_operator_becomes_synthetic_ship() {
        let catalog = CatalogSnapshot {
            ships: vec![ship("Aurora Liveaboard", "")],
            cabins: vec![cabin("c-1", "Master Suite", "Aurora Liveaboard", 5_200_000, 2)],
        };
        let availability = snapshot(vec![
            operator("MV Aurora", 2, vec![("MASTER SUITE", 2, vec!["2026-01-12"])]),
            operator("Phantom Voyager", 4, vec![("Shared Bunk", 4, vec!["2026-01-20"])]),
        ]);

        let ships = reconcile(&catalog, &availability, None);

        assert_eq!(ships.len(), 2);
        // Catalog ships first, synthetic appended after.
        assert!(!ships[0].synthetic);
        let phantom = &ships[1];
        assert!(phantom.synthetic);
        assert_eq!(phantom.ship.name, "Phantom Voyager");
        assert_eq!(phantom.available_cabin_count, 4);
        assert!(phantom.is_available);
        assert_eq!(phantom.lowest_valid_price, 0);
        assert_eq!(phantom.ship.image_main, SYNTHETIC_SHIP_IMAGE);
        assert_eq!(phantom.cabins[0].available_dates, vec![date("2026-01-20")]);
    }

    #[test]
    fn test_operator_with_zero_total_never_synthesized() {
        let catalog = CatalogSnapshot::default();
        let availability = snapshot(vec![operator("Ghost Ship", 0, vec![])]);
        let ships = reconcile(&catalog, &availability, None);
        assert!(ships.is_empty());
    }

    #[test]
    fn test_synthetic_ships_append_in_sorted_operator_order() {
        let catalog = CatalogSnapshot::default();
        let availability = snapshot(vec![
            operator("Zephyr", 1, vec![("Twin", 1, vec!["2026-01-10"])]),
            operator("Albatross", 1, vec![("Twin", 1, vec!["2026-01-10"])]),
        ]);
        let ships = reconcile(&catalog, &availability, None);
        let names: Vec<&str> = ships.iter().map(|s| s.ship.name.as_str()).collect();
        assert_eq!(names, vec!["Albatross", "Zephyr"]);
    }
}
