//! Free-text container search

use crate::app::models::Container;
use crate::constants::LOCATION_SEPARATOR;
use std::collections::BTreeSet;

/// Location text with whitespace and hyphens removed, upper-cased
fn compact_location(location: &str) -> String {
    location
        .chars()
        .filter(|c| !c.is_whitespace() && *c != LOCATION_SEPARATOR)
        .collect::<String>()
        .to_uppercase()
}

/// Ids of containers matching a query
///
/// A container matches when its id contains the query (case-insensitive),
/// or when its location equals the query ignoring hyphens and whitespace,
/// so `A2-21-05-1` and `A221051` find the same slot. A blank query matches
/// nothing.
pub fn search_containers(query: &str, containers: &[Container]) -> BTreeSet<String> {
    let query = query.trim().to_uppercase();
    if query.is_empty() {
        return BTreeSet::new();
    }
    let location_query: String = query.chars().filter(|c| *c != LOCATION_SEPARATOR).collect();

    containers
        .iter()
        .filter(|c| {
            c.id.to_uppercase().contains(&query) || compact_location(&c.location) == location_query
        })
        .map(|c| c.id.clone())
        .collect()
}
