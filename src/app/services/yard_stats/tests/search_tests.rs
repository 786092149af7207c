//! Tests for container search

use super::*;
use crate::app::services::yard_stats::search::search_containers;
use std::collections::BTreeSet;

fn ids(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn container_at(id: &str, location: &str) -> Container {
    let mut container = create_test_container(id, "A2", 21);
    container.location = location.to_string();
    container
}

#[test]
fn test_id_substring_is_case_insensitive() {
    let containers = vec![
        create_test_container("MSKU1234565", "A1", 1),
        create_test_container("TGHU7654321", "A1", 3),
    ];

    assert_eq!(search_containers("msku", &containers), ids(&["MSKU1234565"]));
    assert_eq!(search_containers("4565", &containers), ids(&["MSKU1234565"]));
    assert_eq!(search_containers("U", &containers), ids(&["MSKU1234565", "TGHU7654321"]));
}

#[test]
fn test_location_matches_either_spelling() {
    let hyphenated = vec![container_at("C1", "A2-21-05-1")];
    let compact = vec![container_at("C1", "A221051")];

    for containers in [&hyphenated, &compact] {
        assert_eq!(search_containers("A2-21-05-1", containers), ids(&["C1"]));
        assert_eq!(search_containers("A221051", containers), ids(&["C1"]));
        assert_eq!(search_containers("a2-21-05-1", containers), ids(&["C1"]));
    }
}

#[test]
fn test_location_match_is_exact_not_partial() {
    let containers = vec![container_at("C1", "A2-21-05-1")];
    assert!(search_containers("A22105", &containers).is_empty());
}

#[test]
fn test_blank_query_matches_nothing() {
    let containers = vec![create_test_container("C1", "A1", 1)];
    assert!(search_containers("", &containers).is_empty());
    assert!(search_containers("   ", &containers).is_empty());
}

#[test]
fn test_forty_foot_pair_reported_once() {
    let containers: Vec<Container> = create_forty_foot_pair("MSKU1234565", "A2", 22).into();
    assert_eq!(search_containers("MSKU", &containers), ids(&["MSKU1234565"]));
}
