//! Behavioral tests for the filter passes.
//!
//! Exercises the pipeline against a scripted world: radius and cap
//! handling, closest-first truncation, toggle semantics, and the
//! degradation rules for invalid candidates.

use glam::Vec3;

use super::{nearby_view, party_view};
use crate::classify::StatusWordClassifier;
use crate::config::OverlayConfig;
use crate::testutil::{FakeWorld, LOCAL_HANDLE, make_candidate, newcomer_at, returner_at};
use crate::world::RawStatus;

fn config() -> OverlayConfig {
    OverlayConfig::default()
}

// ─────────────────────────────────────────────────────────────────────────────
// Nearby pass
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn nearby_respects_radius() {
    let mut world = FakeWorld::logged_in();
    world.loaded = vec![
        newcomer_at(10, "Inside", 29.9),
        newcomer_at(11, "Boundary", 30.0),
        newcomer_at(12, "Outside", 30.1),
    ];

    let rows = nearby_view(&world, &StatusWordClassifier, &config());

    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Inside", "Boundary"]);
    for row in &rows {
        assert!(row.distance <= config().nearby_radius);
    }
}

#[test]
fn nearby_excludes_local_player() {
    let mut world = FakeWorld::logged_in();
    world.loaded = vec![
        newcomer_at(LOCAL_HANDLE, "Me Myself", 0.0),
        newcomer_at(10, "Someone Else", 5.0),
    ];

    let rows = nearby_view(&world, &StatusWordClassifier, &config());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Someone Else");
}

#[test]
fn nearby_sorts_ascending_and_caps_to_closest() {
    let mut world = FakeWorld::logged_in();
    // More admitted candidates than the cap allows
    world.loaded = (0..10)
        .map(|i| newcomer_at(10 + i, &format!("P{i}"), 20.0 - i as f32))
        .collect();

    let mut cfg = config();
    cfg.max_nearby = 5;
    let rows = nearby_view(&world, &StatusWordClassifier, &cfg);

    assert_eq!(rows.len(), 5);
    // Exactly the five closest, ascending: 11.0 through 15.0
    let distances: Vec<f32> = rows.iter().map(|r| r.distance).collect();
    assert_eq!(distances, [11.0, 12.0, 13.0, 14.0, 15.0]);
}

#[test]
fn nearby_filters_then_orders_ascending() {
    // Spec scenario: distances [10, 35, 5, 40], radius 30 -> [5, 10]
    let mut world = FakeWorld::logged_in();
    world.loaded = vec![
        newcomer_at(10, "Ten", 10.0),
        newcomer_at(11, "ThirtyFive", 35.0),
        newcomer_at(12, "Five", 5.0),
        newcomer_at(13, "Forty", 40.0),
    ];

    let mut cfg = config();
    cfg.max_nearby = 5;
    let rows = nearby_view(&world, &StatusWordClassifier, &cfg);

    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Five", "Ten"]);
}

#[test]
fn nearby_cap_of_one_keeps_the_closest() {
    // Spec scenario: cap 1, distances [10, 5] -> the distance-5 candidate
    let mut world = FakeWorld::logged_in();
    world.loaded = vec![newcomer_at(10, "Ten", 10.0), newcomer_at(11, "Five", 5.0)];

    let mut cfg = config();
    cfg.max_nearby = 1;
    let rows = nearby_view(&world, &StatusWordClassifier, &cfg);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Five");
}

#[test]
fn nearby_uses_full_3d_distance() {
    let mut world = FakeWorld::logged_in();
    // 3-4-12 box: length 13, outside a radius of 12
    world.loaded = vec![make_candidate(
        10,
        "Above",
        Vec3::new(3.0, 4.0, 12.0),
        RawStatus(RawStatus::NEWCOMER),
        19,
    )];

    let mut cfg = config();
    cfg.nearby_radius = 12.0;
    assert!(nearby_view(&world, &StatusWordClassifier, &cfg).is_empty());

    cfg.nearby_radius = 13.0;
    assert_eq!(nearby_view(&world, &StatusWordClassifier, &cfg).len(), 1);
}

#[test]
fn nearby_empty_without_local_player() {
    let mut world = FakeWorld::logged_in();
    world.local = None;
    world.loaded = vec![newcomer_at(10, "Someone", 5.0)];

    assert!(nearby_view(&world, &StatusWordClassifier, &config()).is_empty());
}

#[test]
fn nearby_disabled_by_view_toggle() {
    let mut world = FakeWorld::logged_in();
    world.loaded = vec![newcomer_at(10, "Someone", 5.0)];

    let mut cfg = config();
    cfg.show_nearby = false;
    assert!(nearby_view(&world, &StatusWordClassifier, &cfg).is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Party pass
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn party_keeps_roster_order_and_ignores_radius_and_cap() {
    let mut world = FakeWorld::logged_in();
    world.party = vec![
        returner_at(20, "Far Friend", 500.0),
        newcomer_at(21, "Close Friend", 1.0),
    ];

    let mut cfg = config();
    cfg.max_nearby = 5;
    cfg.nearby_radius = 5.0;
    let rows = party_view(&world, &StatusWordClassifier, &cfg);

    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    // Roster order, even though "Far Friend" is way outside nearby_radius
    assert_eq!(names, ["Far Friend", "Close Friend"]);
}

#[test]
fn party_drops_unflagged_members() {
    let mut world = FakeWorld::logged_in();
    world.party = vec![
        make_candidate(20, "Veteran", Vec3::ZERO, RawStatus::default(), 21),
        newcomer_at(21, "Sprout", 0.0),
    ];

    let rows = party_view(&world, &StatusWordClassifier, &config());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Sprout");
}

#[test]
fn party_disabled_by_view_toggle() {
    let mut world = FakeWorld::logged_in();
    world.party = vec![newcomer_at(20, "Sprout", 0.0)];

    let mut cfg = config();
    cfg.show_party = false;
    assert!(party_view(&world, &StatusWordClassifier, &cfg).is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Status toggles (shared predicate)
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn newcomer_toggle_off_removes_newcomers_from_both_views() {
    let mut world = FakeWorld::logged_in();
    world.party = vec![newcomer_at(20, "Party Sprout", 0.0), returner_at(21, "Party Returner", 0.0)];
    world.loaded = vec![newcomer_at(10, "Near Sprout", 5.0), returner_at(11, "Near Returner", 6.0)];

    let mut cfg = config();
    cfg.show_newcomers = false;

    let party = party_view(&world, &StatusWordClassifier, &cfg);
    let nearby = nearby_view(&world, &StatusWordClassifier, &cfg);

    assert_eq!(party.len(), 1);
    assert_eq!(party[0].name, "Party Returner");
    assert_eq!(nearby.len(), 1);
    assert_eq!(nearby[0].name, "Near Returner");
}

#[test]
fn dual_flagged_player_survives_either_toggle() {
    let mut world = FakeWorld::logged_in();
    world.loaded = vec![make_candidate(
        10,
        "Both Badges",
        Vec3::new(5.0, 0.0, 0.0),
        RawStatus(RawStatus::NEWCOMER | RawStatus::RETURNER),
        30,
    )];

    let mut cfg = config();
    cfg.show_newcomers = false;
    let rows = nearby_view(&world, &StatusWordClassifier, &cfg);
    assert_eq!(rows.len(), 1, "returner toggle alone keeps the row");

    cfg.show_newcomers = true;
    cfg.show_returners = false;
    let rows = nearby_view(&world, &StatusWordClassifier, &cfg);
    assert_eq!(rows.len(), 1, "newcomer toggle alone keeps the row");

    cfg.show_newcomers = false;
    let rows = nearby_view(&world, &StatusWordClassifier, &cfg);
    assert!(rows.is_empty(), "both toggles off removes the row");
}

// ─────────────────────────────────────────────────────────────────────────────
// Degradation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn invalid_candidates_are_skipped_silently() {
    let mut world = FakeWorld::logged_in();
    // Entity despawned between enumeration and read: empty name
    world.loaded = vec![newcomer_at(10, "", 5.0), newcomer_at(11, "Valid", 6.0)];
    world.party = vec![newcomer_at(20, "", 0.0)];

    assert_eq!(nearby_view(&world, &StatusWordClassifier, &config()).len(), 1);
    assert!(party_view(&world, &StatusWordClassifier, &config()).is_empty());
}

#[test]
fn unresolved_world_name_gets_placeholder() {
    let mut world = FakeWorld::logged_in();
    let mut candidate = newcomer_at(10, "Stranger", 5.0);
    candidate.world_name = String::new();
    world.loaded = vec![candidate];

    let rows = nearby_view(&world, &StatusWordClassifier, &config());
    assert_eq!(rows[0].world_name, "Unknown");
}

#[test]
fn passes_are_deterministic_for_fixed_input() {
    let mut world = FakeWorld::logged_in();
    world.party = vec![newcomer_at(20, "Party Sprout", 0.0)];
    world.loaded = vec![
        returner_at(10, "A", 12.0),
        newcomer_at(11, "B", 3.0),
        returner_at(12, "C", 29.0),
    ];
    let cfg = config();

    let first = (
        party_view(&world, &StatusWordClassifier, &cfg),
        nearby_view(&world, &StatusWordClassifier, &cfg),
    );
    let second = (
        party_view(&world, &StatusWordClassifier, &cfg),
        nearby_view(&world, &StatusWordClassifier, &cfg),
    );
    assert_eq!(first, second);
}
