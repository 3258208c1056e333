//! The two filter passes.
//!
//! Both run against the same classification step but answer different
//! questions: "who in my party carries a badge" and "who near me carries
//! a badge". They are pure transformations over the candidates a world
//! source hands out; all state lives in the snapshot they produce.

use crate::classify::{Classification, Classifier};
use crate::config::OverlayConfig;
use crate::snapshot::ClassifiedPlayer;
use crate::world::{Candidate, WorldSource};

/// Build the party view: roster order, no radius, no cap.
///
/// The roster is already small (bounded by the game's party size) and
/// relationship-scoped, so the only filtering is the status toggles.
pub fn party_view(
    world: &dyn WorldSource,
    classifier: &dyn Classifier,
    config: &OverlayConfig,
) -> Vec<ClassifiedPlayer> {
    if !config.show_party {
        return Vec::new();
    }

    let mut warned_unresolved = false;
    world
        .party_roster()
        .into_iter()
        .filter(|candidate| !candidate.name.is_empty())
        .filter_map(|candidate| {
            let class = classifier.classify(&candidate);
            passes_status_toggles(config, class)
                .then(|| make_row(candidate, class, 0.0, &mut warned_unresolved))
        })
        .collect()
}

/// Build the nearby view: every loaded player except the local one,
/// radius-limited, sorted ascending by distance, then capped.
///
/// Sorting before the cap is load-bearing: the cap must keep the closest
/// players, not whatever subset the host's enumeration order happens to
/// yield first.
pub fn nearby_view(
    world: &dyn WorldSource,
    classifier: &dyn Classifier,
    config: &OverlayConfig,
) -> Vec<ClassifiedPlayer> {
    if !config.show_nearby {
        return Vec::new();
    }
    let Some(local) = world.local_player() else {
        return Vec::new();
    };

    let mut warned_unresolved = false;
    let mut rows: Vec<ClassifiedPlayer> = world
        .loaded_players()
        .into_iter()
        .filter(|candidate| candidate.handle != local.handle)
        .filter(|candidate| !candidate.name.is_empty())
        .filter_map(|candidate| {
            let distance = candidate.position.distance(local.position);
            if distance > config.nearby_radius {
                return None;
            }
            let class = classifier.classify(&candidate);
            passes_status_toggles(config, class)
                .then(|| make_row(candidate, class, distance, &mut warned_unresolved))
        })
        .collect();

    rows.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    rows.truncate(config.max_nearby);
    rows
}

/// The shared status predicate: keep a row iff at least one of its set
/// flags is toggled on.
fn passes_status_toggles(config: &OverlayConfig, class: Classification) -> bool {
    (config.show_newcomers && class.is_newcomer)
        || (config.show_returners && class.is_returning)
}

fn make_row(
    candidate: Candidate,
    class: Classification,
    distance: f32,
    warned_unresolved: &mut bool,
) -> ClassifiedPlayer {
    let world_name = if candidate.world_name.is_empty() {
        if !*warned_unresolved {
            tracing::warn!(
                "[FILTER] world name unresolved for {:?}, substituting placeholder",
                candidate.handle
            );
            *warned_unresolved = true;
        }
        "Unknown".to_string()
    } else {
        candidate.world_name
    };

    ClassifiedPlayer {
        name: candidate.name,
        world_name,
        position: candidate.position,
        distance,
        job_id: class.job_id,
        is_newcomer: class.is_newcomer,
        is_returning: class.is_returning,
    }
}
