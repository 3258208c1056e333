//! Per-frame entry point.
//!
//! `Tracker` glues the scheduler, the filter passes, and the snapshot
//! store together. It takes every dependency as a parameter: the host
//! world, the classifier, the config, and the current time all come from
//! the caller, so there is exactly one seam per collaborator and nothing
//! reaches into ambient state.

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::classify::Classifier;
use crate::config::OverlayConfig;
use crate::pipeline::{self, RefreshScheduler};
use crate::snapshot::{Snapshot, SnapshotStore};
use crate::world::{WorldEvent, WorldSource};

/// Owns the refresh cadence and the published snapshot.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    scheduler: RefreshScheduler,
    store: SnapshotStore,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame hook. Runs the full pipeline at most once per refresh
    /// interval; off-cycle frames hand back the published snapshot
    /// untouched. Never fails: missing or invalid world data degrades to
    /// empty views, because an error escaping here would take the whole
    /// overlay down inside the host process.
    pub fn tick(
        &mut self,
        now: NaiveDateTime,
        world: &dyn WorldSource,
        classifier: &dyn Classifier,
        config: &OverlayConfig,
    ) -> Arc<Snapshot> {
        if self.scheduler.should_refresh(now) {
            let snapshot = build_snapshot(now, world, classifier, config);
            tracing::debug!(
                "[TRACKER] refreshed: {} party, {} nearby",
                snapshot.party.len(),
                snapshot.nearby.len()
            );
            self.store.publish(snapshot);
        }
        self.store.current()
    }

    /// Host notifications that bypass the frame timer.
    pub fn handle_event(&mut self, event: WorldEvent) {
        match event {
            WorldEvent::ZoneChanged => {
                tracing::info!("[TRACKER] zone changed, clearing snapshot");
                self.store.clear();
            }
        }
    }

    /// The currently published snapshot, without ticking.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.store.current()
    }
}

fn build_snapshot(
    now: NaiveDateTime,
    world: &dyn WorldSource,
    classifier: &dyn Classifier,
    config: &OverlayConfig,
) -> Snapshot {
    if !world.is_logged_in() {
        // Not an error: character select, loading screens
        return Snapshot {
            taken_at: Some(now),
            ..Default::default()
        };
    }

    Snapshot {
        party: pipeline::party_view(world, classifier, config),
        nearby: pipeline::nearby_view(world, classifier, config),
        taken_at: Some(now),
    }
}

/// Auto-hide rule: the overlay is suppressed while the local player is
/// in combat, if configured. Evaluated by the presentation layer each
/// frame, independent of the refresh cadence.
pub fn should_display(config: &OverlayConfig, world: &dyn WorldSource) -> bool {
    !(config.auto_hide_in_combat && world.is_in_combat())
}
