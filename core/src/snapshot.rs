//! Published pipeline output.
//!
//! A refresh builds a whole new `Snapshot` and swaps it into the store;
//! nothing is ever mutated in place after publish. Readers hold an `Arc`
//! and see either the old or the new value in full, which also keeps the
//! store sound if a consumer is ever moved off the frame thread.

use std::sync::Arc;

use chrono::NaiveDateTime;
use glam::Vec3;

/// One row of a published view.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedPlayer {
    pub name: String,
    pub world_name: String,
    pub position: Vec3,
    /// Distance from the local player at classification time. Party rows
    /// carry 0.0: the party pass applies no radius and the roster table
    /// shows no distance column.
    pub distance: f32,
    /// Validated job id; 0 when the job could not be determined.
    pub job_id: u32,
    pub is_newcomer: bool,
    pub is_returning: bool,
}

impl ClassifiedPlayer {
    /// Display label. A player flagged both ways shows as a newcomer;
    /// every consumer must apply the same precedence, so it lives here.
    pub fn status_label(&self) -> &'static str {
        if self.is_newcomer {
            "Newcomer"
        } else if self.is_returning {
            "Returner"
        } else {
            "-"
        }
    }
}

/// The two filtered views produced by one refresh.
///
/// Party and nearby are independent projections: a party member standing
/// next to the local player legitimately appears in both, since the views
/// answer different questions. No dedup across them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub party: Vec<ClassifiedPlayer>,
    pub nearby: Vec<ClassifiedPlayer>,
    /// When this snapshot was built. `None` only for the empty snapshot
    /// installed at startup or by a zone clear.
    pub taken_at: Option<NaiveDateTime>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.party.is_empty() && self.nearby.is_empty()
    }
}

/// Holds the current snapshot and replaces it wholesale.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    current: Arc<Snapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot. Cheap to call every frame.
    pub fn current(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    /// Install a freshly built snapshot. The previous one stays alive
    /// only as long as readers still hold it.
    pub fn publish(&mut self, snapshot: Snapshot) {
        self.current = Arc::new(snapshot);
    }

    /// Drop both views immediately (zone transition). The store stays
    /// empty until the next scheduled refresh publishes.
    pub fn clear(&mut self) {
        self.current = Arc::new(Snapshot::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, newcomer: bool, returning: bool) -> ClassifiedPlayer {
        ClassifiedPlayer {
            name: name.to_string(),
            world_name: "Cerberus".to_string(),
            position: Vec3::ZERO,
            distance: 0.0,
            job_id: 1,
            is_newcomer: newcomer,
            is_returning: returning,
        }
    }

    #[test]
    fn newcomer_wins_status_label() {
        assert_eq!(row("a", true, true).status_label(), "Newcomer");
        assert_eq!(row("a", false, true).status_label(), "Returner");
        assert_eq!(row("a", false, false).status_label(), "-");
    }

    #[test]
    fn publish_replaces_wholesale_without_touching_readers() {
        let mut store = SnapshotStore::new();
        let before = store.current();

        store.publish(Snapshot {
            party: vec![row("a", true, false)],
            nearby: vec![],
            taken_at: None,
        });

        // The reader's snapshot is untouched; only the store moved on.
        assert!(before.is_empty());
        assert_eq!(store.current().party.len(), 1);
    }

    #[test]
    fn clear_empties_both_views() {
        let mut store = SnapshotStore::new();
        store.publish(Snapshot {
            party: vec![row("a", true, false)],
            nearby: vec![row("b", false, true)],
            taken_at: None,
        });

        store.clear();
        let current = store.current();
        assert!(current.is_empty());
        assert!(current.taken_at.is_none());
    }
}
