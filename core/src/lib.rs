pub mod classify;
pub mod config;
pub mod jobs;
pub mod pipeline;
pub mod snapshot;
pub mod tracker;
pub mod world;

#[cfg(test)]
mod testutil;

// Re-exports for convenience
pub use classify::{Classification, Classifier, StatusWordClassifier};
pub use config::{ConfigError, OverlayConfig};
pub use snapshot::{ClassifiedPlayer, Snapshot, SnapshotStore};
pub use tracker::{Tracker, should_display};
pub use world::{Candidate, EntityHandle, LocalPlayer, RawStatus, WorldEvent, WorldSource};
