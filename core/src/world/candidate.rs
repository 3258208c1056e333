use glam::Vec3;

/// Handle for an entity slot in the host's object table.
///
/// Unique only within a single poll. The host recycles slots freely
/// between frames, so a handle must never be cached across refreshes;
/// it exists to compare entities enumerated in the same poll (e.g.
/// excluding the local player from the nearby scan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityHandle(pub u64);

/// Raw status word the host exposes per player entity.
///
/// Opaque to the pipeline; only a `Classifier` implementation assigns
/// meaning to it. The flag constants below document the badge bits the
/// default classifier reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawStatus(pub u64);

impl RawStatus {
    /// Badge flag: new-adventurer leaf icon.
    pub const NEWCOMER: u64 = 1 << 0;
    /// Badge flag: returning-player icon.
    pub const RETURNER: u64 = 1 << 1;
    /// Set when the host could not read badge state for this entity.
    pub const UNREADABLE: u64 = 1 << 63;

    pub const fn contains(self, flag: u64) -> bool {
        self.0 & flag != 0
    }
}

/// A player entity as read from the world source.
///
/// Ephemeral: every field reflects the instant of the poll that produced
/// it and none of it may be carried into a later refresh.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub handle: EntityHandle,
    pub name: String,
    pub world_name: String,
    pub position: Vec3,
    pub raw_job_id: u32,
    pub raw_status: RawStatus,
}

/// The local player, as needed by the nearby pass.
#[derive(Debug, Clone, Copy)]
pub struct LocalPlayer {
    pub handle: EntityHandle,
    pub position: Vec3,
}
