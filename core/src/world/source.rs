use super::{Candidate, LocalPlayer};

/// Read-only access to the host's live world state.
///
/// Implementations wrap the host's party list and object table. Results
/// are valid only for the instant queried; two calls in different frames
/// may disagree about membership, positions, and handles.
pub trait WorldSource {
    /// Whether a character is currently logged in. The pipeline publishes
    /// empty views while this is false.
    fn is_logged_in(&self) -> bool;

    /// Whether the local player is in combat. Consumed by the auto-hide
    /// presentation rule, not by the filter passes.
    fn is_in_combat(&self) -> bool;

    /// Current party roster in host order. May include the local player;
    /// the party pass keeps roster order and applies no exclusion.
    fn party_roster(&self) -> Vec<Candidate>;

    /// All currently loaded player-kind entities, including the local
    /// player. The nearby pass excludes the local player by handle.
    fn loaded_players(&self) -> Vec<Candidate>;

    /// The local player, or `None` mid-transition (e.g. during a zone
    /// load, before the character exists in the object table).
    fn local_player(&self) -> Option<LocalPlayer>;
}

/// Host notifications the tracker reacts to outside the refresh timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    /// The local player transitioned to another zone. Locality-based data
    /// is invalid from this instant, ahead of the next timed refresh.
    ZoneChanged,
}
