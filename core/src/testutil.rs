//! Shared test fixtures: a scriptable in-memory world source and
//! candidate constructors.

use glam::Vec3;

use crate::world::{Candidate, EntityHandle, LocalPlayer, RawStatus, WorldSource};

pub(crate) const LOCAL_HANDLE: u64 = 1;

pub(crate) fn make_candidate(
    handle: u64,
    name: &str,
    position: Vec3,
    raw_status: RawStatus,
    raw_job_id: u32,
) -> Candidate {
    Candidate {
        handle: EntityHandle(handle),
        name: name.to_string(),
        world_name: "Cerberus".to_string(),
        position,
        raw_job_id,
        raw_status,
    }
}

/// A candidate standing `distance` yalms from the origin.
pub(crate) fn newcomer_at(handle: u64, name: &str, distance: f32) -> Candidate {
    make_candidate(
        handle,
        name,
        Vec3::new(distance, 0.0, 0.0),
        RawStatus(RawStatus::NEWCOMER),
        19,
    )
}

pub(crate) fn returner_at(handle: u64, name: &str, distance: f32) -> Candidate {
    make_candidate(
        handle,
        name,
        Vec3::new(distance, 0.0, 0.0),
        RawStatus(RawStatus::RETURNER),
        24,
    )
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeWorld {
    pub logged_in: bool,
    pub in_combat: bool,
    pub local: Option<LocalPlayer>,
    pub party: Vec<Candidate>,
    pub loaded: Vec<Candidate>,
}

impl FakeWorld {
    /// A logged-in world with the local player at the origin.
    pub fn logged_in() -> Self {
        Self {
            logged_in: true,
            local: Some(LocalPlayer {
                handle: EntityHandle(LOCAL_HANDLE),
                position: Vec3::ZERO,
            }),
            ..Default::default()
        }
    }
}

impl WorldSource for FakeWorld {
    fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    fn is_in_combat(&self) -> bool {
        self.in_combat
    }

    fn party_roster(&self) -> Vec<Candidate> {
        self.party.clone()
    }

    fn loaded_players(&self) -> Vec<Candidate> {
        self.loaded.clone()
    }

    fn local_player(&self) -> Option<LocalPlayer> {
        self.local
    }
}
