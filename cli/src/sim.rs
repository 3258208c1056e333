//! Scripted world source.
//!
//! Stands in for the host's party list and object table so the pipeline
//! can be driven end-to-end from a terminal. Populations are fixed
//! tables keyed by zone, so every run of the same command sequence
//! produces the same snapshots.

use glam::Vec3;
use sproutwatch_core::{Candidate, EntityHandle, LocalPlayer, RawStatus, WorldSource};

/// Handle of the simulated local player within the object table.
pub const LOCAL_HANDLE: EntityHandle = EntityHandle(1);

struct Resident {
    handle: u64,
    name: &'static str,
    world: &'static str,
    at: [f32; 3],
    status: u64,
    job: u32,
}

impl Resident {
    fn candidate(&self) -> Candidate {
        Candidate {
            handle: EntityHandle(self.handle),
            name: self.name.to_string(),
            world_name: self.world.to_string(),
            position: Vec3::from_array(self.at),
            raw_job_id: self.job,
            raw_status: RawStatus(self.status),
        }
    }
}

const ZONES: &[(&str, &[Resident])] = &[
    (
        "Limsa Lominsa Lower Decks",
        &[
            Resident { handle: 10, name: "Totodi Totoza", world: "Cerberus", at: [4.0, 0.0, 3.0], status: RawStatus::NEWCOMER, job: 6 },
            Resident { handle: 11, name: "Staelufre Caensdottir", world: "Louisoix", at: [18.0, 1.0, -7.0], status: RawStatus::RETURNER, job: 32 },
            Resident { handle: 12, name: "Ferdiad Moryar", world: "Cerberus", at: [-25.0, 0.0, 14.0], status: RawStatus::NEWCOMER, job: 5 },
            Resident { handle: 13, name: "Sylbfohc Rystsyngsyn", world: "Ragnarok", at: [55.0, 0.0, 40.0], status: RawStatus::NEWCOMER, job: 1 },
            Resident { handle: 14, name: "Mimiyo Miyo", world: "", at: [9.0, 0.0, -2.0], status: RawStatus::NEWCOMER | RawStatus::RETURNER, job: 24 },
            Resident { handle: 15, name: "Grizzled Veteran", world: "Cerberus", at: [2.0, 0.0, 2.0], status: 0, job: 21 },
            Resident { handle: 16, name: "Odd Fellow", world: "Phantom", at: [12.0, 0.0, 5.0], status: RawStatus::RETURNER, job: 77 },
        ],
    ),
    (
        "Middle La Noscea",
        &[
            Resident { handle: 30, name: "Aneline Rousseau", world: "Louisoix", at: [6.0, 0.0, -4.0], status: RawStatus::RETURNER, job: 35 },
            Resident { handle: 31, name: "Kholusia Windwalker", world: "Cerberus", at: [28.0, 2.0, 11.0], status: RawStatus::NEWCOMER, job: 4 },
            Resident { handle: 32, name: "Quiet Passerby", world: "Ragnarok", at: [70.0, 0.0, -33.0], status: 0, job: 19 },
        ],
    ),
];

const PARTY: &[Resident] = &[
    Resident { handle: 20, name: "Aoife Brightwater", world: "Cerberus", at: [3.0, 0.0, 1.0], status: RawStatus::NEWCOMER, job: 19 },
    Resident { handle: 21, name: "Thancred's Fan", world: "Louisoix", at: [150.0, 0.0, 80.0], status: RawStatus::RETURNER, job: 34 },
    Resident { handle: 22, name: "Solid Mainstay", world: "Cerberus", at: [1.0, 0.0, 1.0], status: 0, job: 28 },
];

/// Deterministic `WorldSource` implementation driven by REPL commands.
pub struct ScriptedWorld {
    zone_index: usize,
    logged_in: bool,
    in_combat: bool,
}

impl ScriptedWorld {
    pub fn new() -> Self {
        Self {
            zone_index: 0,
            logged_in: true,
            in_combat: false,
        }
    }

    pub fn zone_name(&self) -> &'static str {
        ZONES[self.zone_index].0
    }

    /// Advance to the next zone in the cycle.
    pub fn change_zone(&mut self) {
        self.zone_index = (self.zone_index + 1) % ZONES.len();
    }

    pub fn set_logged_in(&mut self, logged_in: bool) {
        self.logged_in = logged_in;
    }

    pub fn set_in_combat(&mut self, in_combat: bool) {
        self.in_combat = in_combat;
    }
}

impl Default for ScriptedWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldSource for ScriptedWorld {
    fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    fn is_in_combat(&self) -> bool {
        self.in_combat
    }

    fn party_roster(&self) -> Vec<Candidate> {
        PARTY.iter().map(Resident::candidate).collect()
    }

    fn loaded_players(&self) -> Vec<Candidate> {
        // The host's object table includes the local player; the pipeline
        // excludes it by handle.
        let mut players = vec![Candidate {
            handle: LOCAL_HANDLE,
            name: "Local Hero".to_string(),
            world_name: "Cerberus".to_string(),
            position: Vec3::ZERO,
            raw_job_id: 24,
            raw_status: RawStatus::default(),
        }];
        players.extend(ZONES[self.zone_index].1.iter().map(Resident::candidate));
        players
    }

    fn local_player(&self) -> Option<LocalPlayer> {
        self.logged_in.then_some(LocalPlayer {
            handle: LOCAL_HANDLE,
            position: Vec3::ZERO,
        })
    }
}
