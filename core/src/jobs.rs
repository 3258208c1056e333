//! Static job lookup table.
//!
//! Maps the host's numeric job ids to display data for the overlay:
//! three-letter abbreviation, full name, and the icon row consumed by
//! texture-loading hosts. Id 0 is reserved for "unknown job" and is not
//! in the table; lookups fall back to placeholders.

/// Display data for one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobInfo {
    pub abbr: &'static str,
    pub name: &'static str,
    pub icon_id: u32,
}

/// Job id -> display data. Icon rows follow the host's job icon sheet
/// (62100 + job id).
pub static JOBS: phf::Map<u32, JobInfo> = phf::phf_map! {
    1u32 => JobInfo { abbr: "GLA", name: "Gladiator", icon_id: 62101 },
    2u32 => JobInfo { abbr: "PGL", name: "Pugilist", icon_id: 62102 },
    3u32 => JobInfo { abbr: "MRD", name: "Marauder", icon_id: 62103 },
    4u32 => JobInfo { abbr: "LNC", name: "Lancer", icon_id: 62104 },
    5u32 => JobInfo { abbr: "ARC", name: "Archer", icon_id: 62105 },
    6u32 => JobInfo { abbr: "CNJ", name: "Conjurer", icon_id: 62106 },
    7u32 => JobInfo { abbr: "THM", name: "Thaumaturge", icon_id: 62107 },
    8u32 => JobInfo { abbr: "CRP", name: "Carpenter", icon_id: 62108 },
    9u32 => JobInfo { abbr: "BSM", name: "Blacksmith", icon_id: 62109 },
    10u32 => JobInfo { abbr: "ARM", name: "Armorer", icon_id: 62110 },
    11u32 => JobInfo { abbr: "GSM", name: "Goldsmith", icon_id: 62111 },
    12u32 => JobInfo { abbr: "LTW", name: "Leatherworker", icon_id: 62112 },
    13u32 => JobInfo { abbr: "WVR", name: "Weaver", icon_id: 62113 },
    14u32 => JobInfo { abbr: "ALC", name: "Alchemist", icon_id: 62114 },
    15u32 => JobInfo { abbr: "CUL", name: "Culinarian", icon_id: 62115 },
    16u32 => JobInfo { abbr: "MIN", name: "Miner", icon_id: 62116 },
    17u32 => JobInfo { abbr: "BTN", name: "Botanist", icon_id: 62117 },
    18u32 => JobInfo { abbr: "FSH", name: "Fisher", icon_id: 62118 },
    19u32 => JobInfo { abbr: "PLD", name: "Paladin", icon_id: 62119 },
    20u32 => JobInfo { abbr: "MNK", name: "Monk", icon_id: 62120 },
    21u32 => JobInfo { abbr: "WAR", name: "Warrior", icon_id: 62121 },
    22u32 => JobInfo { abbr: "DRG", name: "Dragoon", icon_id: 62122 },
    23u32 => JobInfo { abbr: "BRD", name: "Bard", icon_id: 62123 },
    24u32 => JobInfo { abbr: "WHM", name: "White Mage", icon_id: 62124 },
    25u32 => JobInfo { abbr: "BLM", name: "Black Mage", icon_id: 62125 },
    26u32 => JobInfo { abbr: "ACN", name: "Arcanist", icon_id: 62126 },
    27u32 => JobInfo { abbr: "SMN", name: "Summoner", icon_id: 62127 },
    28u32 => JobInfo { abbr: "SCH", name: "Scholar", icon_id: 62128 },
    29u32 => JobInfo { abbr: "ROG", name: "Rogue", icon_id: 62129 },
    30u32 => JobInfo { abbr: "NIN", name: "Ninja", icon_id: 62130 },
    31u32 => JobInfo { abbr: "MCH", name: "Machinist", icon_id: 62131 },
    32u32 => JobInfo { abbr: "DRK", name: "Dark Knight", icon_id: 62132 },
    33u32 => JobInfo { abbr: "AST", name: "Astrologian", icon_id: 62133 },
    34u32 => JobInfo { abbr: "SAM", name: "Samurai", icon_id: 62134 },
    35u32 => JobInfo { abbr: "RDM", name: "Red Mage", icon_id: 62135 },
    36u32 => JobInfo { abbr: "BLU", name: "Blue Mage", icon_id: 62136 },
    37u32 => JobInfo { abbr: "GNB", name: "Gunbreaker", icon_id: 62137 },
    38u32 => JobInfo { abbr: "DNC", name: "Dancer", icon_id: 62138 },
    39u32 => JobInfo { abbr: "RPR", name: "Reaper", icon_id: 62139 },
    40u32 => JobInfo { abbr: "SGE", name: "Sage", icon_id: 62140 },
    41u32 => JobInfo { abbr: "VPR", name: "Viper", icon_id: 62141 },
    42u32 => JobInfo { abbr: "PCT", name: "Pictomancer", icon_id: 62142 },
};

pub fn job_info(id: u32) -> Option<&'static JobInfo> {
    JOBS.get(&id)
}

pub fn is_known_job(id: u32) -> bool {
    JOBS.contains_key(&id)
}

/// Abbreviation for display, `"???"` for id 0 or anything off-table.
pub fn job_abbr(id: u32) -> &'static str {
    job_info(id).map_or("???", |info| info.abbr)
}

/// Icon row for the job, if it has one.
pub fn job_icon(id: u32) -> Option<u32> {
    job_info(id).map(|info| info.icon_id)
}
