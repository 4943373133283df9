//! Static reference tables for the rib.gg domain: name/id pairs for regions,
//! roles, agents, maps, weapons and armor, with cross-references (agent role,
//! weapon category) joined in. Ids must match what the backend expects in
//! analytics filters.

use serde::Serialize;
use std::fmt;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentEntry {
    pub name: &'static str,
    pub id: u32,
    pub role_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeaponEntry {
    pub name: &'static str,
    pub id: u32,
    pub category: WeaponCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponCategory {
    Heavy,
    Rifle,
    Shotgun,
    Sidearm,
    Smg,
    Sniper,
}

impl fmt::Display for WeaponCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeaponCategory::Heavy => "heavy",
            WeaponCategory::Rifle => "rifle",
            WeaponCategory::Shotgun => "shotgun",
            WeaponCategory::Sidearm => "sidearm",
            WeaponCategory::Smg => "smg",
            WeaponCategory::Sniper => "sniper",
        };
        f.write_str(name)
    }
}

const REGIONS: &[(&str, u32)] = &[
    ("Europe", 1),
    ("North America", 2),
    ("Asia-Pacific", 3),
    ("Latin America", 4),
    ("MENA", 5),
    ("Oceana", 6),
    ("International", 7),
];

const ROLES: &[(&str, u32)] = &[
    ("initiator", 1),
    ("duelist", 2),
    ("controller", 3),
    ("sentinel", 4),
];

const AGENTS: &[(&str, u32)] = &[
    ("chamber", 17),
    ("kayo", 16),
    ("fade", 19),
    ("sova", 4),
    ("raze", 2),
    ("viper", 6),
    ("jett", 12),
    ("omen", 11),
    ("breach", 1),
    ("sage", 9),
    ("skye", 13),
    ("brimstone", 8),
    ("astra", 15),
    ("killjoy", 5),
    ("neon", 18),
    ("cypher", 3),
    ("reyna", 10),
    ("phoenix", 7),
    ("yoru", 14),
    ("harber", 20),
];

// Foreign keys into ROLES, by agent name.
const AGENT_ROLES: &[(&str, u32)] = &[
    ("chamber", 4),
    ("kayo", 1),
    ("fade", 1),
    ("sova", 1),
    ("raze", 2),
    ("viper", 3),
    ("jett", 2),
    ("omen", 3),
    ("breach", 1),
    ("sage", 4),
    ("skye", 1),
    ("brimstone", 3),
    ("astra", 3),
    ("killjoy", 4),
    ("neon", 2),
    ("cypher", 4),
    ("reyna", 2),
    ("phoenix", 2),
    ("yoru", 2),
    ("harber", 1),
];

const MAPS: &[(&str, u32)] = &[
    ("ascent", 1),
    ("haven", 7),
    ("icebox", 4),
    ("bind", 3),
    ("breeze", 8),
    ("fracture", 9),
    ("pearl", 10),
    ("split", 2),
];

const ARMORS: &[(&str, u32)] = &[("light", 1), ("heavy", 2)];

const WEAPONS: &[(&str, u32)] = &[
    ("vandal", 4),
    ("phantom", 6),
    ("classic", 11),
    ("spectre", 18),
    ("sheriff", 13),
    ("ghost", 12),
    ("operator", 15),
    ("bulldog", 5),
    ("frenzy", 10),
    ("stinger", 19),
    ("guardian", 16),
    ("marshal", 17),
    ("judge", 8),
    ("shorty", 14),
    ("odin", 2),
    ("bucky", 9),
    ("ares", 3),
];

const WEAPON_CATEGORIES: &[(&str, WeaponCategory)] = &[
    ("ares", WeaponCategory::Heavy),
    ("odin", WeaponCategory::Heavy),
    ("bulldog", WeaponCategory::Rifle),
    ("phantom", WeaponCategory::Rifle),
    ("guardian", WeaponCategory::Rifle),
    ("vandal", WeaponCategory::Rifle),
    ("judge", WeaponCategory::Shotgun),
    ("bucky", WeaponCategory::Shotgun),
    ("ghost", WeaponCategory::Sidearm),
    ("classic", WeaponCategory::Sidearm),
    ("sheriff", WeaponCategory::Sidearm),
    ("frenzy", WeaponCategory::Sidearm),
    ("shorty", WeaponCategory::Sidearm),
    ("spectre", WeaponCategory::Smg),
    ("stinger", WeaponCategory::Smg),
    ("marshal", WeaponCategory::Sniper),
    ("operator", WeaponCategory::Sniper),
];

fn entries(table: &[(&'static str, u32)]) -> Vec<CatalogEntry> {
    table
        .iter()
        .map(|&(name, id)| CatalogEntry { name, id })
        .collect()
}

fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    table.iter().find(|(n, _)| *n == name).map(|&(_, v)| v)
}

pub fn regions() -> Vec<CatalogEntry> {
    entries(REGIONS)
}

pub fn roles() -> Vec<CatalogEntry> {
    entries(ROLES)
}

pub fn maps() -> Vec<CatalogEntry> {
    entries(MAPS)
}

pub fn armors() -> Vec<CatalogEntry> {
    entries(ARMORS)
}

/// Agent table joined with the role assignment table on agent name.
/// A missing role row fails the whole join rather than dropping the agent.
pub fn agents() -> Result<Vec<AgentEntry>, AppError> {
    AGENTS
        .iter()
        .map(|&(name, id)| {
            let role_id = lookup(AGENT_ROLES, name).ok_or_else(|| AppError::MissingReference {
                catalog: "agent role",
                name: name.to_string(),
            })?;
            Ok(AgentEntry { name, id, role_id })
        })
        .collect()
}

/// Weapon table joined with the category table on weapon name.
pub fn weapons() -> Result<Vec<WeaponEntry>, AppError> {
    WEAPONS
        .iter()
        .map(|&(name, id)| {
            let category = lookup(WEAPON_CATEGORIES, name).ok_or_else(|| AppError::MissingReference {
                catalog: "weapon category",
                name: name.to_string(),
            })?;
            Ok(WeaponEntry { name, id, category })
        })
        .collect()
}
