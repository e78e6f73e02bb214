//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// Terrain kind for a single grid tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    /// Open ground, cheapest to cross.
    #[default]
    Floor,
    /// Impassable and sight-blocking.
    Wall,
    /// Low cover. Crossable, grants a strong defensive bonus.
    Cover,
    /// Debris. Slow to cross, grants a small defensive bonus.
    Rubble,
}

/// Which side a unit fights for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// Player-controlled soldier.
    #[default]
    Player,
    /// AI-controlled hostile.
    Hostile,
}

/// Firing mode for an attack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotKind {
    /// Cheap, less accurate. Also the mode used for reaction fire.
    #[default]
    Snap,
    /// Expensive, more accurate.
    Aimed,
}

/// Mission phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionPhase {
    /// Waiting on player commands.
    #[default]
    PlayerTurn,
    /// Hostiles are acting.
    EnemyTurn,
    /// All hostiles are down. Terminal.
    MissionComplete,
    /// The whole squad is down. Terminal.
    MissionFailed,
}

/// Soldier experience rank. Selects the stat template at deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoldierRank {
    /// Fresh recruit, modest stats.
    #[default]
    Rookie,
    /// Squad leader, solid all-round stats.
    Sergeant,
    /// Hardened survivor, best aim and reactions.
    Veteran,
}

/// Hostile archetype category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileArchetype {
    /// Baseline infantry, balanced stats.
    Grunt,
    /// Fast flanker with sharp senses, lightly built.
    Stalker,
    /// Slow, heavily armored walker.
    Juggernaut,
}

/// Weapon model, a key into the static weapon table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Standard-issue soldier rifle.
    #[default]
    Rifle,
    /// Short carbine, cheaper shots that hit lighter.
    Carbine,
    /// Hostile energy weapon, heavy hits from a small magazine.
    PlasmaCaster,
}

/// Selectable mission scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioId {
    /// Small balanced engagement on an open field.
    #[default]
    Skirmish,
    /// Sweep a crash site held by a light crew.
    CrashSite,
    /// Assault a fortified position against heavies.
    Stronghold,
}
