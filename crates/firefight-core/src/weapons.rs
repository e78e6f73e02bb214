//! Static weapon definitions.
//!
//! Weapon stats are immutable shared data. Units carry a [`WeaponKind`] key
//! and resolve it here; nothing in the engine mutates these specs.

use serde::{Deserialize, Serialize};

use crate::enums::{ShotKind, WeaponKind};

/// TU cost and base accuracy for one firing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotSpec {
    /// TU spent on the shot.
    pub tu_cost: i32,
    /// Base accuracy percentage before attacker and situation modifiers.
    pub accuracy: i32,
}

/// Immutable stats for one weapon model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub kind: WeaponKind,
    /// Base damage before the random roll and target armor.
    pub damage: i32,
    pub snap: ShotSpec,
    pub aimed: ShotSpec,
    /// Rounds in a full magazine.
    pub capacity: i32,
}

impl WeaponSpec {
    /// The spec for one firing mode.
    pub fn shot(&self, kind: ShotKind) -> ShotSpec {
        match kind {
            ShotKind::Snap => self.snap,
            ShotKind::Aimed => self.aimed,
        }
    }
}

/// Look up the immutable spec for a weapon model.
pub fn spec(kind: WeaponKind) -> &'static WeaponSpec {
    match kind {
        WeaponKind::Rifle => &RIFLE,
        WeaponKind::Carbine => &CARBINE,
        WeaponKind::PlasmaCaster => &PLASMA_CASTER,
    }
}

const RIFLE: WeaponSpec = WeaponSpec {
    kind: WeaponKind::Rifle,
    damage: 30,
    snap: ShotSpec {
        tu_cost: 30,
        accuracy: 60,
    },
    aimed: ShotSpec {
        tu_cost: 50,
        accuracy: 85,
    },
    capacity: 20,
};

const CARBINE: WeaponSpec = WeaponSpec {
    kind: WeaponKind::Carbine,
    damage: 22,
    snap: ShotSpec {
        tu_cost: 22,
        accuracy: 65,
    },
    aimed: ShotSpec {
        tu_cost: 40,
        accuracy: 80,
    },
    capacity: 24,
};

const PLASMA_CASTER: WeaponSpec = WeaponSpec {
    kind: WeaponKind::PlasmaCaster,
    damage: 40,
    snap: ShotSpec {
        tu_cost: 32,
        accuracy: 55,
    },
    aimed: ShotSpec {
        tu_cost: 55,
        accuracy: 75,
    },
    capacity: 12,
};
