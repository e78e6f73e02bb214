//! Combat constants and tuning parameters.

// --- Map generation ---

/// Default battle grid width in tiles.
pub const GRID_WIDTH: i32 = 20;

/// Default battle grid height in tiles.
pub const GRID_HEIGHT: i32 = 15;

/// Fraction of generated tiles rolled as walls.
pub const WALL_WEIGHT: f64 = 0.10;

/// Fraction of generated tiles rolled as cover.
pub const COVER_WEIGHT: f64 = 0.10;

/// Fraction of generated tiles rolled as rubble.
pub const RUBBLE_WEIGHT: f64 = 0.05;

/// Spawn zone width in tiles. Zones sit at the top-left (squad) and
/// bottom-right (hostiles) corners and are cleared to floor.
pub const SPAWN_ZONE_WIDTH: i32 = 4;

/// Spawn zone height in tiles.
pub const SPAWN_ZONE_HEIGHT: i32 = 3;

// --- Movement ---

/// TU cost to step onto a floor tile.
pub const MOVE_COST_FLOOR: i32 = 4;

/// TU cost to step onto a cover tile.
pub const MOVE_COST_COVER: i32 = 6;

/// TU cost to step onto a rubble tile.
pub const MOVE_COST_RUBBLE: i32 = 8;

// --- Cover ---

/// Hit chance subtracted when the target stands on a cover tile.
pub const COVER_VALUE_COVER: i32 = 40;

/// Hit chance subtracted when the target stands on a rubble tile.
pub const COVER_VALUE_RUBBLE: i32 = 20;

// --- Hit chance ---

/// Lower clamp on any computed hit chance (percent).
pub const HIT_CHANCE_MIN: i32 = 5;

/// Upper clamp on any computed hit chance (percent).
pub const HIT_CHANCE_MAX: i32 = 95;

/// Tiles of range that carry no accuracy penalty.
pub const RANGE_PENALTY_FREE_TILES: i32 = 5;

/// Hit chance lost per tile beyond the free range.
pub const RANGE_PENALTY_PER_TILE: i32 = 2;

/// Accuracy multiplier for a kneeling attacker, applied before clamping.
pub const KNEELING_ACCURACY_BONUS: f64 = 1.15;

// --- Damage ---

/// Lower bound of the uniform damage roll multiplier.
pub const DAMAGE_ROLL_MIN: f64 = 0.5;

/// Upper bound of the uniform damage roll multiplier (exclusive).
pub const DAMAGE_ROLL_MAX: f64 = 2.0;

/// Minimum damage applied on any confirmed hit, regardless of armor.
pub const MIN_DAMAGE: i32 = 1;

// --- Reaction fire ---

/// Minimum TU a unit must hold to take a reaction shot.
pub const REACTION_TU_THRESHOLD: i32 = 10;

/// Scale applied to the reactions stat when rolling for an interrupt.
pub const REACTION_CHANCE_SCALE: f64 = 0.30;

// --- Enemy turn ---

/// Range in tiles within which a hostile opens fire on a visible target.
pub const AI_DETECTION_RANGE: i32 = 15;

/// Maximum single-tile steps a hostile takes per activation.
pub const AI_MAX_STEPS_PER_TURN: u32 = 5;

// --- Stance ---

/// TU cost to kneel or to stand back up.
pub const KNEEL_TU_COST: i32 = 8;

// --- Combat log ---

/// Maximum retained combat log lines.
pub const COMBAT_LOG_CAPACITY: usize = 50;
