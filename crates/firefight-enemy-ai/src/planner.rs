//! Hostile decision functions.
//!
//! Pure functions that pick targets and approach steps for one hostile
//! activation. No ECS dependency: the engine assembles an [`EnemyContext`]
//! from the world and applies each decision through its normal attack and
//! movement paths, so reaction fire and refusals behave identically for
//! both sides.

use firefight_core::types::GridPos;

/// One potential target as seen by the acting hostile.
#[derive(Debug, Clone)]
pub struct TargetView {
    pub unit_id: u32,
    pub pos: GridPos,
    /// Clear line of sight from the acting hostile's tile.
    pub visible: bool,
}

/// Input to the planner for a single hostile activation.
#[derive(Debug, Clone)]
pub struct EnemyContext {
    /// The acting hostile's tile.
    pub me: GridPos,
    /// TU remaining this activation.
    pub tu: i32,
    /// Rounds remaining in the magazine.
    pub ammo: i32,
    /// TU cost of this hostile's snap shot.
    pub snap_tu_cost: i32,
    /// Fires on visible targets within this many tiles.
    pub detection_range: i32,
    /// Living opponents in roster order.
    pub targets: Vec<TargetView>,
}

/// Pick the nearest living opponent by Manhattan distance.
/// Ties resolve to the earliest roster entry, keeping the choice
/// deterministic.
pub fn acquire_target(ctx: &EnemyContext) -> Option<&TargetView> {
    ctx.targets
        .iter()
        .min_by_key(|t| ctx.me.manhattan_to(&t.pos))
}

/// Whether the hostile can open fire on this target right now.
pub fn can_engage(ctx: &EnemyContext, target: &TargetView) -> bool {
    target.visible
        && ctx.me.manhattan_to(&target.pos) <= ctx.detection_range
        && ctx.tu >= ctx.snap_tu_cost
        && ctx.ammo > 0
}

/// Pick the next greedy single-tile step from `from` toward `toward`.
///
/// Prefers the axis with the larger remaining distance, falls back to the
/// other axis, and returns None when both candidate tiles fail the
/// `walkable` check.
pub fn advance_step(
    from: GridPos,
    toward: GridPos,
    walkable: impl Fn(GridPos) -> bool,
) -> Option<GridPos> {
    let dx = toward.x - from.x;
    let dy = toward.y - from.y;

    let step_x = (dx != 0).then(|| from.offset(dx.signum(), 0));
    let step_y = (dy != 0).then(|| from.offset(0, dy.signum()));

    let (first, second) = if dx.abs() >= dy.abs() {
        (step_x, step_y)
    } else {
        (step_y, step_x)
    };

    [first, second]
        .into_iter()
        .flatten()
        .find(|pos| walkable(*pos))
}
