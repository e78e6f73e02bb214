//! Tile-to-tile line of sight.
//!
//! Integer Bresenham traversal between two tiles, always walked from the
//! lesser endpoint so sight is symmetric. Only wall tiles block, and only
//! intermediate tiles are tested: the endpoints never count, so a unit on
//! a cover tile can always see out of it.

use firefight_core::enums::TerrainKind;
use firefight_core::types::GridPos;

use crate::grid::MapGrid;

/// Check line of sight between two tiles.
///
/// Walks the Bresenham line between `from` and `to` and returns false if
/// any tile strictly between them is a wall. The walk always runs from
/// the lesser endpoint, so both call orders trace the same tiles and
/// sight is symmetric. Pure and deterministic: no RNG, no unit state,
/// safe to call from previews.
pub fn has_line_of_sight(grid: &MapGrid, from: GridPos, to: GridPos) -> bool {
    let (a, b) = if (from.x, from.y) <= (to.x, to.y) {
        (from, to)
    } else {
        (to, from)
    };
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };
    let mut err = dx + dy;
    let mut x = a.x;
    let mut y = a.y;

    loop {
        if x == b.x && y == b.y {
            return true;
        }
        let on_start = x == a.x && y == a.y;
        if !on_start && grid.tile_at(GridPos::new(x, y)) == TerrainKind::Wall {
            return false;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10x10 all-floor grid.
    fn make_open_grid() -> MapGrid {
        MapGrid::new(10, 10)
    }

    /// 10x10 grid with a full-height wall column at x = 5.
    fn make_walled_grid() -> MapGrid {
        let mut grid = MapGrid::new(10, 10);
        for y in 0..10 {
            grid.set_tile(GridPos::new(5, y), TerrainKind::Wall);
        }
        grid
    }

    #[test]
    fn test_los_open_field() {
        let grid = make_open_grid();
        let a = GridPos::new(1, 1);
        let b = GridPos::new(8, 6);
        assert!(has_line_of_sight(&grid, a, b), "open field should be clear");
        assert!(
            has_line_of_sight(&grid, b, a),
            "open-field LOS should be symmetric"
        );
    }

    #[test]
    fn test_los_blocked_by_wall() {
        let grid = make_walled_grid();
        let a = GridPos::new(2, 3);
        let b = GridPos::new(8, 3);
        assert!(
            !has_line_of_sight(&grid, a, b),
            "wall column should block sight"
        );
        assert!(
            !has_line_of_sight(&grid, b, a),
            "blocked LOS should be blocked from both sides"
        );
    }

    #[test]
    fn test_los_adjacent_tiles_always_clear() {
        let grid = make_walled_grid();
        // No intermediate tiles between orthogonal neighbours.
        let a = GridPos::new(4, 3);
        let b = GridPos::new(5, 3);
        assert!(has_line_of_sight(&grid, a, b));
    }

    #[test]
    fn test_los_endpoints_not_tested() {
        let mut grid = make_open_grid();
        grid.set_tile(GridPos::new(2, 0), TerrainKind::Wall);
        // Destination is itself a wall tile; the only intermediate (1, 0)
        // is floor, so sight reaches it.
        assert!(has_line_of_sight(
            &grid,
            GridPos::new(0, 0),
            GridPos::new(2, 0)
        ));
    }

    #[test]
    fn test_los_cover_does_not_block() {
        let mut grid = make_open_grid();
        for y in 0..10 {
            grid.set_tile(GridPos::new(5, y), TerrainKind::Cover);
            grid.set_tile(GridPos::new(6, y), TerrainKind::Rubble);
        }
        assert!(
            has_line_of_sight(&grid, GridPos::new(2, 4), GridPos::new(9, 4)),
            "cover and rubble should not block sight"
        );
    }

    #[test]
    fn test_los_diagonal() {
        let grid = make_open_grid();
        assert!(has_line_of_sight(
            &grid,
            GridPos::new(0, 0),
            GridPos::new(9, 9)
        ));

        let mut blocked = make_open_grid();
        for x in 0..10 {
            blocked.set_tile(GridPos::new(x, 5), TerrainKind::Wall);
        }
        assert!(!has_line_of_sight(
            &blocked,
            GridPos::new(0, 0),
            GridPos::new(9, 9)
        ));
    }

    #[test]
    fn test_los_symmetric_through_diagonal_gap() {
        // A shallow diagonal has two candidate tie-break tiles; both call
        // orders must trace the same one.
        let a = GridPos::new(0, 0);
        let b = GridPos::new(2, 1);

        let mut on_line = make_open_grid();
        on_line.set_tile(GridPos::new(1, 1), TerrainKind::Wall);
        assert!(!has_line_of_sight(&on_line, a, b));
        assert!(
            !has_line_of_sight(&on_line, b, a),
            "a blocked diagonal is blocked from both ends"
        );

        let mut off_line = make_open_grid();
        off_line.set_tile(GridPos::new(1, 0), TerrainKind::Wall);
        assert!(has_line_of_sight(&off_line, a, b));
        assert!(
            has_line_of_sight(&off_line, b, a),
            "a clear diagonal is clear from both ends"
        );
    }

    #[test]
    fn test_los_same_tile() {
        let grid = make_walled_grid();
        let p = GridPos::new(3, 3);
        assert!(has_line_of_sight(&grid, p, p));
    }
}
