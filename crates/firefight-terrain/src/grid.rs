//! MapGrid: the battle grid tile store with terrain queries.

use firefight_core::constants::{
    COVER_VALUE_COVER, COVER_VALUE_RUBBLE, MOVE_COST_COVER, MOVE_COST_FLOOR, MOVE_COST_RUBBLE,
};
use firefight_core::enums::TerrainKind;
use firefight_core::types::GridPos;

/// The mission's tile grid.
///
/// Generated once at mission start and fixed during play. Unit occupancy is
/// tracked on units, not tiles, so walkability against the live roster is the
/// engine's concern; this type answers terrain-only questions.
#[derive(Debug, Clone)]
pub struct MapGrid {
    width: i32,
    height: i32,
    /// Terrain kinds, row-major (index `y * width + x`).
    tiles: Vec<TerrainKind>,
}

impl MapGrid {
    /// Create a grid of all-floor tiles.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            tiles: vec![TerrainKind::Floor; (width * height) as usize],
        }
    }

    /// Create a grid from pre-rolled tiles (row-major).
    pub fn from_tiles(width: i32, height: i32, tiles: Vec<TerrainKind>) -> Self {
        debug_assert_eq!(tiles.len(), (width * height) as usize);
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Raw tile slice, row-major. Used by snapshot builders.
    pub fn tiles(&self) -> &[TerrainKind] {
        &self.tiles
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// Terrain at a tile. Out-of-range coordinates read as wall, so callers
    /// never bounds-check.
    pub fn tile_at(&self, pos: GridPos) -> TerrainKind {
        if !self.in_bounds(pos) {
            return TerrainKind::Wall;
        }
        self.tiles[(pos.y * self.width + pos.x) as usize]
    }

    /// Overwrite one tile. Map generation only; silently ignores
    /// out-of-range writes.
    pub fn set_tile(&mut self, pos: GridPos, kind: TerrainKind) {
        if self.in_bounds(pos) {
            let idx = (pos.y * self.width + pos.x) as usize;
            self.tiles[idx] = kind;
        }
    }

    /// Whether the terrain itself can be stood on.
    pub fn walkable_terrain(&self, pos: GridPos) -> bool {
        self.tile_at(pos) != TerrainKind::Wall
    }

    /// TU cost to step onto this tile. None for walls.
    pub fn move_cost(&self, pos: GridPos) -> Option<i32> {
        match self.tile_at(pos) {
            TerrainKind::Floor => Some(MOVE_COST_FLOOR),
            TerrainKind::Cover => Some(MOVE_COST_COVER),
            TerrainKind::Rubble => Some(MOVE_COST_RUBBLE),
            TerrainKind::Wall => None,
        }
    }

    /// Hit chance subtracted from shots at a unit standing on this tile.
    pub fn cover_value(&self, pos: GridPos) -> i32 {
        match self.tile_at(pos) {
            TerrainKind::Cover => COVER_VALUE_COVER,
            TerrainKind::Rubble => COVER_VALUE_RUBBLE,
            TerrainKind::Floor | TerrainKind::Wall => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x3 grid with one of each terrain kind on the top row.
    fn make_mixed_grid() -> MapGrid {
        let mut grid = MapGrid::new(4, 3);
        grid.set_tile(GridPos::new(1, 0), TerrainKind::Wall);
        grid.set_tile(GridPos::new(2, 0), TerrainKind::Cover);
        grid.set_tile(GridPos::new(3, 0), TerrainKind::Rubble);
        grid
    }

    #[test]
    fn test_tile_at_out_of_bounds_reads_wall() {
        let grid = make_mixed_grid();
        assert_eq!(grid.tile_at(GridPos::new(-1, 0)), TerrainKind::Wall);
        assert_eq!(grid.tile_at(GridPos::new(0, -1)), TerrainKind::Wall);
        assert_eq!(grid.tile_at(GridPos::new(4, 0)), TerrainKind::Wall);
        assert_eq!(grid.tile_at(GridPos::new(0, 3)), TerrainKind::Wall);
        assert_eq!(grid.tile_at(GridPos::new(0, 0)), TerrainKind::Floor);
    }

    #[test]
    fn test_move_costs_by_kind() {
        let grid = make_mixed_grid();
        let floor = grid.move_cost(GridPos::new(0, 0)).unwrap();
        let cover = grid.move_cost(GridPos::new(2, 0)).unwrap();
        let rubble = grid.move_cost(GridPos::new(3, 0)).unwrap();
        assert!(
            floor < cover && cover < rubble,
            "floor should be cheapest, rubble dearest: {floor} {cover} {rubble}"
        );
        assert!(
            grid.move_cost(GridPos::new(1, 0)).is_none(),
            "walls have no move cost"
        );
        assert!(
            grid.move_cost(GridPos::new(-5, 2)).is_none(),
            "out of bounds reads as wall"
        );
    }

    #[test]
    fn test_cover_values() {
        let grid = make_mixed_grid();
        assert_eq!(grid.cover_value(GridPos::new(0, 0)), 0);
        let cover = grid.cover_value(GridPos::new(2, 0));
        let rubble = grid.cover_value(GridPos::new(3, 0));
        assert!(cover > rubble, "cover should shield more than rubble");
        assert!(rubble > 0);
    }

    #[test]
    fn test_walkable_terrain() {
        let grid = make_mixed_grid();
        assert!(grid.walkable_terrain(GridPos::new(0, 0)));
        assert!(grid.walkable_terrain(GridPos::new(2, 0)));
        assert!(grid.walkable_terrain(GridPos::new(3, 0)));
        assert!(!grid.walkable_terrain(GridPos::new(1, 0)));
        assert!(!grid.walkable_terrain(GridPos::new(99, 99)));
    }

    #[test]
    fn test_set_tile_ignores_out_of_bounds() {
        let mut grid = MapGrid::new(2, 2);
        grid.set_tile(GridPos::new(5, 5), TerrainKind::Cover);
        assert!(grid.tiles().iter().all(|t| *t == TerrainKind::Floor));
    }

    #[test]
    fn test_from_tiles_round_trip() {
        let tiles = vec![
            TerrainKind::Floor,
            TerrainKind::Wall,
            TerrainKind::Cover,
            TerrainKind::Rubble,
        ];
        let grid = MapGrid::from_tiles(2, 2, tiles.clone());
        assert_eq!(grid.tiles(), &tiles[..]);
        assert_eq!(grid.tile_at(GridPos::new(1, 0)), TerrainKind::Wall);
        assert_eq!(grid.tile_at(GridPos::new(0, 1)), TerrainKind::Cover);
    }
}
