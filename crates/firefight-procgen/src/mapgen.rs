//! Mission map generation.
//!
//! Each tile rolls weighted random terrain; the two deployment zones are
//! then flattened so both squads always start on open floor.

use rand::Rng;

use firefight_core::constants::{
    COVER_WEIGHT, RUBBLE_WEIGHT, SPAWN_ZONE_HEIGHT, SPAWN_ZONE_WIDTH, WALL_WEIGHT,
};
use firefight_core::enums::TerrainKind;
use firefight_core::types::GridPos;
use firefight_terrain::MapGrid;

/// A rectangular deployment zone on the grid.
#[derive(Debug, Clone, Copy)]
pub struct ZoneRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ZoneRect {
    /// Iterate every tile inside the zone, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = GridPos> {
        let (x0, y0, w) = (self.x, self.y, self.width);
        (0..self.height).flat_map(move |dy| (0..w).map(move |dx| GridPos::new(x0 + dx, y0 + dy)))
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= self.x
            && pos.x < self.x + self.width
            && pos.y >= self.y
            && pos.y < self.y + self.height
    }
}

/// Squad deployment zone, anchored at the top-left corner.
pub fn squad_zone(_width: i32, _height: i32) -> ZoneRect {
    ZoneRect {
        x: 0,
        y: 0,
        width: SPAWN_ZONE_WIDTH,
        height: SPAWN_ZONE_HEIGHT,
    }
}

/// Hostile deployment zone, anchored at the bottom-right corner.
pub fn hostile_zone(width: i32, height: i32) -> ZoneRect {
    ZoneRect {
        x: width - SPAWN_ZONE_WIDTH,
        y: height - SPAWN_ZONE_HEIGHT,
        width: SPAWN_ZONE_WIDTH,
        height: SPAWN_ZONE_HEIGHT,
    }
}

/// Generate a mission map.
pub fn generate_map<R: Rng>(rng: &mut R, width: i32, height: i32) -> MapGrid {
    let mut tiles = Vec::with_capacity((width * height) as usize);
    for _ in 0..width * height {
        tiles.push(roll_tile(rng));
    }
    let mut grid = MapGrid::from_tiles(width, height, tiles);

    for zone in [squad_zone(width, height), hostile_zone(width, height)] {
        for pos in zone.tiles() {
            grid.set_tile(pos, TerrainKind::Floor);
        }
    }

    grid
}

/// Roll one tile's terrain by cumulative weight.
fn roll_tile<R: Rng>(rng: &mut R) -> TerrainKind {
    let roll: f64 = rng.gen_range(0.0..1.0);
    if roll < WALL_WEIGHT {
        TerrainKind::Wall
    } else if roll < WALL_WEIGHT + COVER_WEIGHT {
        TerrainKind::Cover
    } else if roll < WALL_WEIGHT + COVER_WEIGHT + RUBBLE_WEIGHT {
        TerrainKind::Rubble
    } else {
        TerrainKind::Floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_zones_cleared() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = generate_map(&mut rng, 20, 15);
            for zone in [squad_zone(20, 15), hostile_zone(20, 15)] {
                for pos in zone.tiles() {
                    assert_eq!(
                        grid.tile_at(pos),
                        TerrainKind::Floor,
                        "seed {seed}: zone tile {pos:?} should be floor"
                    );
                }
            }
        }
    }

    #[test]
    fn test_generation_deterministic() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let grid_a = generate_map(&mut a, 20, 15);
        let grid_b = generate_map(&mut b, 20, 15);
        assert_eq!(
            grid_a.tiles(),
            grid_b.tiles(),
            "same seed should roll the same map"
        );

        let mut c = StdRng::seed_from_u64(100);
        let grid_c = generate_map(&mut c, 20, 15);
        assert_ne!(
            grid_a.tiles(),
            grid_c.tiles(),
            "different seeds should roll different maps"
        );
    }

    #[test]
    fn test_terrain_distribution() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = generate_map(&mut rng, 50, 50);
        let floor = grid
            .tiles()
            .iter()
            .filter(|t| **t == TerrainKind::Floor)
            .count();
        let wall = grid
            .tiles()
            .iter()
            .filter(|t| **t == TerrainKind::Wall)
            .count();
        // 75% of tiles roll floor before zone clearing, so well over half.
        assert!(
            floor > 2500 / 2,
            "floor should dominate, got {floor} of 2500"
        );
        assert!(wall > 0, "a 2500-tile map should roll some walls");
    }

    #[test]
    fn test_zone_geometry() {
        let zone = hostile_zone(20, 15);
        assert_eq!(zone.tiles().count(), (zone.width * zone.height) as usize);
        assert!(zone.contains(GridPos::new(19, 14)));
        assert!(zone.contains(GridPos::new(20 - SPAWN_ZONE_WIDTH, 15 - SPAWN_ZONE_HEIGHT)));
        assert!(!zone.contains(GridPos::new(0, 0)));
        for pos in zone.tiles() {
            assert!(zone.contains(pos));
        }
    }
}
