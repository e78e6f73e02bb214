//! Deployment tile selection inside a spawn zone.

use rand::seq::SliceRandom;
use rand::Rng;

use firefight_core::types::GridPos;

use crate::mapgen::ZoneRect;

/// Pick `count` distinct deployment tiles inside the zone.
///
/// Zones are cleared to floor during generation, so every tile qualifies.
/// If the zone holds fewer tiles than requested, every tile is returned.
pub fn scatter_positions<R: Rng>(rng: &mut R, zone: &ZoneRect, count: usize) -> Vec<GridPos> {
    let mut tiles: Vec<GridPos> = zone.tiles().collect();
    tiles.shuffle(rng);
    tiles.truncate(count);
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn zone() -> ZoneRect {
        ZoneRect {
            x: 16,
            y: 12,
            width: 4,
            height: 3,
        }
    }

    #[test]
    fn test_positions_distinct_and_inside_zone() {
        let mut rng = StdRng::seed_from_u64(3);
        let positions = scatter_positions(&mut rng, &zone(), 5);
        assert_eq!(positions.len(), 5);
        let unique: HashSet<_> = positions.iter().collect();
        assert_eq!(unique.len(), 5, "deployment tiles must not overlap");
        for pos in &positions {
            assert!(zone().contains(*pos), "{pos:?} escaped the zone");
        }
    }

    #[test]
    fn test_oversized_request_fills_zone() {
        let mut rng = StdRng::seed_from_u64(4);
        let positions = scatter_positions(&mut rng, &zone(), 50);
        assert_eq!(positions.len(), 12, "a 4x3 zone holds 12 tiles");
    }

    #[test]
    fn test_scatter_deterministic() {
        let mut a = StdRng::seed_from_u64(11);
        let mut b = StdRng::seed_from_u64(11);
        assert_eq!(
            scatter_positions(&mut a, &zone(), 4),
            scatter_positions(&mut b, &zone(), 4)
        );
    }
}
