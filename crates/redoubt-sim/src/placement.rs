//! Turret placement validation and grid occupancy bookkeeping.
//!
//! The occupancy set is the authority on which cells hold turrets; the
//! validity predicate re-checks live turret positions to guard against
//! desync between the set and the entity collection.

use std::collections::HashSet;

use hecs::World;

use redoubt_core::components::Turret;
use redoubt_core::constants::*;
use redoubt_core::enums::PlacementError;
use redoubt_core::types::{CellCoord, Position};

/// Set of grid cells currently holding a turret.
///
/// Cardinality always equals the live turret count.
#[derive(Debug, Default)]
pub struct OccupancyGrid {
    occupied: HashSet<CellCoord>,
}

impl OccupancyGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, cell: CellCoord) {
        self.occupied.insert(cell);
    }

    pub fn clear(&mut self, cell: CellCoord) {
        self.occupied.remove(&cell);
    }

    pub fn contains(&self, cell: CellCoord) -> bool {
        self.occupied.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Drop all marks (session restart).
    pub fn reset(&mut self) {
        self.occupied.clear();
    }
}

/// Whether a cell may receive a turret.
pub fn is_valid_cell(
    world: &World,
    occupancy: &OccupancyGrid,
    cell: CellCoord,
    player_pos: Option<Position>,
) -> bool {
    // Inset bounds keep placements off the outer walls.
    if cell.x < PLACEMENT_MARGIN_CELLS
        || cell.x > GRID_WIDTH - PLACEMENT_MARGIN_CELLS
        || cell.y < PLACEMENT_MARGIN_CELLS
        || cell.y > GRID_HEIGHT - PLACEMENT_MARGIN_CELLS
    {
        return false;
    }

    let center = cell.center();

    if let Some(player) = player_pos {
        if center.distance_to(&player) < MIN_PLAYER_DISTANCE {
            return false;
        }
    }

    if occupancy.contains(cell) {
        return false;
    }

    // Re-check against live turret entities in case the occupancy set
    // and the world have drifted apart.
    for (_entity, (_turret, pos)) in world.query::<(&Turret, &Position)>().iter() {
        if pos.distance_to(&center) < CELL_SIZE / 2.0 {
            return false;
        }
    }

    true
}

/// Expanding-ring search for the nearest valid cell around `center`.
///
/// Scans only the boundary cells of each ring (`|dx| == radius` or
/// `|dy| == radius`), `dx` ascending then `dy` ascending, and returns the
/// first valid cell found.
pub fn find_nearest_valid(
    world: &World,
    occupancy: &OccupancyGrid,
    center: CellCoord,
    player_pos: Option<Position>,
) -> Option<CellCoord> {
    for radius in RING_SEARCH_MIN_RADIUS..=RING_SEARCH_MAX_RADIUS {
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                if dx.abs() != radius && dy.abs() != radius {
                    continue;
                }

                let cell = CellCoord::new(center.x + dx, center.y + dy);
                if is_valid_cell(world, occupancy, cell, player_pos) {
                    return Some(cell);
                }
            }
        }
    }

    None
}

/// Resolve a world point to the cell a turret would actually occupy:
/// the containing cell when valid, otherwise the nearest ring cell.
pub fn resolve_cell(
    world: &World,
    occupancy: &OccupancyGrid,
    target: Position,
    player_pos: Option<Position>,
) -> Result<CellCoord, PlacementError> {
    if !target.x.is_finite() || !target.y.is_finite() {
        return Err(PlacementError::NoValidCell);
    }

    let cell = CellCoord::from_world(target);
    if is_valid_cell(world, occupancy, cell, player_pos) {
        return Ok(cell);
    }

    find_nearest_valid(world, occupancy, cell, player_pos).ok_or(PlacementError::NoValidCell)
}
