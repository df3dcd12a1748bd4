//! Target acquisition — read-only spatial queries over the enemy collection.

use hecs::{Entity, World};

use redoubt_core::components::Enemy;
use redoubt_core::types::Position;

/// The alive enemy nearest to `origin`, or `None` when there are no
/// enemies. Exact ties go to the enemy encountered first in the world's
/// stable iteration order.
pub fn nearest_enemy(world: &World, origin: Position) -> Option<(Entity, Position)> {
    let mut nearest = None;
    let mut min_distance = f64::INFINITY;

    for (entity, (_enemy, pos)) in world.query::<(&Enemy, &Position)>().iter() {
        let distance = origin.distance_to(pos);
        if distance < min_distance {
            min_distance = distance;
            nearest = Some((entity, *pos));
        }
    }

    nearest
}

/// The nearest alive enemy strictly closer than `range`, or `None`.
pub fn nearest_enemy_in_range(
    world: &World,
    origin: Position,
    range: f64,
) -> Option<(Entity, Position)> {
    let mut nearest = None;
    let mut min_distance = f64::INFINITY;

    for (entity, (_enemy, pos)) in world.query::<(&Enemy, &Position)>().iter() {
        let distance = origin.distance_to(pos);
        if distance < range && distance < min_distance {
            min_distance = distance;
            nearest = Some((entity, *pos));
        }
    }

    nearest
}
