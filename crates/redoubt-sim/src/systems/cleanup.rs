//! Cleanup system: removes projectiles whose lifetime has expired.
//!
//! Hit projectiles and dead enemies are already despawned by the
//! collision system; this catches shots that never connected.
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use redoubt_core::components::Projectile;
use redoubt_core::types::SimTime;

/// Remove projectiles past their time-to-live.
pub fn run(world: &mut World, time: &SimTime, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let now = time.elapsed_ms;
    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if now >= projectile.expires_at_ms {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
