//! Firing system — fire-rate gating and projectile creation.
//!
//! The player fires at the nearest enemy anywhere in the arena; each
//! turret fires only at enemies strictly inside its range. Projectiles
//! are aimed at the target's position at fire time, with no lead.

use hecs::{Entity, World};

use redoubt_core::components::{Player, Turret, Weapon};
use redoubt_core::types::{Position, SimTime};

use crate::systems::targeting;
use crate::world_setup;

struct Shot {
    attacker: Entity,
    origin: Position,
    target: Position,
    speed: f64,
    damage: f64,
}

/// Let every ready attacker fire at its acquired target.
pub fn run(world: &mut World, next_id: &mut u32, time: &SimTime) {
    let now = time.elapsed_ms;
    let mut shots = Vec::new();

    for (entity, (_player, pos, weapon)) in
        world.query::<(&Player, &Position, &Weapon)>().iter()
    {
        if now > weapon.last_fired_ms + weapon.fire_rate_ms {
            if let Some((_target, target_pos)) = targeting::nearest_enemy(world, *pos) {
                shots.push(Shot {
                    attacker: entity,
                    origin: *pos,
                    target: target_pos,
                    speed: weapon.projectile_speed,
                    damage: weapon.damage,
                });
            }
        }
    }

    for (entity, (turret, pos, weapon)) in world.query::<(&Turret, &Position, &Weapon)>().iter() {
        if now > weapon.last_fired_ms + weapon.fire_rate_ms {
            if let Some((_target, target_pos)) =
                targeting::nearest_enemy_in_range(world, *pos, turret.range)
            {
                shots.push(Shot {
                    attacker: entity,
                    origin: *pos,
                    target: target_pos,
                    speed: weapon.projectile_speed,
                    damage: weapon.damage,
                });
            }
        }
    }

    for shot in shots {
        if let Ok(mut weapon) = world.get::<&mut Weapon>(shot.attacker) {
            weapon.last_fired_ms = now;
        }
        world_setup::spawn_projectile(
            world,
            next_id,
            shot.origin,
            shot.target,
            shot.speed,
            shot.damage,
            now,
        );
    }
}
