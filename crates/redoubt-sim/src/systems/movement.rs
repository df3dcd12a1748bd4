//! Kinematic integration system.
//!
//! Moves the player by intent, steers enemies toward the player, and
//! integrates projectiles along their fixed heading.

use hecs::World;

use redoubt_core::components::{Enemy, Mobility, MoveIntent, Player, Projectile};
use redoubt_core::constants::{ARENA_HEIGHT, ARENA_WIDTH, CELL_SIZE, ENEMY_RADIUS, PLAYER_RADIUS};
use redoubt_core::types::{Position, SimTime, Velocity};

/// Run kinematic integration for all moving entities.
pub fn run(world: &mut World, time: &SimTime) {
    let dt = time.dt_secs();
    let now = time.elapsed_ms;

    // Player: integrate movement intent, stay inside the walls.
    let mut player_pos = None;
    for (_entity, (_player, pos, mobility, intent)) in
        world.query_mut::<(&Player, &mut Position, &Mobility, &MoveIntent)>()
    {
        pos.x += intent.x * mobility.speed * dt;
        pos.y += intent.y * mobility.speed * dt;
        clamp_to_arena(pos, PLAYER_RADIUS);
        player_pos = Some(*pos);
    }

    // Enemies: pursue the player's current position unless knocked back.
    if let Some(target) = player_pos {
        for (_entity, (_enemy, pos, vel, mobility)) in
            world.query_mut::<(&Enemy, &mut Position, &mut Velocity, &Mobility)>()
        {
            if now >= mobility.knocked_until_ms {
                *vel = Velocity::from_angle(pos.angle_to(&target), mobility.speed);
            }
            pos.x += vel.x * dt;
            pos.y += vel.y * dt;
            clamp_to_arena(pos, ENEMY_RADIUS);
        }
    }

    // Projectiles: straight-line flight, free of the walls.
    for (_entity, (_projectile, pos, vel)) in
        world.query_mut::<(&Projectile, &mut Position, &Velocity)>()
    {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
    }
}

/// Keep a body inside the floor area (one wall cell thick on each side).
fn clamp_to_arena(pos: &mut Position, radius: f64) {
    pos.x = pos.x.clamp(CELL_SIZE + radius, ARENA_WIDTH - CELL_SIZE - radius);
    pos.y = pos.y.clamp(CELL_SIZE + radius, ARENA_HEIGHT - CELL_SIZE - radius);
}
