//! Collision resolution — projectile hits and player/enemy contact.
//!
//! Overlap pairs are collected before any mutation so traversal never
//! observes entities deleted within the same pass; despawns are deferred
//! through the shared buffer.

use hecs::{Entity, World};

use redoubt_core::components::{ContactClock, Enemy, Health, Mobility, Player, Projectile, Reward};
use redoubt_core::constants::{
    CONTACT_COOLDOWN_MS, CONTACT_DAMAGE, ENEMY_RADIUS, KNOCKBACK_DURATION_MS, KNOCKBACK_SPEED,
    PLAYER_RADIUS, PROJECTILE_RADIUS,
};
use redoubt_core::events::GameEvent;
use redoubt_core::types::{Position, SimTime, Velocity};

/// What the tick's collisions produced, consumed synchronously by the
/// engine's progression step.
#[derive(Debug, Default)]
pub struct CollisionOutcome {
    /// One entry per enemy killed this tick.
    pub rewards: Vec<Reward>,
    /// The player's health reached zero.
    pub player_died: bool,
}

/// Resolve all projectile/enemy and player/enemy overlaps.
pub fn run(
    world: &mut World,
    time: &SimTime,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();

    resolve_projectile_hits(world, events, despawn_buffer, &mut outcome);
    resolve_player_contact(world, time, events, &mut outcome);

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    outcome
}

struct ProjectileHit {
    projectile: Entity,
    enemy: Entity,
    enemy_id: u32,
    damage: f64,
}

fn resolve_projectile_hits(
    world: &mut World,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
    outcome: &mut CollisionOutcome,
) {
    let hit_radius = PROJECTILE_RADIUS + ENEMY_RADIUS;
    let mut hits = Vec::new();

    for (proj_entity, (projectile, proj_pos)) in
        world.query::<(&Projectile, &Position)>().iter()
    {
        for (enemy_entity, (enemy, enemy_pos)) in world.query::<(&Enemy, &Position)>().iter() {
            if proj_pos.distance_to(enemy_pos) < hit_radius {
                hits.push(ProjectileHit {
                    projectile: proj_entity,
                    enemy: enemy_entity,
                    enemy_id: enemy.id,
                    damage: projectile.damage,
                });
                // Projectiles never penetrate; one hit each.
                break;
            }
        }
    }

    for hit in hits {
        despawn_buffer.push(hit.projectile);

        let killed = {
            let mut health = match world.get::<&mut Health>(hit.enemy) {
                Ok(health) => health,
                Err(_) => continue,
            };
            if health.current <= 0.0 {
                // Already felled by an earlier projectile this tick; the
                // reward was granted exactly once.
                continue;
            }
            health.current = (health.current - hit.damage).max(0.0);
            health.current <= 0.0
        };

        if killed {
            let reward = match world.get::<&Reward>(hit.enemy) {
                Ok(reward) => *reward,
                Err(_) => continue,
            };
            outcome.rewards.push(reward);
            events.push(GameEvent::EnemyKilled {
                enemy_id: hit.enemy_id,
                xp: reward.xp,
                money: reward.money,
            });
            despawn_buffer.push(hit.enemy);
        } else {
            events.push(GameEvent::EnemyHit {
                enemy_id: hit.enemy_id,
                damage: hit.damage,
            });
        }
    }
}

fn resolve_player_contact(
    world: &mut World,
    time: &SimTime,
    events: &mut Vec<GameEvent>,
    outcome: &mut CollisionOutcome,
) {
    let now = time.elapsed_ms;
    let contact_radius = PLAYER_RADIUS + ENEMY_RADIUS;

    let (player_entity, player_pos) = match world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(entity, (_player, pos))| (entity, *pos))
    {
        Some(found) => found,
        None => return,
    };

    let touching: Vec<(Entity, Position)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .filter(|(_entity, (_enemy, pos))| player_pos.distance_to(pos) < contact_radius)
        .map(|(entity, (_enemy, pos))| (entity, *pos))
        .collect();

    if touching.is_empty() {
        return;
    }

    // Every touching enemy is shoved radially away from the player.
    for (enemy_entity, enemy_pos) in &touching {
        let away = player_pos.angle_to(enemy_pos);
        if let Ok(mut vel) = world.get::<&mut Velocity>(*enemy_entity) {
            *vel = Velocity::from_angle(away, KNOCKBACK_SPEED);
        }
        if let Ok(mut mobility) = world.get::<&mut Mobility>(*enemy_entity) {
            mobility.knocked_until_ms = now + KNOCKBACK_DURATION_MS;
        }
    }

    // Contact damage is gated like every other timed interaction.
    let ready = {
        let mut clock = match world.get::<&mut ContactClock>(player_entity) {
            Ok(clock) => clock,
            Err(_) => return,
        };
        if now > clock.last_contact_ms + CONTACT_COOLDOWN_MS {
            clock.last_contact_ms = now;
            true
        } else {
            false
        }
    };

    if ready {
        if let Ok(mut health) = world.get::<&mut Health>(player_entity) {
            health.current = (health.current - CONTACT_DAMAGE).max(0.0);
            events.push(GameEvent::PlayerHit {
                damage: CONTACT_DAMAGE,
                health: health.current,
            });
            if health.current <= 0.0 {
                outcome.player_died = true;
                events.push(GameEvent::PlayerDied);
            }
        }
    }
}
