//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use redoubt_core::components::{Enemy, Health, Player, Progression, Projectile, Turret};
use redoubt_core::enums::GamePhase;
use redoubt_core::events::GameEvent;
use redoubt_core::state::*;
use redoubt_core::types::{Position, SimTime};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wave: u32,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        wave,
        player: build_player(world),
        enemies: build_enemies(world),
        turrets: build_turrets(world),
        projectiles: build_projectiles(world),
        events,
    }
}

/// Build the player HUD view.
fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position, &Health, &Progression)>()
        .iter()
        .next()
        .map(|(_, (_player, pos, health, progression))| PlayerView {
            position: *pos,
            level: progression.level,
            health: health.current,
            max_health: health.max,
            xp: progression.xp,
            xp_to_next_level: progression.xp_to_next_level,
            money: progression.money,
        })
        .unwrap_or_default()
}

/// Build EnemyView list from all live enemies.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .map(|(_, (enemy, pos, health))| EnemyView {
            id: enemy.id,
            position: *pos,
            health_frac: if health.max > 0.0 {
                health.current / health.max
            } else {
                0.0
            },
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

/// Build TurretView list from all placed turrets.
fn build_turrets(world: &World) -> Vec<TurretView> {
    let mut turrets: Vec<TurretView> = world
        .query::<(&Turret, &Position)>()
        .iter()
        .map(|(_, (turret, pos))| TurretView {
            id: turret.id,
            kind: turret.kind,
            position: *pos,
            cell: turret.cell,
            range: turret.range,
        })
        .collect();

    turrets.sort_by_key(|t| t.id);
    turrets
}

/// Build ProjectileView list from all in-flight projectiles.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| ProjectileView {
            id: projectile.id,
            position: *pos,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
