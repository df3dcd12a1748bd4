//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player, enemies, turrets, and projectiles with
//! appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use redoubt_core::components::*;
use redoubt_core::constants::*;
use redoubt_core::enums::TurretKind;
use redoubt_core::types::{CellCoord, Position, Velocity};

/// Static parameters of a turret kind.
#[derive(Debug, Clone, Copy)]
pub struct TurretSpec {
    pub cost: u32,
    pub fire_rate_ms: f64,
    pub projectile_speed: f64,
    pub damage: f64,
    pub range: f64,
}

/// Get the stat block for a turret kind.
pub fn turret_kind_params(kind: TurretKind) -> TurretSpec {
    match kind {
        TurretKind::Basic => TurretSpec {
            cost: 50,
            fire_rate_ms: 1000.0,
            projectile_speed: 300.0,
            damage: 15.0,
            range: 300.0,
        },
        TurretKind::Rapid => TurretSpec {
            cost: 75,
            fire_rate_ms: 500.0,
            projectile_speed: 350.0,
            damage: 8.0,
            range: 250.0,
        },
        TurretKind::Heavy => TurretSpec {
            cost: 120,
            fire_rate_ms: 2000.0,
            projectile_speed: 200.0,
            damage: 40.0,
            range: 400.0,
        },
        TurretKind::Sniper => TurretSpec {
            cost: 100,
            fire_rate_ms: 1500.0,
            projectile_speed: 500.0,
            damage: 25.0,
            range: 500.0,
        },
    }
}

/// Enemy stat block for a wave: (health, speed, xp, money).
pub fn enemy_wave_stats(wave: u32) -> (f64, f64, u32, u32) {
    (
        ENEMY_BASE_HEALTH + ENEMY_HEALTH_PER_WAVE * wave as f64,
        ENEMY_BASE_SPEED + ENEMY_SPEED_PER_WAVE * wave as f64,
        ENEMY_BASE_XP + ENEMY_XP_PER_WAVE * wave,
        ENEMY_BASE_MONEY + ENEMY_MONEY_PER_WAVE * wave,
    )
}

/// Spawn the player at the arena center with starting stats.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        Player,
        Position::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0),
        Health {
            current: PLAYER_MAX_HEALTH,
            max: PLAYER_MAX_HEALTH,
        },
        Mobility {
            speed: PLAYER_SPEED,
            knocked_until_ms: 0.0,
        },
        Weapon {
            fire_rate_ms: PLAYER_FIRE_RATE_MS,
            // Negative so the first shot is not delayed by a full cooldown.
            last_fired_ms: -PLAYER_FIRE_RATE_MS,
            projectile_speed: PLAYER_PROJECTILE_SPEED,
            damage: PLAYER_PROJECTILE_DAMAGE,
        },
        Progression {
            level: 1,
            xp: 0,
            xp_to_next_level: XP_TO_FIRST_LEVEL,
            money: PLAYER_STARTING_MONEY,
        },
        MoveIntent::default(),
        ContactClock {
            last_contact_ms: -CONTACT_COOLDOWN_MS,
        },
    ))
}

/// Spawn a single enemy at a uniform-random point along one of the four
/// arena edges, inset by the spawn margin, with wave-scaled stats.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    wave: u32,
) -> hecs::Entity {
    let position = match rng.gen_range(0..4u8) {
        // top
        0 => Position::new(
            rng.gen_range(SPAWN_MARGIN..ARENA_WIDTH - SPAWN_MARGIN),
            SPAWN_MARGIN,
        ),
        // right
        1 => Position::new(
            ARENA_WIDTH - SPAWN_MARGIN,
            rng.gen_range(SPAWN_MARGIN..ARENA_HEIGHT - SPAWN_MARGIN),
        ),
        // bottom
        2 => Position::new(
            rng.gen_range(SPAWN_MARGIN..ARENA_WIDTH - SPAWN_MARGIN),
            ARENA_HEIGHT - SPAWN_MARGIN,
        ),
        // left
        _ => Position::new(
            SPAWN_MARGIN,
            rng.gen_range(SPAWN_MARGIN..ARENA_HEIGHT - SPAWN_MARGIN),
        ),
    };

    spawn_enemy_at(world, next_id, position, wave)
}

/// Spawn an enemy at an explicit position with wave-scaled stats.
pub fn spawn_enemy_at(
    world: &mut World,
    next_id: &mut u32,
    position: Position,
    wave: u32,
) -> hecs::Entity {
    let (health, speed, xp, money) = enemy_wave_stats(wave);
    let id = alloc_id(next_id);

    world.spawn((
        Enemy { id },
        position,
        Velocity::default(),
        Health {
            current: health,
            max: health,
        },
        Mobility {
            speed,
            knocked_until_ms: 0.0,
        },
        Reward { xp, money },
    ))
}

/// Spawn a turret of the given kind at a validated cell's center.
pub fn spawn_turret(
    world: &mut World,
    next_id: &mut u32,
    kind: TurretKind,
    cell: CellCoord,
) -> hecs::Entity {
    let spec = turret_kind_params(kind);
    let id = alloc_id(next_id);

    world.spawn((
        Turret {
            id,
            kind,
            cell,
            original_cost: spec.cost,
            range: spec.range,
        },
        cell.center(),
        Weapon {
            fire_rate_ms: spec.fire_rate_ms,
            last_fired_ms: -spec.fire_rate_ms,
            projectile_speed: spec.projectile_speed,
            damage: spec.damage,
        },
    ))
}

/// Spawn a projectile at `origin` aimed at the target's position at fire
/// time. The heading is computed once; there is no homing.
pub fn spawn_projectile(
    world: &mut World,
    next_id: &mut u32,
    origin: Position,
    target: Position,
    speed: f64,
    damage: f64,
    now_ms: f64,
) -> hecs::Entity {
    let id = alloc_id(next_id);
    let velocity = Velocity::from_angle(origin.angle_to(&target), speed);

    world.spawn((
        Projectile {
            id,
            damage,
            expires_at_ms: now_ms + PROJECTILE_TTL_MS,
        },
        origin,
        velocity,
    ))
}

fn alloc_id(next_id: &mut u32) -> u32 {
    let id = *next_id;
    *next_id += 1;
    id
}
