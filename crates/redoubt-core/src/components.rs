//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::TurretKind;
use crate::types::CellCoord;

/// Marks an entity as the player. Singleton.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an entity as an enemy and carries its external id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Stable id exposed to the presentation layer.
    pub id: u32,
}

/// Hit points. `current` never exceeds `max` and never drops below zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Ground movement parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobility {
    /// Cruise speed in world units per second.
    pub speed: f64,
    /// Pursuit is suppressed until this simulation time (knockback window).
    pub knocked_until_ms: f64,
}

/// Reward granted exactly once when the carrying enemy dies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reward {
    pub xp: u32,
    pub money: u32,
}

/// Fire-rate-gated shooter state, shared by the player and turrets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weapon {
    /// Minimum milliseconds between shots.
    pub fire_rate_ms: f64,
    /// Simulation time of the last shot.
    pub last_fired_ms: f64,
    /// Speed of spawned projectiles (world units per second).
    pub projectile_speed: f64,
    /// Damage carried by spawned projectiles.
    pub damage: f64,
}

/// Placed turret state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Turret {
    /// Stable id exposed to the presentation layer and used for selling.
    pub id: u32,
    pub kind: TurretKind,
    /// Grid cell this turret occupies.
    pub cell: CellCoord,
    /// Purchase price, basis for the sell refund.
    pub original_cost: u32,
    /// Targeting radius; enemies at or beyond it are ignored.
    pub range: f64,
}

/// Player currency and experience state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Progression {
    pub level: u32,
    pub xp: u32,
    pub xp_to_next_level: u32,
    pub money: u32,
}

/// Normalized movement intent set by the presentation layer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MoveIntent {
    pub x: f64,
    pub y: f64,
}

/// Gate for enemy-contact damage, mirroring the fire-rate pattern.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContactClock {
    /// Simulation time contact damage was last applied.
    pub last_contact_ms: f64,
}

/// In-flight projectile state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Stable id exposed to the presentation layer.
    pub id: u32,
    /// Damage applied to the first enemy overlapped.
    pub damage: f64,
    /// Simulation time at which the projectile expires unhit.
    pub expires_at_ms: f64,
}
