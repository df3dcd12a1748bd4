//! Transient events emitted by the simulation for presentation feedback.
//!
//! Each event describes something that happened during the tick whose
//! snapshot carries it; none of them is required to advance the simulation.

use serde::{Deserialize, Serialize};

use crate::enums::{PlacementError, TurretKind};
use crate::types::CellCoord;

/// Per-tick feedback events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile struck an enemy that survived.
    EnemyHit { enemy_id: u32, damage: f64 },
    /// An enemy died; the reward has already been granted.
    EnemyKilled { enemy_id: u32, xp: u32, money: u32 },
    /// The player took contact damage.
    PlayerHit { damage: f64, health: f64 },
    /// The player's health reached zero.
    PlayerDied,
    /// The player reached a new level.
    LevelUp { level: u32 },
    /// A turret was placed and paid for.
    TurretPlaced {
        turret_id: u32,
        kind: TurretKind,
        cell: CellCoord,
    },
    /// A turret was sold and its cell freed.
    TurretSold { turret_id: u32, refund: u32 },
    /// A placement attempt failed; nothing was charged.
    PlacementRejected { reason: PlacementError },
    /// The wave counter changed.
    WaveStarted { wave: u32 },
}
