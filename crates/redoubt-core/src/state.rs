//! Game state snapshot — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, TurretKind};
use crate::events::GameEvent;
use crate::types::{CellCoord, Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Current wave number scaling spawn stats.
    pub wave: u32,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub turrets: Vec<TurretView>,
    pub projectiles: Vec<ProjectileView>,
    /// Transient events from this tick (hits, deaths, level-ups).
    pub events: Vec<GameEvent>,
}

/// Read-only player status for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub level: u32,
    pub health: f64,
    pub max_health: f64,
    pub xp: u32,
    pub xp_to_next_level: u32,
    pub money: u32,
}

/// A live enemy on the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub position: Position,
    /// Remaining health as a fraction of max (for health bars).
    pub health_frac: f64,
}

/// A placed turret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurretView {
    pub id: u32,
    pub kind: TurretKind,
    pub position: Position,
    pub cell: CellCoord,
    pub range: f64,
}

/// An in-flight projectile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Position,
}
