//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Turret archetype selectable for placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurretKind {
    /// Balanced stats, cheapest entry point.
    #[default]
    Basic,
    /// High rate of fire, low per-shot damage, short reach.
    Rapid,
    /// Slow cannon with the heaviest hits.
    Heavy,
    /// Long-range precision shots.
    Sniper,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    GameOver,
}

/// Why a placement attempt was rejected. Nothing is mutated on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementError {
    /// The selected kind costs more than the player holds.
    InsufficientFunds,
    /// No valid cell at the target or within the ring search.
    NoValidCell,
}
