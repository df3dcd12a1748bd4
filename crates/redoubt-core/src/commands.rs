//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::TurretKind;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement ---
    /// Set the player's movement intent. Axes are clamped to unit length;
    /// non-finite values are treated as zero.
    Move { x: f64, y: f64 },

    // --- Turrets ---
    /// Attempt to place a turret of the selected kind at a world point.
    PlaceTurret { x: f64, y: f64, kind: TurretKind },
    /// Sell a placed turret by id. Unknown ids are ignored.
    SellTurret { turret_id: u32 },

    // --- Waves ---
    /// Override the current wave number.
    SetWave { wave: u32 },

    // --- Simulation control ---
    /// Start a fresh session from the menu or after a game over.
    StartGame,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
