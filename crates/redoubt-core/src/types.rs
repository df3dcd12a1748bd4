//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::{CELL_SIZE, TICK_RATE};

/// 2D position in arena space (world units, origin at the top-left corner).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in arena space (world units per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Integer grid cell coordinate used for turret placement and occupancy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle toward another position in radians (0 = +x).
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of the given magnitude along an angle in radians.
    pub fn from_angle(angle: f64, speed: f64) -> Self {
        Self {
            x: angle.cos() * speed,
            y: angle.sin() * speed,
        }
    }

    /// Speed magnitude (world units per second).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl CellCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell containing the given world position.
    pub fn from_world(position: Position) -> Self {
        Self {
            x: (position.x / CELL_SIZE).floor() as i32,
            y: (position.y / CELL_SIZE).floor() as i32,
        }
    }

    /// World position of the cell's center. Exact inverse of `from_world`.
    pub fn center(&self) -> Position {
        Position {
            x: self.x as f64 * CELL_SIZE + CELL_SIZE / 2.0,
            y: self.y as f64 * CELL_SIZE + CELL_SIZE / 2.0,
        }
    }
}

impl SimTime {
    /// Milliseconds per tick at the fixed tick rate.
    pub fn dt_ms(&self) -> f64 {
        1000.0 / TICK_RATE as f64
    }

    /// Seconds per tick, for velocity integration.
    pub fn dt_secs(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms += self.dt_ms();
    }
}
