//! Simulation systems, run in a fixed order each tick by the engine.

pub mod cleanup;
pub mod collision;
pub mod firing;
pub mod movement;
pub mod snapshot;
pub mod targeting;
pub mod wave_spawner;
