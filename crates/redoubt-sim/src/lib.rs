//! Headless simulation engine for the REDOUBT arena.
//!
//! Owns the ECS world, runs the fixed-order tick pipeline, and exposes
//! the command/snapshot surface consumed by the presentation layer.

pub mod engine;
pub mod placement;
pub mod progression;
pub mod systems;
pub mod world_setup;
