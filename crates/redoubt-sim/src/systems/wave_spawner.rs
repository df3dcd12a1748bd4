//! Wave spawning system — timer-driven enemy creation with wave-scaled stats.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use redoubt_core::constants::SPAWN_INTERVAL_MS;
use redoubt_core::types::SimTime;

use crate::world_setup;

/// Accumulates tick time and fires one spawn per elapsed interval.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    pub accumulator_ms: f64,
    pub interval_ms: f64,
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self {
            accumulator_ms: 0.0,
            interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl SpawnTimer {
    pub fn with_interval(interval_ms: f64) -> Self {
        Self {
            accumulator_ms: 0.0,
            interval_ms,
        }
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
    }
}

/// Advance the spawn accumulator; spawn one enemy when it fills.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timer: &mut SpawnTimer,
    next_id: &mut u32,
    wave: u32,
    time: &SimTime,
) {
    timer.accumulator_ms += time.dt_ms();

    if timer.accumulator_ms >= timer.interval_ms {
        timer.accumulator_ms = 0.0;
        world_setup::spawn_enemy(world, rng, next_id, wave);
    }
}
