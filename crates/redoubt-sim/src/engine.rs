//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no rendering dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use redoubt_core::commands::PlayerCommand;
use redoubt_core::components::{Health, MoveIntent, Player, Progression, Turret, Weapon};
use redoubt_core::constants::{KILLS_PER_WAVE, SELL_REFUND_FACTOR, SPAWN_INTERVAL_MS};
use redoubt_core::enums::{GamePhase, PlacementError, TurretKind};
use redoubt_core::events::GameEvent;
use redoubt_core::state::GameStateSnapshot;
use redoubt_core::types::{Position, SimTime};

use crate::placement::{self, OccupancyGrid};
use crate::progression;
use crate::systems;
use crate::systems::collision::CollisionOutcome;
use crate::systems::wave_spawner::SpawnTimer;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Milliseconds between enemy spawns.
    pub spawn_interval_ms: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    wave: u32,
    kills: u32,
    rng: ChaCha8Rng,
    next_entity_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    spawn_timer: SpawnTimer,
    occupancy: OccupancyGrid,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            wave: 1,
            kills: 0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_entity_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            spawn_timer: SpawnTimer::with_interval(config.spawn_interval_ms),
            occupancy: OccupancyGrid::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, self.wave, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current wave number.
    pub fn wave(&self) -> u32 {
        self.wave
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Number of occupied placement cells.
    pub fn occupied_cells(&self) -> usize {
        self.occupancy.len()
    }

    /// Get a mutable reference to the ECS world (for test setup).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn an enemy at an explicit position (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, x: f64, y: f64, wave: u32) -> hecs::Entity {
        world_setup::spawn_enemy_at(
            &mut self.world,
            &mut self.next_entity_id,
            Position::new(x, y),
            wave,
        )
    }

    /// Cumulative kill count this session (for tests).
    #[cfg(test)]
    pub fn kills(&self) -> u32 {
        self.kills
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.reset_session();
                    self.phase = GamePhase::Active;
                    log::info!("session started");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Move { x, y } => {
                let (x, y) = sanitize_intent(x, y);
                for (_entity, (_player, intent)) in
                    self.world.query_mut::<(&Player, &mut MoveIntent)>()
                {
                    intent.x = x;
                    intent.y = y;
                }
            }
            PlayerCommand::PlaceTurret { x, y, kind } => {
                if self.phase == GamePhase::Active {
                    self.handle_place_turret(x, y, kind);
                }
            }
            PlayerCommand::SellTurret { turret_id } => {
                if self.phase == GamePhase::Active {
                    self.handle_sell_turret(turret_id);
                }
            }
            PlayerCommand::SetWave { wave } => {
                if wave != self.wave {
                    self.wave = wave;
                    self.events.push(GameEvent::WaveStarted { wave });
                }
            }
        }
    }

    /// Run the placement protocol: funds, cell resolution, payment, spawn.
    fn handle_place_turret(&mut self, x: f64, y: f64, kind: TurretKind) {
        let spec = world_setup::turret_kind_params(kind);

        let player = self
            .world
            .query::<(&Player, &Position, &Progression)>()
            .iter()
            .next()
            .map(|(_, (_p, pos, progression))| (*pos, progression.money));
        let (player_pos, money) = match player {
            Some(found) => found,
            None => return,
        };

        // Funds first; a rejected placement never mutates anything.
        if money < spec.cost {
            self.events.push(GameEvent::PlacementRejected {
                reason: PlacementError::InsufficientFunds,
            });
            log::debug!("placement rejected: {:?} costs {}, have {money}", kind, spec.cost);
            return;
        }

        let cell = match placement::resolve_cell(
            &self.world,
            &self.occupancy,
            Position::new(x, y),
            Some(player_pos),
        ) {
            Ok(cell) => cell,
            Err(reason) => {
                self.events.push(GameEvent::PlacementRejected { reason });
                log::debug!("placement rejected: no valid cell near ({x:.0}, {y:.0})");
                return;
            }
        };

        for (_entity, (_player, progression)) in
            self.world.query_mut::<(&Player, &mut Progression)>()
        {
            progression::spend_money(progression, spec.cost);
        }

        let turret_entity =
            world_setup::spawn_turret(&mut self.world, &mut self.next_entity_id, kind, cell);
        let turret_id = self
            .world
            .get::<&Turret>(turret_entity)
            .map(|t| t.id)
            .unwrap_or_default();
        self.occupancy.mark(cell);

        self.events.push(GameEvent::TurretPlaced {
            turret_id,
            kind,
            cell,
        });
        log::debug!("placed {kind:?} turret {turret_id} at cell ({}, {})", cell.x, cell.y);
    }

    /// Sell a turret: free its cell, refund, despawn. Unknown ids are no-ops.
    fn handle_sell_turret(&mut self, turret_id: u32) {
        let found = self
            .world
            .query::<&Turret>()
            .iter()
            .find(|(_, turret)| turret.id == turret_id)
            .map(|(entity, turret)| (entity, *turret));
        let (entity, turret) = match found {
            Some(found) => found,
            None => return,
        };

        let refund = (turret.original_cost as f64 * SELL_REFUND_FACTOR).floor() as u32;
        self.occupancy.clear(turret.cell);
        for (_entity, (_player, progression)) in
            self.world.query_mut::<(&Player, &mut Progression)>()
        {
            progression::gain_money(progression, refund);
        }
        let _ = self.world.despawn(entity);

        self.events.push(GameEvent::TurretSold { turret_id, refund });
        log::debug!("sold turret {turret_id} for {refund}");
    }

    /// Tear down the previous session and build a fresh arena.
    fn reset_session(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.wave = 1;
        self.kills = 0;
        self.occupancy.reset();
        self.spawn_timer.reset();
        self.events.clear();
        world_setup::spawn_player(&mut self.world);
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Movement: player intent, enemy pursuit, projectile flight
        systems::movement::run(&mut self.world, &self.time);
        // 2. Firing: cooldown gates and target acquisition
        systems::firing::run(&mut self.world, &mut self.next_entity_id, &self.time);
        // 3. Collision: projectile hits, player contact
        let outcome = systems::collision::run(
            &mut self.world,
            &self.time,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 4. Progression: rewards, level-ups, wave advancement
        self.apply_outcome(outcome);
        // 5. Spawn timer
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_timer,
            &mut self.next_entity_id,
            self.wave,
            &self.time,
        );
        // 6. Expired projectiles
        systems::cleanup::run(&mut self.world, &self.time, &mut self.despawn_buffer);
    }

    /// Feed collision results into progression and the wave counter.
    fn apply_outcome(&mut self, outcome: CollisionOutcome) {
        for reward in &outcome.rewards {
            let mut new_levels = Vec::new();
            for (_entity, (_player, progression, health, weapon)) in self
                .world
                .query_mut::<(&Player, &mut Progression, &mut Health, &mut Weapon)>()
            {
                progression::gain_money(progression, reward.money);
                let gained = progression::gain_xp(progression, health, weapon, reward.xp);
                for step in 0..gained {
                    new_levels.push(progression.level - gained + step + 1);
                }
            }
            for level in new_levels {
                self.events.push(GameEvent::LevelUp { level });
                log::info!("player reached level {level}");
            }

            self.kills += 1;
            if self.kills % KILLS_PER_WAVE == 0 {
                self.wave += 1;
                self.events.push(GameEvent::WaveStarted { wave: self.wave });
                log::info!("wave {} started after {} kills", self.wave, self.kills);
            }
        }

        if outcome.player_died {
            self.phase = GamePhase::GameOver;
            log::info!("player died; game over at tick {}", self.time.tick);
        }
    }
}

/// Clamp a movement intent to unit length; non-finite axes become zero.
fn sanitize_intent(x: f64, y: f64) -> (f64, f64) {
    let x = if x.is_finite() { x } else { 0.0 };
    let y = if y.is_finite() { y } else { 0.0 };
    let length = (x * x + y * y).sqrt();
    if length > 1.0 {
        (x / length, y / length)
    } else {
        (x, y)
    }
}
