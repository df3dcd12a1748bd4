#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{CellCoord, Position, SimTime, Velocity};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_turret_kind_serde() {
        let variants = vec![
            TurretKind::Basic,
            TurretKind::Rapid,
            TurretKind::Heavy,
            TurretKind::Sniper,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: TurretKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::MainMenu,
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_placement_error_serde() {
        let variants = vec![PlacementError::InsufficientFunds, PlacementError::NoValidCell];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: PlacementError = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Move { x: 1.0, y: -1.0 },
            PlayerCommand::PlaceTurret {
                x: 176.0,
                y: 176.0,
                kind: TurretKind::Sniper,
            },
            PlayerCommand::SellTurret { turret_id: 3 },
            PlayerCommand::SetWave { wave: 7 },
            PlayerCommand::StartGame,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::EnemyHit {
                enemy_id: 4,
                damage: 15.0,
            },
            GameEvent::EnemyKilled {
                enemy_id: 4,
                xp: 12,
                money: 6,
            },
            GameEvent::PlayerHit {
                damage: 5.0,
                health: 95.0,
            },
            GameEvent::PlayerDied,
            GameEvent::LevelUp { level: 2 },
            GameEvent::TurretPlaced {
                turret_id: 0,
                kind: TurretKind::Basic,
                cell: CellCoord::new(5, 5),
            },
            GameEvent::TurretSold {
                turret_id: 0,
                refund: 37,
            },
            GameEvent::PlacementRejected {
                reason: PlacementError::NoValidCell,
            },
            GameEvent::WaveStarted { wave: 2 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_position_angle() {
        let origin = Position::new(0.0, 0.0);

        // +x axis
        let east = Position::new(100.0, 0.0);
        assert!((origin.angle_to(&east) - 0.0).abs() < 1e-10);

        // +y axis
        let south = Position::new(0.0, 100.0);
        assert!((origin.angle_to(&south) - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    }

    /// Verify Velocity calculations.
    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(3.0, 4.0);
        assert!((v.speed() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_velocity_from_angle() {
        let v = Velocity::from_angle(0.0, 300.0);
        assert!((v.x - 300.0).abs() < 1e-10);
        assert!(v.y.abs() < 1e-10);

        let v = Velocity::from_angle(std::f64::consts::FRAC_PI_2, 300.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 300.0).abs() < 1e-10);
    }

    /// The grid conversions are exact inverses over the whole arena.
    #[test]
    fn test_cell_round_trip() {
        for gx in 0..GRID_WIDTH {
            for gy in 0..GRID_HEIGHT {
                let cell = CellCoord::new(gx, gy);
                assert_eq!(CellCoord::from_world(cell.center()), cell);
            }
        }
    }

    #[test]
    fn test_cell_from_world_floors_negative_coordinates() {
        let cell = CellCoord::from_world(Position::new(-1.0, -1.0));
        assert_eq!(cell, CellCoord::new(-1, -1));

        let cell = CellCoord::from_world(Position::new(CELL_SIZE - 0.01, 0.0));
        assert_eq!(cell, CellCoord::new(0, 0));
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_ms, 0.0);

        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
        // 30 ticks at 30Hz = 1 second
        assert!((time.elapsed_ms - 1000.0).abs() < 1e-9);
    }
}
