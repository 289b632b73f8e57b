#[cfg(test)]
mod tests {
    use crate::enums::{Action, Cell, Player};
    use crate::state::{ActionRecord, BattleOutcome, SatelliteImage};
    use crate::types::{Direction, Position};

    #[test]
    fn test_direction_offsets_match_octant_table() {
        let expected = [
            (Direction::Up, (0, -1)),
            (Direction::UpRight, (1, -1)),
            (Direction::Right, (1, 0)),
            (Direction::DownRight, (1, 1)),
            (Direction::Down, (0, 1)),
            (Direction::DownLeft, (-1, 1)),
            (Direction::Left, (-1, 0)),
            (Direction::UpLeft, (-1, -1)),
        ];
        for (dir, offset) in expected {
            assert_eq!(dir.offset(), offset, "{dir:?}");
        }
    }

    #[test]
    fn test_rotation_inverses_cancel() {
        for dir in Direction::ALL {
            assert_eq!(dir.rotated(1).rotated(-1), dir);
            assert_eq!(dir.rotated(-1).rotated(1), dir);
            assert_eq!(dir.rotated(2).rotated(-2), dir);
            assert_eq!(dir.rotated(-2).rotated(2), dir);
        }
    }

    #[test]
    fn test_eight_45_degree_rotations_are_identity() {
        for dir in Direction::ALL {
            let mut d = dir;
            for _ in 0..8 {
                d = d.rotated(1);
            }
            assert_eq!(d, dir);
        }
    }

    #[test]
    fn test_opposite_negates_offset() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.offset();
            assert_eq!(dir.opposite().offset(), (-dx, -dy));
        }
    }

    #[test]
    fn test_steps_to_prefers_shortest_arc() {
        assert_eq!(Direction::Up.steps_to(Direction::UpRight), 1);
        assert_eq!(Direction::Up.steps_to(Direction::UpLeft), -1);
        assert_eq!(Direction::Up.steps_to(Direction::Right), 2);
        assert_eq!(Direction::Up.steps_to(Direction::Left), -2);
        // 180° comes back as the positive half-turn.
        assert_eq!(Direction::Up.steps_to(Direction::Down), 4);
    }

    #[test]
    fn test_from_delta_collapses_to_octant() {
        assert_eq!(Direction::from_delta(0, -3), Some(Direction::Up));
        assert_eq!(Direction::from_delta(5, 2), Some(Direction::DownRight));
        assert_eq!(Direction::from_delta(-1, 0), Some(Direction::Left));
        assert_eq!(Direction::from_delta(0, 0), None);
    }

    #[test]
    fn test_toroidal_distance_wraps_both_axes() {
        let a = Position::new(0, 0);
        let b = Position::new(9, 9);
        // On a 10×10 torus the corners are diagonal neighbors.
        assert_eq!(a.toroidal_distance(&b, 10, 10), 1);
        let c = Position::new(5, 0);
        assert_eq!(a.toroidal_distance(&c, 10, 10), 5);
    }

    #[test]
    fn test_cell_char_mapping() {
        assert_eq!(Cell::from_map_char('#'), Cell::Wall);
        assert_eq!(Cell::from_map_char('='), Cell::WeakWall);
        assert_eq!(Cell::from_map_char('@'), Cell::Mine);
        assert_eq!(Cell::from_map_char('x'), Cell::Empty);
        assert_eq!(Cell::Wall.to_char(), '#');
        assert!(Cell::WeakWall.blocks_movement());
        assert!(!Cell::Mine.blocks_movement());
    }

    #[test]
    fn test_action_record_display_forms() {
        let executed = ActionRecord {
            action: Some(Action::MoveForward),
            ignored: false,
            killed: false,
        };
        assert_eq!(executed.to_string(), "MoveForward");

        let ignored = ActionRecord {
            action: Some(Action::Shoot),
            ignored: true,
            killed: false,
        };
        assert_eq!(ignored.to_string(), "Shoot (ignored)");

        let killed = ActionRecord {
            action: Some(Action::MoveBackward),
            ignored: true,
            killed: true,
        };
        assert_eq!(killed.to_string(), "MoveBackward (ignored) (killed)");

        let dead = ActionRecord {
            action: None,
            ignored: false,
            killed: false,
        };
        assert_eq!(dead.to_string(), "killed");
    }

    #[test]
    fn test_outcome_result_strings() {
        let win = BattleOutcome::Victory {
            player: Player::One,
            tanks_alive: 2,
        };
        assert_eq!(win.to_string(), "Player 1 won with 2 tanks still alive");

        assert_eq!(
            BattleOutcome::MutualDestruction.to_string(),
            "Tie, both players have zero tanks"
        );

        let steps = BattleOutcome::MaxSteps {
            max_steps: 10,
            player1_alive: 1,
            player2_alive: 1,
        };
        assert_eq!(
            steps.to_string(),
            "Tie, reached max steps = 10, player 1 has 1 tanks, player 2 has 1 tanks"
        );

        let ammo = BattleOutcome::AmmoDepleted { ticks: 40 };
        assert_eq!(
            ammo.to_string(),
            "Tie, both players have zero shells for 40 steps"
        );
    }

    #[test]
    fn test_game_event_serializes_with_type_tag() {
        let event = crate::events::GameEvent::WallWeakened {
            position: Position::new(3, 4),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"WallWeakened\""), "{json}");
    }

    #[test]
    fn test_satellite_image_queries() {
        let mut image = SatelliteImage::new(4, 3);
        image.set(2, 1, '%');
        image.set(0, 0, '*');
        image.set(3, 2, '*');

        assert_eq!(image.cell(2, 1), '%');
        assert_eq!(image.cell(1, 1), ' ');
        assert_eq!(image.cell(-1, 0), '&');
        assert_eq!(image.cell(4, 0), '&');
        assert_eq!(image.find('%'), Some(Position::new(2, 1)));
        assert_eq!(
            image.positions_of('*'),
            vec![Position::new(0, 0), Position::new(3, 2)]
        );
    }
}
