//! Collision resolver.
//!
//! Runs three times per tick: after tank actions, and after each shell
//! sub-step. Every pass first computes its destruction events from a
//! consistent pre-pass snapshot of positions and terrain, then applies
//! them all at once — no event observes another event's outcome within
//! the same pass. Iteration is in stable entity id order throughout.

use ironclad_core::entities::{Shell, Tank};
use ironclad_core::enums::{Cell, DestructionCause};
use ironclad_core::events::GameEvent;
use ironclad_core::types::Position;

use ironclad_arena::Arena;

/// Destructions one pass decided on, applied atomically at its end.
#[derive(Default)]
struct PassOutcome {
    /// Tank index → cause of death.
    tank_kills: Vec<(usize, DestructionCause)>,
    shell_kills: Vec<usize>,
    mine_clears: Vec<Position>,
    wall_hits: Vec<Position>,
    shell_collisions: Vec<Position>,
}

/// Run one collision pass over the current positions.
pub fn resolve(
    arena: &mut Arena,
    tanks: &mut [Tank],
    shells: &mut [Shell],
    events: &mut Vec<GameEvent>,
) {
    let outcome = scan(arena, tanks, shells);
    apply(outcome, arena, tanks, shells, events);
}

/// Compute this pass's destructions against the pre-pass state.
fn scan(arena: &Arena, tanks: &[Tank], shells: &[Shell]) -> PassOutcome {
    let mut out = PassOutcome::default();

    // Tanks first: mine contact, then tank-tank co-location. Only final
    // positions matter — swapped tanks pass each other unharmed.
    for (i, tank) in tanks.iter().enumerate() {
        if !tank.alive {
            continue;
        }
        if arena.cell_at(tank.position) == Cell::Mine {
            out.tank_kills.push((i, DestructionCause::MineContact));
            out.mine_clears.push(arena.wrap(tank.position));
        }
    }
    for (i, a) in tanks.iter().enumerate() {
        if !a.alive {
            continue;
        }
        for (j, b) in tanks.iter().enumerate().skip(i + 1) {
            if b.alive && a.position == b.position {
                out.tank_kills.push((i, DestructionCause::TankCollision));
                out.tank_kills.push((j, DestructionCause::TankCollision));
            }
        }
    }

    // Shells: wall, mine, tank, then shell-shell. A shell consumed by
    // terrain or a tank is out of the pairwise sweep below.
    let mut consumed = vec![false; shells.len()];
    for (i, shell) in shells.iter().enumerate() {
        if !shell.active {
            consumed[i] = true;
            continue;
        }
        match arena.cell_at(shell.position) {
            Cell::Wall | Cell::WeakWall => {
                out.wall_hits.push(arena.wrap(shell.position));
                out.shell_kills.push(i);
                consumed[i] = true;
                continue;
            }
            Cell::Mine => {
                out.mine_clears.push(arena.wrap(shell.position));
                out.shell_kills.push(i);
                consumed[i] = true;
                continue;
            }
            Cell::Empty => {}
        }
        // Friendly fire is on: any tank under a shell dies, whoever
        // fired it.
        for (t, tank) in tanks.iter().enumerate() {
            if tank.alive && tank.position == shell.position {
                out.tank_kills.push((t, DestructionCause::ShellHit));
                out.shell_kills.push(i);
                consumed[i] = true;
            }
        }
    }
    for (i, a) in shells.iter().enumerate() {
        if consumed[i] {
            continue;
        }
        for (j, b) in shells.iter().enumerate().skip(i + 1) {
            if !consumed[j] && a.position == b.position {
                out.shell_kills.push(i);
                out.shell_kills.push(j);
                out.shell_collisions.push(a.position);
            }
        }
    }

    out
}

/// Apply a pass's destructions and emit their events.
fn apply(
    outcome: PassOutcome,
    arena: &mut Arena,
    tanks: &mut [Tank],
    shells: &mut [Shell],
    events: &mut Vec<GameEvent>,
) {
    for (i, cause) in outcome.tank_kills {
        let tank = &mut tanks[i];
        if tank.alive {
            tank.destroy();
            events.push(GameEvent::TankDestroyed {
                player: tank.player,
                tank_index: tank.tank_index,
                position: tank.position,
                cause,
            });
        }
    }

    let mut cleared: Vec<Position> = Vec::new();
    for position in outcome.mine_clears {
        if !cleared.contains(&position) {
            arena.set_cell(position, Cell::Empty);
            events.push(GameEvent::MineDetonated { position });
            cleared.push(position);
        }
    }

    for position in outcome.wall_hits {
        if arena.damage_wall(position) {
            events.push(GameEvent::WallDestroyed { position });
        } else {
            events.push(GameEvent::WallWeakened { position });
        }
    }

    for i in outcome.shell_kills {
        shells[i].active = false;
    }

    let mut collided: Vec<Position> = Vec::new();
    for position in outcome.shell_collisions {
        if !collided.contains(&position) {
            events.push(GameEvent::ShellsCollided { position });
            collided.push(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironclad_core::enums::Player;
    use ironclad_core::types::{Direction, Position};

    fn tank(x: i32, y: i32, player: Player, tank_index: usize) -> Tank {
        Tank::new(Position::new(x, y), Direction::Up, player, tank_index, 3)
    }

    fn shell(x: i32, y: i32, player: Player) -> Shell {
        Shell::new(Position::new(x, y), Direction::Right, player)
    }

    #[test]
    fn test_tank_on_mine_dies_and_consumes_mine() {
        let mut arena = Arena::new(5, 5);
        arena.set_cell(Position::new(2, 2), Cell::Mine);
        let mut tanks = vec![tank(2, 2, Player::One, 0)];
        let mut shells = Vec::new();
        let mut events = Vec::new();

        resolve(&mut arena, &mut tanks, &mut shells, &mut events);
        assert!(!tanks[0].alive);
        assert!(tanks[0].killed_this_tick);
        assert_eq!(arena.cell(2, 2), Cell::Empty);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::MineDetonated { .. })));
    }

    #[test]
    fn test_colocated_tanks_destroy_each_other() {
        let mut arena = Arena::new(5, 5);
        let mut tanks = vec![tank(1, 1, Player::One, 0), tank(1, 1, Player::Two, 0)];
        let mut shells = Vec::new();
        let mut events = Vec::new();

        resolve(&mut arena, &mut tanks, &mut shells, &mut events);
        assert!(!tanks[0].alive && !tanks[1].alive);
    }

    #[test]
    fn test_separated_tanks_survive() {
        let mut arena = Arena::new(5, 5);
        let mut tanks = vec![tank(1, 1, Player::One, 0), tank(2, 1, Player::Two, 0)];
        let mut shells = Vec::new();
        let mut events = Vec::new();

        resolve(&mut arena, &mut tanks, &mut shells, &mut events);
        assert!(tanks[0].alive && tanks[1].alive);
        assert!(events.is_empty());
    }

    #[test]
    fn test_shell_damages_wall_and_dies() {
        let mut arena = Arena::new(5, 5);
        arena.set_cell(Position::new(3, 1), Cell::Wall);
        let mut tanks = Vec::new();
        let mut shells = vec![shell(3, 1, Player::One)];
        let mut events = Vec::new();

        resolve(&mut arena, &mut tanks, &mut shells, &mut events);
        assert!(!shells[0].active);
        assert_eq!(arena.cell(3, 1), Cell::WeakWall);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::WallWeakened { .. })));

        // A second shell finishes the wall off.
        let mut shells = vec![shell(3, 1, Player::Two)];
        resolve(&mut arena, &mut tanks, &mut shells, &mut events);
        assert_eq!(arena.cell(3, 1), Cell::Empty);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::WallDestroyed { .. })));
    }

    #[test]
    fn test_shell_and_mine_destroy_each_other() {
        let mut arena = Arena::new(5, 5);
        arena.set_cell(Position::new(2, 3), Cell::Mine);
        let mut tanks = Vec::new();
        let mut shells = vec![shell(2, 3, Player::One)];
        let mut events = Vec::new();

        resolve(&mut arena, &mut tanks, &mut shells, &mut events);
        assert!(!shells[0].active);
        assert_eq!(arena.cell(2, 3), Cell::Empty);
    }

    #[test]
    fn test_shell_kills_tank_including_friendly() {
        let mut arena = Arena::new(5, 5);
        let mut tanks = vec![tank(2, 2, Player::One, 0)];
        // Fired by the same player: friendly fire is on.
        let mut shells = vec![shell(2, 2, Player::One)];
        let mut events = Vec::new();

        resolve(&mut arena, &mut tanks, &mut shells, &mut events);
        assert!(!tanks[0].alive);
        assert!(!shells[0].active);
    }

    #[test]
    fn test_three_shells_on_one_cell_all_die() {
        let mut arena = Arena::new(5, 5);
        let mut tanks = Vec::new();
        let mut shells = vec![
            shell(2, 2, Player::One),
            shell(2, 2, Player::Two),
            shell(2, 2, Player::One),
        ];
        let mut events = Vec::new();

        resolve(&mut arena, &mut tanks, &mut shells, &mut events);
        assert!(shells.iter().all(|s| !s.active));
        let collisions = events
            .iter()
            .filter(|e| matches!(e, GameEvent::ShellsCollided { .. }))
            .count();
        assert_eq!(collisions, 1, "one event per collision cell");
    }

    #[test]
    fn test_two_shells_on_one_wall_destroy_it() {
        let mut arena = Arena::new(5, 5);
        arena.set_cell(Position::new(2, 2), Cell::Wall);
        let mut tanks = Vec::new();
        let mut shells = vec![shell(2, 2, Player::One), shell(2, 2, Player::Two)];
        let mut events = Vec::new();

        resolve(&mut arena, &mut tanks, &mut shells, &mut events);
        assert!(shells.iter().all(|s| !s.active));
        assert_eq!(arena.cell(2, 2), Cell::Empty, "both hits count");
    }
}
