//! Spawn factories for setting up a battle from a parsed map.

use ironclad_core::entities::Tank;
use ironclad_core::enums::Player;
use ironclad_core::module::{DecisionModule, ModuleFactory};
use ironclad_core::types::Direction;

use ironclad_arena::MapFile;

/// Starting facing per side: player 1 faces left, player 2 faces right.
pub fn starting_direction(player: Player) -> Direction {
    match player {
        Player::One => Direction::Left,
        Player::Two => Direction::Right,
    }
}

/// Build the tank list and the parallel decision-module list from the
/// map's spawns, in map scan order. The scan order defines the stable
/// entity ids used for polling, tie-breaks, and the tick log.
pub fn spawn_forces(
    map: &MapFile,
    factory: &dyn ModuleFactory,
) -> (Vec<Tank>, Vec<Box<dyn DecisionModule>>) {
    let mut tanks = Vec::with_capacity(map.spawns.len());
    let mut modules = Vec::with_capacity(map.spawns.len());
    let mut counts = [0usize; 2];

    for spawn in &map.spawns {
        let slot = match spawn.player {
            Player::One => &mut counts[0],
            Player::Two => &mut counts[1],
        };
        let tank_index = *slot;
        *slot += 1;

        tanks.push(Tank::new(
            spawn.position,
            starting_direction(spawn.player),
            spawn.player,
            tank_index,
            map.num_shells,
        ));
        modules.push(factory.create(spawn.player, tank_index));
    }

    (tanks, modules)
}
