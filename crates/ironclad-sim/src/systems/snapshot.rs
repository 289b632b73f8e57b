//! Satellite snapshot assembly.
//!
//! Builds the character-grid image and the `BattleInfo` value delivered
//! to a decision module. Overlay order: terrain, then alive tanks, then
//! shells that have already advanced off their spawn cell, then the
//! requesting tank's `'%'` marker on top of everything.

use ironclad_core::constants::{CHAR_REQUESTING_TANK, CHAR_SHELL};
use ironclad_core::entities::{Shell, Tank};
use ironclad_core::state::{BattleInfo, SatelliteImage};

use ironclad_arena::Arena;

/// Build the battle info for the tank at index `requester`.
pub fn build_battle_info(
    arena: &Arena,
    tanks: &[Tank],
    shells: &[Shell],
    requester: usize,
) -> BattleInfo {
    let me = &tanks[requester];
    let mut image = SatelliteImage::new(arena.width(), arena.height());

    for y in 0..arena.height() {
        for x in 0..arena.width() {
            image.set(x, y, arena.cell(x as i32, y as i32).to_char());
        }
    }

    for tank in tanks.iter().filter(|t| t.alive) {
        image.set(
            tank.position.x as usize,
            tank.position.y as usize,
            tank.player.tank_char(),
        );
    }

    // A shell still sitting on the cell it spawned from does not hide its
    // tank until it has advanced.
    for shell in shells.iter().filter(|s| s.active && s.traveled > 0) {
        image.set(
            shell.position.x as usize,
            shell.position.y as usize,
            CHAR_SHELL,
        );
    }

    image.set(
        me.position.x as usize,
        me.position.y as usize,
        CHAR_REQUESTING_TANK,
    );

    let enemies = tanks
        .iter()
        .filter(|t| t.alive && t.player != me.player)
        .map(|t| t.position)
        .collect();
    let allies = tanks
        .iter()
        .enumerate()
        .filter(|(i, t)| t.alive && t.player == me.player && *i != requester)
        .map(|(_, t)| t.position)
        .collect();
    let shell_positions = shells.iter().filter(|s| s.active).map(|s| s.position).collect();

    BattleInfo {
        tank_position: me.position,
        tank_direction: me.direction,
        ammo: me.ammo,
        cooldown: me.cooldown,
        width: arena.width(),
        height: arena.height(),
        image,
        enemies,
        allies,
        shells: shell_positions,
    }
}
