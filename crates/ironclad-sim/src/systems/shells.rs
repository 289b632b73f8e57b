//! Projectile advancer.
//!
//! Shells move two cells per tick, one sub-step at a time; the engine
//! runs a collision pass between sub-steps so a shell cannot tunnel
//! through an obstacle. Advancing does no terrain checks — the collision
//! resolver owns every outcome.

use ironclad_core::constants::SHELL_MAX_TRAVEL_CELLS;
use ironclad_core::entities::Shell;
use ironclad_core::events::GameEvent;

use ironclad_arena::Arena;

/// Advance every active shell one cell along its direction, in stable id
/// order. Shells that exceed the travel bound fizzle out.
pub fn advance_substep(shells: &mut [Shell], arena: &Arena, events: &mut Vec<GameEvent>) {
    for shell in shells.iter_mut().filter(|s| s.active) {
        shell.position = arena.step(shell.position, shell.direction);
        shell.traveled += 1;
        if shell.traveled > SHELL_MAX_TRAVEL_CELLS {
            shell.active = false;
            events.push(GameEvent::ShellExpired {
                position: shell.position,
            });
        }
    }
}
