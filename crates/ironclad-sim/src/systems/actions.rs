//! Action executor: applies one validated action to one tank.
//!
//! The backward-movement state machine is evaluated before the action
//! itself. Movement is blocked only by walls here; mines and other tanks
//! are resolved afterwards by the collision passes, so every tank moves
//! before any destruction is decided.

use ironclad_core::constants::SHOOT_COOLDOWN_TICKS;
use ironclad_core::entities::{Shell, Tank};
use ironclad_core::enums::{Action, ReverseState};

use ironclad_arena::Arena;

/// Execute `action` on `tank`, recording it (and whether it was ignored)
/// for the tick log. A successful Shoot appends the new shell to `shells`.
pub fn execute(tank: &mut Tank, action: Action, arena: &Arena, shells: &mut Vec<Shell>) {
    tank.last_action = Some(action);
    tank.last_action_ignored = false;

    match (tank.reverse, action) {
        // Charging: the first two backward requests only arm the gear.
        (ReverseState::Idle, Action::MoveBackward) => {
            tank.reverse = ReverseState::Wait1;
            tank.last_action_ignored = true;
        }
        (ReverseState::Wait1, Action::MoveBackward) => {
            tank.reverse = ReverseState::Wait2;
            tank.last_action_ignored = true;
        }
        // Third consecutive request engages reverse and steps; further
        // requests keep stepping.
        (ReverseState::Wait2 | ReverseState::Reversing, Action::MoveBackward) => {
            tank.reverse = ReverseState::Reversing;
            reverse_step(tank, arena);
        }
        // Braking out of an unfinished charge consumes the forward move.
        (ReverseState::Wait1 | ReverseState::Wait2, Action::MoveForward) => {
            tank.reverse = ReverseState::Idle;
            tank.last_action_ignored = true;
        }
        // Anything else drops the reverse state and executes normally.
        (_, action) => {
            tank.reverse = ReverseState::Idle;
            perform(tank, action, arena, shells);
        }
    }
}

/// Execute an action outside the reverse machine's special arcs.
fn perform(tank: &mut Tank, action: Action, arena: &Arena, shells: &mut Vec<Shell>) {
    match action {
        Action::MoveForward => {
            let target = arena.step(tank.position, tank.direction);
            if arena.cell_at(target).blocks_movement() {
                tank.last_action_ignored = true;
            } else {
                tank.position = target;
            }
        }
        Action::Shoot => {
            if !tank.can_shoot() {
                tank.last_action_ignored = true;
            } else {
                tank.ammo -= 1;
                tank.cooldown = SHOOT_COOLDOWN_TICKS;
                // The shell starts on the tank's cell; its first advance
                // moves it one cell off.
                shells.push(Shell::new(tank.position, tank.direction, tank.player));
            }
        }
        Action::RotateLeft45
        | Action::RotateRight45
        | Action::RotateLeft90
        | Action::RotateRight90 => {
            // Rotations always succeed.
            let steps = action.rotation_steps().unwrap_or(0);
            tank.direction = tank.direction.rotated(steps);
        }
        // Delivery of the snapshot is the engine's job; nothing mutates
        // here and the request is never ignored.
        Action::GetBattleInfo => {}
        Action::DoNothing => {}
        // All MoveBackward arcs are handled by the caller.
        Action::MoveBackward => {}
    }
}

/// One cell opposite the facing direction, blocked by walls like any
/// move. A blocked step is ignored but reverse gear stays engaged.
fn reverse_step(tank: &mut Tank, arena: &Arena) {
    let target = arena.step(tank.position, tank.direction.opposite());
    if arena.cell_at(target).blocks_movement() {
        tank.last_action_ignored = true;
    } else {
        tank.position = target;
    }
}
