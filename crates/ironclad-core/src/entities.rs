//! Battle entities: tanks and shells.
//!
//! Entities are plain data owned by the engine's collections. Game logic
//! lives in the sim systems, not here; the only methods are small state
//! queries and transitions with no knowledge of the arena.

use serde::{Deserialize, Serialize};

use crate::enums::{Action, Player, ReverseState};
use crate::types::{Direction, Position};

/// One tank. Destroyed tanks stay in the engine's list (`alive = false`)
/// so their index — the stable entity id — keeps its place in log output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    pub position: Position,
    pub direction: Direction,
    pub player: Player,
    /// Zero-based index within the owning player's tanks.
    pub tank_index: usize,
    pub alive: bool,
    /// Set on destruction, cleared at the start of each tick.
    pub killed_this_tick: bool,
    pub ammo: u32,
    /// Ticks until the next shot is allowed. Decrements once per tick.
    pub cooldown: u32,
    pub reverse: ReverseState,
    /// Action requested this tick, for log output. `None` before the
    /// tank's first tick.
    pub last_action: Option<Action>,
    pub last_action_ignored: bool,
}

impl Tank {
    pub fn new(
        position: Position,
        direction: Direction,
        player: Player,
        tank_index: usize,
        ammo: u32,
    ) -> Self {
        Self {
            position,
            direction,
            player,
            tank_index,
            alive: true,
            killed_this_tick: false,
            ammo,
            cooldown: 0,
            reverse: ReverseState::default(),
            last_action: None,
            last_action_ignored: false,
        }
    }

    pub fn can_shoot(&self) -> bool {
        self.alive && self.ammo > 0 && self.cooldown == 0
    }

    pub fn destroy(&mut self) {
        self.alive = false;
        self.killed_this_tick = true;
    }

    /// Clear the per-tick flags. Called at the start of every tick.
    pub fn reset_tick_state(&mut self) {
        self.killed_this_tick = false;
        self.last_action = None;
        self.last_action_ignored = false;
    }
}

/// One in-flight shell. Deactivated shells are swept at the end of the
/// tick that killed them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shell {
    pub position: Position,
    pub direction: Direction,
    pub owner: Player,
    pub active: bool,
    /// Cells traveled since launch, for the max-travel expiry bound.
    pub traveled: u32,
}

impl Shell {
    /// A shell spawns on its tank's cell; the first sub-step moves it off.
    pub fn new(position: Position, direction: Direction, owner: Player) -> Self {
        Self {
            position,
            direction,
            owner,
            active: true,
            traveled: 0,
        }
    }
}
