//! Events emitted by the simulation for logging and observation.
//!
//! Events are an output stream only; nothing in the kernel reads them
//! back. The CLI logs them at debug level.

use serde::{Deserialize, Serialize};

use crate::enums::{DestructionCause, Player};
use crate::types::Position;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A tank was destroyed.
    TankDestroyed {
        player: Player,
        tank_index: usize,
        position: Position,
        cause: DestructionCause,
    },
    /// A wall took its first hit and became a weak wall.
    WallWeakened { position: Position },
    /// A weak wall took its second hit and was removed.
    WallDestroyed { position: Position },
    /// A mine went off (tank contact or shell strike) and was consumed.
    MineDetonated { position: Position },
    /// Two or more shells met on the same cell and annihilated.
    ShellsCollided { position: Position },
    /// A shell exceeded its travel bound and fizzled out.
    ShellExpired { position: Position },
}
