//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// One of the two sides of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The 1-based player number used in map files and log output.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The character marking this player's tanks in map files and
    /// satellite images.
    pub fn tank_char(self) -> char {
        match self {
            Player::One => '1',
            Player::Two => '2',
        }
    }
}

/// Terrain content of one grid cell. Tanks and shells are overlays tracked
/// separately, never cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// Intact wall. Blocks movement and shells; two hits destroy it.
    Wall,
    /// A wall that has taken one hit. One more hit removes it.
    WeakWall,
    /// Destroys any tank or shell that enters the cell.
    Mine,
}

impl Cell {
    /// Parse a map-file character. Unrecognized characters are empty
    /// terrain; tank spawn markers are handled by the map parser, not here.
    pub fn from_map_char(c: char) -> Cell {
        match c {
            '#' => Cell::Wall,
            '=' => Cell::WeakWall,
            '@' => Cell::Mine,
            _ => Cell::Empty,
        }
    }

    /// The character for this cell in map files and satellite images.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => '#',
            Cell::WeakWall => '=',
            Cell::Mine => '@',
        }
    }

    /// Whether a tank is blocked from entering this cell.
    pub fn blocks_movement(self) -> bool {
        matches!(self, Cell::Wall | Cell::WeakWall)
    }
}

/// The nine actions a decision module can request per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    MoveForward,
    MoveBackward,
    RotateLeft45,
    RotateRight45,
    RotateLeft90,
    RotateRight90,
    Shoot,
    GetBattleInfo,
    DoNothing,
}

impl Action {
    /// The action's name as it appears in the tick log.
    pub fn name(self) -> &'static str {
        match self {
            Action::MoveForward => "MoveForward",
            Action::MoveBackward => "MoveBackward",
            Action::RotateLeft45 => "RotateLeft45",
            Action::RotateRight45 => "RotateRight45",
            Action::RotateLeft90 => "RotateLeft90",
            Action::RotateRight90 => "RotateRight90",
            Action::Shoot => "Shoot",
            Action::GetBattleInfo => "GetBattleInfo",
            Action::DoNothing => "DoNothing",
        }
    }

    /// Signed 45° rotation steps (clockwise positive) for rotation
    /// actions, `None` otherwise.
    pub fn rotation_steps(self) -> Option<i8> {
        match self {
            Action::RotateLeft45 => Some(-1),
            Action::RotateRight45 => Some(1),
            Action::RotateLeft90 => Some(-2),
            Action::RotateRight90 => Some(2),
            _ => None,
        }
    }
}

/// Backward-movement warm-up state. `MoveBackward` takes effect on the
/// third consecutive request unless the tank is already `Reversing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReverseState {
    #[default]
    Idle,
    /// First backward request seen; charging.
    Wait1,
    /// Second backward request seen; one more executes the step.
    Wait2,
    /// Reverse gear engaged; backward requests step immediately.
    Reversing,
}

/// Why a tank was destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DestructionCause {
    ShellHit,
    MineContact,
    TankCollision,
}
