//! Snapshots and records the kernel hands outward: the satellite image,
//! per-tank battle info, tick log records, and the terminal outcome.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::CHAR_OUT_OF_BOUNDS;
use crate::enums::{Action, Player};
use crate::types::{Direction, Position};

/// A character-grid snapshot of the arena with entities overlaid.
///
/// The image is a bounded `width` × `height` value object: queries outside
/// it return the `'&'` sentinel rather than wrapping. Modules that want
/// toroidal reads wrap indices themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatelliteImage {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl SatelliteImage {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Character at `(x, y)`, or `'&'` outside the image.
    pub fn cell(&self, x: i32, y: i32) -> char {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return CHAR_OUT_OF_BOUNDS;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    pub fn set(&mut self, x: usize, y: usize, c: char) {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x] = c;
    }

    /// First position holding `c`, scanning row-major.
    pub fn find(&self, c: char) -> Option<Position> {
        self.cells.iter().position(|&cell| cell == c).map(|i| {
            Position::new((i % self.width) as i32, (i / self.width) as i32)
        })
    }

    /// All positions holding `c`, in row-major order.
    pub fn positions_of(&self, c: char) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == c)
            .map(|(i, _)| Position::new((i % self.width) as i32, (i / self.width) as i32))
            .collect()
    }

    /// Render as newline-joined rows (tests and debugging).
    pub fn render(&self) -> String {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Everything a decision module learns from a `GetBattleInfo` request.
/// An immutable value; holds no references into the kernel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleInfo {
    pub tank_position: Position,
    pub tank_direction: Direction,
    pub ammo: u32,
    pub cooldown: u32,
    pub width: usize,
    pub height: usize,
    /// The requesting tank's cell carries the `'%'` marker.
    pub image: SatelliteImage,
    /// Alive enemy tank positions, in stable id order.
    pub enemies: Vec<Position>,
    /// Alive friendly tank positions (excluding the requester).
    pub allies: Vec<Position>,
    /// Active shell positions.
    pub shells: Vec<Position>,
}

/// One tank's entry in a tick's log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// `None` when the tank was already dead coming into the tick.
    pub action: Option<Action>,
    pub ignored: bool,
    /// The tank was destroyed during this tick.
    pub killed: bool,
}

impl fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            None => write!(f, "killed"),
            Some(action) => {
                write!(f, "{}", action.name())?;
                if self.ignored {
                    write!(f, " (ignored)")?;
                }
                if self.killed {
                    write!(f, " (killed)")?;
                }
                Ok(())
            }
        }
    }
}

/// The full observable result of one tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickReport {
    pub tick: u32,
    /// One record per tank in stable id order across both players.
    pub records: Vec<ActionRecord>,
    pub events: Vec<crate::events::GameEvent>,
}

impl TickReport {
    /// The tick's line in the output log.
    pub fn log_line(&self) -> String {
        self.records
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Terminal result of a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// One side still has tanks, the other has none.
    Victory { player: Player, tanks_alive: u32 },
    /// Both sides were wiped out in the same tick.
    MutualDestruction,
    /// The configured step bound was reached with both sides alive.
    MaxSteps {
        max_steps: u32,
        player1_alive: u32,
        player2_alive: u32,
    },
    /// Every alive tank sat at zero ammo for the tie-out period.
    AmmoDepleted { ticks: u32 },
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleOutcome::Victory { player, tanks_alive } => write!(
                f,
                "Player {} won with {} tanks still alive",
                player.number(),
                tanks_alive
            ),
            BattleOutcome::MutualDestruction => {
                write!(f, "Tie, both players have zero tanks")
            }
            BattleOutcome::MaxSteps {
                max_steps,
                player1_alive,
                player2_alive,
            } => write!(
                f,
                "Tie, reached max steps = {max_steps}, player 1 has {player1_alive} tanks, player 2 has {player2_alive} tanks"
            ),
            BattleOutcome::AmmoDepleted { ticks } => {
                write!(f, "Tie, both players have zero shells for {ticks} steps")
            }
        }
    }
}
