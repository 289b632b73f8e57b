//! Fundamental grid geometry types.

use serde::{Deserialize, Serialize};

/// Integer grid position in cells.
///
/// A `Position` may transiently hold out-of-range coordinates (e.g. the
/// raw result of stepping off an edge); the arena wraps coordinates onto
/// the torus on every access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Raw (unwrapped) translation by a direction offset.
    pub fn offset_by(&self, (dx, dy): (i32, i32)) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev distance to another position on a `width` × `height`
    /// torus: the number of 8-connected steps along the shortest wrapped
    /// displacement.
    pub fn toroidal_distance(&self, other: &Position, width: i32, height: i32) -> i32 {
        let dx = wrapped_axis_delta(self.x, other.x, width);
        let dy = wrapped_axis_delta(self.y, other.y, height);
        dx.max(dy)
    }
}

/// Shortest absolute displacement between two coordinates on an axis of
/// length `n`, going either direction around the wrap.
fn wrapped_axis_delta(a: i32, b: i32, n: i32) -> i32 {
    let d = (a - b).rem_euclid(n);
    d.min(n - d)
}

/// The eight compass octants, indexed clockwise starting at `Up = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    /// All directions in index (clockwise) order. Iteration order matters:
    /// the route planner breaks ties by expanding neighbors in this order.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// Clockwise index of this direction (`Up = 0` .. `UpLeft = 7`).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction for an index, wrapping modulo 8.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 8]
    }

    /// Cell offset `(dx, dy)` of one step in this direction.
    /// The y axis grows downward (row 0 is the top of the map).
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::Down => (0, 1),
            Direction::DownLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::UpLeft => (-1, -1),
        }
    }

    /// Rotate by `steps` × 45°, positive clockwise, wrapping modulo 8.
    pub fn rotated(self, steps: i8) -> Self {
        let idx = self.index() as i8 + steps;
        Self::from_index(idx.rem_euclid(8) as usize)
    }

    /// The direction 180° away.
    pub fn opposite(self) -> Self {
        self.rotated(4)
    }

    /// Direction whose offset matches the signs of `(dx, dy)`, or `None`
    /// for a zero displacement. Non-unit displacements are collapsed to
    /// their octant by sign.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        let key = (dx.signum(), dy.signum());
        Direction::ALL.into_iter().find(|d| d.offset() == key)
    }

    /// Signed number of 45° steps (clockwise positive, in `-3..=4`) that
    /// rotates `self` onto `target`.
    pub fn steps_to(self, target: Direction) -> i8 {
        let diff = (target.index() as i8 - self.index() as i8).rem_euclid(8);
        if diff > 4 {
            diff - 8
        } else {
            diff
        }
    }
}
