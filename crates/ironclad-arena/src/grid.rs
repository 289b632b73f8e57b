//! The battle arena: a toroidal grid of terrain cells.
//!
//! Every coordinate access wraps onto the torus, so callers may pass raw
//! stepped positions without bounds checks. Wall hit counters live in a
//! parallel array; cells themselves carry only the terrain tag.

use serde::{Deserialize, Serialize};

use ironclad_core::constants::WALL_HITS_TO_DESTROY;
use ironclad_core::enums::Cell;
use ironclad_core::types::{Direction, Position};

/// Rectangular toroidal terrain grid, row-major. Owns no entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    /// Shell hits taken per cell. Nonzero only for weak walls.
    hits: Vec<u8>,
}

impl Arena {
    /// An all-empty arena. Dimensions must be nonzero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "arena dimensions must be nonzero");
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            hits: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Wrap a raw position onto the torus.
    pub fn wrap(&self, p: Position) -> Position {
        Position::new(
            p.x.rem_euclid(self.width as i32),
            p.y.rem_euclid(self.height as i32),
        )
    }

    /// The wrapped neighbor one step from `p` in `dir`.
    pub fn step(&self, p: Position, dir: Direction) -> Position {
        self.wrap(p.offset_by(dir.offset()))
    }

    /// Whether `(x, y)` lies within the unwrapped rectangle.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index_of(&self, p: Position) -> usize {
        let w = self.wrap(p);
        w.y as usize * self.width + w.x as usize
    }

    /// Terrain at `(x, y)`, wrapping coordinates.
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.cell_at(Position::new(x, y))
    }

    pub fn cell_at(&self, p: Position) -> Cell {
        self.cells[self.index_of(p)]
    }

    /// Set the terrain at `p`, wrapping coordinates. Placing a wall resets
    /// its hit counter; a weak wall is seeded with one recorded hit; any
    /// other cell clears the counter.
    pub fn set_cell(&mut self, p: Position, cell: Cell) {
        let i = self.index_of(p);
        self.cells[i] = cell;
        self.hits[i] = match cell {
            Cell::WeakWall => 1,
            _ => 0,
        };
    }

    /// Recorded shell hits for the cell at `p`.
    pub fn wall_hits(&self, p: Position) -> u8 {
        self.hits[self.index_of(p)]
    }

    /// Register one shell hit on the wall at `p`.
    ///
    /// Returns `true` when the hit removed the wall (cell becomes empty),
    /// `false` when the wall survives as a weak wall. No-op on non-wall
    /// cells.
    pub fn damage_wall(&mut self, p: Position) -> bool {
        let i = self.index_of(p);
        if !matches!(self.cells[i], Cell::Wall | Cell::WeakWall) {
            return false;
        }
        self.hits[i] += 1;
        if self.hits[i] >= WALL_HITS_TO_DESTROY {
            self.cells[i] = Cell::Empty;
            self.hits[i] = 0;
            true
        } else {
            self.cells[i] = Cell::WeakWall;
            false
        }
    }
}
