//! Firing-ray line-of-sight checks.
//!
//! A firing ray steps one cell at a time from the shooter in its facing
//! direction, wrapping at the arena edges, until it reaches a target cell,
//! is stopped by a wall, or exhausts its range.

use ironclad_core::types::{Direction, Position};

use crate::grid::Arena;

/// Outcome of casting a firing ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayHit {
    /// A wall or weak wall stops the ray at this cell.
    Wall(Position),
    /// A target cell was reached with nothing blocking the path.
    Target(Position),
    /// The ray traveled its full range without hitting anything.
    Clear,
}

/// Default ray range: enough to cross the torus along either axis once.
pub fn ray_range(arena: &Arena) -> usize {
    arena.width().max(arena.height())
}

/// Cast a ray from `from` along `dir` for at most `limit` steps.
///
/// `targets` are checked before terrain, so a target standing on a mine
/// cell is still reported as a target hit. The starting cell itself is
/// not examined.
pub fn cast_ray(
    arena: &Arena,
    from: Position,
    dir: Direction,
    targets: &[Position],
    limit: usize,
) -> RayHit {
    let mut pos = arena.wrap(from);
    for _ in 0..limit {
        pos = arena.step(pos, dir);
        if targets.contains(&pos) {
            return RayHit::Target(pos);
        }
        if arena.cell_at(pos).blocks_movement() {
            return RayHit::Wall(pos);
        }
    }
    RayHit::Clear
}

/// Whether a shot from `from` along `dir` reaches `target` before any wall.
pub fn has_line_of_fire(arena: &Arena, from: Position, dir: Direction, target: Position) -> bool {
    matches!(
        cast_ray(arena, from, dir, &[arena.wrap(target)], ray_range(arena)),
        RayHit::Target(_)
    )
}
