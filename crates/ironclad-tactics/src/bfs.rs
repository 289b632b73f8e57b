//! Breadth-first route planning on the toroidal grid.
//!
//! Edges are 8-connected; walls, weak walls, mines, and occupied cells
//! are non-traversable. Neighbors expand in direction-index order, which
//! fixes the tie-break between equal-length routes. The goal is the
//! nearest cell with a clear firing ray to some enemy.

use std::collections::{HashMap, VecDeque};

use ironclad_core::enums::Cell;
use ironclad_core::types::{Direction, Position};

use ironclad_arena::{cast_ray, los::ray_range, Arena, RayHit};

/// Whether a shot from `cell` along any octant reaches an enemy before a
/// wall.
pub fn is_firing_cell(arena: &Arena, cell: Position, enemies: &[Position]) -> bool {
    Direction::ALL.into_iter().any(|dir| {
        matches!(
            cast_ray(arena, cell, dir, enemies, ray_range(arena)),
            RayHit::Target(_)
        )
    })
}

fn traversable(arena: &Arena, cell: Position, blocked: &[Position]) -> bool {
    arena.cell_at(cell) == Cell::Empty && !blocked.contains(&cell)
}

/// Shortest route from `from` to the nearest firing cell.
///
/// Returns the steps to take, first step at index 0 and the firing cell
/// last; an empty route means `from` already fires. `None` when no
/// firing cell is reachable.
pub fn plan_route(
    arena: &Arena,
    from: Position,
    enemies: &[Position],
    blocked: &[Position],
) -> Option<Vec<Position>> {
    if enemies.is_empty() {
        return None;
    }
    let start = arena.wrap(from);
    if is_firing_cell(arena, start, enemies) {
        return Some(Vec::new());
    }

    let mut parent: HashMap<Position, Position> = HashMap::new();
    let mut queue = VecDeque::new();
    parent.insert(start, start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for dir in Direction::ALL {
            let next = arena.step(current, dir);
            if parent.contains_key(&next) || !traversable(arena, next, blocked) {
                continue;
            }
            parent.insert(next, current);
            if is_firing_cell(arena, next, enemies) {
                let mut route = Vec::new();
                let mut cur = next;
                while cur != start {
                    route.push(cur);
                    cur = parent[&cur];
                }
                route.reverse();
                return Some(route);
            }
            queue.push_back(next);
        }
    }
    None
}

/// A planned route plus the enemy snapshot it was planned against.
#[derive(Debug, Default)]
pub struct PathCache {
    route: Vec<Position>,
    cursor: usize,
    enemies: Vec<Position>,
}

impl PathCache {
    /// Replace the cached route with a fresh plan. Returns false when no
    /// route exists (cache is left empty).
    pub fn replan(
        &mut self,
        arena: &Arena,
        from: Position,
        enemies: &[Position],
        blocked: &[Position],
    ) -> bool {
        self.cursor = 0;
        self.enemies = enemies.to_vec();
        match plan_route(arena, from, enemies, blocked) {
            Some(route) => {
                self.route = route;
                true
            }
            None => {
                self.route.clear();
                false
            }
        }
    }

    /// The next cell to move onto, if any remain.
    pub fn next_step(&self) -> Option<Position> {
        self.route.get(self.cursor).copied()
    }

    /// Consume the next step after committing to the move.
    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    /// A cached route goes stale when any tracked enemy has moved, the
    /// next step is no longer adjacent to `position` (a move was blocked
    /// or the tank was displaced), or the next cell itself became
    /// blocked.
    pub fn is_stale(&self, arena: &Arena, position: Position, enemies: &[Position]) -> bool {
        let Some(next) = self.next_step() else {
            return true;
        };
        if self.enemies != enemies {
            return true;
        }
        if arena.cell_at(next) != Cell::Empty {
            return true;
        }
        !Direction::ALL
            .into_iter()
            .any(|dir| arena.step(arena.wrap(position), dir) == next)
    }
}
