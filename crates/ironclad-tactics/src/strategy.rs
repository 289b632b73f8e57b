//! The prioritized strategy chain.
//!
//! Pure evaluation functions over a `TacticalContext` rebuilt from the
//! latest battle info. Each strategy either emits an action
//! (short-circuiting the chain) or defers to the next one:
//! threat response → direct engagement → aim adjustment → obstacle
//! breach → navigation.

use ironclad_core::enums::{Action, Cell};
use ironclad_core::state::BattleInfo;
use ironclad_core::types::{Direction, Position};

use ironclad_arena::{cast_ray, los::ray_range, Arena, RayHit};

use crate::bfs::PathCache;
use crate::profiles::TacticalProfile;

/// The world as one module sees it, decoded from a `BattleInfo`.
#[derive(Debug)]
pub struct TacticalContext {
    pub position: Position,
    pub direction: Direction,
    pub ammo: u32,
    pub cooldown: u32,
    /// Terrain reconstructed from the satellite image.
    pub arena: Arena,
    pub enemies: Vec<Position>,
    pub allies: Vec<Position>,
    pub shells: Vec<Position>,
}

impl TacticalContext {
    pub fn from_info(info: &BattleInfo) -> Self {
        let mut arena = Arena::new(info.width, info.height);
        for y in 0..info.height {
            for x in 0..info.width {
                let cell = Cell::from_map_char(info.image.cell(x as i32, y as i32));
                if cell != Cell::Empty {
                    arena.set_cell(Position::new(x as i32, y as i32), cell);
                }
            }
        }
        Self {
            position: info.tank_position,
            direction: info.tank_direction,
            ammo: info.ammo,
            cooldown: info.cooldown,
            arena,
            enemies: info.enemies.clone(),
            allies: info.allies.clone(),
            shells: info.shells.clone(),
        }
    }

    pub fn weapon_ready(&self) -> bool {
        self.ammo > 0 && self.cooldown == 0
    }

    fn occupied(&self, cell: Position) -> bool {
        self.enemies.contains(&cell) || self.allies.contains(&cell)
    }

    fn distance_to(&self, other: &Position) -> i32 {
        self.position.toroidal_distance(
            other,
            self.arena.width() as i32,
            self.arena.height() as i32,
        )
    }

    /// Whether a shot along `dir` reaches an enemy before any wall or
    /// friendly tank.
    fn enemy_on_ray(&self, dir: Direction) -> bool {
        let mut targets = self.enemies.clone();
        targets.extend_from_slice(&self.allies);
        match cast_ray(
            &self.arena,
            self.position,
            dir,
            &targets,
            ray_range(&self.arena),
        ) {
            RayHit::Target(hit) => self.enemies.contains(&hit),
            _ => false,
        }
    }
}

/// Per-module persistent strategy state. Every module owns its own copy;
/// nothing here is shared between tanks.
#[derive(Debug, Default)]
pub struct TacticalMemory {
    /// Alternates rotate/advance while evading inside the danger radius.
    pub rotate_flag: bool,
    pub path: PathCache,
}

/// Evaluate the full chain. Always yields an action; the profile's idle
/// behavior is the final fallback.
pub fn evaluate_chain(
    ctx: &TacticalContext,
    profile: &TacticalProfile,
    memory: &mut TacticalMemory,
) -> Action {
    if let Some(action) = threat_response(ctx, profile, memory) {
        return action;
    }
    if let Some(action) = direct_engagement(ctx) {
        return action;
    }
    if let Some(action) = aim_adjustment(ctx) {
        return action;
    }
    if profile.breach_walls {
        if let Some(action) = obstacle_breach(ctx) {
            return action;
        }
    }
    if !profile.hold_ground {
        if let Some(action) = navigation(ctx, memory) {
            return action;
        }
    }
    if profile.patrol_rotation {
        Action::RotateRight45
    } else {
        Action::DoNothing
    }
}

/// Priority 1: react to enemies or shells inside the danger radius.
/// Shoot when an enemy sits on the firing ray; otherwise break the
/// alignment, alternating a 45° turn with a step away.
pub fn threat_response(
    ctx: &TacticalContext,
    profile: &TacticalProfile,
    memory: &mut TacticalMemory,
) -> Option<Action> {
    let enemy_near = ctx
        .enemies
        .iter()
        .any(|e| ctx.distance_to(e) <= profile.danger_radius);
    let shell_near = ctx
        .shells
        .iter()
        .any(|s| ctx.distance_to(s) <= profile.danger_radius);
    if !enemy_near && !shell_near {
        memory.rotate_flag = false;
        return None;
    }

    if ctx.weapon_ready() && ctx.enemy_on_ray(ctx.direction) {
        return Some(Action::Shoot);
    }

    if memory.rotate_flag {
        memory.rotate_flag = false;
        let ahead = ctx.arena.step(ctx.position, ctx.direction);
        if ctx.arena.cell_at(ahead) == Cell::Empty && !ctx.occupied(ahead) {
            return Some(Action::MoveForward);
        }
        return Some(Action::RotateLeft45);
    }
    memory.rotate_flag = true;
    Some(Action::RotateLeft45)
}

/// Priority 2: fire when an enemy lies on the current firing ray,
/// unobstructed by walls or friendly tanks.
pub fn direct_engagement(ctx: &TacticalContext) -> Option<Action> {
    (ctx.weapon_ready() && ctx.enemy_on_ray(ctx.direction)).then_some(Action::Shoot)
}

/// Candidate rotations in preference order: shortest angle first, 45°
/// before 90°, clockwise before counter-clockwise on equal arcs.
const AIM_CANDIDATES: [i8; 7] = [1, -1, 2, -2, 3, -3, 4];

/// Priority 3: if some other octant offers a firing solution, start
/// rotating toward it.
pub fn aim_adjustment(ctx: &TacticalContext) -> Option<Action> {
    if ctx.ammo == 0 {
        return None;
    }
    for steps in AIM_CANDIDATES {
        if ctx.enemy_on_ray(ctx.direction.rotated(steps)) {
            return Some(rotation_toward(steps));
        }
    }
    None
}

/// Priority 4: clear a wall standing directly in front.
pub fn obstacle_breach(ctx: &TacticalContext) -> Option<Action> {
    let ahead = ctx.arena.step(ctx.position, ctx.direction);
    (ctx.weapon_ready() && ctx.arena.cell_at(ahead).blocks_movement()).then_some(Action::Shoot)
}

/// Priority 5: follow the cached BFS route toward a firing position,
/// replanning when it has gone stale.
pub fn navigation(ctx: &TacticalContext, memory: &mut TacticalMemory) -> Option<Action> {
    if ctx.enemies.is_empty() {
        return None;
    }

    let mut blocked = ctx.enemies.clone();
    blocked.extend_from_slice(&ctx.allies);
    if memory.path.is_stale(&ctx.arena, ctx.position, &ctx.enemies) {
        memory
            .path
            .replan(&ctx.arena, ctx.position, &ctx.enemies, &blocked);
    }

    let next = memory.path.next_step()?;
    let desired = Direction::ALL
        .into_iter()
        .find(|dir| ctx.arena.step(ctx.position, *dir) == next)?;

    if ctx.direction == desired {
        if ctx.occupied(next) {
            // Wait out the traffic rather than ram a tank.
            return Some(Action::DoNothing);
        }
        memory.path.advance();
        Some(Action::MoveForward)
    } else {
        Some(rotation_toward(ctx.direction.steps_to(desired)))
    }
}

/// First rotation of the shortest arc covering `steps` (±1 = 45°,
/// anything wider starts with a 90° turn).
fn rotation_toward(steps: i8) -> Action {
    match steps {
        1 => Action::RotateRight45,
        -1 => Action::RotateLeft45,
        2 => Action::RotateRight90,
        -2 => Action::RotateLeft90,
        3 | 4 => Action::RotateRight90,
        _ => Action::RotateLeft90,
    }
}
