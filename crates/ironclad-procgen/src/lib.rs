//! Seeded arena generation for IRONCLAD.
//!
//! Produces mirror-symmetric maps so both sides face identical terrain.
//! All randomness flows from one `ChaCha8Rng` seeded stream: the same
//! recipe always yields the same map.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use ironclad_core::enums::{Cell, Player};
use ironclad_core::types::Position;

use ironclad_arena::{Arena, MapFile, TankSpawn};

/// Parameters for one generated arena.
#[derive(Debug, Clone, Copy)]
pub struct ArenaRecipe {
    pub width: usize,
    pub height: usize,
    /// Fraction of interior cells rolled as walls.
    pub wall_density: f64,
    /// Mines per half; each is mirrored to the other side.
    pub mines_per_side: usize,
    pub tanks_per_side: usize,
    pub max_steps: u32,
    pub num_shells: u32,
    pub seed: u64,
}

impl Default for ArenaRecipe {
    fn default() -> Self {
        Self {
            width: 16,
            height: 12,
            wall_density: 0.12,
            mines_per_side: 3,
            tanks_per_side: 2,
            max_steps: 500,
            num_shells: 16,
            seed: 42,
        }
    }
}

/// Generate a map from the recipe.
///
/// Terrain is placed in the interior columns of the left half and
/// mirrored across the vertical axis; the two outermost columns on each
/// side stay clear, which keeps every spawn cell open. Tanks are spread
/// evenly down the edge columns, player 1 on the west, player 2 on the
/// east.
pub fn generate(recipe: &ArenaRecipe) -> MapFile {
    assert!(recipe.width >= 6, "arena too narrow to mirror");
    assert!(
        recipe.height >= recipe.tanks_per_side,
        "not enough rows for the spawns"
    );
    assert!(recipe.tanks_per_side >= 1, "each side needs a tank");

    let mut rng = ChaCha8Rng::seed_from_u64(recipe.seed);
    let mut arena = Arena::new(recipe.width, recipe.height);
    let mirror = |x: usize| recipe.width - 1 - x;

    // Interior walls, mirrored.
    for x in 2..recipe.width / 2 {
        for y in 0..recipe.height {
            if rng.gen_bool(recipe.wall_density) {
                arena.set_cell(Position::new(x as i32, y as i32), Cell::Wall);
                arena.set_cell(Position::new(mirror(x) as i32, y as i32), Cell::Wall);
            }
        }
    }

    // Mines on empty interior cells, mirrored.
    let mut placed = 0;
    let mut attempts = 0;
    while placed < recipe.mines_per_side && attempts < 1000 {
        attempts += 1;
        if recipe.width / 2 <= 2 {
            break;
        }
        let x = rng.gen_range(2..recipe.width / 2);
        let y = rng.gen_range(0..recipe.height);
        let p = Position::new(x as i32, y as i32);
        if arena.cell_at(p) == Cell::Empty {
            arena.set_cell(p, Cell::Mine);
            arena.set_cell(Position::new(mirror(x) as i32, y as i32), Cell::Mine);
            placed += 1;
        }
    }

    // Spawns spread evenly down the clear edge columns.
    let mut spawns = Vec::new();
    for i in 0..recipe.tanks_per_side {
        let y = ((i + 1) * recipe.height / (recipe.tanks_per_side + 1)) as i32;
        spawns.push(TankSpawn {
            position: Position::new(0, y),
            player: Player::One,
        });
        spawns.push(TankSpawn {
            position: Position::new(recipe.width as i32 - 1, y),
            player: Player::Two,
        });
    }
    // Map scan order keeps log ids predictable.
    spawns.sort_by_key(|s| (s.position.y, s.position.x));

    MapFile {
        name: format!("generated arena (seed {})", recipe.seed),
        max_steps: recipe.max_steps,
        num_shells: recipe.num_shells,
        arena,
        spawns,
    }
}
