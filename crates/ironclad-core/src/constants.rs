//! Simulation constants and tuning parameters.

// --- Firing ---

/// Cooldown set when a tank fires. It decrements at the end of the same
/// tick, leaving three intervening ticks in which Shoot is blocked.
pub const SHOOT_COOLDOWN_TICKS: u32 = 4;

// --- Walls ---

/// Shell hits that remove a wall entirely. The first hit leaves a weak
/// wall.
pub const WALL_HITS_TO_DESTROY: u8 = 2;

// --- Shells ---

/// Cells a shell moves per tick, advanced one sub-step at a time with
/// collision resolution between sub-steps.
pub const SHELL_SUBSTEPS_PER_TICK: u32 = 2;

/// A shell that has traveled this many cells without hitting anything is
/// expired. Bounds endless orbits on the torus.
pub const SHELL_MAX_TRAVEL_CELLS: u32 = 256;

// --- End conditions ---

/// Consecutive ticks with every alive tank at zero ammo that force a tie.
pub const ZERO_AMMO_TIE_TICKS: u32 = 40;

// --- Satellite image characters ---
// Terrain and tank characters are defined by `Cell::to_char` and
// `Player::tank_char`; these cover the overlay-only symbols.

/// An active shell. Takes precedence over anything it overlaps.
pub const CHAR_SHELL: char = '*';

/// The tank that requested the battle info. Exactly one cell per image.
pub const CHAR_REQUESTING_TANK: char = '%';

/// Returned for queries outside the image bounds.
pub const CHAR_OUT_OF_BOUNDS: char = '&';
