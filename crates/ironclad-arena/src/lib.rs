//! Arena crate for IRONCLAD.
//!
//! Toroidal terrain grid with wall-damage bookkeeping, the text map-file
//! format, and firing-ray line-of-sight checks.

pub use ironclad_core as core;

pub mod grid;
pub mod los;
pub mod map;

// Re-export key types for convenience.
pub use grid::Arena;
pub use los::{cast_ray, has_line_of_fire, RayHit};
pub use map::{MapError, MapFile, TankSpawn};
