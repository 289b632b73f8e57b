//! Simulation kernel for IRONCLAD.
//!
//! Owns the arena and all entities, runs the fixed-order tick phases,
//! and produces one `TickReport` per tick until an end condition fires.
//! Completely headless and RNG-free, enabling deterministic testing.

pub use ironclad_core as core;

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{BattleConfig, BattleEngine};
