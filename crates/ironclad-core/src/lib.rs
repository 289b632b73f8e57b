//! Core types and definitions for the IRONCLAD battle simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! grid geometry, cells, actions, entities, battle-info snapshots, events,
//! and the decision-module contract. It has no dependency on any runtime
//! framework and no I/O.

pub mod constants;
pub mod entities;
pub mod enums;
pub mod events;
pub mod module;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
