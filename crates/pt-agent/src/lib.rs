//! `pt-agent` — the walking dogs.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`dog`]       | `Dog` — one walking agent, its motion and step gating      |
//! | [`spawn`]     | `SpawnEdge`, `sample_dog` — randomized entry from an edge  |
//! | [`registry`]  | `AgentRegistry` — the set of active dogs, off-screen culling |
//!
//! A dog never reads another dog's state, so every per-tick operation here is
//! order-independent.  The registry keeps insertion order only so iteration
//! (and therefore RNG consumption) is reproducible.

pub mod dog;
pub mod registry;
pub mod spawn;

#[cfg(test)]
mod tests;

pub use dog::Dog;
pub use registry::AgentRegistry;
pub use spawn::{SpawnEdge, sample_dog};
