//! Layered placement and local-search optimisation for fixed-size dungeon boards
//!
//! A roster of typed actors is dropped onto the board layer by layer. Each layer
//! is improved with a bounded stochastic local search driven by a per-actor
//! happiness score, then locked so later layers can arrange themselves around it.

#![forbid(unsafe_code)]

/// Actor kinds, actor instances and the standard roster
pub mod actors;
/// Scoring, local search, layer scheduling and post-placement resolution
pub mod algorithm;
/// Aggregate statistics and debug invariant checks over finished boards
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Player progression curves used for resource projections
pub mod math;
/// Board geometry and the cell container
pub mod spatial;

pub use io::error::{GenerationError, Result};
