//! Spatial data structures
//!
//! This module contains:
//! - Cell positions and board-relative geometric predicates
//! - The board container with per-cell lock bookkeeping

/// Positions, distances and board predicates
pub mod geometry;
/// Board container and occupancy management
pub mod grid;

pub use geometry::{BoardShape, Position};
pub use grid::Board;
