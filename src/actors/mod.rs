//! Actor definitions
//!
//! This module contains:
//! - The closed set of actor kinds and their base attributes
//! - Actor instances with relationship descriptors
//! - The standard layer plan used by the game

/// Actor instances and relationship descriptors
pub mod actor;
/// Closed actor-kind enumeration
pub mod kind;
/// Standard layer plan
pub mod roster;

pub use actor::{Actor, ActorId, Facing, Loot, PairRole, Quadrant, Relation};
pub use kind::ActorKind;
