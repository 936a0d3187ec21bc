//! Invariant checks for finished boards
//!
//! Checks only report, they never change the board. The scheduler runs them in
//! debug builds only.

use crate::actors::ActorKind;
use crate::spatial::{Board, Position};
use std::fmt;

/// Bosses every finished board must hold exactly once
pub const REQUIRED_BOSSES: [ActorKind; 2] = [ActorKind::Dragon, ActorKind::Wizard];

/// A broken layout invariant
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// Cells and actors do not map one to one
    Occupancy(String),
    /// An actor was left unlocked
    Unlocked {
        /// Kind of the unlocked actor
        kind: ActorKind,
        /// Where it stands
        position: Option<Position>,
    },
    /// The dragon is not on the centre cell
    DragonOffCenter(Position),
    /// A unique kind appears more than once
    Duplicate {
        /// Kind that should be unique
        kind: ActorKind,
        /// How many were found
        count: usize,
    },
    /// A required boss is absent
    Missing(ActorKind),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupancy(reason) => write!(f, "occupancy mismatch: {reason}"),
            Self::Unlocked { kind, position } => match position {
                Some(pos) => write!(f, "{kind} at {pos} is not locked"),
                None => write!(f, "{kind} was never placed"),
            },
            Self::DragonOffCenter(pos) => write!(f, "dragon sits at {pos} instead of the centre"),
            Self::Duplicate { kind, count } => write!(f, "{count} actors of unique kind {kind}"),
            Self::Missing(kind) => write!(f, "no {kind} on the board"),
        }
    }
}

/// Check a finished board, returning every broken invariant found
pub fn validate(board: &Board) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if let Err(error) = board.check_occupancy() {
        diagnostics.push(Diagnostic::Occupancy(error.to_string()));
    }

    for (_, actor) in board.actors() {
        if !actor.locked {
            diagnostics.push(Diagnostic::Unlocked {
                kind: actor.kind,
                position: actor.position,
            });
        }
    }

    let shape = board.shape();
    for (_, pos) in board.actors_of(ActorKind::Dragon) {
        if !shape.is_center(pos) {
            diagnostics.push(Diagnostic::DragonOffCenter(pos));
        }
    }

    for kind in ActorKind::ALL.into_iter().filter(|kind| kind.is_unique()) {
        let count = board.actors_of(kind).count();
        if count > 1 {
            diagnostics.push(Diagnostic::Duplicate { kind, count });
        }
    }

    for kind in REQUIRED_BOSSES {
        if board.actors_of(kind).next().is_none() {
            diagnostics.push(Diagnostic::Missing(kind));
        }
    }

    diagnostics
}
