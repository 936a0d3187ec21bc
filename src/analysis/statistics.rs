//! Aggregate statistics of a finished board

use crate::actors::ActorKind;
use crate::math::progression::{ResourceCurve, project};
use crate::spatial::Board;
use serde::Serialize;
use std::collections::BTreeMap;

/// Totals handed to gameplay collaborators once generation finishes
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Actors on the board, Empty placeholders excluded
    pub actor_count: usize,
    /// Cells holding the Empty placeholder
    pub empty_count: usize,
    /// Actors that are fought rather than collected
    pub monster_count: usize,
    /// Actors per kind
    pub kind_counts: BTreeMap<ActorKind, usize>,
    /// Experience available on the board, container contents included
    pub total_xp: u32,
    /// Experience hidden inside containers
    pub contained_xp: u32,
    /// Sum of monster levels
    pub total_monster_levels: u64,
    /// Medikits on the board or inside containers
    pub medikit_count: usize,
    /// Levels and hit points the available experience affords
    pub resource_curve: ResourceCurve,
}

impl Statistics {
    /// Gather statistics from a board
    pub fn collect(board: &Board) -> Self {
        let mut kind_counts = BTreeMap::new();
        let mut monster_count = 0;
        let mut total_xp = 0;
        let mut contained_xp = 0;
        let mut total_monster_levels = 0;
        let mut medikit_count = 0;

        for (_, actor) in board.actors() {
            *kind_counts.entry(actor.kind).or_insert(0) += 1;
            if actor.kind.is_monster() {
                monster_count += 1;
                total_monster_levels += u64::from(actor.level);
            }
            if actor.kind == ActorKind::Medikit {
                medikit_count += 1;
            }
            if let Some(loot) = actor.contains {
                contained_xp += loot.xp;
                if loot.kind == ActorKind::Medikit {
                    medikit_count += 1;
                }
            }
            total_xp += actor.total_xp();
        }

        Self {
            actor_count: board.actor_count(),
            empty_count: board.empty_count(),
            monster_count,
            kind_counts,
            total_xp,
            contained_xp,
            total_monster_levels,
            medikit_count,
            resource_curve: project(total_xp),
        }
    }

    /// Number of actors of one kind
    pub fn count_of(&self, kind: ActorKind) -> usize {
        self.kind_counts.get(&kind).copied().unwrap_or(0)
    }
}
