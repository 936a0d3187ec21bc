//! Post-placement resolution on the final board
//!
//! Everything here depends on final positions, so it runs once after the last
//! layer is locked.

use crate::actors::{ActorId, ActorKind, Facing, Relation};
use crate::algorithm::happiness::chest_owners;
use crate::io::configuration::Tuning;
use crate::spatial::Board;
use crate::spatial::grid::Cover;
use tracing::debug;

/// Counts of what the resolver changed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    /// Minotaurs that remember a chest
    pub minotaur_claims: usize,
    /// Gargoyles facing their twin
    pub gargoyles_facing: usize,
    /// Guards given a display variant
    pub guards_resolved: usize,
    /// Walls given a durability
    pub walls_assigned: usize,
    /// Actors revealed automatically
    pub revealed: usize,
}

/// Run every post-placement step and fix all remaining cells
pub fn resolve(board: &mut Board, tuning: &Tuning) -> ResolutionReport {
    let report = ResolutionReport {
        minotaur_claims: remember_chests(board, tuning),
        gargoyles_facing: face_twins(board),
        guards_resolved: resolve_guard_variants(board),
        walls_assigned: assign_wall_durability(board, &tuning.wall_durability),
        revealed: reveal_designated(board, &tuning.auto_reveal),
    };
    board.lock_all_cells();

    debug!(?report, "post-placement resolution finished");
    report
}

/// Record the chest each minotaur owns
pub fn remember_chests(board: &mut Board, tuning: &Tuning) -> usize {
    let claims = chest_owners(board, &tuning.scores);
    let minotaurs: Vec<ActorId> = board
        .actors_of(ActorKind::Minotaur)
        .map(|(id, _)| id)
        .collect();

    for id in minotaurs {
        if let Some(actor) = board.actor_mut(id) {
            actor.chest_location = claims.get(&id).map(|claim| claim.position);
        }
    }
    claims.len()
}

/// Point each gargoyle towards its twin
pub fn face_twins(board: &mut Board) -> usize {
    let gargoyles: Vec<_> = board
        .actors_of(ActorKind::Gargoyle)
        .filter_map(|(id, pos)| board.actor(id).map(|actor| (id, pos, actor.relation)))
        .collect();

    let mut facing_count = 0;
    for &(id, pos, relation) in &gargoyles {
        if !matches!(relation, Relation::Twin(_)) {
            continue;
        }
        let facing = gargoyles
            .iter()
            .find(|&&(other, _, other_relation)| other != id && other_relation == relation)
            .and_then(|&(_, twin_pos, _)| Facing::towards(pos, twin_pos));

        if let Some(actor) = board.actor_mut(id) {
            actor.facing = facing;
            facing_count += usize::from(facing.is_some());
        }
    }
    facing_count
}

/// Derive each guard's display variant from its quadrant
pub fn resolve_guard_variants(board: &mut Board) -> usize {
    let guards: Vec<ActorId> = board.actors_of(ActorKind::Guard).map(|(id, _)| id).collect();
    let mut resolved = 0;
    for id in guards {
        if let Some(actor) = board.actor_mut(id)
            && let Relation::Quadrant(quadrant) = actor.relation
        {
            actor.display_variant = Some(quadrant.number() - 1);
            resolved += 1;
        }
    }
    resolved
}

/// Hand out durabilities to walls in creation order, cycling the sequence
pub fn assign_wall_durability(board: &mut Board, sequence: &[u32]) -> usize {
    let walls: Vec<ActorId> = board.actors_of(ActorKind::Wall).map(|(id, _)| id).collect();
    let mut assigned = 0;
    for (id, &durability) in walls.into_iter().zip(sequence.iter().cycle()) {
        if let Some(actor) = board.actor_mut(id) {
            actor.wall_hp = durability;
            actor.wall_max_hp = durability;
            assigned += 1;
        }
    }
    assigned
}

/// Reveal flagged actors and listed kinds, clearing their cell cover
pub fn reveal_designated(board: &mut Board, kinds: &[ActorKind]) -> usize {
    let targets: Vec<_> = board
        .actors()
        .filter(|(_, actor)| actor.always_revealed || kinds.contains(&actor.kind))
        .filter_map(|(id, actor)| actor.position.map(|pos| (id, pos)))
        .collect();

    for &(id, pos) in &targets {
        if let Some(actor) = board.actor_mut(id) {
            actor.revealed = true;
        }
        board.set_cover(pos, Cover::Cleared);
    }
    targets.len()
}
