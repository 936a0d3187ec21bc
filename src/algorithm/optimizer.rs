//! Bounded swap-based local search over the movable part of the board

use crate::actors::ActorId;
use crate::algorithm::happiness::total_happiness;
use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::Tuning;
use crate::io::error::{Result, invariant_violation};
use crate::spatial::{Board, Position};
use tracing::debug;

/// Outcome of optimizing one layer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptimizationReport {
    /// Passes actually run
    pub passes: usize,
    /// Swaps kept across all passes
    pub accepted_swaps: usize,
    /// Total happiness before the first pass
    pub initial_total: i64,
    /// Total happiness after the last pass
    pub final_total: i64,
}

/// Improve the placement of a freshly placed layer
///
/// Each pass visits the layer's actors in a shuffled order. For every actor
/// each movable cell (Empty placeholders included) is tried as a swap partner
/// in shuffled order and the first swap reaching the highest total is kept,
/// provided it does not lower the total. Ties are accepted. The search stops
/// after `tuning.pass_budget` passes or after a pass that keeps no swap.
///
/// # Errors
///
/// Returns an error if a layer actor is missing, unplaced or already locked,
/// which would mean the caller broke the layer contract
pub fn optimize_layer(
    board: &mut Board,
    layer: &[ActorId],
    tuning: &Tuning,
    selector: &mut RandomSelector,
) -> Result<OptimizationReport> {
    let initial_total = total_happiness(board, tuning);
    let mut report = OptimizationReport {
        initial_total,
        final_total: initial_total,
        ..OptimizationReport::default()
    };
    if layer.is_empty() {
        return Ok(report);
    }

    let mut current_total = initial_total;
    let mut visiting_order = layer.to_vec();

    for pass in 0..tuning.pass_budget {
        selector.shuffle(&mut visiting_order);
        let mut accepted = 0;

        for &id in &visiting_order {
            let origin = movable_position(board, id)?;

            let mut candidates: Vec<Position> = board
                .movable_positions()
                .into_iter()
                .filter(|&pos| pos != origin)
                .collect();
            selector.shuffle(&mut candidates);

            let mut best: Option<(Position, i64)> = None;
            for candidate in candidates {
                board.swap(origin, candidate)?;
                let total = total_happiness(board, tuning);
                board.swap(origin, candidate)?;

                if best.is_none_or(|(_, best_total)| total > best_total) {
                    best = Some((candidate, total));
                }
            }

            if let Some((target, total)) = best
                && total >= current_total
            {
                board.swap(origin, target)?;
                current_total = total;
                accepted += 1;
            }
        }

        report.passes += 1;
        report.accepted_swaps += accepted;
        debug!(pass, accepted, total = current_total, "optimizer pass finished");

        if accepted == 0 {
            break;
        }
    }

    report.final_total = current_total;
    Ok(report)
}

fn movable_position(board: &Board, id: ActorId) -> Result<Position> {
    let actor = board
        .actor(id)
        .ok_or_else(|| invariant_violation("optimize", &format!("actor {id} does not exist")))?;
    if actor.locked {
        return Err(invariant_violation(
            "optimize",
            &format!("actor {id} is already locked"),
        ));
    }
    actor
        .position
        .ok_or_else(|| invariant_violation("optimize", &format!("actor {id} is not placed")))
}
