//! Text and JSON reports of finished boards

use crate::actors::{ActorKind, Facing};
use crate::algorithm::happiness::total_happiness;
use crate::algorithm::scheduler::Generation;
use crate::analysis::statistics::Statistics;
use crate::io::configuration::Tuning;
use crate::io::error::{GenerationError, Result};
use crate::spatial::{Board, Position};
use serde::Serialize;

/// Single-character symbol for a kind in text layouts
pub const fn glyph(kind: ActorKind) -> char {
    match kind {
        ActorKind::Empty => '.',
        ActorKind::Orb => 'o',
        ActorKind::SpellMakeOrb => '?',
        ActorKind::Mine => '*',
        ActorKind::MineKing => 'K',
        ActorKind::Dragon => 'D',
        ActorKind::Wall => '#',
        ActorKind::Mimic => 'c',
        ActorKind::Medikit => '+',
        ActorKind::RatKing => 'R',
        ActorKind::Rat => 'r',
        ActorKind::Slime => 's',
        ActorKind::Gargoyle => 'g',
        ActorKind::Minotaur => 'M',
        ActorKind::Chest => 'C',
        ActorKind::Skeleton => 'k',
        ActorKind::Treasure => '$',
        ActorKind::Snake => 'n',
        ActorKind::Giant => 'G',
        ActorKind::Decoration => '~',
        ActorKind::Wizard => 'W',
        ActorKind::Gazer => 'z',
        ActorKind::SpellDisarm => '!',
        ActorKind::BigSlime => 'S',
        ActorKind::SpellRevealRats => '%',
        ActorKind::SpellRevealSlimes => '&',
        ActorKind::Gnome => 'e',
        ActorKind::Bat => 'b',
        ActorKind::Guard => 'U',
        ActorKind::Crown => '^',
        ActorKind::Fidel => 'f',
        ActorKind::DragonEgg => 'd',
        ActorKind::Death => 'X',
        ActorKind::DarkKnight => 'N',
        ActorKind::Eye => 'y',
    }
}

/// Render the board as rows of glyphs separated by spaces
pub fn render_layout(board: &Board) -> String {
    let mut out = String::with_capacity(board.width() * board.height() * 2);
    for y in 0..board.height() {
        let row: Vec<String> = (0..board.width())
            .map(|x| glyph(board.kind_at(Position::new(x, y))).to_string())
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

/// Serializable view of one placed actor
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActorSummary {
    /// Kind tag
    pub kind: ActorKind,
    /// Informational name
    pub name: Option<String>,
    /// Final cell
    pub position: Option<Position>,
    /// Visible from the start
    pub revealed: bool,
    /// Wall durability, zero for other kinds
    pub wall_hp: u32,
    /// Chest a minotaur guards
    pub chest_location: Option<Position>,
    /// Direction a twin faces
    pub facing: Option<Facing>,
    /// Display variant
    pub display_variant: Option<u8>,
}

/// Serializable view of one layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LayerSummary {
    /// Zero-based layer index
    pub index: usize,
    /// Actors placed by the layer
    pub actors: usize,
    /// Optimizer passes run
    pub passes: usize,
    /// Swaps the optimizer kept
    pub accepted_swaps: usize,
    /// Total happiness before optimizing
    pub initial_total: i64,
    /// Total happiness after optimizing
    pub final_total: i64,
}

/// Everything a collaborator needs to know about a finished run
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LayoutSummary {
    /// Seed of the run
    pub seed: u64,
    /// Board columns
    pub width: usize,
    /// Board rows
    pub height: usize,
    /// Total happiness of the final board
    pub total_happiness: i64,
    /// Aggregate statistics
    pub statistics: Statistics,
    /// Per-layer optimizer results
    pub layers: Vec<LayerSummary>,
    /// Every placed actor in creation order
    pub actors: Vec<ActorSummary>,
    /// Debug findings rendered as text
    pub diagnostics: Vec<String>,
}

impl LayoutSummary {
    /// Summarize a finished run
    pub fn from_generation(generation: &Generation, tuning: &Tuning) -> Self {
        let board = &generation.board;
        Self {
            seed: generation.seed,
            width: board.width(),
            height: board.height(),
            total_happiness: total_happiness(board, tuning),
            statistics: generation.statistics.clone(),
            layers: generation
                .layers
                .iter()
                .map(|layer| LayerSummary {
                    index: layer.index,
                    actors: layer.placed.len(),
                    passes: layer.optimization.passes,
                    accepted_swaps: layer.optimization.accepted_swaps,
                    initial_total: layer.optimization.initial_total,
                    final_total: layer.optimization.final_total,
                })
                .collect(),
            actors: board
                .actors()
                .map(|(_, actor)| ActorSummary {
                    kind: actor.kind,
                    name: actor.name.clone(),
                    position: actor.position,
                    revealed: actor.revealed,
                    wall_hp: actor.wall_hp,
                    chest_location: actor.chest_location,
                    facing: actor.facing,
                    display_variant: actor.display_variant,
                })
                .collect(),
            diagnostics: generation
                .diagnostics
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Encode as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| GenerationError::Serialization {
            operation: "encode layout summary",
            source: e,
        })
    }
}
