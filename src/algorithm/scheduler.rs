//! Layer state machine and the generation driver
//!
//! Actors arrive in layers. A layer is opened, filled with pre-built actors,
//! dropped onto random empty cells, optimized, and locked before the next one
//! opens, so later layers arrange themselves around earlier ones but never
//! displace them.

use crate::actors::{Actor, ActorId};
use crate::algorithm::optimizer::{OptimizationReport, optimize_layer};
use crate::algorithm::resolver::{ResolutionReport, resolve};
use crate::algorithm::selection::RandomSelector;
use crate::analysis::statistics::Statistics;
use crate::analysis::validation::{Diagnostic, validate};
use crate::io::configuration::{
    COVER_TOP_LEFT, COVER_TOP_RIGHT, COVER_VARIANT_MAX, COVER_VARIANT_MIN, Tuning,
};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::grid::Cover;
use crate::spatial::{Board, BoardShape, Position};
use std::fmt;
use tracing::{info, warn};

/// Phase of the layer state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerPhase {
    /// No layer is open
    Idle,
    /// A layer is accepting actors
    Open,
    /// Pending actors are being dropped onto the board
    Placing,
    /// The local search is rearranging the layer
    Optimizing,
    /// The last layer is locked and a new one may open
    Locked,
    /// Generation has finished
    Done,
}

impl fmt::Display for LayerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Open => "open",
            Self::Placing => "placing",
            Self::Optimizing => "optimizing",
            Self::Locked => "locked",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Pre-built actors of which the first `count` join a layer
#[derive(Clone, Debug)]
pub struct ActorGroup {
    /// Candidate actors, fully attributed except for position
    pub actors: Vec<Actor>,
    /// How many of them to place
    pub count: usize,
}

impl ActorGroup {
    /// Group placing every given actor
    pub fn all(actors: Vec<Actor>) -> Self {
        let count = actors.len();
        Self { actors, count }
    }

    /// Group of `count` copies of one actor
    pub fn repeat(actor: &Actor, count: usize) -> Self {
        Self {
            actors: vec![actor.clone(); count],
            count,
        }
    }
}

/// Groups placed and optimized together as one layer
#[derive(Clone, Debug, Default)]
pub struct LayerDirective {
    /// Groups in queue order
    pub groups: Vec<ActorGroup>,
}

impl LayerDirective {
    /// Append a group
    #[must_use]
    pub fn with(mut self, group: ActorGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Number of actors this layer places
    pub fn actor_count(&self) -> usize {
        self.groups.iter().map(|group| group.count).sum()
    }
}

/// Ordered list of layers for one generation run
#[derive(Clone, Debug, Default)]
pub struct LayerPlan {
    /// Layers in placement order
    pub layers: Vec<LayerDirective>,
}

impl LayerPlan {
    /// Append a layer
    #[must_use]
    pub fn with(mut self, layer: LayerDirective) -> Self {
        self.layers.push(layer);
        self
    }

    /// Number of actors the whole plan places
    pub fn actor_count(&self) -> usize {
        self.layers.iter().map(LayerDirective::actor_count).sum()
    }

    /// Check the plan fits a board with `capacity` cells
    ///
    /// # Errors
    ///
    /// Returns an error if a group holds fewer actors than it places, or the
    /// running total of actors exceeds the capacity at some layer
    pub fn validate(&self, capacity: usize) -> Result<()> {
        let mut placed = 0;
        for (layer, directive) in self.layers.iter().enumerate() {
            for group in &directive.groups {
                if group.actors.len() < group.count {
                    return Err(invalid_parameter(
                        "count",
                        &group.count,
                        &format!("group only holds {} actors", group.actors.len()),
                    ));
                }
            }
            placed += directive.actor_count();
            if placed > capacity {
                return Err(GenerationError::InsufficientSpace {
                    layer,
                    requested: directive.actor_count(),
                    available: capacity.saturating_sub(placed - directive.actor_count()),
                });
            }
        }
        Ok(())
    }
}

/// Record of one locked layer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerReport {
    /// Zero-based layer index
    pub index: usize,
    /// Actors placed by this layer in queue order
    pub placed: Vec<ActorId>,
    /// Local search outcome
    pub optimization: OptimizationReport,
}

/// Finished generation run
#[derive(Debug)]
pub struct Generation {
    /// Seed the run was generated from
    pub seed: u64,
    /// Final, fully locked board
    pub board: Board,
    /// One report per layer
    pub layers: Vec<LayerReport>,
    /// Post-placement resolution counts
    pub resolution: ResolutionReport,
    /// Aggregate statistics of the final board
    pub statistics: Statistics,
    /// Debug-only invariant findings, always empty in release builds
    pub diagnostics: Vec<Diagnostic>,
}

/// Drives layers through placement, optimization and locking
pub struct LayerScheduler {
    seed: u64,
    tuning: Tuning,
    board: Board,
    selector: RandomSelector,
    phase: LayerPhase,
    pending: Vec<Actor>,
    layer_index: usize,
    reports: Vec<LayerReport>,
}

impl LayerScheduler {
    /// Create a scheduler over a fresh board
    ///
    /// # Errors
    ///
    /// Returns an error if the tuning fails validation
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self> {
        tuning.validate()?;
        let mut selector = RandomSelector::new(seed);
        let mut board = Board::new(BoardShape::new(tuning.width, tuning.height));
        weather_covers(&mut board, &mut selector);

        Ok(Self {
            seed,
            tuning,
            board,
            selector,
            phase: LayerPhase::Idle,
            pending: Vec::new(),
            layer_index: 0,
            reports: Vec::new(),
        })
    }

    /// Current phase
    pub const fn phase(&self) -> LayerPhase {
        self.phase
    }

    /// Board in its current state
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Index the next locked layer will get
    pub const fn layer_index(&self) -> usize {
        self.layer_index
    }

    /// Actors queued for the open layer
    pub const fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Open a new layer
    ///
    /// # Errors
    ///
    /// Returns an error if a layer is already open or generation finished
    pub fn begin_layer(&mut self) -> Result<()> {
        self.expect_phase("begin a layer", &[LayerPhase::Idle, LayerPhase::Locked])?;
        self.pending.clear();
        self.phase = LayerPhase::Open;
        Ok(())
    }

    /// Queue the first `count` actors of a group for the open layer
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No layer is open
    /// - The group holds fewer than `count` actors
    /// - The layer would need more cells than are empty; the layer is then
    ///   aborted and nothing from it is placed
    pub fn add(&mut self, actors: Vec<Actor>, count: usize) -> Result<()> {
        self.expect_phase("add actors", &[LayerPhase::Open])?;
        if actors.len() < count {
            return Err(invalid_parameter(
                "count",
                &count,
                &format!("group only holds {} actors", actors.len()),
            ));
        }

        let requested = self.pending.len() + count;
        let available = self.board.empty_count();
        if requested > available {
            self.pending.clear();
            self.phase = LayerPhase::Idle;
            warn!(layer = self.layer_index, requested, available, "layer aborted");
            return Err(GenerationError::InsufficientSpace {
                layer: self.layer_index,
                requested,
                available,
            });
        }

        self.pending.extend(actors.into_iter().take(count));
        Ok(())
    }

    /// Place, optimize and lock the open layer
    ///
    /// # Errors
    ///
    /// Returns an error if no layer is open or the optimizer detects a broken
    /// placement invariant
    pub fn end_layer(&mut self) -> Result<LayerReport> {
        self.expect_phase("end a layer", &[LayerPhase::Open])?;

        self.phase = LayerPhase::Placing;
        let empties = self.board.empty_positions();
        if self.pending.len() > empties.len() {
            let requested = self.pending.len();
            self.pending.clear();
            self.phase = LayerPhase::Idle;
            return Err(GenerationError::InsufficientSpace {
                layer: self.layer_index,
                requested,
                available: empties.len(),
            });
        }
        let targets: Vec<Position> = self.selector.choose_distinct(&empties, self.pending.len());
        let mut placed = Vec::with_capacity(targets.len());
        for (actor, pos) in self.pending.drain(..).zip(targets) {
            placed.push(self.board.set(pos, actor)?);
        }

        self.phase = LayerPhase::Optimizing;
        let optimization =
            optimize_layer(&mut self.board, &placed, &self.tuning, &mut self.selector)?;

        for &id in &placed {
            self.board.lock(id)?;
        }
        self.board.check_occupancy()?;
        self.phase = LayerPhase::Locked;

        let report = LayerReport {
            index: self.layer_index,
            placed,
            optimization,
        };
        info!(
            layer = report.index,
            actors = report.placed.len(),
            passes = optimization.passes,
            swaps = optimization.accepted_swaps,
            happiness = optimization.final_total,
            "layer locked"
        );
        self.layer_index += 1;
        self.reports.push(report.clone());
        Ok(report)
    }

    /// Resolve the final board and hand it over
    ///
    /// # Errors
    ///
    /// Returns an error if a layer is still open
    pub fn finish(mut self) -> Result<Generation> {
        self.expect_phase("finish", &[LayerPhase::Idle, LayerPhase::Locked])?;

        let resolution = resolve(&mut self.board, &self.tuning);
        let statistics = Statistics::collect(&self.board);
        let diagnostics = if cfg!(debug_assertions) {
            validate(&self.board)
        } else {
            Vec::new()
        };
        for diagnostic in &diagnostics {
            warn!(%diagnostic, "layout check failed");
        }
        self.phase = LayerPhase::Done;

        info!(
            seed = self.seed,
            actors = statistics.actor_count,
            total_xp = statistics.total_xp,
            "generation finished"
        );
        Ok(Generation {
            seed: self.seed,
            board: self.board,
            layers: self.reports,
            resolution,
            statistics,
            diagnostics,
        })
    }

    fn expect_phase(&self, operation: &'static str, allowed: &[LayerPhase]) -> Result<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(GenerationError::InvalidState {
                operation,
                phase: self.phase.to_string(),
            })
        }
    }
}

/// Give every cell a weathered button, corners getting their decor variants
fn weather_covers(board: &mut Board, selector: &mut RandomSelector) {
    let shape = board.shape();
    for pos in shape.positions() {
        let variant = match (pos.x, pos.y) {
            (0, 0) => COVER_TOP_LEFT,
            (x, 0) if x + 1 == shape.width => COVER_TOP_RIGHT,
            _ => selector.between(COVER_VARIANT_MIN, COVER_VARIANT_MAX),
        };
        board.set_cover(pos, Cover::Covered(variant));
    }
}

/// Run a whole plan, reporting each locked layer to `observer`
///
/// # Errors
///
/// Returns an error if the plan does not fit the board or a layer fails
pub fn generate_with<F>(
    plan: LayerPlan,
    tuning: &Tuning,
    seed: u64,
    mut observer: F,
) -> Result<Generation>
where
    F: FnMut(&LayerReport),
{
    plan.validate(tuning.cell_count())?;
    let mut scheduler = LayerScheduler::new(tuning.clone(), seed)?;

    for directive in plan.layers {
        scheduler.begin_layer()?;
        for group in directive.groups {
            scheduler.add(group.actors, group.count)?;
        }
        let report = scheduler.end_layer()?;
        observer(&report);
    }

    scheduler.finish()
}

/// Run a whole plan
///
/// # Errors
///
/// Returns an error if the plan does not fit the board or a layer fails
pub fn generate(plan: LayerPlan, tuning: &Tuning, seed: u64) -> Result<Generation> {
    generate_with(plan, tuning, seed, |_| {})
}
