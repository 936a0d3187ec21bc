//! Default constants and the runtime tuning table
//!
//! Every score magnitude and distance threshold used by the happiness rules is
//! collected in [`Tuning`] so layouts can be rebalanced from a JSON file
//! without recompiling.

use crate::actors::ActorKind;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use serde::{Deserialize, Serialize};
use std::path::Path;

// Board dimensions
/// Number of board columns
pub const BOARD_WIDTH: usize = 13;
/// Number of board rows
pub const BOARD_HEIGHT: usize = 10;

// Optimizer settings
/// Maximum number of local-search passes per layer
pub const DEFAULT_PASS_BUDGET: usize = 4;

/// Radius within which an orb reveals its neighbours
pub const ORB_REVEAL_RADIUS: f64 = 2.1;

/// Repeating durability values handed to walls in placement order
pub const WALL_DURABILITY_SEQUENCE: [u32; 3] = [2, 3, 4];

// Cell cover variants
/// Smallest weathered button variant
pub const COVER_VARIANT_MIN: u8 = 4;
/// Largest weathered button variant
pub const COVER_VARIANT_MAX: u8 = 24;
/// Decor variant of the top-left corner button
pub const COVER_TOP_LEFT: u8 = 25;
/// Decor variant of the top-right corner button
pub const COVER_TOP_RIGHT: u8 = 26;

// Default values for CLI parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default number of layouts generated per invocation
pub const DEFAULT_RUNS: usize = 1;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Prefix of every generated output file
pub const OUTPUT_PREFIX: &str = "layout_";
/// Edge length in pixels of one cell in PNG previews
pub const PREVIEW_CELL_PIXELS: u32 = 16;

/// Score magnitudes and distance thresholds for every happiness rule
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTable {
    /// Dragon egg next to the dragon
    pub dragon_egg_near_dragon: i64,
    /// Dragon on the centre cell
    pub dragon_centered: i64,
    /// Fidel in a corner
    pub fidel_corner: i64,
    /// Gnome next to a medikit
    pub gnome_near_medikit: i64,
    /// Mine king in a corner
    pub mine_king_corner: i64,
    /// Wizard on an edge that is not a corner
    pub wizard_edge: i64,
    /// Big slime next to the wizard
    pub big_slime_near_wizard: i64,
    /// Rat guard directly beside the rat king
    pub rat_guard_beside_king: i64,
    /// Guard inside its assigned quadrant
    pub guard_quadrant: i64,
    /// Giant on its own half of the board
    pub giant_side: i64,
    /// Giants mirrored on the same row
    pub giant_symmetry: i64,
    /// Gargoyle next to its twin
    pub gargoyle_twin: i64,
    /// Minotaur owning exactly one nearby chest
    pub minotaur_chest: i64,
    /// Orb too close to the board rim
    pub orb_near_edge: i64,
    /// Each forbidden actor inside the orb radius
    pub orb_forbidden_reveal: i64,
    /// Each wall inside the orb radius beyond the allowance
    pub orb_excess_wall: i64,
    /// Orb revealing exactly one medikit and at least one wall
    pub orb_healing_reveal: i64,
    /// Each other medikit too close to a medikit
    pub medikit_crowding: i64,
    /// Each other chest too close to a chest
    pub chest_crowding: i64,
    /// Wall with exactly one orthogonal wall neighbour
    pub wall_pair: i64,

    /// Distance below which two actors count as adjacent
    pub adjacency_radius: f64,
    /// Distance below which a chest counts as near a minotaur
    pub minotaur_chest_radius: f64,
    /// Distance below which two medikits crowd each other
    pub medikit_crowding_radius: f64,
    /// Distance below which two chests crowd each other
    pub chest_crowding_radius: f64,
    /// Orb reveal radius
    pub orb_reveal_radius: f64,
    /// Rim distance below which an orb is penalised
    pub orb_edge_threshold: usize,
    /// Walls an orb may reveal before each extra wall is penalised
    pub orb_wall_allowance: usize,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            dragon_egg_near_dragon: 9000,
            dragon_centered: 10_000,
            fidel_corner: 9000,
            gnome_near_medikit: 10_000,
            mine_king_corner: 10_000,
            wizard_edge: 10_000,
            big_slime_near_wizard: 1000,
            rat_guard_beside_king: 1000,
            guard_quadrant: 2500,
            giant_side: 1000,
            giant_symmetry: 10_000,
            gargoyle_twin: 1000,
            minotaur_chest: 10_000,
            orb_near_edge: -10_000,
            orb_forbidden_reveal: -2000,
            orb_excess_wall: -2000,
            orb_healing_reveal: 2000,
            medikit_crowding: -1000,
            chest_crowding: -1000,
            wall_pair: 2000,
            adjacency_radius: 1.5,
            minotaur_chest_radius: 2.0,
            medikit_crowding_radius: 3.5,
            chest_crowding_radius: 3.0,
            orb_reveal_radius: ORB_REVEAL_RADIUS,
            orb_edge_threshold: 1,
            orb_wall_allowance: 2,
        }
    }
}

/// Runtime tuning for a generation run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Board columns
    pub width: usize,
    /// Board rows
    pub height: usize,
    /// Local-search passes per layer
    pub pass_budget: usize,
    /// Happiness rule magnitudes and thresholds
    pub scores: ScoreTable,
    /// Durability values cycled over walls
    pub wall_durability: Vec<u32>,
    /// Kinds revealed automatically once the board is final
    pub auto_reveal: Vec<ActorKind>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            pass_budget: DEFAULT_PASS_BUDGET,
            scores: ScoreTable::default(),
            wall_durability: WALL_DURABILITY_SEQUENCE.to_vec(),
            auto_reveal: vec![ActorKind::Dragon],
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults for missing fields
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The contents are not valid tuning JSON
    /// - The loaded values fail [`Tuning::validate`]
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| GenerationError::FileSystem {
            path: path.to_path_buf(),
            operation: "read tuning",
            source: e,
        })?;

        let tuning: Self =
            serde_json::from_str(&contents).map_err(|e| GenerationError::Configuration {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        tuning
            .validate()
            .map_err(|e| GenerationError::Configuration {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(tuning)
    }

    /// Check that the tuning describes a usable board
    ///
    /// # Errors
    ///
    /// Returns an error if the board is smaller than 3x3, the durability
    /// sequence is empty, or a distance threshold is negative or not finite
    pub fn validate(&self) -> Result<()> {
        if self.width < 3 {
            return Err(invalid_parameter(
                "width",
                &self.width,
                &"board needs at least three columns",
            ));
        }
        if self.height < 3 {
            return Err(invalid_parameter(
                "height",
                &self.height,
                &"board needs at least three rows",
            ));
        }
        if self.wall_durability.is_empty() {
            return Err(invalid_parameter(
                "wall_durability",
                &"[]",
                &"sequence must contain at least one value",
            ));
        }

        let radii = [
            ("adjacency_radius", self.scores.adjacency_radius),
            ("minotaur_chest_radius", self.scores.minotaur_chest_radius),
            ("medikit_crowding_radius", self.scores.medikit_crowding_radius),
            ("chest_crowding_radius", self.scores.chest_crowding_radius),
            ("orb_reveal_radius", self.scores.orb_reveal_radius),
        ];
        for (parameter, radius) in radii {
            if !radius.is_finite() || radius < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &radius,
                    &"radius must be a finite non-negative number",
                ));
            }
        }

        Ok(())
    }

    /// Total number of cells on the board
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }
}
