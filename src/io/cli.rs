//! Command-line interface for batch generation of dungeon layouts

use crate::actors::roster::standard_plan;
use crate::algorithm::scheduler::{Generation, generate_with};
use crate::io::configuration::{
    DEFAULT_RUNS, DEFAULT_SEED, OUTPUT_PREFIX, PREVIEW_CELL_PIXELS, Tuning,
};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::io::image::export_board_as_png;
use crate::io::progress::ProgressManager;
use crate::io::report::{LayoutSummary, render_layout};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "lairforge")]
#[command(
    author,
    version,
    about = "Generate dungeon layouts with layered greedy placement"
)]
/// Command-line arguments for the layout generator
pub struct Cli {
    /// Seed of the first run; later runs use consecutive seeds
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of layouts to generate
    #[arg(short, long, default_value_t = DEFAULT_RUNS)]
    pub runs: usize,

    /// JSON tuning file overriding scores and thresholds
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the optimizer pass budget
    #[arg(short, long)]
    pub passes: Option<usize>,

    /// Directory for layout files; prints layouts to stdout when absent
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Also write a PNG preview of each layout
    #[arg(long)]
    pub preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Regenerate layouts even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    ///
    /// Bars would interleave with layouts printed to stdout.
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.output.is_some()
    }

    /// Seeds of every requested run
    pub fn seeds(&self) -> impl Iterator<Item = u64> {
        let first = self.seed;
        (0..self.runs as u64).map(move |offset| first.wrapping_add(offset))
    }

    /// Load the tuning file if given and apply flag overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the tuning file cannot be read or is invalid
    pub fn load_tuning(&self) -> Result<Tuning> {
        let mut tuning = match &self.config {
            Some(path) => Tuning::from_json_file(path)?,
            None => Tuning::default(),
        };
        if let Some(passes) = self.passes {
            tuning.pass_budget = passes;
        }
        tuning.validate()?;
        Ok(tuning)
    }
}

/// Paths written for one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOutputs {
    /// Text layout
    pub layout: PathBuf,
    /// JSON summary
    pub summary: PathBuf,
    /// PNG preview
    pub preview: PathBuf,
}

impl RunOutputs {
    /// Output paths for `seed` inside `dir`
    pub fn new(dir: &Path, seed: u64) -> Self {
        let stem = format!("{OUTPUT_PREFIX}{seed}");
        Self {
            layout: dir.join(format!("{stem}.txt")),
            summary: dir.join(format!("{stem}.json")),
            preview: dir.join(format!("{stem}.png")),
        }
    }
}

/// Orchestrates a batch of generation runs with progress tracking
pub struct BatchRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested layout
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are inconsistent, the tuning cannot be
    /// loaded, a run fails or its outputs cannot be written
    pub fn process(&mut self) -> Result<()> {
        if self.cli.preview && self.cli.output.is_none() {
            return Err(invalid_parameter(
                "preview",
                &true,
                &"PNG previews need an output directory",
            ));
        }

        let tuning = self.cli.load_tuning()?;
        let seeds: Vec<u64> = self
            .cli
            .seeds()
            .filter(|&seed| self.should_generate(seed))
            .collect();

        if seeds.is_empty() {
            return Ok(());
        }

        if let Some(dir) = &self.cli.output {
            std::fs::create_dir_all(dir).map_err(|e| GenerationError::FileSystem {
                path: dir.clone(),
                operation: "create output directory",
                source: e,
            })?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        for (index, seed) in seeds.into_iter().enumerate() {
            self.run(&tuning, seed, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn should_generate(&self, seed: u64) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }
        let Some(dir) = &self.cli.output else {
            return true;
        };

        let outputs = RunOutputs::new(dir, seed);
        if outputs.summary.exists() {
            // Allow print for user feedback for skipped runs
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: seed {seed} (output exists)");
            }
            false
        } else {
            true
        }
    }

    fn run(&mut self, tuning: &Tuning, seed: u64, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let plan = standard_plan();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_run(index, seed, plan.layers.len());
        }

        let mut progress = self.progress_manager.as_mut();
        let generation = generate_with(plan, tuning, seed, |report| {
            if let Some(pm) = progress.as_mut() {
                pm.update_layer(index, report.index + 1);
            }
        })?;

        info!(
            seed,
            actors = generation.statistics.actor_count,
            elapsed_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX),
            "layout generated"
        );

        self.write_outputs(&generation, tuning)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_run(index, start_time.elapsed());
        }

        Ok(())
    }

    fn write_outputs(&self, generation: &Generation, tuning: &Tuning) -> Result<()> {
        let layout = render_layout(&generation.board);

        let Some(dir) = &self.cli.output else {
            print_layout(generation.seed, &layout);
            return Ok(());
        };

        let outputs = RunOutputs::new(dir, generation.seed);
        write_file(&outputs.layout, &layout)?;
        let summary = LayoutSummary::from_generation(generation, tuning);
        write_file(&outputs.summary, &summary.to_json()?)?;

        if self.cli.preview {
            export_board_as_png(&generation.board, &outputs.preview, PREVIEW_CELL_PIXELS)?;
        }

        debug!(path = %outputs.summary.display(), "outputs written");
        Ok(())
    }
}

// Allow print for layouts requested on stdout
#[allow(clippy::print_stdout)]
fn print_layout(seed: u64, layout: &str) {
    println!("seed {seed}");
    println!("{layout}");
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| GenerationError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source: e,
    })
}
