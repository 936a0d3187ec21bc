//! Layer-by-layer progress display for batches of generation runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

/// Display state of one run
#[derive(Clone, Debug, Default)]
struct RunState {
    seed: u64,
    layers_done: usize,
    layer_count: usize,
    elapsed: Option<Duration>,
}

impl RunState {
    fn label(&self) -> String {
        match self.elapsed {
            Some(elapsed) => format!("seed {} done in {:.2}s", self.seed, elapsed.as_secs_f64()),
            None => format!("seed {}", self.seed),
        }
    }
}

/// Tracks generation runs on a set of terminal bars
///
/// Each visible bar counts the locked layers of one run. Only the most recent
/// runs keep a bar; larger batches also get an overall run counter.
pub struct ProgressManager {
    bars: MultiProgress,
    runs_bar: Option<ProgressBar>,
    layer_bars: Vec<ProgressBar>,
    runs: Vec<Option<RunState>>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static LAYER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>28} [{bar:24.green/white}] {pos}/{len} layers")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
});

static RUNS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] layouts {pos}/{len} [{bar:40.green/white}] eta {eta}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Empty manager; bars appear on [`ProgressManager::initialize`]
    pub fn new() -> Self {
        Self {
            bars: MultiProgress::new(),
            runs_bar: None,
            layer_bars: Vec::new(),
            runs: Vec::new(),
        }
    }

    /// Allocate bars for a batch of `run_count` runs
    pub fn initialize(&mut self, run_count: usize) {
        self.runs = vec![None; run_count];

        if run_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let runs_bar = ProgressBar::new(run_count as u64);
            runs_bar.set_style(RUNS_STYLE.clone());
            self.runs_bar = Some(self.bars.add(runs_bar));
        }

        self.layer_bars = (0..run_count.min(MAX_INDIVIDUAL_PROGRESS_BARS))
            .map(|_| {
                let bar = ProgressBar::new(0);
                bar.set_style(LAYER_STYLE.clone());
                self.bars.add(bar)
            })
            .collect();
    }

    /// Number of runs the manager was initialized for
    pub const fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Show run `index` with `layer_count` layers still to lock
    pub fn start_run(&mut self, index: usize, seed: u64, layer_count: usize) {
        if index >= self.runs.len() {
            self.runs.resize(index + 1, None);
        }
        if let Some(slot) = self.runs.get_mut(index) {
            *slot = Some(RunState {
                seed,
                layer_count,
                ..RunState::default()
            });
        }
        self.redraw();
    }

    /// Record that `layers_done` layers of run `index` are locked
    pub fn update_layer(&mut self, index: usize, layers_done: usize) {
        if let Some(Some(state)) = self.runs.get_mut(index) {
            state.layers_done = layers_done.min(state.layer_count);
        }
        self.redraw();
    }

    /// Mark run `index` finished after `elapsed`
    pub fn complete_run(&mut self, index: usize, elapsed: Duration) {
        if let Some(Some(state)) = self.runs.get_mut(index) {
            state.layers_done = state.layer_count;
            state.elapsed = Some(elapsed);
            if let Some(runs_bar) = &self.runs_bar {
                runs_bar.inc(1);
            }
        }
        self.redraw();
    }

    /// Remove every bar from the terminal
    pub fn finish(&self) {
        if let Some(runs_bar) = &self.runs_bar {
            runs_bar.finish();
        }
        let _ = self.bars.clear();
    }

    // Newest started runs take the bars; unused bars are blanked
    fn redraw(&self) {
        let started: Vec<&RunState> = self.runs.iter().flatten().collect();
        let first = started.len().saturating_sub(self.layer_bars.len());
        let shown = started.get(first..).unwrap_or(&[]);

        for (slot, bar) in self.layer_bars.iter().enumerate() {
            match shown.get(slot) {
                Some(state) => {
                    bar.set_length(state.layer_count as u64);
                    bar.set_position(state.layers_done as u64);
                    bar.set_prefix(state.label());
                }
                None => {
                    bar.set_length(0);
                    bar.set_position(0);
                    bar.set_prefix("");
                }
            }
        }
    }
}
