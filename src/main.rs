//! CLI entry point for the layered dungeon layout generator

use clap::Parser;
use lairforge::io::cli::{BatchRunner, Cli};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> lairforge::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut runner = BatchRunner::new(cli);
    runner.process()
}
