//! Input/output, configuration and error handling

/// Command-line interface for batch layout generation
pub mod cli;
/// Default constants and the runtime tuning table
pub mod configuration;
/// Error types for generation runs
pub mod error;
/// PNG preview export of finished boards
pub mod image;
/// Progress display for batch runs
pub mod progress;
/// Text and JSON reports of finished boards
pub mod report;
