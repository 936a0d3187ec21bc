//! Analysis of finished boards

/// Aggregate statistics and resource projection
pub mod statistics;
/// Debug-only invariant checks
pub mod validation;
