//! Mathematical utilities for generation statistics

/// Player level and hit-point progression
pub mod progression;
