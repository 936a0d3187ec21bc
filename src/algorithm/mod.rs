/// Per-actor happiness scoring
pub mod happiness;
/// Bounded swap-based local search
pub mod optimizer;
/// Post-placement resolution on the final board
pub mod resolver;
/// Layer state machine and generation driver
pub mod scheduler;
/// Seeded random selection
pub mod selection;
