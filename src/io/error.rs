//! Error types and context management for generation runs

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// A layer requested more actors than the board has empty cells
    ///
    /// The layer is aborted before any of its actors are placed.
    InsufficientSpace {
        /// Layer index that was being built
        layer: usize,
        /// Number of actors the layer asked for so far
        requested: usize,
        /// Empty cells left on the board
        available: usize,
    },

    /// An internal placement invariant was broken
    InvariantViolation {
        /// Operation that detected the violation
        operation: &'static str,
        /// Description of the broken invariant
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Operation is not allowed in the scheduler's current phase
    InvalidState {
        /// Operation that was attempted
        operation: &'static str,
        /// Phase the scheduler was in
        phase: String,
    },

    /// Tuning file could not be parsed or failed validation
    Configuration {
        /// Path of the tuning file
        path: PathBuf,
        /// Description of the problem
        reason: String,
    },

    /// Failed to save a board preview to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    Serialization {
        /// What was being encoded or decoded
        operation: &'static str,
        /// Underlying serde error
        source: serde_json::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientSpace {
                layer,
                requested,
                available,
            } => {
                write!(
                    f,
                    "Layer {layer} requested {requested} actors but only {available} cells are empty"
                )
            }
            Self::InvariantViolation { operation, reason } => {
                write!(f, "Invariant violated during {operation}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidState { operation, phase } => {
                write!(f, "Cannot {operation} while scheduler is {phase}")
            }
            Self::Configuration { path, reason } => {
                write!(f, "Invalid tuning file '{}': {reason}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export preview to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { operation, source } => {
                write!(f, "Serialization error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invariant violation error
pub fn invariant_violation(operation: &'static str, reason: &impl ToString) -> GenerationError {
    GenerationError::InvariantViolation {
        operation,
        reason: reason.to_string(),
    }
}
