//! Error types shared by every solver and the tile-stitching engine

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Failed to read the puzzle input from the filesystem
    InputRead {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Day selector outside the supported range
    InvalidDay {
        /// Value given on the command line
        value: String,
    },

    /// Input text does not have the shape a solver expects
    MalformedInput {
        /// What was being parsed
        context: &'static str,
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Tiles cannot be arranged into a single consistent square image
    ///
    /// Occurs when:
    /// - A border would pair more than two tiles
    /// - A tile shares no border with any other tile
    /// - No neighbour orientation fits a grid position during assembly
    InconsistentTiling {
        /// Description of the inconsistency
        reason: String,
    },

    /// Well-formed input for which the puzzle has no answer
    NoSolution {
        /// Name of the search that came up empty
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save the stitched image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// The terminal logger could not be installed
    Logger {
        /// Underlying logger error
        source: log::SetLoggerError,
    },

    /// A built-in text pattern failed to compile
    Pattern {
        /// Underlying regex error
        source: regex::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputRead { path, source } => {
                write!(f, "Unable to open input '{}': {source}", path.display())
            }
            Self::InvalidDay { value } => {
                write!(f, "Invalid day {value}")
            }
            Self::MalformedInput { context, reason } => {
                write!(f, "Malformed {context}: {reason}")
            }
            Self::InconsistentTiling { reason } => {
                write!(f, "Inconsistent tiling: {reason}")
            }
            Self::NoSolution { operation, reason } => {
                write!(f, "No solution from {operation}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Logger { source } => {
                write!(f, "Failed to initialize logging: {source}")
            }
            Self::Pattern { source } => {
                write!(f, "Invalid built-in pattern: {source}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputRead { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::Logger { source } => Some(source),
            Self::Pattern { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<regex::Error> for PuzzleError {
    fn from(err: regex::Error) -> Self {
        Self::Pattern { source: err }
    }
}

impl From<log::SetLoggerError> for PuzzleError {
    fn from(err: log::SetLoggerError) -> Self {
        Self::Logger { source: err }
    }
}

/// Create a malformed input error
pub fn malformed(context: &'static str, reason: &impl ToString) -> PuzzleError {
    PuzzleError::MalformedInput {
        context,
        reason: reason.to_string(),
    }
}

/// Create an inconsistent tiling error
pub fn inconsistent(reason: &impl ToString) -> PuzzleError {
    PuzzleError::InconsistentTiling {
        reason: reason.to_string(),
    }
}

/// Create a no-solution error
pub fn no_solution(operation: &'static str, reason: &impl ToString) -> PuzzleError {
    PuzzleError::NoSolution {
        operation,
        reason: reason.to_string(),
    }
}
