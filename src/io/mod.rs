//! Input/output: command line, configuration, errors, input parsing,
//! image export, logging and progress display

/// Command-line interface and the runner behind it
pub mod cli;
/// Puzzle constants and display settings
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG export of the stitched image
pub mod image;
/// Reading and splitting puzzle input
pub mod input;
/// Terminal logger initialisation
pub mod logging;
/// Progress bars for long simulations
pub mod progress;
