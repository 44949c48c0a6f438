//! Input/output, configuration and error handling

/// Command-line interface and batch runner
pub mod cli;
/// Generation constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Batch progress display
pub mod progress;
/// ASCII rendering
pub mod render;
