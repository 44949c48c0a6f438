//! Mathematical utilities for generation

/// Seeded random selection and sampling helpers
pub mod sampling;
