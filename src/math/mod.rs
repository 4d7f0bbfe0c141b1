//! Mathematical utilities for the solvers

/// Modular exponentiation, discrete logarithms and schedule alignment
pub mod modular;
