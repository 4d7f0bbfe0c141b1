//! Analysis of assembled images

/// Pixel-mask search and water roughness
pub mod patterns;
