//! # Hydrosite Core Library
//!
//! A library for post-processing and visualizing the output of molecular-dynamics
//! hydration-site analysis (HSA) and grid inhomogeneous solvation theory (GIST)
//! pipelines.
//!
//! ## Architectural Philosophy
//!
//! The library is layered so that parsing, computation, and rendering stay
//! independently testable:
//!
//! - **[`core`]: The Foundation.** Column-index tables for the HSA/GIST summary
//!   schemes, readers for the per-site text files an upstream pipeline emits,
//!   site-file discovery by naming convention, and PDB-format writers for water
//!   placements.
//!
//! - **[`analysis`]: The Numerics.** Gaussian kernel density estimation
//!   (Scott's rule) and the site-level transformations built on it: neighbor
//!   interaction-energy density curves and joint angular/radial density
//!   surfaces.
//!
//! - **[`plot`]: The Rendering.** Raster (PNG) output of the analysis results
//!   with a fixed publication-style figure geometry.
//!
//! Progress reporting crosses all layers through the callback seam in
//! [`progress`]; the library itself never draws a progress bar.

pub mod analysis;
pub mod core;
pub mod plot;
pub mod progress;
