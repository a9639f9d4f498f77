//! # Core Module
//!
//! Provides the data-facing building blocks of hydrosite: the column layouts of
//! the two per-site summary schemes, readers for the text files the upstream
//! analysis pipeline produces, discovery of those files by naming convention,
//! and structure-file output for water placements.
//!
//! ## Overview
//!
//! Everything an upstream HSA/GIST run hands to this library is plain
//! whitespace-delimited text, keyed by a 3-digit zero-padded site index in the
//! file name. The submodules here turn that convention into typed values:
//!
//! - **Column Layouts** ([`fields`]) - Named column indices and ordered titles
//!   for the GIST and HSA summary tables
//! - **Summary Tables** ([`summary`]) - Readers for the headered per-site
//!   summary files
//! - **Array Loading** ([`loader`]) - One-, two-, and three-column numeric
//!   array loaders
//! - **File Discovery** ([`discovery`]) - Suffix- and site-index-based lookup
//!   of per-site data files
//! - **Structure Output** ([`io`]) - Fixed-width PDB writers for water
//!   coordinates

pub mod discovery;
pub mod fields;
pub mod io;
pub mod loader;
pub mod summary;
