//! Structure-file output for water placements.
//!
//! Hydration-site results are visualized by dropping water oxygens (or full
//! three-atom water residues) into a PDB-format file alongside the solute.
//! The writers here emit that fixed-column format.

pub mod pdb;
