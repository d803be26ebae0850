//! # I/O Module
//!
//! File reading boundaries. Converts between on-disk pedigree tables and the
//! in-memory `Pedigree` representation.

pub mod pedigree_csv;

pub use pedigree_csv::load_pedigree;
