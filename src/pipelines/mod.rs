//! # Pipeline Module
//!
//! High-level orchestration of an exact inference run: enumeration,
//! scoring, accumulation and normalization.

pub mod inference;

pub use inference::InferencePipeline;
