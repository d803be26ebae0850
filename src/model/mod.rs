//! # Model Module
//!
//! The exact-inference core.
//!
//! ## Factorization
//! The network has a fixed shape: each person's gene count depends only on
//! their two parents' gene counts (or the founder prior), each trait only on
//! the person's own gene count. One joint assignment therefore scores as a
//! product of per-person factors, and posteriors come from summing those
//! scores over every assignment that agrees on one (person, value) pair.
//!
//! ## Why flat enumeration
//! Non-founder probabilities read the parents' *assigned* gene counts within
//! the same flat assignment, never a recursive ancestor chain. That keeps
//! the evaluator a simple product over people, makes every assignment's
//! score independent of every other's (embarrassingly parallel), and means
//! pedigree acyclicity is a data-semantics concern rather than a
//! correctness requirement.
//!
//! ## Layout
//! - `priors`: fixed probability tables and the transmission model
//! - `enumerate`: bitmask generation of gene partitions and trait sets
//! - `joint`: scoring of one complete assignment
//! - `marginals`: accumulation, shard merge, and normalization

pub mod enumerate;
pub mod joint;
pub mod marginals;
pub mod priors;

pub use enumerate::{GenePartition, TraitSet};
pub use joint::joint_probability;
pub use marginals::{Marginals, PersonPosterior, Posteriors};
pub use priors::{transmit_prob, PriorTables};
