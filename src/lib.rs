//! # Mendel Library Root
//!
//! ## Role
//! The crate root that declares all public modules and re-exports common types.
//!
//! ## Spec
//! - Declare all public modules (`pub mod data`, `pub mod model`, etc.).
//! - Re-export commonly used types for ergonomic access.
//! - This allows the engine to be used as a library by other tools or by the
//!   binary executable.
//!
//! ## Module Structure
//! ```text
//! mendel
//! ├── data        # In-memory pedigree representation (people, observations)
//! ├── io          # File I/O (pedigree CSV loading)
//! ├── model       # Inference core (priors, enumeration, joint, marginals)
//! └── pipelines   # High-level orchestration (exact inference run)
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod io;
pub mod model;
pub mod pipelines;

pub use data::{GeneCount, Pedigree, Person, PersonIdx};
pub use error::{MendelError, Result};
pub use model::marginals::Posteriors;
pub use model::priors::PriorTables;
pub use pipelines::InferencePipeline;
