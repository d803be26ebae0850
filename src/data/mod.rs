//! # Data Module
//!
//! In-memory representation of the pedigree. This is the core "Model" layer.
//!
//! ## Design Philosophy
//! - **Fixed indices:** every person gets a stable `PersonIdx` (0..N-1) at
//!   load time; the hot inference path works on indices and bitmasks, names
//!   survive only at the boundary.
//! - **Zero-cost newtypes:** `PersonIdx` prevents index bugs at compile time
//!   with no runtime overhead.
//! - **Immutable after load:** `Pedigree` is read-only for the duration of an
//!   inference run.

pub mod pedigree;

// Re-export commonly used types
pub use pedigree::{GeneCount, Pedigree, Person};

/// Person identifier (0-based index into the pedigree)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonIdx(pub u32);

impl PersonIdx {
    pub fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Single-bit mask selecting this person in a subset word
    pub fn bit(self) -> u32 {
        1 << self.0
    }
}

impl From<u32> for PersonIdx {
    fn from(idx: u32) -> Self {
        Self(idx)
    }
}

impl From<PersonIdx> for usize {
    fn from(idx: PersonIdx) -> usize {
        idx.0 as usize
    }
}
