//! # Pedigree Representation
//!
//! ## Role
//! Typed, index-addressed storage for the population: one `Person` per
//! individual, with parent links resolved to `PersonIdx` and the tri-state
//! trait observation kept as `Option<bool>`.
//!
//! ## Invariants
//! - Parents are both-present or both-absent; the constructor rejects
//!   one-parent records and dangling parent names (closed-world pedigree).
//! - At most [`MAX_PEOPLE`] individuals, so every subset of the population
//!   fits in a `u32` bitmask.
//! - Acyclicity is *not* enforced. The joint evaluator only reads a parent's
//!   assigned gene count within the same flat assignment, never a recursive
//!   ancestor chain, so a cyclic pedigree still yields well-defined
//!   arithmetic; the cap exists for pedigree semantics, not correctness.

use std::collections::HashMap;

use crate::data::PersonIdx;
use crate::error::{MendelError, Result};

/// Upper bound on population size: subsets must fit a `u32` word, and the
/// 3^N x 2^N enumeration is only tractable at this scale anyway.
pub const MAX_PEOPLE: usize = 25;

/// Number of copies of the gene of interest carried by one individual
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GeneCount {
    Zero = 0,
    One = 1,
    Two = 2,
}

impl GeneCount {
    /// All values, in accumulator-slot order
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// Copy count as an integer (0, 1 or 2)
    pub fn copies(self) -> u8 {
        self as u8
    }
}

/// One individual: identity, resolved parent links, trait observation.
///
/// Immutable once the pedigree is built.
#[derive(Clone, Debug)]
pub struct Person {
    pub name: String,
    /// `(mother, father)` or `None` for a founder; never one-sided
    pub parents: Option<(PersonIdx, PersonIdx)>,
    /// `Some(true)` / `Some(false)` if the trait was observed, else unknown
    pub observed_trait: Option<bool>,
}

impl Person {
    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }
}

/// A raw person record as produced by a loader, with parent names not yet
/// resolved to indices
#[derive(Clone, Debug)]
pub struct PersonRecord {
    pub name: String,
    pub mother: Option<String>,
    pub father: Option<String>,
    pub observed_trait: Option<bool>,
}

/// The population: an index-addressed, read-only collection of people
#[derive(Clone, Debug, Default)]
pub struct Pedigree {
    people: Vec<Person>,
    name_to_idx: HashMap<String, PersonIdx>,
}

impl Pedigree {
    /// Build a pedigree from raw records, assigning each person a stable
    /// index in record order and resolving parent names.
    ///
    /// Rejects duplicate names, one-parent records, parent references to
    /// names not present in the records, and populations larger than
    /// [`MAX_PEOPLE`].
    pub fn from_records(records: Vec<PersonRecord>) -> Result<Self> {
        if records.len() > MAX_PEOPLE {
            return Err(MendelError::invalid_data(format!(
                "{} individuals exceeds the enumeration limit of {}",
                records.len(),
                MAX_PEOPLE
            )));
        }

        let mut name_to_idx = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            let idx = PersonIdx::new(i as u32);
            if name_to_idx.insert(record.name.clone(), idx).is_some() {
                return Err(MendelError::invalid_data(format!(
                    "duplicate individual '{}'",
                    record.name
                )));
            }
        }

        let mut people = Vec::with_capacity(records.len());
        for record in records {
            let parents = match (&record.mother, &record.father) {
                (None, None) => None,
                (Some(mother), Some(father)) => {
                    let resolve = |name: &str| {
                        name_to_idx.get(name).copied().ok_or_else(|| {
                            MendelError::invalid_data(format!(
                                "'{}' names unknown parent '{}'",
                                record.name, name
                            ))
                        })
                    };
                    Some((resolve(mother)?, resolve(father)?))
                }
                _ => {
                    return Err(MendelError::invalid_data(format!(
                        "'{}' has exactly one recorded parent; parents must be \
                         both present or both absent",
                        record.name
                    )));
                }
            };
            people.push(Person {
                name: record.name,
                parents,
                observed_trait: record.observed_trait,
            });
        }

        Ok(Self {
            people,
            name_to_idx,
        })
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn person(&self, idx: PersonIdx) -> &Person {
        &self.people[idx.as_usize()]
    }

    pub fn idx_of(&self, name: &str) -> Option<PersonIdx> {
        self.name_to_idx.get(name).copied()
    }

    /// People in index order
    pub fn iter(&self) -> impl Iterator<Item = (PersonIdx, &Person)> {
        self.people
            .iter()
            .enumerate()
            .map(|(i, p)| (PersonIdx::new(i as u32), p))
    }

    /// Bitmask with every person's bit set
    pub fn full_mask(&self) -> u32 {
        if self.people.is_empty() {
            0
        } else {
            (1u32 << self.people.len()) - 1
        }
    }

    /// Bitmask of people observed to have the trait
    pub fn observed_true_mask(&self) -> u32 {
        self.observation_mask(true)
    }

    /// Bitmask of people observed not to have the trait
    pub fn observed_false_mask(&self) -> u32 {
        self.observation_mask(false)
    }

    fn observation_mask(&self, value: bool) -> u32 {
        self.iter()
            .filter(|(_, p)| p.observed_trait == Some(value))
            .fold(0, |mask, (idx, _)| mask | idx.bit())
    }

    /// Human-readable summary of the observed evidence, for error reporting
    pub fn evidence_summary(&self) -> String {
        let observed: Vec<String> = self
            .people
            .iter()
            .filter_map(|p| {
                p.observed_trait
                    .map(|t| format!("{}=trait:{}", p.name, t))
            })
            .collect();
        if observed.is_empty() {
            "no observations".to_string()
        } else {
            observed.join(", ")
        }
    }
}
