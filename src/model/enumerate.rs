//! # Assignment Enumeration
//!
//! ## Role
//! Generate every joint assignment of the population: a gene partition
//! (which people carry two copies, which carry one, the rest none) crossed
//! with a trait set (which people express the trait).
//!
//! ## Representation
//! The population is index-addressed, so every subset is a `u32` bitmask
//! (bit i = person i). "Disjoint subsets" is then a bitwise check, and
//! submask enumeration uses the standard `(s - m) & m` walk.
//!
//! ## Evidence filtering
//! Trait sets are not generated and then filtered: only sets consistent
//! with the observations are produced in the first place, as
//! (observed-true mask) | (submask of the unobserved people). Gene
//! partitions are independent of the evidence and enumerated in full,
//! 3^N ordered pairs of disjoint masks.

use crate::data::{GeneCount, Pedigree, PersonIdx};

/// Iterator over every submask of `mask`, in increasing numeric order,
/// including the empty mask and `mask` itself
#[derive(Clone, Debug)]
pub struct Submasks {
    mask: u32,
    cur: u32,
    done: bool,
}

impl Submasks {
    pub fn of(mask: u32) -> Self {
        Self {
            mask,
            cur: 0,
            done: false,
        }
    }
}

impl Iterator for Submasks {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.done {
            return None;
        }
        let cur = self.cur;
        if cur == self.mask {
            self.done = true;
        } else {
            self.cur = cur.wrapping_sub(self.mask) & self.mask;
        }
        Some(cur)
    }
}

/// The gene half of one assignment: disjoint two-copy and one-copy masks;
/// everyone else carries zero copies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenePartition {
    pub two_copies: u32,
    pub one_copy: u32,
}

impl GenePartition {
    pub fn count(&self, idx: PersonIdx) -> GeneCount {
        let bit = idx.bit();
        if self.two_copies & bit != 0 {
            GeneCount::Two
        } else if self.one_copy & bit != 0 {
            GeneCount::One
        } else {
            GeneCount::Zero
        }
    }
}

/// The trait half of one assignment: the set of people expressing the trait
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraitSet(pub u32);

impl TraitSet {
    pub fn has(&self, idx: PersonIdx) -> bool {
        self.0 & idx.bit() != 0
    }
}

/// Every gene partition of the population: 3^N ordered `(two, one)` pairs of
/// disjoint masks. For an empty population this is the single trivial
/// partition.
pub fn gene_partitions(pedigree: &Pedigree) -> impl Iterator<Item = GenePartition> {
    let full = pedigree.full_mask();
    (0..=full).flat_map(move |two_copies| {
        Submasks::of(full & !two_copies)
            .map(move |one_copy| GenePartition {
                two_copies,
                one_copy,
            })
    })
}

/// Gene partitions whose two-copy mask is `two_copies`; used by the parallel
/// pipeline to shard the 3^N space by its outer loop
pub fn gene_partitions_with_two_copies(
    pedigree: &Pedigree,
    two_copies: u32,
) -> impl Iterator<Item = GenePartition> {
    Submasks::of(pedigree.full_mask() & !two_copies).map(move |one_copy| GenePartition {
        two_copies,
        one_copy,
    })
}

/// Every trait set consistent with the observed evidence: all observed-true
/// people included, no observed-false person included, the unobserved free.
pub fn consistent_trait_sets(pedigree: &Pedigree) -> impl Iterator<Item = TraitSet> {
    let required = pedigree.observed_true_mask();
    let free = pedigree.full_mask() & !required & !pedigree.observed_false_mask();
    Submasks::of(free).map(move |sub| TraitSet(required | sub))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::pedigree::PersonRecord;

    fn pedigree(observations: &[Option<bool>]) -> Pedigree {
        let records = observations
            .iter()
            .enumerate()
            .map(|(i, &observed_trait)| PersonRecord {
                name: format!("p{}", i),
                mother: None,
                father: None,
                observed_trait,
            })
            .collect();
        Pedigree::from_records(records).unwrap()
    }

    #[test]
    fn test_submasks_cover_powerset() {
        let subs: Vec<u32> = Submasks::of(0b101).collect();
        assert_eq!(subs, vec![0b000, 0b001, 0b100, 0b101]);
        assert_eq!(Submasks::of(0).collect::<Vec<_>>(), vec![0]);
        assert_eq!(Submasks::of(0b1111).count(), 16);
    }

    #[test]
    fn test_gene_partitions_count_is_three_to_the_n() {
        let ped = pedigree(&[None, None, None]);
        let partitions: Vec<_> = gene_partitions(&ped).collect();
        assert_eq!(partitions.len(), 27);
        for p in &partitions {
            assert_eq!(p.two_copies & p.one_copy, 0, "masks must be disjoint");
        }
        // All pairs are distinct.
        let mut seen = std::collections::HashSet::new();
        assert!(partitions.iter().all(|p| seen.insert((p.two_copies, p.one_copy))));
    }

    #[test]
    fn test_gene_partition_lookup() {
        let p = GenePartition {
            two_copies: 0b001,
            one_copy: 0b010,
        };
        assert_eq!(p.count(PersonIdx::new(0)), GeneCount::Two);
        assert_eq!(p.count(PersonIdx::new(1)), GeneCount::One);
        assert_eq!(p.count(PersonIdx::new(2)), GeneCount::Zero);
    }

    #[test]
    fn test_trait_sets_respect_evidence() {
        let ped = pedigree(&[Some(true), None, Some(false)]);
        let sets: Vec<_> = consistent_trait_sets(&ped).collect();
        // One free person: exactly two consistent sets.
        assert_eq!(sets.len(), 2);
        for set in &sets {
            assert!(set.has(PersonIdx::new(0)));
            assert!(!set.has(PersonIdx::new(2)));
        }
    }

    #[test]
    fn test_empty_population_is_trivial() {
        let ped = pedigree(&[]);
        assert_eq!(gene_partitions(&ped).count(), 1);
        assert_eq!(consistent_trait_sets(&ped).count(), 1);
    }
}
