//! # Marginal Accumulation and Normalization
//!
//! ## Role
//! The only mutable state of a run: per person, three unnormalized gene-count
//! masses and two trait masses. Every consistent assignment contributes its
//! joint probability to the matching entries; at the end the masses are
//! rescaled into proper distributions.
//!
//! ## Sharding
//! `merge` sums two accumulators entrywise. Addition is commutative and
//! associative, so parallel shards may each own a private `Marginals` and be
//! merged in any order; the merged result is identical to a serial run.

use crate::data::{GeneCount, Pedigree, PersonIdx};
use crate::error::{MendelError, Result};
use crate::model::enumerate::{GenePartition, TraitSet};

/// Running per-person totals, exclusively owned by one enumeration shard
#[derive(Clone, Debug)]
pub struct Marginals {
    gene: Vec<[f64; 3]>,
    trait_: Vec<[f64; 2]>,
}

impl Marginals {
    /// Zero-initialized accumulators for `n` people
    pub fn new(n: usize) -> Self {
        Self {
            gene: vec![[0.0; 3]; n],
            trait_: vec![[0.0; 2]; n],
        }
    }

    /// Add one consistent assignment's joint probability to every person's
    /// matching gene-count and trait entries
    pub fn record(&mut self, genes: &GenePartition, traits: &TraitSet, probability: f64) {
        for i in 0..self.gene.len() {
            let idx = PersonIdx::new(i as u32);
            self.gene[i][genes.count(idx).as_usize()] += probability;
            self.trait_[i][traits.has(idx) as usize] += probability;
        }
    }

    /// Entrywise sum of two shards' accumulators
    pub fn merge(mut self, other: Marginals) -> Marginals {
        debug_assert_eq!(self.gene.len(), other.gene.len());
        for (mine, theirs) in self.gene.iter_mut().zip(&other.gene) {
            for (a, b) in mine.iter_mut().zip(theirs) {
                *a += b;
            }
        }
        for (mine, theirs) in self.trait_.iter_mut().zip(&other.trait_) {
            for (a, b) in mine.iter_mut().zip(theirs) {
                *a += b;
            }
        }
        self
    }

    /// Rescale every person's masses into distributions summing to 1 and
    /// expose them read-only.
    ///
    /// An empty pedigree yields an empty result. Zero total mass means the
    /// observed evidence admitted no assignment with positive probability
    /// and is reported as [`MendelError::Unsatisfiable`]. A zero per-person
    /// sum while the population total is positive cannot happen (every
    /// assignment contributes to every person) and is asserted.
    pub fn normalize(self, pedigree: &Pedigree) -> Result<Posteriors> {
        if pedigree.is_empty() {
            return Ok(Posteriors {
                entries: Vec::new(),
            });
        }

        // Every assignment adds its probability to exactly one gene slot of
        // every person, so any person's gene sum equals the total accumulated
        // mass of the run.
        let total_mass: f64 = self.gene[0].iter().sum();
        if total_mass <= 0.0 {
            return Err(MendelError::unsatisfiable(format!(
                "no assignment has positive probability under the evidence ({})",
                pedigree.evidence_summary()
            )));
        }

        let mut entries = Vec::with_capacity(pedigree.len());
        for (i, (_, person)) in pedigree.iter().enumerate() {
            let gene_total: f64 = self.gene[i].iter().sum();
            let trait_total: f64 = self.trait_[i].iter().sum();
            assert!(
                gene_total > 0.0 && trait_total > 0.0,
                "person '{}' accumulated no mass despite positive total",
                person.name
            );

            entries.push(PersonPosterior {
                name: person.name.clone(),
                gene: self.gene[i].map(|mass| mass / gene_total),
                trait_: self.trait_[i].map(|mass| mass / trait_total),
            });
        }

        Ok(Posteriors { entries })
    }
}

/// One person's normalized posterior distributions
#[derive(Clone, Debug)]
pub struct PersonPosterior {
    pub name: String,
    /// P(gene = g | evidence), indexed by copy count
    gene: [f64; 3],
    /// P(trait = t | evidence), indexed by `t as usize`
    trait_: [f64; 2],
}

impl PersonPosterior {
    pub fn gene_prob(&self, count: GeneCount) -> f64 {
        self.gene[count.as_usize()]
    }

    pub fn trait_prob(&self, has_trait: bool) -> f64 {
        self.trait_[has_trait as usize]
    }
}

/// The result of one inference run: per-person posteriors in pedigree order
#[derive(Clone, Debug)]
pub struct Posteriors {
    entries: Vec<PersonPosterior>,
}

impl Posteriors {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonPosterior> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&PersonPosterior> {
        self.entries.iter().find(|e| e.name == name)
    }
}
