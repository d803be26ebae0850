//! # Prior Tables
//!
//! ## Role
//! The fixed distributions that parameterize the network: the founder gene
//! prior, the trait-given-gene emission table, and the per-copy mutation
//! rate. Compiled-in defaults; overridable through the struct for tests.
//!
//! ## Inheritance model
//! A parent passes a copy of the gene to a child with a probability derived
//! from the parent's own gene count:
//!
//! ```text
//! pass(2) = 1 - mutation     (a carried copy, unless it mutates away)
//! pass(1) = 0.5              (coin flip on which chromosome is transmitted)
//! pass(0) = mutation         (only a fresh mutation can introduce a copy)
//! ```
//!
//! The child's gene count then follows from the two independent parental
//! transmissions; see [`PriorTables::inheritance_prob`].

use crate::data::GeneCount;

/// Probability that a parent with the given gene count transmits an affected
/// copy to a child.
///
/// A pure function of the parent's gene count and the mutation rate; no
/// other state is involved.
pub fn transmit_prob(parent: GeneCount, mutation_rate: f64) -> f64 {
    match parent {
        GeneCount::Two => 1.0 - mutation_rate,
        GeneCount::One => 0.5,
        GeneCount::Zero => mutation_rate,
    }
}

/// Fixed prior and emission tables for one inference run
#[derive(Clone, Debug)]
pub struct PriorTables {
    /// Unconditional gene-count prior for founders, indexed by copy count
    pub gene_prior: [f64; 3],
    /// P(trait | gene count): `[copies][trait as usize]`
    pub trait_given_gene: [[f64; 2]; 3],
    /// Per-copy mutation probability
    pub mutation_rate: f64,
}

impl Default for PriorTables {
    fn default() -> Self {
        Self {
            gene_prior: [0.96, 0.03, 0.01],
            trait_given_gene: [
                [0.99, 0.01], // no copies: trait is rare
                [0.44, 0.56], // one copy
                [0.35, 0.65], // two copies
            ],
            mutation_rate: 0.01,
        }
    }
}

impl PriorTables {
    /// Founder prior P(gene = `count`)
    pub fn founder_prob(&self, count: GeneCount) -> f64 {
        self.gene_prior[count.as_usize()]
    }

    /// Emission probability P(trait = `has_trait` | gene = `count`)
    pub fn emission_prob(&self, count: GeneCount, has_trait: bool) -> f64 {
        self.trait_given_gene[count.as_usize()][has_trait as usize]
    }

    /// P(child gene = `child` | mother gene = `mother`, father gene =
    /// `father`) under the transmission model.
    ///
    /// The three child outcomes partition the two independent Bernoulli
    /// transmissions, so over `child` this sums to 1 for any parent pair.
    pub fn inheritance_prob(
        &self,
        child: GeneCount,
        mother: GeneCount,
        father: GeneCount,
    ) -> f64 {
        let from_mother = transmit_prob(mother, self.mutation_rate);
        let from_father = transmit_prob(father, self.mutation_rate);
        match child {
            GeneCount::Two => from_mother * from_father,
            GeneCount::One => {
                from_mother * (1.0 - from_father) + (1.0 - from_mother) * from_father
            }
            GeneCount::Zero => (1.0 - from_mother) * (1.0 - from_father),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_are_distributions() {
        let priors = PriorTables::default();
        assert!((priors.gene_prior.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        for row in priors.trait_given_gene {
            assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_transmit_prob() {
        assert_eq!(transmit_prob(GeneCount::Two, 0.01), 0.99);
        assert_eq!(transmit_prob(GeneCount::One, 0.01), 0.5);
        assert_eq!(transmit_prob(GeneCount::Zero, 0.01), 0.01);
    }

    #[test]
    fn test_inheritance_rows_sum_to_one() {
        let priors = PriorTables::default();
        for mother in GeneCount::ALL {
            for father in GeneCount::ALL {
                let total: f64 = GeneCount::ALL
                    .iter()
                    .map(|&child| priors.inheritance_prob(child, mother, father))
                    .sum();
                assert!(
                    (total - 1.0).abs() < 1e-12,
                    "parents ({:?}, {:?}) sum to {}",
                    mother,
                    father,
                    total
                );
            }
        }
    }

    #[test]
    fn test_inheritance_matches_closed_form() {
        let priors = PriorTables::default();
        // Both parents carry two copies: pass = 0.99 each.
        assert!(
            (priors.inheritance_prob(GeneCount::Two, GeneCount::Two, GeneCount::Two)
                - 0.99 * 0.99)
                .abs()
                < 1e-12
        );
        assert!(
            (priors.inheritance_prob(GeneCount::One, GeneCount::Two, GeneCount::Two)
                - 2.0 * 0.99 * 0.01)
                .abs()
                < 1e-12
        );
        assert!(
            (priors.inheritance_prob(GeneCount::Zero, GeneCount::Two, GeneCount::Two)
                - 0.01 * 0.01)
                .abs()
                < 1e-12
        );
    }
}
