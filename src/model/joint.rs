//! # Joint-Probability Evaluator
//!
//! ## Role
//! Score one complete assignment: the exact joint probability under the
//! network factorization
//!
//! ```text
//! P(assignment) = prod over people of P(gene_i | parents) * P(trait_i | gene_i)
//! ```
//!
//! Founders take the population prior; everyone else takes the two-parent
//! inheritance model, reading the parents' gene counts from the same flat
//! assignment (never a recursive ancestor chain). The trait term depends
//! only on the person's own gene count.
//!
//! ## Numerics
//! A running product of `f64` in population order. At enumeration scale
//! (N <= 25) no underflow guard is needed; a product that reaches subnormal
//! territory represents a vanishingly likely assignment, not an error.

use crate::data::Pedigree;
use crate::model::enumerate::{GenePartition, TraitSet};
use crate::model::priors::PriorTables;

/// Exact joint probability of one assignment. Pure function of its inputs;
/// the caller guarantees the trait set is consistent with the evidence.
pub fn joint_probability(
    pedigree: &Pedigree,
    priors: &PriorTables,
    genes: &GenePartition,
    traits: &TraitSet,
) -> f64 {
    let mut probability = 1.0;

    for (idx, person) in pedigree.iter() {
        let count = genes.count(idx);

        let gene_prob = match person.parents {
            None => priors.founder_prob(count),
            Some((mother, father)) => {
                priors.inheritance_prob(count, genes.count(mother), genes.count(father))
            }
        };

        probability *= gene_prob * priors.emission_prob(count, traits.has(idx));
    }

    probability
}
