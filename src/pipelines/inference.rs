//! # Exact Inference Pipeline
//!
//! Orchestrates one inference run:
//! 1. Generate the evidence-consistent trait sets (observed values are hard
//!    constraints, so filtering happens before any gene partition is paired
//!    with them)
//! 2. Enumerate all 3^N gene partitions
//! 3. Score every (partition, trait set) assignment with the joint evaluator
//! 4. Accumulate per-person masses and normalize into posteriors
//!
//! ## Parallelism
//! The enumeration space is sharded over the two-copy mask (the outer loop
//! of the 3^N gene walk) with rayon. Each shard folds into a private
//! [`Marginals`]; the entrywise merge at the end is the only
//! synchronization point, and since it is commutative and associative the
//! shard order does not affect the result. `run_serial` walks the same
//! space on one thread and exists for order-independence checks.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::data::Pedigree;
use crate::error::Result;
use crate::model::enumerate::{
    consistent_trait_sets, gene_partitions, gene_partitions_with_two_copies, TraitSet,
};
use crate::model::joint::joint_probability;
use crate::model::marginals::{Marginals, Posteriors};
use crate::model::priors::PriorTables;

/// Exact posterior inference over one pedigree
pub struct InferencePipeline {
    pedigree: Pedigree,
    priors: PriorTables,
}

impl InferencePipeline {
    pub fn new(pedigree: Pedigree) -> Self {
        Self {
            pedigree,
            priors: PriorTables::default(),
        }
    }

    /// Override the compiled-in tables (tests and calibration experiments)
    pub fn with_priors(pedigree: Pedigree, priors: PriorTables) -> Self {
        Self { pedigree, priors }
    }

    pub fn pedigree(&self) -> &Pedigree {
        &self.pedigree
    }

    /// Run the full enumeration in parallel shards and normalize
    pub fn run(&self) -> Result<Posteriors> {
        let start = Instant::now();
        let n = self.pedigree.len();
        let trait_sets: Vec<TraitSet> = consistent_trait_sets(&self.pedigree).collect();
        info!(
            n_people = n,
            n_trait_sets = trait_sets.len(),
            "starting exact enumeration"
        );

        let marginals = (0..=self.pedigree.full_mask())
            .into_par_iter()
            .fold(
                || Marginals::new(n),
                |mut acc, two_copies| {
                    for genes in
                        gene_partitions_with_two_copies(&self.pedigree, two_copies)
                    {
                        for traits in &trait_sets {
                            let p = joint_probability(
                                &self.pedigree,
                                &self.priors,
                                &genes,
                                traits,
                            );
                            acc.record(&genes, traits, p);
                        }
                    }
                    acc
                },
            )
            .reduce(|| Marginals::new(n), Marginals::merge);

        let posteriors = marginals.normalize(&self.pedigree)?;
        debug!(elapsed_ms = start.elapsed().as_millis() as u64, "enumeration done");
        Ok(posteriors)
    }

    /// Single-threaded walk of the identical assignment space
    pub fn run_serial(&self) -> Result<Posteriors> {
        let trait_sets: Vec<TraitSet> = consistent_trait_sets(&self.pedigree).collect();
        let mut acc = Marginals::new(self.pedigree.len());
        for genes in gene_partitions(&self.pedigree) {
            for traits in &trait_sets {
                let p = joint_probability(&self.pedigree, &self.priors, &genes, traits);
                acc.record(&genes, traits, p);
            }
        }
        acc.normalize(&self.pedigree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::pedigree::PersonRecord;
    use crate::data::GeneCount;

    fn founder(name: &str, trait_: Option<bool>) -> PersonRecord {
        PersonRecord {
            name: name.to_string(),
            mother: None,
            father: None,
            observed_trait: trait_,
        }
    }

    #[test]
    fn test_single_founder_recovers_prior() {
        let ped = Pedigree::from_records(vec![founder("solo", None)]).unwrap();
        let posteriors = InferencePipeline::new(ped).run_serial().unwrap();
        let solo = posteriors.get("solo").unwrap();

        // With no evidence and no relatives, the gene marginal is the prior.
        let priors = PriorTables::default();
        for count in GeneCount::ALL {
            assert!(
                (solo.gene_prob(count) - priors.gene_prior[count.as_usize()]).abs() < 1e-12
            );
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let ped = Pedigree::from_records(vec![
            founder("a", Some(true)),
            founder("b", None),
            PersonRecord {
                name: "c".to_string(),
                mother: Some("a".to_string()),
                father: Some("b".to_string()),
                observed_trait: None,
            },
        ])
        .unwrap();
        let pipeline = InferencePipeline::new(ped);

        let parallel = pipeline.run().unwrap();
        let serial = pipeline.run_serial().unwrap();
        for (p, s) in parallel.iter().zip(serial.iter()) {
            for count in GeneCount::ALL {
                assert!((p.gene_prob(count) - s.gene_prob(count)).abs() < 1e-12);
            }
            assert!((p.trait_prob(true) - s.trait_prob(true)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_empty_population() {
        let ped = Pedigree::from_records(Vec::new()).unwrap();
        let posteriors = InferencePipeline::new(ped).run().unwrap();
        assert!(posteriors.is_empty());
    }

    #[test]
    fn test_unsatisfiable_evidence_is_reported() {
        // Force a zero-probability observation: with this emission table the
        // trait is impossible at every gene count, yet it was observed.
        let priors = PriorTables {
            trait_given_gene: [[1.0, 0.0], [1.0, 0.0], [1.0, 0.0]],
            ..PriorTables::default()
        };
        let ped = Pedigree::from_records(vec![founder("a", Some(true))]).unwrap();
        let err = InferencePipeline::with_priors(ped, priors)
            .run_serial()
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unsatisfiable"));
        assert!(message.contains("a=trait:true"));
    }
}
