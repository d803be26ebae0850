//! # Mendel: Exact Gene/Trait Posterior Inference over Pedigrees
//!
//! Enumerates every consistent joint assignment of gene counts and trait
//! values across a small pedigree and reports each person's exact posterior
//! marginals.
//!
//! ## Usage
//! ```bash
//! mendel data/family0.csv
//! mendel data/family0.csv --nthreads 4
//! ```

use std::time::Instant;

mod config;
mod data;
mod error;
mod io;
mod model;
mod pipelines;

use config::Config;
use error::Result;
use model::marginals::Posteriors;
use pipelines::InferencePipeline;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let start = Instant::now();

    let config = Config::parse_and_validate()?;

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.nthreads())
        .build_global()
        .ok();

    let pedigree = io::load_pedigree(&config.pedigree)?;
    tracing::info!(
        n_people = pedigree.len(),
        nthreads = config.nthreads(),
        "running exact inference"
    );

    let posteriors = InferencePipeline::new(pedigree).run()?;
    print_report(&posteriors);

    tracing::info!(elapsed_s = start.elapsed().as_secs_f64(), "completed");
    Ok(())
}

/// Print each person's two distributions, four decimal places, in the
/// report layout of the classic heredity exercise
fn print_report(posteriors: &Posteriors) {
    for person in posteriors.iter() {
        println!("{}:", person.name);
        println!("  Gene:");
        for count in data::GeneCount::ALL.iter().rev() {
            println!("    {}: {:.4}", count.copies(), person.gene_prob(*count));
        }
        println!("  Trait:");
        println!("    True: {:.4}", person.trait_prob(true));
        println!("    False: {:.4}", person.trait_prob(false));
    }
}
