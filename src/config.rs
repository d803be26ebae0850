//! # Configuration Logic
//!
//! CLI argument parsing and validation.
//!
//! The probability tables themselves are compiled-in constants
//! (`PriorTables::default`); the CLI only selects the input and the degree
//! of parallelism.

use std::path::PathBuf;

use clap::Parser;

use crate::error::{MendelError, Result};

/// Exact gene/trait posterior inference over a pedigree CSV
#[derive(Parser, Debug, Clone)]
#[command(name = "mendel", version)]
pub struct Config {
    /// Pedigree CSV with columns name, mother, father, trait
    pub pedigree: PathBuf,

    /// Number of worker threads (0 = all cores)
    #[arg(long, default_value_t = 0)]
    pub nthreads: usize,
}

impl Config {
    /// Parse CLI arguments and validate them
    pub fn parse_and_validate() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.pedigree.exists() {
            return Err(MendelError::FileNotFound {
                path: self.pedigree.clone(),
            });
        }
        Ok(())
    }

    /// Worker thread count to install, resolving 0 to the core count
    pub fn nthreads(&self) -> usize {
        if self.nthreads == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        } else {
            self.nthreads
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_fails_validation() {
        let config = Config {
            pedigree: PathBuf::from("/no/such/pedigree.csv"),
            nthreads: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(MendelError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_nthreads_resolution() {
        let config = Config {
            pedigree: PathBuf::new(),
            nthreads: 3,
        };
        assert_eq!(config.nthreads(), 3);

        let auto = Config {
            pedigree: PathBuf::new(),
            nthreads: 0,
        };
        assert!(auto.nthreads() >= 1);
    }
}
