//! # Pedigree CSV Loader
//!
//! ## Role
//! Load a pedigree table into a validated [`Pedigree`].
//!
//! ## Format
//! A CSV with header `name,mother,father,trait` (any column order):
//! - `mother`, `father`: both blank (founder) or both names present in the
//!   file; one-sided records are rejected during pedigree construction.
//! - `trait`: `1` (observed with trait), `0` (observed without), or blank
//!   (unobserved).
//!
//! Errors carry the offending line number where the reader knows it.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::data::pedigree::{Pedigree, PersonRecord};
use crate::error::{MendelError, Result};

/// Column positions resolved from the header row
struct Columns {
    name: usize,
    mother: usize,
    father: usize,
    trait_: usize,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |field: &str| {
            headers
                .iter()
                .position(|h| h.trim() == field)
                .ok_or_else(|| MendelError::parse(1, format!("missing '{}' column", field)))
        };
        Ok(Self {
            name: find("name")?,
            mother: find("mother")?,
            father: find("father")?,
            trait_: find("trait")?,
        })
    }
}

/// Load and validate a pedigree from a CSV file
pub fn load_pedigree(path: &Path) -> Result<Pedigree> {
    if !path.exists() {
        return Err(MendelError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let pedigree = read_pedigree(File::open(path)?)?;
    debug!(
        n_people = pedigree.len(),
        path = %path.display(),
        "loaded pedigree"
    );
    Ok(pedigree)
}

/// Parse a pedigree from any reader (used directly by tests)
pub fn read_pedigree<R: Read>(reader: R) -> Result<Pedigree> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line() as usize).unwrap_or_default();

        let field = |i: usize| -> Result<&str> {
            row.get(i)
                .ok_or_else(|| MendelError::parse(line, "short record"))
        };

        let name = field(columns.name)?;
        if name.is_empty() {
            return Err(MendelError::parse(line, "blank name"));
        }

        let optional = |value: &str| {
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };
        let observed_trait = match field(columns.trait_)? {
            "" => None,
            "1" => Some(true),
            "0" => Some(false),
            other => {
                return Err(MendelError::parse(
                    line,
                    format!("trait must be '0', '1' or blank, got '{}'", other),
                ));
            }
        };

        records.push(PersonRecord {
            name: name.to_string(),
            mother: optional(field(columns.mother)?),
            father: optional(field(columns.father)?),
            observed_trait,
        });
    }

    Pedigree::from_records(records)
}
