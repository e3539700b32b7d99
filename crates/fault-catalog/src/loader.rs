//! Catalog Table Loading
//!
//! The fault table is a CSV export of the maintenance team's spreadsheet,
//! with French headers. Header names are matched case-insensitively after
//! trimming; rows missing a name or formula cell are dropped; formula text
//! that fails recognition degrades to an unmatchable entry rather than
//! rejecting the row.

use crate::catalog::{FaultCatalog, FaultEntry};
use crate::direction::DirectionSpec;
use signature_formula::{parse, Formula};
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors while loading the catalog table
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Could not open the table file
    #[error("cannot open catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV
    #[error("cannot read catalog table: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("catalog table has no '{0}' column")]
    MissingColumn(&'static str),
}

const NAME_COLUMN: &str = "anomalie";
const FORMULA_COLUMN: &str = "fréquence typique";
const DIRECTION_COLUMN: &str = "direction";
const CAUSE_COLUMN_PREFIX: &str = "remarques";

static CACHE: OnceLock<FaultCatalog> = OnceLock::new();

impl FaultCatalog {
    /// Load from a CSV file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        info!(path = %path.display(), "loading fault catalog");
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load once per process; later calls reuse the first result.
    ///
    /// The table is static for the process lifetime, so this is called
    /// before any diagnosis is served and needs no further locking.
    pub fn load_cached(path: &Path) -> Result<&'static Self, CatalogError> {
        if let Some(catalog) = CACHE.get() {
            return Ok(catalog);
        }
        let catalog = Self::load(path)?;
        Ok(CACHE.get_or_init(|| catalog))
    }

    /// Load from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut table = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = table.headers()?.clone();
        let column = |wanted: &'static str, prefix: bool| -> Result<usize, CatalogError> {
            headers
                .iter()
                .position(|h| {
                    let h = h.trim().to_lowercase();
                    if prefix {
                        h.starts_with(wanted)
                    } else {
                        h == wanted
                    }
                })
                .ok_or(CatalogError::MissingColumn(wanted))
        };
        let name_col = column(NAME_COLUMN, false)?;
        let formula_col = column(FORMULA_COLUMN, false)?;
        let direction_col = column(DIRECTION_COLUMN, false)?;
        let cause_col = column(CAUSE_COLUMN_PREFIX, true)?;

        let mut entries = Vec::new();
        for record in table.records() {
            let record = record?;
            let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

            let name = cell(name_col);
            let formula_text = cell(formula_col);
            if name.is_empty() || formula_text.is_empty() {
                debug!("dropping row with empty name or formula");
                continue;
            }

            let formula = parse(formula_text);
            if formula == Formula::Unrecognized {
                warn!(name, formula_text, "unrecognized formula; entry will never match");
            }

            entries.push(FaultEntry {
                name: name.to_string(),
                formula,
                direction: DirectionSpec::new(cell(direction_col)),
                cause: cell(cause_col).to_string(),
            });
        }

        info!(entries = entries.len(), "fault catalog loaded");
        Ok(Self::new(entries))
    }
}
