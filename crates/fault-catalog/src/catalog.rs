//! Catalog Entries

use crate::direction::DirectionSpec;
use serde::{Deserialize, Serialize};
use signature_formula::Formula;

/// One fault definition from the catalog table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultEntry {
    /// Fault name ("Désalignement", "Engrènement", ...)
    pub name: String,
    /// Parsed typical-frequency formula
    pub formula: Formula,
    /// Applicable measurement direction
    pub direction: DirectionSpec,
    /// Cause / frequency-signature description
    pub cause: String,
}

/// Immutable, ordered collection of fault definitions.
///
/// Built once at load time; entry order is the table's row order and is
/// observable in diagnostic output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaultCatalog {
    entries: Vec<FaultEntry>,
}

impl FaultCatalog {
    /// Build from already-parsed entries, preserving order
    pub fn new(entries: Vec<FaultEntry>) -> Self {
        Self { entries }
    }

    /// Entries in table order
    pub fn entries(&self) -> &[FaultEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
