//! Fault-Signature Catalog
//!
//! In-memory collection of fault definitions (name, parsed formula,
//! applicable direction, cause), built once from a tabular source and
//! reused across diagnostic runs.

mod catalog;
mod direction;
mod loader;

pub use catalog::{FaultCatalog, FaultEntry};
pub use direction::{Direction, DirectionSpec};
pub use loader::CatalogError;
