//! Frequency-Signature Formula Engine
//!
//! Parses the closed vocabulary of human-written fault-frequency formulas
//! ("Z × fr", "fs ± fr", "1 à 4 × fr") into executable formulas over a
//! fixed motor parameter set.

mod formula;
mod parameters;
mod parser;

pub use formula::Formula;
pub use parameters::{MissingParameter, ParameterField, ParameterSet};
pub use parser::parse;
