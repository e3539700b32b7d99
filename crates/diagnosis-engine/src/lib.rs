//! Diagnosis Engine
//!
//! Matches measured vibration frequencies against the fault catalog:
//! formula evaluation, relative-tolerance comparison, and direction
//! filtering, producing an ordered list of match records.

mod matcher;
mod request;
mod tolerance;

pub use matcher::{diagnose, diagnose_with_tolerance, Match};
pub use request::{parse_frequency_list, InputFormatError};
pub use tolerance::{is_close, DEFAULT_TOLERANCE};
