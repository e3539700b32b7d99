//! Measured-Frequency Input Parsing

use thiserror::Error;

/// Measured-frequency text contains a token that is not a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{token}' is not a valid frequency")]
pub struct InputFormatError {
    /// The offending token, as typed
    pub token: String,
}

/// Parse a comma-separated list of measured frequencies (Hz).
///
/// Blank tokens are ignored; any non-numeric token rejects the whole
/// input, so diagnosis never runs on a partially parsed list.
pub fn parse_frequency_list(input: &str) -> Result<Vec<f64>, InputFormatError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| InputFormatError {
                token: token.to_string(),
            })
        })
        .collect()
}
