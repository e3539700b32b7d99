//! Formula Text Recognition
//!
//! The catalog's "typical frequency" column is human-written text drawn
//! from a small, closed vocabulary of vibration-analysis conventions.
//! Recognition is a fixed, priority-ordered table of substring predicates
//! over a normalized form of the text; the order is load-bearing because
//! some patterns are substrings of others ("Z×fr" inside "Z×fr ± fr").

use crate::formula::Formula;
use tracing::debug;

/// Parse one formula text into an executable [`Formula`].
///
/// Total: unrecognized or malformed text degrades to
/// [`Formula::Unrecognized`] so catalog loading never aborts on a bad row.
pub fn parse(text: &str) -> Formula {
    let normalized = normalize(text);
    for (predicate, formula) in RULES {
        if predicate(&normalized) {
            return *formula;
        }
    }
    debug!(text, "formula text not recognized");
    Formula::Unrecognized
}

/// Priority-ordered recognition table; first hit wins.
const RULES: &[(fn(&str) -> bool, Formula)] = &[
    (
        |s| (s.contains("1à4") || s.contains("1to4")) && s.contains("fr"),
        Formula::RotationHarmonics,
    ),
    (|s| contains_term(s, "2*fr"), Formula::TwiceRotation),
    (
        |s| contains_term(s, "z*fr±fr") || contains_term(s, "z*fr+-fr"),
        Formula::MeshSidebands,
    ),
    (|s| contains_term(s, "z*fr"), Formula::Mesh),
    (
        |s| s.contains("fs±fr") || s.contains("fe±fr"),
        Formula::SupplySidebands,
    ),
    (|s| s.contains("0.4*fr"), Formula::FractionalRotation),
    (
        |s| s.contains("0.42") && s.contains("fr"),
        Formula::OilWhirl,
    ),
    (|s| s == "fr" || s.contains("=fr"), Formula::Rotation),
    (|s| contains_term(s, "2*fs"), Formula::TwiceSupply),
    (
        |s| s.contains("50") && (s.contains("1à4") || s.contains("1to4")),
        Formula::LineHarmonics,
    ),
    (|s| s.contains("fp"), Formula::BeltPass),
    (|s| s.contains("fs"), Formula::Supply),
    (|s| s.contains("50"), Formula::Line),
];

/// Lowercase, unify the multiplication glyphs (`×`, `⋅`, `·`, spaced `x`)
/// to `*`, and strip whitespace so substring checks are stable.
fn normalize(text: &str) -> String {
    let mut s = text.trim().to_lowercase();
    for glyph in ['×', '⋅', '·'] {
        s = s.replace(glyph, "*");
    }
    s = s.replace(" x ", "*");
    s.split_whitespace().collect()
}

/// Substring check with a left token boundary: the hit may not be preceded
/// by a digit or a dot, so "0.42*fr" does not count as containing "2*fr".
fn contains_term(s: &str, pattern: &str) -> bool {
    s.match_indices(pattern)
        .any(|(i, _)| i == 0 || !matches!(s.as_bytes()[i - 1], b'0'..=b'9' | b'.'))
}
