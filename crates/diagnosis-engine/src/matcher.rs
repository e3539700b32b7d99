//! Catalog Matching

use crate::tolerance::{is_close, DEFAULT_TOLERANCE};
use fault_catalog::{Direction, FaultCatalog};
use serde::{Deserialize, Serialize};
use signature_formula::ParameterSet;
use tracing::{debug, info};

/// One fault plausibly present at one measured frequency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    /// The measured frequency that triggered the match (Hz)
    pub frequency: f64,
    /// Name of the matched fault
    pub fault_name: String,
    /// Candidate frequencies the fault's formula predicted (Hz)
    pub predicted_frequencies: Vec<f64>,
    /// Cause / signature description from the catalog
    pub cause: String,
}

/// Run one diagnosis with the default 5% tolerance
pub fn diagnose(
    measured: &[f64],
    params: &ParameterSet,
    direction: Direction,
    catalog: &FaultCatalog,
) -> Vec<Match> {
    diagnose_with_tolerance(measured, params, direction, catalog, DEFAULT_TOLERANCE)
}

/// Match every measured frequency against every catalog entry.
///
/// Matches are appended in (measured frequency, catalog order) iteration
/// order, with no deduplication: a fault matched by several measured
/// frequencies is reported once per frequency. A formula evaluation
/// failure (missing parameter) skips that single (frequency, entry) pair
/// and never aborts the scan.
pub fn diagnose_with_tolerance(
    measured: &[f64],
    params: &ParameterSet,
    direction: Direction,
    catalog: &FaultCatalog,
    tolerance: f64,
) -> Vec<Match> {
    let mut matches = Vec::new();
    for &frequency in measured {
        for entry in catalog.entries() {
            let predicted = match entry.formula.evaluate(params) {
                Ok(predicted) => predicted,
                Err(missing) => {
                    debug!(fault = %entry.name, %missing, "skipping entry");
                    continue;
                }
            };
            let frequency_hit = predicted.iter().any(|&p| is_close(frequency, p, tolerance));
            if frequency_hit && entry.direction.matches(direction) {
                matches.push(Match {
                    frequency,
                    fault_name: entry.name.clone(),
                    predicted_frequencies: predicted,
                    cause: entry.cause.clone(),
                });
            }
        }
    }
    info!(
        measured = measured.len(),
        entries = catalog.len(),
        matches = matches.len(),
        "diagnosis complete"
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use fault_catalog::{DirectionSpec, FaultEntry};
    use signature_formula::{parse, Formula};

    fn entry(name: &str, formula_text: &str, direction: &str, cause: &str) -> FaultEntry {
        FaultEntry {
            name: name.to_string(),
            formula: parse(formula_text),
            direction: DirectionSpec::new(direction),
            cause: cause.to_string(),
        }
    }

    fn gear_catalog() -> FaultCatalog {
        FaultCatalog::new(vec![entry("Engrènement", "Z × fr", "Radiale", "usure")])
    }

    #[test]
    fn exact_mesh_frequency_matches() {
        let matches = diagnose(
            &[1500.0],
            &ParameterSet::default(),
            Direction::Radial,
            &gear_catalog(),
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].frequency, 1500.0);
        assert_eq!(matches[0].fault_name, "Engrènement");
        assert_eq!(matches[0].predicted_frequencies, vec![1500.0]);
        assert_eq!(matches[0].cause, "usure");
    }

    #[test]
    fn four_percent_off_is_still_inside_tolerance() {
        let matches = diagnose(
            &[1560.0],
            &ParameterSet::default(),
            Direction::Radial,
            &gear_catalog(),
        );
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn ten_percent_off_is_outside_tolerance() {
        let matches = diagnose(
            &[1650.0],
            &ParameterSet::default(),
            Direction::Radial,
            &gear_catalog(),
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn direction_mismatch_suppresses_the_match() {
        let matches = diagnose(
            &[1500.0],
            &ParameterSet::default(),
            Direction::Axial,
            &gear_catalog(),
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn and_direction_entries_match_either_selection() {
        let catalog = FaultCatalog::new(vec![entry(
            "Désalignement",
            "2 × fr",
            "axial et radiale",
            "accouplement",
        )]);
        for direction in [Direction::Axial, Direction::Radial] {
            let matches = diagnose(&[100.0], &ParameterSet::default(), direction, &catalog);
            assert_eq!(matches.len(), 1, "selection {direction}");
        }
    }

    #[test]
    fn missing_parameter_skips_only_that_entry() {
        let mut params = ParameterSet::default();
        params.tooth_count = None;
        let catalog = FaultCatalog::new(vec![
            entry("Engrènement", "Z × fr", "Radiale", "usure"),
            entry("Balourd", "fr", "Radiale", "masse excentrée"),
        ]);
        let matches = diagnose(&[50.0], &params, Direction::Radial, &catalog);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].fault_name, "Balourd");
    }

    #[test]
    fn unrecognized_entries_never_appear() {
        let catalog = FaultCatalog::new(vec![entry("Résonance", "texte libre", "Radiale", "?")]);
        assert_eq!(catalog.entries()[0].formula, Formula::Unrecognized);
        let matches = diagnose(&[50.0], &ParameterSet::default(), Direction::Radial, &catalog);
        assert!(matches.is_empty());
    }

    #[test]
    fn output_order_is_measured_then_catalog_with_no_dedup() {
        let catalog = FaultCatalog::new(vec![
            entry("Balourd", "fr", "Radiale", "a"),
            entry("Harmoniques", "1 à 4 × fr", "Radiale", "b"),
        ]);
        let matches = diagnose(
            &[50.0, 100.0],
            &ParameterSet::default(),
            Direction::Radial,
            &catalog,
        );
        let seen: Vec<(f64, &str)> = matches
            .iter()
            .map(|m| (m.frequency, m.fault_name.as_str()))
            .collect();
        assert_eq!(
            seen,
            vec![
                (50.0, "Balourd"),
                (50.0, "Harmoniques"),
                (100.0, "Harmoniques"),
            ]
        );
    }

    #[test]
    fn any_sideband_is_enough() {
        let catalog = FaultCatalog::new(vec![entry(
            "Défaut rotor",
            "fs ± fr",
            "Radiale",
            "barres cassées",
        )]);
        let mut params = ParameterSet::default();
        params.supply_hz = Some(60.0);
        params.rotation_hz = Some(10.0);
        // 70 and 50 predicted; 50 measured hits the lower sideband
        let matches = diagnose(&[50.0], &params, Direction::Radial, &catalog);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].predicted_frequencies, vec![70.0, 50.0]);
    }
}
