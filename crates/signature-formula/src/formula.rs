//! Executable Frequency Formulas

use crate::parameters::{MissingParameter, ParameterField, ParameterSet};
use serde::{Deserialize, Serialize};

/// One recognized frequency-signature pattern.
///
/// Each variant is a pure mapping from a [`ParameterSet`] to an ordered
/// list of candidate frequencies (Hz). `Unrecognized` always yields an
/// empty list, so an entry built from unparseable text never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Formula {
    /// Harmonics 1 to 4 of the rotation frequency
    RotationHarmonics,
    /// Twice the rotation frequency
    TwiceRotation,
    /// Gear-mesh frequency with ± fr sidebands
    MeshSidebands,
    /// Gear-mesh frequency Z·fr
    Mesh,
    /// Supply frequency with ± fr sidebands
    SupplySidebands,
    /// 0.4·fr (loose-fit instability)
    FractionalRotation,
    /// Oil-whirl band 0.42·fr and 0.48·fr
    OilWhirl,
    /// The rotation frequency itself
    Rotation,
    /// Twice the supply frequency
    TwiceSupply,
    /// Line-frequency harmonics 50, 100, 150, 200 Hz
    LineHarmonics,
    /// Belt-pass frequency fp
    BeltPass,
    /// The supply frequency itself
    Supply,
    /// Fixed 50 Hz component
    Line,
    /// Unparseable formula text; yields no candidates
    Unrecognized,
}

use crate::parameters::ParameterField::{
    BeltPass as FpField, Rotation as Fr, Supply as Fs, ToothCount as Z,
};

impl Formula {
    /// The exact subset of parameter fields this formula reads
    pub fn required_fields(&self) -> &'static [ParameterField] {
        match self {
            Formula::RotationHarmonics
            | Formula::TwiceRotation
            | Formula::FractionalRotation
            | Formula::OilWhirl
            | Formula::Rotation => &[Fr],
            Formula::MeshSidebands | Formula::Mesh => &[Z, Fr],
            Formula::SupplySidebands => &[Fs, Fr],
            Formula::TwiceSupply | Formula::Supply => &[Fs],
            Formula::BeltPass => &[FpField],
            Formula::LineHarmonics | Formula::Line | Formula::Unrecognized => &[],
        }
    }

    /// Evaluate against a parameter set, yielding candidate frequencies (Hz)
    pub fn evaluate(&self, params: &ParameterSet) -> Result<Vec<f64>, MissingParameter> {
        let candidates = match self {
            Formula::RotationHarmonics => {
                let fr = params.get(Fr)?;
                (1..=4).map(|i| fr * i as f64).collect()
            }
            Formula::TwiceRotation => vec![2.0 * params.get(Fr)?],
            Formula::MeshSidebands => {
                let z = params.get(Z)?;
                let fr = params.get(Fr)?;
                vec![z * fr + fr, z * fr - fr]
            }
            Formula::Mesh => vec![params.get(Z)? * params.get(Fr)?],
            Formula::SupplySidebands => {
                let fs = params.get(Fs)?;
                let fr = params.get(Fr)?;
                vec![fs + fr, fs - fr]
            }
            Formula::FractionalRotation => vec![0.4 * params.get(Fr)?],
            Formula::OilWhirl => {
                let fr = params.get(Fr)?;
                vec![0.42 * fr, 0.48 * fr]
            }
            Formula::Rotation => vec![params.get(Fr)?],
            Formula::TwiceSupply => vec![2.0 * params.get(Fs)?],
            Formula::LineHarmonics => vec![50.0, 100.0, 150.0, 200.0],
            Formula::BeltPass => vec![params.get(FpField)?],
            Formula::Supply => vec![params.get(Fs)?],
            Formula::Line => vec![50.0],
            Formula::Unrecognized => Vec::new(),
        };
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_is_tooth_count_times_rotation() {
        let params = ParameterSet::default();
        assert_eq!(Formula::Mesh.evaluate(&params).unwrap(), vec![1500.0]);
    }

    #[test]
    fn mesh_sidebands_straddle_the_mesh_frequency() {
        let params = ParameterSet::default();
        let out = Formula::MeshSidebands.evaluate(&params).unwrap();
        assert_eq!(out, vec![1550.0, 1450.0]);
    }

    #[test]
    fn rotation_harmonics_are_ordered_one_to_four() {
        let params = ParameterSet::default();
        let out = Formula::RotationHarmonics.evaluate(&params).unwrap();
        assert_eq!(out, vec![50.0, 100.0, 150.0, 200.0]);
    }

    #[test]
    fn supply_sidebands_use_plus_then_minus() {
        let mut params = ParameterSet::default();
        params.supply_hz = Some(60.0);
        params.rotation_hz = Some(10.0);
        let out = Formula::SupplySidebands.evaluate(&params).unwrap();
        assert_eq!(out, vec![70.0, 50.0]);
    }

    #[test]
    fn unrecognized_yields_nothing() {
        assert!(Formula::Unrecognized
            .evaluate(&ParameterSet::empty())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn missing_field_surfaces_not_panics() {
        let mut params = ParameterSet::default();
        params.tooth_count = None;
        let err = Formula::Mesh.evaluate(&params).unwrap_err();
        assert_eq!(err, MissingParameter(ParameterField::ToothCount));
    }

    #[test]
    fn required_fields_cover_evaluation() {
        // Evaluating with exactly the declared fields set must succeed.
        let defaults = ParameterSet::default();
        let all = [
            Formula::RotationHarmonics,
            Formula::TwiceRotation,
            Formula::MeshSidebands,
            Formula::Mesh,
            Formula::SupplySidebands,
            Formula::FractionalRotation,
            Formula::OilWhirl,
            Formula::Rotation,
            Formula::TwiceSupply,
            Formula::LineHarmonics,
            Formula::BeltPass,
            Formula::Supply,
            Formula::Line,
            Formula::Unrecognized,
        ];
        for formula in all {
            let mut params = ParameterSet::empty();
            for &field in formula.required_fields() {
                match field {
                    ParameterField::Rotation => params.rotation_hz = defaults.rotation_hz,
                    ParameterField::Supply => params.supply_hz = defaults.supply_hz,
                    ParameterField::ToothCount => params.tooth_count = defaults.tooth_count,
                    ParameterField::BeltPass => params.belt_pass_hz = defaults.belt_pass_hz,
                    other => panic!("unexpected required field {other}"),
                }
            }
            assert!(
                formula.evaluate(&params).is_ok(),
                "{formula:?} reads more than it declares"
            );
        }
    }
}
