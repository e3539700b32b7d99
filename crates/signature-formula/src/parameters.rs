//! Motor Parameter Set

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Names of the motor/vibration parameters a formula can read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterField {
    /// Shaft rotation frequency fr (Hz)
    Rotation,
    /// Supply (line) frequency fs (Hz)
    Supply,
    /// Gear tooth count Z
    ToothCount,
    /// Bearing rolling-element count Nb
    BallCount,
    /// Rolling-element diameter Db (m)
    BallDiameter,
    /// Bearing pitch diameter Dp (m)
    PitchDiameter,
    /// Bearing contact angle θ (radians)
    ContactAngle,
    /// Shaft critical frequency (Hz)
    Critical,
    /// Belt-pass frequency fp (Hz)
    BeltPass,
    /// Slip g (dimensionless)
    Slip,
    /// Pole-pair count Nr
    PolePairs,
    /// Blade-pass frequency (Hz)
    BladePass,
}

impl ParameterField {
    /// Conventional symbol used in vibration-analysis tables
    pub fn symbol(&self) -> &'static str {
        match self {
            ParameterField::Rotation => "fr",
            ParameterField::Supply => "fs",
            ParameterField::ToothCount => "Z",
            ParameterField::BallCount => "Nb",
            ParameterField::BallDiameter => "Db",
            ParameterField::PitchDiameter => "Dp",
            ParameterField::ContactAngle => "theta",
            ParameterField::Critical => "f_critique",
            ParameterField::BeltPass => "fp",
            ParameterField::Slip => "g",
            ParameterField::PolePairs => "Nr",
            ParameterField::BladePass => "f_aubes",
        }
    }
}

impl std::fmt::Display for ParameterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A formula needs a parameter that was not supplied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("required parameter {0} is not set")]
pub struct MissingParameter(pub ParameterField);

/// Fixed-shape record of the motor/vibration parameters.
///
/// `Default` fills every field with the documented defaults, so formula
/// evaluation over a default-constructed set is total. A field left `None`
/// models partial parameter entry and surfaces as [`MissingParameter`]
/// when a formula that reads it is evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Shaft rotation frequency fr (Hz)
    pub rotation_hz: Option<f64>,
    /// Supply frequency fs (Hz)
    pub supply_hz: Option<f64>,
    /// Gear tooth count Z
    pub tooth_count: Option<f64>,
    /// Bearing rolling-element count Nb
    pub ball_count: Option<f64>,
    /// Rolling-element diameter Db (m)
    pub ball_diameter_m: Option<f64>,
    /// Bearing pitch diameter Dp (m)
    pub pitch_diameter_m: Option<f64>,
    /// Contact angle θ (radians)
    pub contact_angle_rad: Option<f64>,
    /// Shaft critical frequency (Hz)
    pub critical_hz: Option<f64>,
    /// Belt-pass frequency fp (Hz)
    pub belt_pass_hz: Option<f64>,
    /// Slip g
    pub slip: Option<f64>,
    /// Pole-pair count Nr
    pub pole_pairs: Option<f64>,
    /// Blade-pass frequency (Hz)
    pub blade_pass_hz: Option<f64>,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            rotation_hz: Some(50.0),
            supply_hz: Some(50.0),
            tooth_count: Some(30.0),
            ball_count: Some(8.0),
            ball_diameter_m: Some(0.008),
            pitch_diameter_m: Some(0.04),
            contact_angle_rad: Some(15.0_f64.to_radians()),
            critical_hz: Some(80.0),
            belt_pass_hz: Some(10.0),
            slip: Some(0.02),
            pole_pairs: Some(2.0),
            blade_pass_hz: Some(120.0),
        }
    }
}

impl ParameterSet {
    /// A set with no field supplied
    pub fn empty() -> Self {
        Self {
            rotation_hz: None,
            supply_hz: None,
            tooth_count: None,
            ball_count: None,
            ball_diameter_m: None,
            pitch_diameter_m: None,
            contact_angle_rad: None,
            critical_hz: None,
            belt_pass_hz: None,
            slip: None,
            pole_pairs: None,
            blade_pass_hz: None,
        }
    }

    /// Store the contact angle from a degree input (boundary conversion)
    pub fn set_contact_angle_degrees(&mut self, degrees: f64) {
        self.contact_angle_rad = Some(degrees.to_radians());
    }

    /// Read one field, reporting which one is absent
    pub fn get(&self, field: ParameterField) -> Result<f64, MissingParameter> {
        let value = match field {
            ParameterField::Rotation => self.rotation_hz,
            ParameterField::Supply => self.supply_hz,
            ParameterField::ToothCount => self.tooth_count,
            ParameterField::BallCount => self.ball_count,
            ParameterField::BallDiameter => self.ball_diameter_m,
            ParameterField::PitchDiameter => self.pitch_diameter_m,
            ParameterField::ContactAngle => self.contact_angle_rad,
            ParameterField::Critical => self.critical_hz,
            ParameterField::BeltPass => self.belt_pass_hz,
            ParameterField::Slip => self.slip,
            ParameterField::PolePairs => self.pole_pairs,
            ParameterField::BladePass => self.blade_pass_hz,
        };
        value.ok_or(MissingParameter(field))
    }
}
