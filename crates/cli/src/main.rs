//! Motor Vibration Fault Diagnostic - Main Entry Point

use clap::{Parser, ValueEnum};
use diagnosis_engine::{diagnose, parse_frequency_list};
use fault_catalog::{Direction, FaultCatalog};
use signature_formula::ParameterSet;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Frequency-based diagnosis of motor mechanical/electrical faults
#[derive(Debug, Parser)]
#[command(name = "motor-diagnostic", version)]
struct Args {
    /// CSV fault table (Anomalie / Fréquence typique / Direction / Remarques)
    #[arg(long)]
    catalog: PathBuf,

    /// Measured frequencies in Hz, comma separated
    #[arg(long, default_value = "50,100,80")]
    frequencies: String,

    /// Measurement direction of the vibration
    #[arg(long, value_enum, default_value_t = DirectionArg::Radial)]
    direction: DirectionArg,

    /// Rotation frequency fr (Hz)
    #[arg(long, default_value_t = 50.0)]
    rotation_hz: f64,

    /// Supply frequency fs (Hz)
    #[arg(long, default_value_t = 50.0)]
    supply_hz: f64,

    /// Gear tooth count Z
    #[arg(long, default_value_t = 30.0)]
    tooth_count: f64,

    /// Bearing rolling-element count Nb
    #[arg(long, default_value_t = 8.0)]
    ball_count: f64,

    /// Rolling-element diameter Db (m)
    #[arg(long, default_value_t = 0.008)]
    ball_diameter: f64,

    /// Bearing pitch diameter Dp (m)
    #[arg(long, default_value_t = 0.04)]
    pitch_diameter: f64,

    /// Bearing contact angle θ (degrees; stored in radians)
    #[arg(long, default_value_t = 15.0)]
    contact_angle_deg: f64,

    /// Shaft critical frequency (Hz)
    #[arg(long, default_value_t = 80.0)]
    critical_hz: f64,

    /// Belt-pass frequency fp (Hz)
    #[arg(long, default_value_t = 10.0)]
    belt_pass_hz: f64,

    /// Slip g
    #[arg(long, default_value_t = 0.02)]
    slip: f64,

    /// Pole-pair count Nr
    #[arg(long, default_value_t = 2.0)]
    pole_pairs: f64,

    /// Blade-pass frequency (Hz)
    #[arg(long, default_value_t = 120.0)]
    blade_pass_hz: f64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionArg {
    Axial,
    Radial,
    /// Axial and radial
    Both,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Axial => Direction::Axial,
            DirectionArg::Radial => Direction::Radial,
            DirectionArg::Both => Direction::AxialAndRadial,
        }
    }
}

fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

fn parameters_from(args: &Args) -> ParameterSet {
    let mut params = ParameterSet {
        rotation_hz: Some(args.rotation_hz),
        supply_hz: Some(args.supply_hz),
        tooth_count: Some(args.tooth_count),
        ball_count: Some(args.ball_count),
        ball_diameter_m: Some(args.ball_diameter),
        pitch_diameter_m: Some(args.pitch_diameter),
        contact_angle_rad: None,
        critical_hz: Some(args.critical_hz),
        belt_pass_hz: Some(args.belt_pass_hz),
        slip: Some(args.slip),
        pole_pairs: Some(args.pole_pairs),
        blade_pass_hz: Some(args.blade_pass_hz),
    };
    params.set_contact_angle_degrees(args.contact_angle_deg);
    params
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    info!("=== Motor Vibration Diagnostic v{} ===", env!("CARGO_PKG_VERSION"));

    // Bad numeric input is surfaced before any matching runs.
    let measured = parse_frequency_list(&args.frequencies)?;
    let catalog = FaultCatalog::load_cached(&args.catalog)?;
    let params = parameters_from(&args);

    let matches = diagnose(&measured, &params, args.direction.into(), catalog);

    if matches.is_empty() {
        println!("Aucun défaut connu détecté.");
        return Ok(());
    }

    println!("Défauts potentiels détectés :");
    for m in &matches {
        println!("- {} détecté à {} Hz", m.fault_name, m.frequency);
        println!("  Fréquences typiques : {:?}", m.predicted_frequencies);
        println!("  Cause probable : {}", m.cause);
    }
    Ok(())
}
