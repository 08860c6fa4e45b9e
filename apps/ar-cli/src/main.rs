use clap::{Parser, Subcommand, ValueEnum};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ar_core::PressureUnit;
use ar_hydraulics::{Finding, PumpCurve, ValidationResult};
use ar_project::VehicleLibrary;
use ar_project::catalog::{CatalogGroup, grouped_by};
use serde::Serialize;

mod error;
mod service;

use error::{AppError, AppResult};
use service::{Outcome, Settings};

#[derive(Parser)]
#[command(name = "ar-cli")]
#[command(about = "Armada CLI - Feasibility checks for firefighting water-delivery layouts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check flow balance and nozzle pressures of one or more projects
    Validate {
        /// Project files (JSON, or YAML with .yaml/.yml)
        #[arg(required = true)]
        project_paths: Vec<PathBuf>,
        /// Vehicle JSON used for every project
        #[arg(long)]
        vehicle: Option<PathBuf>,
        /// Directory of vehicle JSON files used to resolve each project's vehicleId
        #[arg(long)]
        vehicles_dir: Option<PathBuf>,
        /// Hydraulic policy file (YAML, or JSON with .json)
        #[arg(long)]
        policy: Option<PathBuf>,
        /// Unit for printed pressures
        #[arg(long, value_enum, default_value_t = UnitArg::Bar)]
        unit: UnitArg,
        /// Print machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check equipment health, coupling sizes and port usage of a project
    Audit {
        /// Project file
        project_path: PathBuf,
        /// Print machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List equipment templates
    Catalog,
    /// List vehicles in a directory
    Vehicles {
        /// Directory of vehicle JSON files
        dir: PathBuf,
        /// Show the pump curve of this vehicle
        #[arg(long)]
        id: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Bar,
    Kpa,
    Psi,
}

impl From<UnitArg> for PressureUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Bar => PressureUnit::Bar,
            UnitArg::Kpa => PressureUnit::Kpa,
            UnitArg::Psi => PressureUnit::Psi,
        }
    }
}

fn main() -> AppResult<ExitCode> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            project_paths,
            vehicle,
            vehicles_dir,
            policy,
            unit,
            json,
        } => {
            let settings = Settings::load(
                vehicle.as_deref(),
                vehicles_dir.as_deref(),
                policy.as_deref(),
            )?;
            cmd_validate(&project_paths, &settings, unit.into(), json)
        }
        Commands::Audit { project_path, json } => cmd_audit(&project_path, json),
        Commands::Catalog => cmd_catalog(),
        Commands::Vehicles { dir, id } => cmd_vehicles(&dir, id.as_deref()),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationRecord<'a> {
    path: &'a Path,
    vehicle_id: Option<&'a str>,
    feasible: bool,
    result: ValidationResult,
    findings: &'a [Finding],
    unit: PressureUnit,
    node_pressures: BTreeMap<&'a str, f64>,
}

impl<'a> ValidationRecord<'a> {
    fn new(outcome: &'a Outcome, unit: PressureUnit) -> Self {
        Self {
            path: &outcome.path,
            vehicle_id: outcome.vehicle_id.as_deref(),
            feasible: outcome.report.is_feasible(),
            result: outcome.report.clone().into_result(),
            findings: &outcome.report.findings,
            unit,
            node_pressures: outcome
                .report
                .node_pressures
                .iter()
                .map(|(id, &p)| (id.as_str(), unit.from_bar(p)))
                .collect(),
        }
    }
}

fn cmd_validate(
    project_paths: &[PathBuf],
    settings: &Settings,
    unit: PressureUnit,
    json: bool,
) -> AppResult<ExitCode> {
    let outcomes = service::evaluate_all(project_paths, settings)
        .into_iter()
        .collect::<AppResult<Vec<_>>>()?;

    if json {
        let records: Vec<ValidationRecord<'_>> = outcomes
            .iter()
            .map(|o| ValidationRecord::new(o, unit))
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for outcome in &outcomes {
            print_outcome(outcome, unit);
        }
    }

    let feasible = outcomes.iter().all(|o| o.report.is_feasible());
    Ok(if feasible {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_outcome(outcome: &Outcome, unit: PressureUnit) {
    let report = &outcome.report;
    let status = if report.is_feasible() {
        "✓ feasible"
    } else {
        "✗ not feasible"
    };
    println!("{}: {}", outcome.path.display(), status);
    match &outcome.vehicle_id {
        Some(id) => println!("  Vehicle: {}", id),
        None => println!("  Vehicle: none"),
    }

    if !report.nozzle_pressures.is_empty() {
        println!("  Nozzle pressures:");
        for (id, &p) in &report.nozzle_pressures {
            println!("    {:<24} {:>8.2} {}", id, unit.from_bar(p), unit.symbol());
        }
    }
    for finding in report.errors() {
        println!("  error: {}", finding);
    }
    for finding in report.warnings() {
        println!("  warning: {}", finding);
    }
}

fn cmd_audit(project_path: &Path, json: bool) -> AppResult<ExitCode> {
    let advisories = service::audit(project_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&advisories)?);
    } else if advisories.is_empty() {
        println!("✓ No connection issues in {}", project_path.display());
    } else {
        println!("Connection issues in {}:", project_path.display());
        for advisory in &advisories {
            println!("  {}", advisory);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_catalog() -> AppResult<ExitCode> {
    for (group, items) in grouped_by(&CatalogGroup::ALL) {
        println!("{}:", group.title());
        for item in items {
            let inlet = item
                .stats
                .inlet_diameter_mm
                .map_or_else(|| "-".to_string(), |d| format!("{d} mm"));
            let outlet = item
                .stats
                .outlet_diameter_mm
                .map_or_else(|| "-".to_string(), |d| format!("{d} mm"));
            println!(
                "  {:<20} {:<26} in {:<8} out {:<8}",
                item.id, item.label, inlet, outlet
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_vehicles(dir: &Path, id: Option<&str>) -> AppResult<ExitCode> {
    let library = VehicleLibrary::load_dir(dir)?;

    let Some(id) = id else {
        if library.is_empty() {
            println!("No vehicles found in {}", dir.display());
        }
        for vehicle in library.vehicles() {
            println!(
                "  {:<16} {:<28} {:>6} LPM  {:>6} L tank",
                vehicle.id,
                vehicle.name,
                vehicle.max_discharge_flow(),
                vehicle.tank_liters
            );
        }
        return Ok(ExitCode::SUCCESS);
    };

    let vehicle = library
        .get(id)
        .ok_or_else(|| AppError::VehicleNotFound(id.to_string()))?;
    println!("{} - {}", vehicle.id, vehicle.name);
    if let Some(manufacturer) = &vehicle.manufacturer {
        println!("  Manufacturer: {}", manufacturer);
    }
    println!("  Discharge capacity: {} LPM", vehicle.max_discharge_flow());
    println!("  Pump curve:");
    for point in PumpCurve::new(&vehicle.pump_curve).samples() {
        println!(
            "    {:>7} LPM  {:>5.2} bar",
            point.flow_lpm, point.pressure_bar
        );
    }
    Ok(ExitCode::SUCCESS)
}
