//! File-level operations behind the CLI commands.

use std::path::{Path, PathBuf};

use ar_hydraulics::{Advisory, HydraulicPolicy, Network, Report, assess, audit_connections};
use ar_project::{
    Project, ProjectError, VehicleLibrary, VehicleSpec, load_project, load_vehicle_json,
    read_project,
};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// Inputs shared by every file in one `validate` invocation.
#[derive(Debug, Default)]
pub struct Settings {
    /// Vehicle forced on every project, from `--vehicle`.
    pub vehicle: Option<VehicleSpec>,
    /// Library used to resolve each project's `vehicleId`.
    pub library: Option<VehicleLibrary>,
    pub policy: HydraulicPolicy,
}

impl Settings {
    pub fn load(
        vehicle_path: Option<&Path>,
        vehicles_dir: Option<&Path>,
        policy_path: Option<&Path>,
    ) -> AppResult<Self> {
        let vehicle = vehicle_path.map(load_vehicle_json).transpose()?;
        let library = vehicles_dir.map(VehicleLibrary::load_dir).transpose()?;
        let policy = match policy_path {
            Some(path) => HydraulicPolicy::load(path)?,
            None => HydraulicPolicy::default(),
        };
        if let Some(path) = policy_path {
            info!(path = %path.display(), "loaded hydraulic policy");
        }
        Ok(Self {
            vehicle,
            library,
            policy,
        })
    }

    /// The explicit vehicle wins; otherwise look the project's vehicle up.
    pub fn vehicle_for(&self, project: &Project) -> Option<&VehicleSpec> {
        self.vehicle
            .as_ref()
            .or_else(|| self.library.as_ref()?.resolve_for(project))
    }
}

/// Result of validating one project file.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub path: PathBuf,
    pub vehicle_id: Option<String>,
    pub report: Report,
}

/// Validate one project file.
///
/// A file that parses but doesn't match the project schema is reported as an
/// invalid project; only I/O failures are errors.
pub fn evaluate(path: &Path, settings: &Settings) -> AppResult<Outcome> {
    let project = match read_project(path) {
        Ok(project) => project,
        Err(err @ (ProjectError::Json(_) | ProjectError::Yaml(_))) => {
            warn!(path = %path.display(), error = %err, "project file does not match schema");
            return Ok(Outcome {
                path: path.to_path_buf(),
                vehicle_id: None,
                report: Report::invalid(err.to_string()),
            });
        }
        Err(err) => {
            return Err(AppError::Load {
                path: path.to_path_buf(),
                message: err.to_string(),
            });
        }
    };

    let vehicle = settings.vehicle_for(&project);
    let report = assess(&project, vehicle, &settings.policy);
    Ok(Outcome {
        path: path.to_path_buf(),
        vehicle_id: vehicle.map(|v| v.id.clone()),
        report,
    })
}

/// Validate several files in parallel; results keep the input order.
pub fn evaluate_all(paths: &[PathBuf], settings: &Settings) -> Vec<AppResult<Outcome>> {
    paths
        .par_iter()
        .map(|path| evaluate(path, settings))
        .collect()
}

/// Connection audit of one (structurally valid) project file.
pub fn audit(path: &Path) -> AppResult<Vec<Advisory>> {
    let project = load_project(path)?;
    let network = Network::index(&project)?;
    Ok(audit_connections(&network))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data")
    }

    #[test]
    fn resolves_vehicle_from_library() {
        let settings = Settings::load(None, Some(&data_dir().join("vehicles")), None).unwrap();
        let outcome = evaluate(&data_dir().join("projects/ataque-basico.json"), &settings).unwrap();
        assert_eq!(outcome.vehicle_id.as_deref(), Some("bx-1500"));
        assert!(outcome.report.is_feasible());
        assert!((outcome.report.nozzle_pressures["piton-1"] - 8.7).abs() < 1e-9);
    }

    #[test]
    fn explicit_vehicle_overrides_project_reference() {
        let settings = Settings::load(
            Some(&data_dir().join("vehicles/forestal-750.json")),
            Some(&data_dir().join("vehicles")),
            None,
        )
        .unwrap();
        let outcome = evaluate(&data_dir().join("projects/ataque-basico.json"), &settings).unwrap();
        assert_eq!(outcome.vehicle_id.as_deref(), Some("forestal-750"));
    }

    #[test]
    fn malformed_document_is_an_invalid_project() {
        let path = std::env::temp_dir().join("ar_cli_malformed_project.json");
        std::fs::write(&path, r#"{"id":"x","nodes":"none"}"#).unwrap();

        let outcome = evaluate(&path, &Settings::default()).unwrap();
        assert_eq!(
            outcome.report.into_result().errors,
            vec!["Proyecto inválido"]
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = data_dir().join("projects/does-not-exist.json");
        let err = evaluate(&path, &Settings::default()).unwrap_err();
        assert!(matches!(err, AppError::Load { .. }));
    }

    #[test]
    fn batch_keeps_input_order() {
        let settings = Settings::load(None, Some(&data_dir().join("vehicles")), None).unwrap();
        let paths = vec![
            data_dir().join("projects/wye-doble.yaml"),
            data_dir().join("projects/ataque-basico.json"),
        ];
        let outcomes = evaluate_all(&paths, &settings);
        let vehicles: Vec<Option<String>> = outcomes
            .into_iter()
            .map(|o| o.unwrap().vehicle_id)
            .collect();
        assert_eq!(
            vehicles,
            vec![Some("forestal-750".to_string()), Some("bx-1500".to_string())]
        );
    }

    #[test]
    fn sample_audit_is_clean() {
        let advisories = audit(&data_dir().join("projects/wye-doble.yaml")).unwrap();
        assert!(advisories.is_empty());
    }
}
