//! ar-project: deployment project file format, vehicles, and structural validation.

pub mod catalog;
pub mod schema;
pub mod validate;
pub mod vehicles;

pub use schema::*;
pub use validate::{StructureError, validate_project, validate_vehicle};
pub use vehicles::VehicleLibrary;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Structure error: {0}")]
    Structure(#[from] StructureError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse and structurally validate a project from a JSON document.
pub fn parse_project_json(content: &str) -> ProjectResult<Project> {
    let project: Project = serde_json::from_str(content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    let project: Project = serde_yaml::from_str(&content)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn save_yaml(path: &std::path::Path, project: &Project) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_yaml::to_string(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    parse_project_json(&content)
}

pub fn save_json(path: &std::path::Path, project: &Project) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_json::to_string_pretty(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Parse a project without structural validation, picking the format from
/// the file extension (YAML for `.yaml`/`.yml`, JSON otherwise).
///
/// For callers that report structural problems themselves.
pub fn read_project(path: &std::path::Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    let project = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str(&content)?,
        _ => serde_json::from_str(&content)?,
    };
    Ok(project)
}

/// Parse and structurally validate a project file of either format.
pub fn load_project(path: &std::path::Path) -> ProjectResult<Project> {
    let project = read_project(path)?;
    validate_project(&project)?;
    Ok(project)
}

pub fn load_vehicle_json(path: &std::path::Path) -> ProjectResult<VehicleSpec> {
    let content = std::fs::read_to_string(path)?;
    let vehicle: VehicleSpec = serde_json::from_str(&content)?;
    validate_vehicle(&vehicle)?;
    Ok(vehicle)
}

pub fn save_vehicle_json(path: &std::path::Path, vehicle: &VehicleSpec) -> ProjectResult<()> {
    validate_vehicle(vehicle)?;
    let content = serde_json::to_string_pretty(vehicle)?;
    std::fs::write(path, content)?;
    Ok(())
}
