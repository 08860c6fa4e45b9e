//! Vehicle library: a directory of vehicle JSON files.

use std::path::Path;

use tracing::{debug, warn};

use crate::schema::{Project, VehicleSpec};
use crate::validate::validate_vehicle;
use crate::ProjectResult;

#[derive(Debug, Clone, Default)]
pub struct VehicleLibrary {
    vehicles: Vec<VehicleSpec>,
}

impl VehicleLibrary {
    pub fn new(vehicles: Vec<VehicleSpec>) -> Self {
        Self { vehicles }
    }

    /// Load every `*.json` file in `dir`. Other files are skipped.
    ///
    /// Files are read in name order so the library is stable across platforms.
    pub fn load_dir(dir: &Path) -> ProjectResult<Self> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            } else {
                debug!(path = %path.display(), "skipping non-JSON file in vehicle library");
            }
        }
        paths.sort();

        let mut vehicles = Vec::with_capacity(paths.len());
        for path in paths {
            vehicles.push(crate::load_vehicle_json(&path)?);
        }
        debug!(dir = %dir.display(), count = vehicles.len(), "loaded vehicle library");
        Ok(Self { vehicles })
    }

    pub fn vehicles(&self) -> &[VehicleSpec] {
        &self.vehicles
    }

    pub fn get(&self, id: &str) -> Option<&VehicleSpec> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Resolve the project's `vehicleId`, if it has one and the library knows it.
    pub fn resolve_for(&self, project: &Project) -> Option<&VehicleSpec> {
        let id = project.vehicle_id.as_deref()?;
        let found = self.get(id);
        if found.is_none() {
            warn!(vehicle_id = id, project = %project.id, "project references unknown vehicle");
        }
        found
    }

    /// Add or replace a vehicle by id.
    pub fn upsert(&mut self, vehicle: VehicleSpec) -> ProjectResult<()> {
        validate_vehicle(&vehicle)?;
        match self.vehicles.iter_mut().find(|v| v.id == vehicle.id) {
            Some(existing) => *existing = vehicle,
            None => self.vehicles.push(vehicle),
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
