use std::path::{Path, PathBuf};

use ar_project::{VehicleLibrary, load_project, load_vehicle_json, save_vehicle_json};

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

#[test]
fn sample_projects_load_and_validate() {
    let root = data_dir().join("projects");
    let samples = ["ataque-basico.json", "wye-doble.yaml"];

    for name in samples {
        let path = root.join(name);
        let project =
            load_project(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        assert!(!project.nodes.is_empty(), "{name} has no nodes");
        assert!(project.vehicle_id.is_some(), "{name} has no vehicle");
    }
}

#[test]
fn vehicle_library_loads_directory_in_name_order() {
    let library = VehicleLibrary::load_dir(&data_dir().join("vehicles")).unwrap();
    let ids: Vec<&str> = library.vehicles().iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["bx-1500", "forestal-750"]);

    let bx = library.get("bx-1500").unwrap();
    assert_eq!(bx.max_discharge_flow(), 1600.0);
    // Curve is stored as authored, unsorted
    assert_eq!(bx.pump_curve[0].flow_lpm, 1500.0);
}

#[test]
fn vehicle_library_resolves_project_vehicle() {
    let library = VehicleLibrary::load_dir(&data_dir().join("vehicles")).unwrap();
    let mut project = load_project(&data_dir().join("projects/wye-doble.yaml")).unwrap();

    let vehicle = library.resolve_for(&project).unwrap();
    assert_eq!(vehicle.id, "forestal-750");

    project.vehicle_id = Some("no-such-truck".to_string());
    assert!(library.resolve_for(&project).is_none());

    project.vehicle_id = None;
    assert!(library.resolve_for(&project).is_none());
}

#[test]
fn vehicle_library_skips_non_json_files() {
    let dir = std::env::temp_dir().join("ar_project_vehicle_lib_skip");
    std::fs::create_dir_all(&dir).unwrap();

    let vehicle = load_vehicle_json(&data_dir().join("vehicles/forestal-750.json")).unwrap();
    save_vehicle_json(&dir.join("forestal-750.json"), &vehicle).unwrap();
    std::fs::write(dir.join("README.txt"), "not a vehicle").unwrap();

    let library = VehicleLibrary::load_dir(&dir).unwrap();
    assert_eq!(library.len(), 1);
    assert_eq!(library.vehicles()[0], vehicle);
}

#[test]
fn upsert_replaces_by_id() {
    let vehicle = load_vehicle_json(&data_dir().join("vehicles/bx-1500.json")).unwrap();
    let mut library = VehicleLibrary::new(vec![vehicle.clone()]);

    let mut updated = vehicle.clone();
    updated.tank_liters = 4000.0;
    library.upsert(updated).unwrap();
    assert_eq!(library.len(), 1);
    assert_eq!(library.get("bx-1500").unwrap().tank_liters, 4000.0);

    let mut other = vehicle;
    other.id = "bx-2000".to_string();
    library.upsert(other).unwrap();
    assert_eq!(library.len(), 2);
}

#[test]
fn upsert_rejects_non_finite_curve() {
    let mut vehicle = load_vehicle_json(&data_dir().join("vehicles/bx-1500.json")).unwrap();
    vehicle.pump_curve[0].pressure_bar = f64::INFINITY;
    let mut library = VehicleLibrary::default();
    assert!(library.upsert(vehicle).is_err());
    assert!(library.is_empty());
}
