//! Equipment catalog: templates the planner drops onto the map.

use serde::{Deserialize, Serialize};

use crate::schema::{
    LatLng, NodeConnections, NodeDef, NodeParams, NodeStats, NodeType, NodeVariant, Ports,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CatalogGroup {
    FuentesDeAgua,
    Mangueras,
    Pitones,
    Accesorios,
}

impl CatalogGroup {
    pub const ALL: [CatalogGroup; 4] = [
        CatalogGroup::FuentesDeAgua,
        CatalogGroup::Mangueras,
        CatalogGroup::Pitones,
        CatalogGroup::Accesorios,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CatalogGroup::FuentesDeAgua => "Fuentes de agua",
            CatalogGroup::Mangueras => "Mangueras",
            CatalogGroup::Pitones => "Pitones",
            CatalogGroup::Accesorios => "Accesorios",
        }
    }
}

/// A catalog entry: a node type plus the defaults a new node starts with.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: &'static str,
    pub variant: NodeVariant,
    pub group: CatalogGroup,
    pub label: &'static str,
    pub node_type: NodeType,
    pub params: NodeParams,
    pub ports: Ports,
    pub stats: NodeStats,
    pub compatible: Vec<NodeVariant>,
}

/// Coupling sizes and counts for a template, in catalog column order.
struct Fittings {
    inlet_mm: f64,
    outlet_mm: f64,
    max_outputs: Option<u32>,
    length_m: Option<f64>,
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &'static str,
    variant: NodeVariant,
    group: CatalogGroup,
    label: &'static str,
    node_type: NodeType,
    params: NodeParams,
    (inputs, outputs): (f64, f64),
    fittings: Fittings,
    compatible: &[NodeVariant],
) -> CatalogItem {
    CatalogItem {
        id,
        variant,
        group,
        label,
        node_type,
        params,
        ports: Ports { inputs, outputs },
        stats: NodeStats {
            inlet_diameter_mm: Some(fittings.inlet_mm),
            outlet_diameter_mm: Some(fittings.outlet_mm),
            max_outputs: fittings.max_outputs,
            length_meters: fittings.length_m,
            ..NodeStats::default()
        },
        compatible: compatible.to_vec(),
    }
}

fn rated(flow_lpm: f64, pressure_bar: f64) -> NodeParams {
    NodeParams {
        flow_target_lpm: Some(flow_lpm),
        pressure: Some(pressure_bar),
        ..NodeParams::default()
    }
}

fn hose_params(diameter_mm: f64, loss_coefficient: f64) -> NodeParams {
    NodeParams {
        diameter: Some(diameter_mm),
        loss_coefficient: Some(loss_coefficient),
        ..NodeParams::default()
    }
}

fn loss_params(loss_coefficient: f64) -> NodeParams {
    NodeParams {
        loss_coefficient: Some(loss_coefficient),
        ..NodeParams::default()
    }
}

fn fit(inlet_mm: f64, outlet_mm: f64, max_outputs: u32) -> Fittings {
    Fittings {
        inlet_mm,
        outlet_mm,
        max_outputs: Some(max_outputs),
        length_m: None,
    }
}

fn hose_fit(diameter_mm: f64, length_m: f64) -> Fittings {
    Fittings {
        inlet_mm: diameter_mm,
        outlet_mm: diameter_mm,
        max_outputs: None,
        length_m: Some(length_m),
    }
}

/// The full equipment catalog, in display order.
#[rustfmt::skip]
pub fn catalog() -> Vec<CatalogItem> {
    use CatalogGroup::*;
    use NodeType::*;
    use NodeVariant::*;

    let from_vehicle = [Accesorio, Manguera, Piton];
    let from_hydrant = [Manguera, Accesorio];
    let from_hose = [Accesorio, Piton];
    let from_nozzle = [Accesorio];
    let from_fitting = [Manguera, Piton];

    vec![
        item("carro", Carro, FuentesDeAgua, "Carro bomba", Source,
            rated(1500.0, 10.0), (0.0, 2.0), fit(125.0, 65.0, 2), &from_vehicle),
        item("carro_rural", Carro, FuentesDeAgua, "Carro rural 1000 gpm", Source,
            rated(1000.0, 8.0), (0.0, 2.0), fit(100.0, 65.0, 2), &from_vehicle),
        item("carro_forestal", Carro, FuentesDeAgua, "Carro forestal 750 gpm", Source,
            rated(750.0, 7.0), (0.0, 1.0), fit(100.0, 45.0, 1), &from_vehicle),
        item("grifo", Grifo, FuentesDeAgua, "Grifo", Source,
            rated(800.0, 6.0), (0.0, 1.0), fit(100.0, 65.0, 1), &from_hydrant),
        item("grifo_doble", Grifo, FuentesDeAgua, "Grifo doble 2x65mm", Source,
            rated(1200.0, 8.0), (0.0, 2.0), fit(125.0, 65.0, 2), &from_hydrant),
        item("piscina", Piscina, FuentesDeAgua, "Piscina", Source,
            rated(600.0, 2.0), (0.0, 1.0), fit(125.0, 65.0, 1), &from_hydrant),
        item("piscina_portatil", Piscina, FuentesDeAgua, "Piscina portátil 5000 L", Source,
            rated(400.0, 1.5), (0.0, 1.0), fit(100.0, 65.0, 1), &from_hydrant),
        item("manguera", Manguera, Mangueras, "Manguera", Hose,
            hose_params(45.0, 0.6), (1.0, 1.0), hose_fit(45.0, 25.0), &from_hose),
        item("manguera_65", Manguera, Mangueras, "Manguera 65mm / 20m", Hose,
            hose_params(65.0, 0.45), (1.0, 1.0), hose_fit(65.0, 20.0), &from_hose),
        item("manguera_38", Manguera, Mangueras, "Manguera 38mm / 15m", Hose,
            hose_params(38.0, 0.8), (1.0, 1.0), hose_fit(38.0, 15.0), &from_hose),
        item("piton", Piton, Pitones, "Pitón / boquilla", Nozzle,
            rated(500.0, 3.5), (1.0, 0.0), fit(38.0, 25.0, 0), &from_nozzle),
        item("piton_neblina", Piton, Pitones, "Boquilla neblina 45mm", Nozzle,
            rated(200.0, 2.5), (1.0, 0.0), fit(45.0, 22.0, 0), &from_nozzle),
        item("monitor_portatil", Piton, Pitones, "Monitor portátil 65mm", Nozzle,
            rated(1200.0, 6.0), (1.0, 0.0), fit(65.0, 38.0, 0), &from_nozzle),
        item("accesorio", Accesorio, Accesorios, "Accesorio", Appliance,
            loss_params(0.2), (1.0, 1.0), fit(65.0, 65.0, 2), &from_fitting),
        item("wye_doble", Accesorio, Accesorios, "Wye doble 65 a 2x38", Appliance,
            loss_params(0.35), (1.0, 2.0), fit(65.0, 38.0, 2), &from_fitting),
        item("reductor_65_38", Accesorio, Accesorios, "Reductor 65 a 38mm", Appliance,
            loss_params(0.15), (1.0, 1.0), fit(65.0, 38.0, 1), &from_fitting),
        item("valvula_corte", Accesorio, Accesorios, "Válvula de corte 65mm", Appliance,
            loss_params(0.1), (1.0, 1.0), fit(65.0, 65.0, 1), &from_fitting),
    ]
}

/// Find a template by its catalog id.
pub fn find(id: &str) -> Option<CatalogItem> {
    catalog().into_iter().find(|item| item.id == id)
}

/// Catalog entries bucketed by group, groups in the requested order.
pub fn grouped_by(order: &[CatalogGroup]) -> Vec<(CatalogGroup, Vec<CatalogItem>)> {
    let items = catalog();
    order
        .iter()
        .map(|&group| {
            let members = items.iter().filter(|i| i.group == group).cloned().collect();
            (group, members)
        })
        .collect()
}

/// Instantiate a template as a new project node at the given position.
pub fn build_node(item: &CatalogItem, lat: f64, lng: f64) -> NodeDef {
    NodeDef {
        id: format!("{}-{}", item.variant.as_str(), uuid::Uuid::new_v4().simple()),
        node_type: item.node_type,
        label: item.label.to_string(),
        position: LatLng { lat, lng },
        params: item.params,
        ports: item.ports,
        variant: Some(item.variant),
        stats: Some(item.stats.clone()),
        connections: Some(NodeConnections {
            compatible_accessories: item.compatible.clone(),
        }),
    }
}
