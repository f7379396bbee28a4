//! Scenario schema definitions.
//!
//! Plain SI `f64` fields on the wire; every rod parameter has a default so a
//! scenario file may override any subset.

use hr_core::{jpkgk, k, kgpm3, m, s, wpmk};
use hr_solver::{BoundaryConditions, MaterialProperties, MeshConfig, RodConfig, TimeConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub rod: RodDef,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: name.into(),
            rod: RodDef::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RodDef {
    pub length_m: f64,
    pub node_count: usize,
    pub conductivity_w_per_m_k: f64,
    pub density_kg_per_m3: f64,
    pub specific_heat_j_per_kg_k: f64,
    pub initial_temperature_k: f64,
    pub left_temperature_k: f64,
    pub right_temperature_k: f64,
    pub start_time_s: f64,
    pub end_time_s: f64,
}

impl Default for RodDef {
    fn default() -> Self {
        let cfg = RodConfig::default();
        Self {
            length_m: cfg.mesh.length.value,
            node_count: cfg.mesh.node_count,
            conductivity_w_per_m_k: cfg.material.conductivity.value,
            density_kg_per_m3: cfg.material.density.value,
            specific_heat_j_per_kg_k: cfg.material.specific_heat.value,
            initial_temperature_k: cfg.initial_temperature.value,
            left_temperature_k: cfg.boundary.left_temperature.value,
            right_temperature_k: cfg.boundary.right_temperature.value,
            start_time_s: cfg.time.start_time.value,
            end_time_s: cfg.time.end_time.value,
        }
    }
}

impl RodDef {
    /// Lift the raw wire values into the typed solver configuration.
    pub fn to_config(&self) -> RodConfig {
        RodConfig {
            mesh: MeshConfig {
                length: m(self.length_m),
                node_count: self.node_count,
            },
            material: MaterialProperties {
                conductivity: wpmk(self.conductivity_w_per_m_k),
                density: kgpm3(self.density_kg_per_m3),
                specific_heat: jpkgk(self.specific_heat_j_per_kg_k),
            },
            time: TimeConfig {
                start_time: s(self.start_time_s),
                end_time: s(self.end_time_s),
            },
            boundary: BoundaryConditions {
                left_temperature: k(self.left_temperature_k),
                right_temperature: k(self.right_temperature_k),
            },
            initial_temperature: k(self.initial_temperature_k),
        }
    }
}
