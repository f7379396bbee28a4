//! Typed, immutable run configuration and the derived discretization.

use crate::error::{SolverError, SolverResult};
use hr_core::Real;
use hr_core::units::{Conductivity, Density, Length, SpecificHeat, Temperature, Time};
use hr_core::{jpkgk, k, kgpm3, m, s, wpmk};

/// Uniform 1D mesh over the rod.
#[derive(Clone, Copy, Debug)]
pub struct MeshConfig {
    /// Rod length.
    pub length: Length,
    /// Number of mesh nodes N. At least 3 so an interior node exists.
    pub node_count: usize,
}

impl MeshConfig {
    /// Element size h = L / (N - 1), in meters.
    pub fn element_size_m(&self) -> Real {
        self.length.value / (self.node_count as Real - 1.0)
    }
}

/// Constant material properties of the rod.
#[derive(Clone, Copy, Debug)]
pub struct MaterialProperties {
    pub conductivity: Conductivity,
    pub density: Density,
    pub specific_heat: SpecificHeat,
}

impl MaterialProperties {
    /// Thermal diffusivity α = k / (ρ·c), in m²/s.
    pub fn diffusivity_m2ps(&self) -> Real {
        self.conductivity.value / (self.density.value * self.specific_heat.value)
    }
}

/// Simulated time range.
///
/// The time step is tied to the spatial resolution:
/// τ = (end - start) / (N - 1). The coupling comes with the model and is
/// kept as-is rather than letting τ be chosen independently.
#[derive(Clone, Copy, Debug)]
pub struct TimeConfig {
    pub start_time: Time,
    pub end_time: Time,
}

/// Fixed end temperatures, held for the whole run.
#[derive(Clone, Copy, Debug)]
pub struct BoundaryConditions {
    pub left_temperature: Temperature,
    pub right_temperature: Temperature,
}

/// Complete configuration for one rod simulation run.
///
/// Immutable once built; changing a parameter means building a new
/// simulation from a new config.
#[derive(Clone, Copy, Debug)]
pub struct RodConfig {
    pub mesh: MeshConfig,
    pub material: MaterialProperties,
    pub time: TimeConfig,
    pub boundary: BoundaryConditions,
    /// Interior nodes start the run at this temperature.
    pub initial_temperature: Temperature,
}

impl Default for RodConfig {
    /// Default scenario: a 10 cm copper rod at 300 K with its ends held at
    /// 400 K and 600 K, simulated for 30 s on a 30-node mesh.
    fn default() -> Self {
        Self {
            mesh: MeshConfig {
                length: m(0.1),
                node_count: 30,
            },
            material: MaterialProperties {
                conductivity: wpmk(410.0),
                density: kgpm3(8920.0),
                specific_heat: jpkgk(385.0),
            },
            time: TimeConfig {
                start_time: s(0.0),
                end_time: s(30.0),
            },
            boundary: BoundaryConditions {
                left_temperature: k(400.0),
                right_temperature: k(600.0),
            },
            initial_temperature: k(300.0),
        }
    }
}

impl RodConfig {
    /// Fail-fast parameter check. Degenerate inputs would otherwise surface
    /// as divide-by-zero or non-finite field values deep inside the sweep.
    pub fn validate(&self) -> SolverResult<()> {
        if self.mesh.node_count < 3 {
            return Err(SolverError::Configuration {
                what: format!(
                    "node_count = {} (need at least 3 nodes for an interior node)",
                    self.mesh.node_count
                ),
            });
        }
        ensure_positive(self.mesh.length.value, "length_m")?;
        ensure_positive(self.material.conductivity.value, "conductivity_w_per_m_k")?;
        ensure_positive(self.material.density.value, "density_kg_per_m3")?;
        ensure_positive(
            self.material.specific_heat.value,
            "specific_heat_j_per_kg_k",
        )?;
        ensure_finite(self.time.start_time.value, "start_time_s")?;
        ensure_finite(self.time.end_time.value, "end_time_s")?;
        if self.time.end_time.value <= self.time.start_time.value {
            return Err(SolverError::Configuration {
                what: format!(
                    "end_time_s = {} must be greater than start_time_s = {}",
                    self.time.end_time.value, self.time.start_time.value
                ),
            });
        }
        ensure_finite(self.boundary.left_temperature.value, "left_temperature_k")?;
        ensure_finite(self.boundary.right_temperature.value, "right_temperature_k")?;
        ensure_finite(self.initial_temperature.value, "initial_temperature_k")?;
        Ok(())
    }

    /// Validate and derive the raw quantities the stepper and driver work in.
    pub fn discretize(&self) -> SolverResult<Discretization> {
        self.validate()?;

        let n = self.mesh.node_count;
        let h_m = self.mesh.element_size_m();
        let start_s = self.time.start_time.value;
        let end_s = self.time.end_time.value;
        let tau_s = (end_s - start_s) / (n as Real - 1.0);
        let lambda = self.material.diffusivity_m2ps() * tau_s / (h_m * h_m);

        tracing::debug!(n, h_m, tau_s, lambda, "discretized rod");

        Ok(Discretization {
            node_count: n,
            element_size_m: h_m,
            time_step_s: tau_s,
            lambda,
            start_time_s: start_s,
            end_time_s: end_s,
            left_temperature_k: self.boundary.left_temperature.value,
            right_temperature_k: self.boundary.right_temperature.value,
            initial_temperature_k: self.initial_temperature.value,
        })
    }
}

fn ensure_positive(v: Real, what: &'static str) -> SolverResult<()> {
    ensure_finite(v, what)?;
    if v <= 0.0 {
        return Err(SolverError::Configuration {
            what: format!("{what} = {v} must be positive"),
        });
    }
    Ok(())
}

fn ensure_finite(v: Real, what: &'static str) -> SolverResult<()> {
    hr_core::ensure_finite(v, what)?;
    Ok(())
}

/// Raw (SI, [`Real`]) quantities derived from a validated [`RodConfig`].
///
/// λ = α·τ/h² lumps the diffusivity, time step, and element size into the
/// single coupling coefficient used by the implicit scheme.
#[derive(Clone, Copy, Debug)]
pub struct Discretization {
    pub node_count: usize,
    pub element_size_m: Real,
    pub time_step_s: Real,
    pub lambda: Real,
    pub start_time_s: Real,
    pub end_time_s: Real,
    pub left_temperature_k: Real,
    pub right_temperature_k: Real,
    pub initial_temperature_k: Real,
}

impl Discretization {
    /// Number of time steps in a full run, ceil((end - start) / τ).
    ///
    /// τ is derived as (end - start) / (N - 1), so the count is exactly
    /// N - 1. Computing it from the mesh instead of re-dividing keeps the
    /// loop immune to floating-point drift in either direction.
    pub fn step_count(&self) -> usize {
        self.node_count - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_core::{k, m, s};

    #[test]
    fn default_config_is_valid() {
        RodConfig::default().validate().unwrap();
    }

    #[test]
    fn default_discretization_matches_hand_calc() {
        let disc = RodConfig::default().discretize().unwrap();
        assert_eq!(disc.node_count, 30);
        assert!((disc.element_size_m - 0.1 / 29.0).abs() < 1e-15);
        assert!((disc.time_step_s - 30.0 / 29.0).abs() < 1e-12);
        // alpha = 410 / (8920 * 385) ≈ 1.1939e-4 m²/s
        let alpha = 410.0 / (8920.0 * 385.0);
        let expected_lambda = alpha * disc.time_step_s / (disc.element_size_m * disc.element_size_m);
        assert!((disc.lambda - expected_lambda).abs() < 1e-12);
        assert_eq!(disc.step_count(), 29);
    }

    #[test]
    fn rejects_too_few_nodes() {
        let cfg = RodConfig {
            mesh: MeshConfig {
                length: m(1.0),
                node_count: 2,
            },
            ..RodConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(format!("{err}").contains("node_count"));
    }

    #[test]
    fn rejects_non_positive_length() {
        let cfg = RodConfig {
            mesh: MeshConfig {
                length: m(0.0),
                node_count: 10,
            },
            ..RodConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_reversed_time_range() {
        let cfg = RodConfig {
            time: TimeConfig {
                start_time: s(10.0),
                end_time: s(10.0),
            },
            ..RodConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_nan_boundary() {
        let cfg = RodConfig {
            boundary: BoundaryConditions {
                left_temperature: k(Real::NAN),
                right_temperature: k(600.0),
            },
            ..RodConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn minimum_mesh_discretizes() {
        let cfg = RodConfig {
            mesh: MeshConfig {
                length: m(0.1),
                node_count: 3,
            },
            ..RodConfig::default()
        };
        let disc = cfg.discretize().unwrap();
        assert_eq!(disc.step_count(), 2);
    }
}
