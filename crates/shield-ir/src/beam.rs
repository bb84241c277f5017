//! Primary source and transport options.

use serde::{Deserialize, Serialize};

use crate::{Particle, Vec3};

/// Primary particle source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Beam {
    /// Where the beam starts and where it points.
    pub direction: Direction,
    /// Spatial spread.
    pub divergence: Divergence,
    /// Primary particle.
    pub particle_type: Particle,
    /// Kinetic energy in MeV/nucleon.
    pub initial_base_energy: f64,
    /// Energy spread in MeV/nucleon.
    pub initial_energy_sigma: f64,
}

impl Default for Beam {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            divergence: Divergence::default(),
            particle_type: Particle::default(),
            initial_base_energy: 100.0,
            initial_energy_sigma: 0.0,
        }
    }
}

/// Beam orientation and start point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Direction {
    /// Azimuthal angle in degrees.
    pub phi: f64,
    /// Polar angle in degrees.
    pub theta: f64,
    /// Start point.
    pub position: Vec3,
}

/// Beam spread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Divergence {
    /// Spread along X.
    pub sigma_x: f64,
    /// Spread along Y.
    pub sigma_y: f64,
    /// Profile shape.
    pub distribution: Distribution,
}

impl Default for Divergence {
    fn default() -> Self {
        Self {
            sigma_x: 1.0,
            sigma_y: 1.0,
            distribution: Distribution::Gaussian,
        }
    }
}

/// Beam profile shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    /// Normal profile.
    #[default]
    Gaussian,
    /// Uniform profile.
    Flat,
}

/// Multiple scattering model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScatteringType {
    /// Not set.
    None,
    /// Gaussian approximation.
    #[default]
    Gaussian,
    /// Moliere theory.
    Moliere,
}

/// Energy-loss straggling model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyStraggling {
    /// Not set.
    None,
    /// Vavilov distribution.
    Vavilov,
    /// Gaussian approximation.
    #[default]
    Gaussian,
}

/// Transport settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationOptions {
    /// Apply antiparticle correction.
    pub antiparticle_correction_on: bool,
    /// Simulate nuclear reactions.
    pub nuclear_reactions_on: bool,
    /// Mean energy loss per step, as a fraction.
    pub mean_energy_loss: f64,
    /// Minimum energy loss per step in MeV.
    pub min_energy_loss: f64,
    /// Multiple scattering model.
    pub scattering_type: ScatteringType,
    /// Straggling model.
    pub energy_straggling: EnergyStraggling,
    /// Transport fast neutrons.
    pub fast_neutron_transport_on: bool,
    /// Cutoff for low-energy neutron transport in MeV.
    pub low_energy_neutron_cutoff: f64,
    /// Record creation of secondary neutrons.
    pub record_secondary_neutron_creation: bool,
    /// Primaries generated.
    pub number_of_generated_particles: i64,
    /// Primaries recorded.
    pub number_of_recorded_particles: i64,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            antiparticle_correction_on: false,
            nuclear_reactions_on: true,
            mean_energy_loss: 0.05,
            min_energy_loss: 0.025,
            scattering_type: ScatteringType::Gaussian,
            energy_straggling: EnergyStraggling::Gaussian,
            fast_neutron_transport_on: true,
            low_energy_neutron_cutoff: 0.0,
            record_secondary_neutron_creation: true,
            number_of_generated_particles: 1000,
            number_of_recorded_particles: 1000,
        }
    }
}
