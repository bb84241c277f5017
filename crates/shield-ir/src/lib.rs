//! Engine-agnostic model of a particle-transport simulation.
//!
//! This crate defines the [`Setup`] a user edits (bodies, zones, materials,
//! detectors, beam and transport options) and the [`SimulationResult`] that
//! comes back once an engine has run it.
//!
//! The model is purely declarative: no engine numbering, no file formats.
//! Translation into SHIELD-HIT12A input cards lives in `shield-convert`.

use serde::{Deserialize, Serialize};

mod beam;
mod body;
mod detector;
mod material;
mod result;
mod zone;

pub use beam::{
    Beam, Direction, Distribution, Divergence, EnergyStraggling, ScatteringType, SimulationOptions,
};
pub use body::{Body, Geometry};
pub use detector::{CylinderSlices, Detector, DetectorGeometry, ScoringType, Slices};
pub use material::{Element, Material, MaterialKind, StateOfMatter};
pub use result::{DetectorResult, Dimensions, SimulationResult};
pub use zone::{Operation, OperationKind, Zone};

/// Identifier of a [`Body`] within a setup.
pub type BodyId = i64;
/// Identifier of a [`Zone`] within a setup. `0` is reserved for "no parent".
pub type ZoneId = i64;
/// Identifier of a [`Material`] within a setup.
pub type MaterialId = i64;
/// Identifier of a [`Detector`] within a setup.
pub type DetectorId = i64;

/// Parent ID marking a top-level zone.
pub const ROOT_ZONE_PARENT: ZoneId = 0;

/// 3D vector with f64 components (conventionally centimeters).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a new Vec3.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Range {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Range {
    /// Create a new range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Particle selection, used both for the beam and for detector scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Particle {
    /// One of the engine's predefined particles, by name (e.g. `proton`).
    Predefined {
        /// Particle name.
        name: String,
    },
    /// A fully stripped ion.
    #[serde(rename_all = "camelCase")]
    HeavyIon {
        /// Atomic number Z.
        charge: i64,
        /// Mass number A.
        nucleons_count: i64,
    },
}

impl Particle {
    /// Shorthand for a predefined particle.
    pub fn predefined(name: impl Into<String>) -> Self {
        Self::Predefined { name: name.into() }
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::predefined("proton")
    }
}

/// Complete description of one simulation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Setup {
    /// Primitive solids.
    pub bodies: Vec<Body>,
    /// Boolean regions built from bodies.
    pub zones: Vec<Zone>,
    /// Media referenced by zones and detectors.
    pub materials: Vec<Material>,
    /// Scoring volumes.
    pub detectors: Vec<Detector>,
    /// Primary particle source.
    pub beam: Beam,
    /// Transport settings.
    pub options: SimulationOptions,
}

impl Setup {
    /// Create an empty setup with default beam and options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up a body by ID.
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Look up a zone by ID.
    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// Look up a material by ID.
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Look up a detector by ID.
    pub fn detector(&self, id: DetectorId) -> Option<&Detector> {
        self.detectors.iter().find(|d| d.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water_tank() -> Setup {
        let mut setup = Setup::new();
        setup.bodies.push(Body {
            id: 1,
            name: Some("tank".into()),
            geometry: Geometry::Cuboid {
                center: Vec3::new(0.0, 0.0, 10.0),
                size: Vec3::new(20.0, 20.0, 20.0),
            },
        });
        setup.materials.push(Material {
            id: 1,
            color: None,
            kind: MaterialKind::Predefined {
                name: "water_liquid".into(),
                density: None,
                state_of_matter: None,
                load_external_stopping_power: false,
            },
        });
        setup.zones.push(Zone {
            id: 1,
            parent_id: ROOT_ZONE_PARENT,
            base_id: 1,
            material_id: 1,
            construction: vec![],
        });
        setup.detectors.push(Detector {
            id: 1,
            name: "depth dose".into(),
            detector_geometry: DetectorGeometry::Mesh {
                center: Vec3::new(0.0, 0.0, 10.0),
                size: Vec3::new(1.0, 1.0, 20.0),
                slices: Slices { x: 1, y: 1, z: 200 },
            },
            particle: Particle::predefined("all"),
            scoring: ScoringType::predefined("dose"),
        });
        setup
    }

    #[test]
    fn roundtrip_setup() {
        let setup = water_tank();
        let json = setup.to_json().unwrap();
        let restored = Setup::from_json(&json).unwrap();
        assert_eq!(setup, restored);
    }

    #[test]
    fn serde_tagged_particle() {
        let ion = Particle::HeavyIon {
            charge: 6,
            nucleons_count: 12,
        };
        let json = serde_json::to_string(&ion).unwrap();
        assert!(json.contains("\"type\":\"heavy_ion\""));
        assert!(json.contains("\"nucleonsCount\":12"));

        let parsed: Particle = serde_json::from_str(r#"{"type":"predefined","name":"neutron"}"#).unwrap();
        assert_eq!(parsed, Particle::predefined("neutron"));
    }

    #[test]
    fn partial_setup_uses_defaults() {
        let setup = Setup::from_json(r#"{"bodies": []}"#).unwrap();
        assert!(setup.zones.is_empty());
        assert_eq!(setup.beam, Beam::default());
        assert_eq!(setup.options, SimulationOptions::default());
    }

    #[test]
    fn lookups_by_id() {
        let setup = water_tank();
        assert!(setup.body(1).is_some());
        assert!(setup.body(2).is_none());
        assert_eq!(setup.zone(1).map(|z| z.base_id), Some(1));
        assert!(setup.material(1).is_some());
        assert_eq!(setup.detector(1).map(|d| d.name.as_str()), Some("depth dose"));
    }
}
