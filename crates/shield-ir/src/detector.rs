//! Scoring volumes.

use serde::{Deserialize, Serialize};

use crate::{DetectorId, MaterialId, Particle, Range, Vec3, ZoneId};

/// A scoring volume together with what and how it scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detector {
    /// Unique detector ID.
    pub id: DetectorId,
    /// Name, unique within a setup.
    pub name: String,
    /// Scoring grid.
    pub detector_geometry: DetectorGeometry,
    /// Particles taken into account.
    pub particle: Particle,
    /// Scored quantity.
    pub scoring: ScoringType,
}

/// Segmentation of a scoring grid along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Slices {
    /// Bins along X.
    pub x: i64,
    /// Bins along Y.
    pub y: i64,
    /// Bins along Z.
    pub z: i64,
}

/// Segmentation of a cylindrical scoring grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CylinderSlices {
    /// Radial bins.
    pub radius: i64,
    /// Angular bins.
    pub angle: i64,
    /// Bins along the axis.
    pub z: i64,
}

/// Shape of a [`Detector`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DetectorGeometry {
    /// Cylindrical grid along Z.
    #[serde(rename_all = "camelCase")]
    Cylinder {
        /// Radial extent.
        radius: Range,
        /// Angular extent.
        angle: Range,
        /// Axial extent.
        z_value: Range,
        /// Bins.
        slices: CylinderSlices,
    },
    /// Cartesian grid.
    Mesh {
        /// Center of the grid.
        center: Vec3,
        /// Extent of the grid.
        size: Vec3,
        /// Bins.
        slices: Slices,
    },
    /// Flux through a plane.
    Plane {
        /// A point on the plane.
        point: Vec3,
        /// Plane normal.
        normal: Vec3,
    },
    /// Scoring in whole zones.
    Zone {
        /// Zones scored.
        zones: Vec<ZoneId>,
    },
    /// Geometry map.
    Geomap {
        /// Center of the map.
        center: Vec3,
        /// Extent of the map.
        size: Vec3,
        /// Bins.
        slices: Slices,
    },
}

/// Quantity a detector scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScoringType {
    /// A predefined scoring quantity, by name (e.g. `dose`).
    Predefined {
        /// Scoring name.
        name: String,
    },
    /// A LET-based quantity evaluated in a given material.
    #[serde(rename_all = "camelCase")]
    LetType {
        /// Scoring name.
        name: String,
        /// Material the LET is computed in.
        material_id: MaterialId,
    },
}

impl ScoringType {
    /// Shorthand for a predefined scoring quantity.
    pub fn predefined(name: impl Into<String>) -> Self {
        Self::Predefined { name: name.into() }
    }

    /// Scoring name regardless of variant.
    pub fn name(&self) -> &str {
        match self {
            Self::Predefined { name } | Self::LetType { name, .. } => name,
        }
    }
}
