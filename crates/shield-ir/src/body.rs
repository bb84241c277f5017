//! Primitive solids.

use serde::{Deserialize, Serialize};

use crate::{BodyId, Vec3};

/// A named primitive solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Unique body ID.
    pub id: BodyId,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Shape and placement.
    pub geometry: Geometry,
}

/// Shape of a [`Body`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    /// Sphere around `center`.
    Sphere {
        /// Center point.
        center: Vec3,
        /// Radius.
        radius: f64,
    },
    /// Axis-aligned box around `center`.
    Cuboid {
        /// Center point.
        center: Vec3,
        /// Edge lengths along each axis.
        size: Vec3,
    },
    /// Cylinder standing on `base_center`, extending along +Y.
    #[serde(rename_all = "camelCase")]
    Cylinder {
        /// Center of the bottom cap.
        base_center: Vec3,
        /// Length along the axis.
        height: f64,
        /// Radius.
        radius: f64,
    },
}
