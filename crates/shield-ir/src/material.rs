//! Media.

use serde::{Deserialize, Serialize};

use crate::MaterialId;

/// A medium that zones are filled with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Unique material ID.
    pub id: MaterialId,
    /// Display color, e.g. `#FFFFFF`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Definition of the medium.
    #[serde(rename = "material")]
    pub kind: MaterialKind,
}

impl Material {
    /// Whether this is the predefined vacuum, which engines handle natively.
    pub fn is_vacuum(&self) -> bool {
        matches!(&self.kind, MaterialKind::Predefined { name, .. } if name == "vacuum")
    }
}

/// Definition of a [`Material`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialKind {
    /// A medium from the engine's built-in table.
    #[serde(rename_all = "camelCase")]
    Predefined {
        /// Sanitized table name, e.g. `water_liquid`.
        name: String,
        /// Density override in g/cm³.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        density: Option<f64>,
        /// State override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        state_of_matter: Option<StateOfMatter>,
        /// Load stopping power tables from an external file.
        #[serde(default)]
        load_external_stopping_power: bool,
    },
    /// A user-defined mixture of isotopes.
    #[serde(rename_all = "camelCase")]
    Compound {
        /// Display name.
        name: String,
        /// Density in g/cm³.
        density: f64,
        /// State of matter.
        state_of_matter: StateOfMatter,
        /// Constituents.
        elements: Vec<Element>,
        /// Predefined medium whose stopping power tables are reused.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        external_stopping_power_from_predefined: Option<String>,
    },
    /// Voxelized medium from a CT scan.
    Voxel {},
}

/// One constituent of a compound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Isotope name, e.g. `h-1` or `c-*` for the natural mixture.
    pub isotope: String,
    /// Number of atoms per molecule.
    pub relative_stoichiometric_fraction: i64,
    /// Atomic mass override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atomic_mass: Option<f64>,
    /// Mean excitation energy override in eV.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i_value: Option<f64>,
}

/// Physical state of a medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateOfMatter {
    /// Solid.
    Solid,
    /// Gas.
    Gas,
    /// Liquid.
    Liquid,
}
