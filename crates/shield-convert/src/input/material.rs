//! `mat.dat` media built from setup materials.

use std::collections::HashMap;

use shield_ir::{Element, Material, MaterialKind};

use crate::context::IdMap;
use crate::error::{EntityKind, Result, SerializeError};
use crate::tables;

/// Most elements a compound may list.
pub const MAX_COMPOUND_ELEMENTS: usize = 13;

const FILE: &str = "mat.dat";

/// One `MEDIUM` block.
#[derive(Debug, Clone, PartialEq)]
pub enum Medium {
    /// Medium taken from the engine's ICRU table.
    Predefined(PredefinedMedium),
    /// Medium defined nuclide by nuclide.
    Compound(CompoundMedium),
}

impl Medium {
    /// Engine medium number.
    pub fn id(&self) -> i64 {
        match self {
            Self::Predefined(m) => m.id,
            Self::Compound(m) => m.id,
        }
    }
}

/// Predefined medium with optional overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct PredefinedMedium {
    /// Engine medium number.
    pub id: i64,
    /// ICRU code.
    pub icru: i64,
    /// `STATE` code, if overridden.
    pub state: Option<i64>,
    /// `RHO`, if overridden.
    pub density: Option<f64>,
    /// Emit a bare `LOADDEDX`.
    pub load_dedx: bool,
}

/// User-defined compound.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundMedium {
    /// Engine medium number.
    pub id: i64,
    /// `STATE` code.
    pub state: i64,
    /// `RHO`.
    pub density: f64,
    /// Constituents.
    pub nuclides: Vec<Nuclide>,
    /// ICRU code whose stopping power tables are loaded.
    pub dedx_from: Option<i64>,
}

/// One `NUCLID` entry of a compound.
#[derive(Debug, Clone, PartialEq)]
pub struct Nuclide {
    /// NUCLID code.
    pub code: i64,
    /// Atoms per molecule.
    pub fraction: i64,
    /// `AMASS`, when positive.
    pub atomic_mass: Option<f64>,
    /// `IVALUE`, when positive.
    pub i_value: Option<f64>,
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

fn icru_for(id: i64, name: &str) -> Result<i64> {
    tables::icru_code(name).ok_or_else(|| {
        SerializeError::entity(
            EntityKind::Material,
            id,
            FILE,
            format!("\"{}\" material mapping to shield format not found", name),
        )
    })
}

fn nuclide(id: i64, element: &Element) -> Result<Nuclide> {
    let code = tables::nuclid_code(&element.isotope).ok_or_else(|| {
        SerializeError::entity(
            EntityKind::Material,
            id,
            FILE,
            format!(
                "\"{}\" isotope mapping to shield format not found",
                element.isotope
            ),
        )
    })?;
    Ok(Nuclide {
        code,
        fraction: element.relative_stoichiometric_fraction,
        atomic_mass: positive(element.atomic_mass),
        i_value: positive(element.i_value),
    })
}

fn convert_material(engine_id: i64, material: &Material) -> Result<Medium> {
    let id = material.id;
    match &material.kind {
        MaterialKind::Predefined {
            name,
            density,
            state_of_matter,
            load_external_stopping_power,
        } => Ok(Medium::Predefined(PredefinedMedium {
            id: engine_id,
            icru: icru_for(id, name)?,
            state: state_of_matter.map(tables::state_code),
            density: positive(*density),
            load_dedx: *load_external_stopping_power,
        })),
        MaterialKind::Compound {
            density,
            state_of_matter,
            elements,
            external_stopping_power_from_predefined,
            ..
        } => {
            if !(density.is_finite() && *density > 0.0) {
                return Err(SerializeError::entity(
                    EntityKind::Material,
                    id,
                    FILE,
                    format!("Compound density must be positive, got {}", density),
                ));
            }
            if elements.len() > MAX_COMPOUND_ELEMENTS {
                return Err(SerializeError::entity(
                    EntityKind::Material,
                    id,
                    FILE,
                    format!(
                        "Only {} elements for Compound are permitted in shield ({} > {})",
                        MAX_COMPOUND_ELEMENTS,
                        elements.len(),
                        MAX_COMPOUND_ELEMENTS
                    ),
                ));
            }
            let nuclides = elements
                .iter()
                .map(|element| nuclide(id, element))
                .collect::<Result<Vec<_>>>()?;
            let dedx_from = external_stopping_power_from_predefined
                .as_deref()
                .map(|name| icru_for(id, name))
                .transpose()?;
            Ok(Medium::Compound(CompoundMedium {
                id: engine_id,
                state: tables::state_code(*state_of_matter),
                density: *density,
                nuclides,
                dedx_from,
            }))
        }
        MaterialKind::Voxel {} => Err(SerializeError::entity(
            EntityKind::Material,
            id,
            FILE,
            "Voxel material serialization not implemented",
        )),
    }
}

/// Build every medium in engine-number order.
pub fn convert_materials(materials: &[Material], ids: &IdMap) -> Result<Vec<Medium>> {
    let by_id: HashMap<i64, &Material> = materials.iter().map(|m| (m.id, m)).collect();
    ids.iter()
        .filter_map(|(engine, domain)| by_id.get(&domain).map(|m| (engine, *m)))
        .map(|(engine, material)| convert_material(engine, material))
        .collect()
}
