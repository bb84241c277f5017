//! Engine ID assignment and the mapping kept for result correlation.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use shield_ir::{Body, BodyId, DetectorId, Material, MaterialId};

use crate::error::{EntityKind, Result, SerializeError};

/// Most media a single `mat.dat` may define.
pub const MAX_MATERIALS: usize = 100;

/// Bidirectional map between domain IDs and compact 1-based engine IDs.
///
/// Serialized as the engine-to-domain direction only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<i64, i64>", into = "BTreeMap<i64, i64>")]
pub struct IdMap {
    to_domain: BTreeMap<i64, i64>,
    to_engine: BTreeMap<i64, i64>,
}

impl IdMap {
    /// Number engine IDs 1..=N over `domain_ids` in ascending order.
    fn assign(mut domain_ids: Vec<i64>) -> Self {
        domain_ids.sort_unstable();
        let mut map = Self::default();
        for (index, domain) in domain_ids.into_iter().enumerate() {
            let engine = index as i64 + 1;
            map.to_domain.insert(engine, domain);
            map.to_engine.insert(domain, engine);
        }
        map
    }

    /// Engine ID of a domain entity.
    pub fn engine(&self, domain: i64) -> Option<i64> {
        self.to_engine.get(&domain).copied()
    }

    /// Domain ID of an engine entity.
    pub fn domain(&self, engine: i64) -> Option<i64> {
        self.to_domain.get(&engine).copied()
    }

    /// Number of mapped entities.
    pub fn len(&self) -> usize {
        self.to_domain.len()
    }

    /// Whether nothing is mapped.
    pub fn is_empty(&self) -> bool {
        self.to_domain.is_empty()
    }

    /// `(engine, domain)` pairs in engine order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.to_domain.iter().map(|(&e, &d)| (e, d))
    }
}

impl From<BTreeMap<i64, i64>> for IdMap {
    fn from(to_domain: BTreeMap<i64, i64>) -> Self {
        let to_engine = to_domain.iter().map(|(&e, &d)| (d, e)).collect();
        Self {
            to_domain,
            to_engine,
        }
    }
}

impl From<IdMap> for BTreeMap<i64, i64> {
    fn from(map: IdMap) -> Self {
        map.to_domain
    }
}

/// Everything needed to relate engine output back to the setup it came from.
///
/// Produced once per conversion and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationContext {
    /// Engine medium number ↔ material ID.
    pub material_ids: IdMap,
    /// Engine body number ↔ body ID.
    pub body_ids: IdMap,
    /// Result file stem → detector ID.
    pub detector_files: BTreeMap<String, DetectorId>,
}

impl SimulationContext {
    /// Detector whose results are written to `filename`.
    ///
    /// Accepts the bare stem or any name with an extension, e.g. `dose0.bdo`.
    pub fn detector_for_file(&self, filename: &str) -> Option<DetectorId> {
        let stem = filename
            .rsplit_once('.')
            .map_or(filename, |(stem, _)| stem);
        self.detector_files.get(stem).copied()
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn check_unique(
    ids: impl IntoIterator<Item = i64>,
    kind: EntityKind,
    file: &'static str,
) -> Result<Vec<i64>> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SerializeError::entity(kind, id, file, "duplicate ID"));
        }
        unique.push(id);
    }
    Ok(unique)
}

/// Assign medium numbers to every non-vacuum material.
pub fn assign_material_ids(materials: &[Material]) -> Result<IdMap> {
    let ids = check_unique(
        materials.iter().filter(|m| !m.is_vacuum()).map(|m| m.id),
        EntityKind::Material,
        "mat.dat",
    )?;
    if ids.len() > MAX_MATERIALS {
        return Err(SerializeError::general(
            "mat.dat",
            format!(
                "Only {} distinct materials are permitted in shield ({} > {})",
                MAX_MATERIALS,
                ids.len(),
                MAX_MATERIALS
            ),
        ));
    }
    Ok(IdMap::assign(ids))
}

/// Assign body numbers to every body.
pub fn assign_body_ids(bodies: &[Body]) -> Result<IdMap> {
    let ids = check_unique(bodies.iter().map(|b| b.id), EntityKind::Body, "geo.dat")?;
    Ok(IdMap::assign(ids))
}

/// Domain IDs of every vacuum material.
pub fn vacuum_ids(materials: &[Material]) -> HashSet<MaterialId> {
    materials
        .iter()
        .filter(|m| m.is_vacuum())
        .map(|m| m.id)
        .collect()
}

/// Engine ID the blackhole body gets after all real bodies.
pub fn blackhole_id(body_ids: &IdMap) -> BodyId {
    body_ids.len() as BodyId + 1
}
