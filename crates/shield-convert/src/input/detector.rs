//! `detect.dat` cards built from setup detectors.

use std::collections::{BTreeMap, HashMap, HashSet};

use shield_ir::{Detector, DetectorGeometry, DetectorId, MaterialId, Particle, ScoringType};

use crate::context::IdMap;
use crate::error::{EntityKind, Result, SerializeError};
use crate::tables;

const FILE: &str = "detect.dat";

/// A single column of a detector card.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// Floating point column.
    Float(f64),
    /// Integer column.
    Int(i64),
    /// Text column; empty for a blank column.
    Text(String),
}

impl Argument {
    fn blank() -> Self {
        Self::Text(String::new())
    }
}

/// One detector in engine form.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorCard {
    /// Detector this card was built from.
    pub detector_id: DetectorId,
    /// Geometry keyword, e.g. `MSH`.
    pub keyword: &'static str,
    /// Columns following the keyword.
    pub arguments: Vec<Argument>,
    /// Stem of the result file the engine writes.
    pub filename: String,
}

/// Lower-case ASCII alphanumerics, replace anything else with `_`, append `index`.
pub fn result_filename(name: &str, index: usize) -> String {
    let mut filename: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    filename.push_str(&index.to_string());
    filename
}

fn detector_error(detector: &Detector, message: impl Into<String>) -> SerializeError {
    SerializeError::entity(EntityKind::Detector, detector.id, FILE, message)
}

fn geometry_arguments(detector: &Detector) -> Result<(&'static str, Vec<Argument>)> {
    use Argument::{Float, Int};

    match &detector.detector_geometry {
        DetectorGeometry::Cylinder {
            radius,
            angle,
            z_value,
            slices,
        } => Ok((
            "CYL",
            vec![
                Float(radius.min),
                Float(angle.min),
                Float(z_value.min),
                Float(radius.max),
                Float(angle.max),
                Float(z_value.max),
                Int(slices.radius),
                Int(slices.angle),
                Int(slices.z),
            ],
        )),
        DetectorGeometry::Mesh {
            center,
            size,
            slices,
        } => Ok((
            "MSH",
            vec![
                Float(center.x - size.x / 2.0),
                Float(center.y - size.y / 2.0),
                Float(center.z - size.z / 2.0),
                Float(center.x + size.x / 2.0),
                Float(center.y + size.y / 2.0),
                Float(center.z + size.z / 2.0),
                Int(slices.x),
                Int(slices.y),
                Int(slices.z),
            ],
        )),
        DetectorGeometry::Plane { point, normal } => Ok((
            "PLANE",
            vec![
                Float(point.x),
                Float(point.y),
                Float(point.z),
                Float(normal.x),
                Float(normal.y),
                Float(normal.z),
                Argument::blank(),
                Argument::blank(),
                Argument::blank(),
            ],
        )),
        DetectorGeometry::Zone { .. } => Err(detector_error(
            detector,
            "Zone detector serialization not implemented",
        )),
        DetectorGeometry::Geomap { .. } => Err(detector_error(
            detector,
            "Geomap detector serialization not implemented",
        )),
    }
}

struct DetectorRefs<'a> {
    materials: &'a IdMap,
    vacuum: &'a HashSet<MaterialId>,
}

impl DetectorRefs<'_> {
    fn let_material(&self, detector: &Detector, id: MaterialId) -> Result<i64> {
        if self.vacuum.contains(&id) {
            return Ok(tables::VACUUM_CODE);
        }
        self.materials
            .engine(id)
            .ok_or_else(|| detector_error(detector, format!("Cannot find material: {}", id)))
    }
}

fn convert_detector(
    detector: &Detector,
    index: usize,
    refs: &DetectorRefs<'_>,
) -> Result<DetectorCard> {
    let (keyword, mut arguments) = geometry_arguments(detector)?;

    let particle = tables::particle_code(&detector.particle).ok_or_else(|| {
        detector_error(
            detector,
            format!("{:?} particle mapping to shield format not found", detector.particle),
        )
    })?;
    let scoring_name = detector.scoring.name();
    let scoring = tables::scoring_tag(scoring_name).ok_or_else(|| {
        detector_error(
            detector,
            format!("\"{}\" scoring type mapping to shield format not found", scoring_name),
        )
    })?;
    let filename = result_filename(&detector.name, index);

    arguments.push(Argument::Int(particle));
    arguments.push(Argument::Text(scoring.to_string()));
    arguments.push(Argument::Text(filename.clone()));

    if let Particle::HeavyIon {
        charge,
        nucleons_count,
    } = detector.particle
    {
        let let_material = match &detector.scoring {
            ScoringType::LetType { material_id, .. } => {
                Argument::Int(refs.let_material(detector, *material_id)?)
            }
            ScoringType::Predefined { .. } => Argument::blank(),
        };
        arguments.push(Argument::Int(nucleons_count));
        arguments.push(Argument::Int(charge));
        arguments.push(let_material);
        arguments.extend([Argument::blank(), Argument::blank(), Argument::blank()]);
    }

    Ok(DetectorCard {
        detector_id: detector.id,
        keyword,
        arguments,
        filename,
    })
}

/// Build every detector card, ordered by detector ID, plus the
/// result-file-to-detector map.
pub fn convert_detectors(
    detectors: &[Detector],
    materials: &IdMap,
    vacuum: &HashSet<MaterialId>,
) -> Result<(Vec<DetectorCard>, BTreeMap<String, DetectorId>)> {
    let mut sorted: Vec<&Detector> = detectors.iter().collect();
    sorted.sort_by_key(|d| d.id);

    let mut names: HashMap<&str, DetectorId> = HashMap::with_capacity(sorted.len());
    for detector in &sorted {
        if let Some(first) = names.insert(&detector.name, detector.id) {
            return Err(detector_error(
                detector,
                format!(
                    "Found name duplicates: \"{}\" for detector Ids: {} and {}",
                    detector.name, first, detector.id
                ),
            ));
        }
    }

    let refs = DetectorRefs { materials, vacuum };
    let cards = sorted
        .iter()
        .enumerate()
        .map(|(index, detector)| convert_detector(detector, index, &refs))
        .collect::<Result<Vec<_>>>()?;
    let files = cards
        .iter()
        .map(|card| (card.filename.clone(), card.detector_id))
        .collect();
    Ok((cards, files))
}
