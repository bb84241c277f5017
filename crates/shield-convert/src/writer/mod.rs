//! Text input files for the engine.
//!
//! [`serialize`] numbers every entity, builds the engine cards and renders
//! the four fixed-column files. The resulting [`SimulationContext`] must be
//! kept to decode the run's results.

mod beam;
mod detect;
pub mod format;
mod geo;
mod mat;

pub use beam::write_beam;
pub use detect::write_detectors;
pub use geo::{write_geometry, zone_name, GEOMETRY_NAME};
pub use mat::write_materials;

use std::collections::BTreeMap;

use shield_ir::Setup;
use tracing::info;

use crate::context::SimulationContext;
use crate::error::Result;
use crate::input::prepare;

/// Materials file name.
pub const MAT_FILE: &str = "mat.dat";
/// Geometry file name.
pub const GEO_FILE: &str = "geo.dat";
/// Beam file name.
pub const BEAM_FILE: &str = "beam.dat";
/// Detectors file name.
pub const DETECT_FILE: &str = "detect.dat";

/// Output of a conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Serialized {
    /// File name to file content.
    pub files: BTreeMap<String, String>,
    /// Numbering needed to decode results.
    pub context: SimulationContext,
}

/// Convert a setup into engine input files.
pub fn serialize(setup: &Setup) -> Result<Serialized> {
    let (input, context) = prepare(setup)?;

    let mut mat = String::new();
    write_materials(&mut mat, &input.media)?;
    let mut geo = String::new();
    write_geometry(&mut geo, &input.bodies, &input.zones)?;
    let mut beam = String::new();
    write_beam(&mut beam, &setup.beam, &setup.options)?;
    let mut detect = String::new();
    write_detectors(&mut detect, &input.detectors)?;

    info!(
        media = input.media.len(),
        bodies = input.bodies.len(),
        zones = input.zones.len(),
        detectors = input.detectors.len(),
        "setup serialized"
    );

    let files = [
        (MAT_FILE, mat),
        (GEO_FILE, geo),
        (BEAM_FILE, beam),
        (DETECT_FILE, detect),
    ]
    .into_iter()
    .map(|(name, content)| (name.to_string(), content))
    .collect();
    Ok(Serialized { files, context })
}
