//! Engine-side representation of a setup, one part per input file.

mod body;
mod detector;
mod material;
mod zone;

pub use body::{blackhole, BodyCard, BLACKHOLE_SIZE};
pub use detector::{result_filename, Argument, DetectorCard};
pub use material::{CompoundMedium, Medium, Nuclide, PredefinedMedium, MAX_COMPOUND_ELEMENTS};
pub use zone::{ZoneCard, ZoneForest, ZoneRefs};

use shield_ir::Setup;
use tracing::debug;

use crate::context::{
    assign_body_ids, assign_material_ids, blackhole_id, vacuum_ids, SimulationContext,
};
use crate::error::{Result, SerializeError};

/// Everything the four card writers need.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineInput {
    /// `mat.dat` media.
    pub media: Vec<Medium>,
    /// `geo.dat` bodies, blackhole last.
    pub bodies: Vec<BodyCard>,
    /// `geo.dat` zones in emission order, blackhole zone last.
    pub zones: Vec<ZoneCard>,
    /// `detect.dat` detectors.
    pub detectors: Vec<DetectorCard>,
}

/// Reject setups missing any of the collections a run needs.
pub fn check_complete(setup: &Setup) -> Result<()> {
    let missing = [
        ("bodies", setup.bodies.is_empty()),
        ("zones", setup.zones.is_empty()),
        ("materials", setup.materials.is_empty()),
        ("detectors", setup.detectors.is_empty()),
    ]
    .into_iter()
    .find(|(_, empty)| *empty);
    match missing {
        Some((collection, _)) => Err(SerializeError::IncompleteSetup(collection)),
        None => Ok(()),
    }
}

/// Number every entity and translate the setup into engine cards.
pub fn prepare(setup: &Setup) -> Result<(EngineInput, SimulationContext)> {
    check_complete(setup)?;

    let material_ids = assign_material_ids(&setup.materials)?;
    let body_ids = assign_body_ids(&setup.bodies)?;
    let vacuum = vacuum_ids(&setup.materials);
    debug!(
        materials = material_ids.len(),
        vacuum = vacuum.len(),
        bodies = body_ids.len(),
        "engine IDs assigned"
    );

    let media = material::convert_materials(&setup.materials, &material_ids)?;

    let blackhole_body = blackhole_id(&body_ids);
    let mut bodies = body::convert_bodies(&setup.bodies, &body_ids)?;
    bodies.push(blackhole(blackhole_body));

    let refs = ZoneRefs {
        bodies: &body_ids,
        materials: &material_ids,
        vacuum: &vacuum,
        blackhole: blackhole_body,
    };
    let zones = ZoneForest::build(&setup.zones, &refs)?.into_cards();

    let (detectors, detector_files) =
        detector::convert_detectors(&setup.detectors, &material_ids, &vacuum)?;

    let context = SimulationContext {
        material_ids,
        body_ids,
        detector_files,
    };
    Ok((
        EngineInput {
            media,
            bodies,
            zones,
            detectors,
        },
        context,
    ))
}
