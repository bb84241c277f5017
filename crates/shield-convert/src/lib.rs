#![warn(missing_docs)]

//! SHIELD-HIT12A input serialization and result decoding.
//!
//! Converts an engine-agnostic [`Setup`](shield_ir::Setup) into the four
//! fixed-column input files of the SHIELD-HIT12A transport engine
//! (`mat.dat`, `geo.dat`, `beam.dat`, `detect.dat`), and decodes the binary
//! `.bdo` files a run produces back into per-detector result grids.
//!
//! Zones are written as unions of signed body intersections; the boolean
//! rewriting lives in [`algebra`]. Engine numbering of materials, bodies and
//! detector files is recorded in a [`SimulationContext`] that must be passed
//! to the decoder.
//!
//! # Example
//!
//! ```no_run
//! use shield_convert::{parse_results, read_result_files, serialize};
//! use shield_ir::Setup;
//!
//! let setup = Setup::from_json(&std::fs::read_to_string("setup.json").unwrap()).unwrap();
//! let out = serialize(&setup).unwrap();
//! for (name, content) in &out.files {
//!     std::fs::write(name, content).unwrap();
//! }
//!
//! // ... run the engine ...
//!
//! let files = read_result_files("results").unwrap();
//! let result = parse_results(&files, &out.context);
//! println!("{}", result.to_json().unwrap());
//! ```

pub mod algebra;
mod context;
mod error;
pub mod input;
pub mod results;
pub mod tables;
pub mod writer;

pub use context::{
    assign_body_ids, assign_material_ids, blackhole_id, vacuum_ids, IdMap, SimulationContext,
    MAX_MATERIALS,
};
pub use error::{DecodeError, EntityKind, Result, SerializeError};
pub use results::{
    decode_bdo, parse_results, parse_results_with, read_bdo, read_result_files,
    read_results_dir, DecodeOptions,
};
pub use writer::format::{column_indicators, float_to_fixed_width};
pub use writer::{serialize, Serialized};
