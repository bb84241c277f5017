//! Decoding of the engine's binary result files.
//!
//! A run writes one `.bdo` file per detector. [`parse_results`] decodes a
//! batch of them and attaches each to its detector through the
//! [`SimulationContext`] produced by the conversion. A malformed file is
//! logged and skipped; it never fails the batch.

mod bdo;
mod dtype;
mod tags;

pub use bdo::{decode_bdo, read_bdo, read_header, Token, TokenReader, MAGIC, VERSION};
pub use dtype::{ByteOrder, DataType};
pub use tags::{tag_kind, TagKind};

use std::collections::BTreeMap;
use std::path::Path;

use rayon::prelude::*;
use shield_ir::{DetectorResult, SimulationResult};
use tracing::{info, warn};

use crate::context::SimulationContext;
use crate::error::DecodeError;

/// Extension of result files.
pub const BDO_EXTENSION: &str = ".bdo";

/// Batch decoding settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Decode files on the rayon thread pool.
    pub parallel: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

fn decode_for_detector(
    filename: &str,
    data: &[u8],
    context: &SimulationContext,
) -> Result<DetectorResult, DecodeError> {
    let detector_id = context
        .detector_for_file(filename)
        .ok_or_else(|| DecodeError::UnknownDetectorFile(filename.to_string()))?;
    let mut result = decode_bdo(filename, data)?;
    result.detector_id = detector_id;
    Ok(result)
}

/// Decode every `.bdo` file of a batch with default options.
pub fn parse_results(
    files: &BTreeMap<String, Vec<u8>>,
    context: &SimulationContext,
) -> SimulationResult {
    parse_results_with(files, context, DecodeOptions::default())
}

/// Decode every `.bdo` file of a batch.
///
/// Files with other extensions are ignored. Results are ordered by file name.
pub fn parse_results_with(
    files: &BTreeMap<String, Vec<u8>>,
    context: &SimulationContext,
    options: DecodeOptions,
) -> SimulationResult {
    let batch: Vec<(&String, &Vec<u8>)> = files
        .iter()
        .filter(|(name, _)| name.ends_with(BDO_EXTENSION))
        .collect();

    let decoded: Vec<(&String, Result<DetectorResult, DecodeError>)> = if options.parallel {
        batch
            .par_iter()
            .map(|&(name, data)| (name, decode_for_detector(name, data, context)))
            .collect()
    } else {
        batch
            .iter()
            .map(|&(name, data)| (name, decode_for_detector(name, data, context)))
            .collect()
    };

    let detectors: Vec<DetectorResult> = decoded
        .into_iter()
        .filter_map(|(name, result)| match result {
            Ok(result) => Some(result),
            Err(e) => {
                warn!(file = %name, error = %e, "skipping result file");
                None
            }
        })
        .collect();
    info!(
        files = batch.len(),
        decoded = detectors.len(),
        "result files decoded"
    );
    SimulationResult { detectors }
}

/// Read every `.bdo` file directly inside `dir`, keyed by file name.
pub fn read_result_files(dir: impl AsRef<Path>) -> Result<BTreeMap<String, Vec<u8>>, DecodeError> {
    let mut files = BTreeMap::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(BDO_EXTENSION) && entry.file_type()?.is_file() {
            files.insert(name, std::fs::read(entry.path())?);
        }
    }
    Ok(files)
}

/// Decode all results a run left in `dir`.
pub fn read_results_dir(
    dir: impl AsRef<Path>,
    context: &SimulationContext,
) -> Result<SimulationResult, DecodeError> {
    let files = read_result_files(dir)?;
    Ok(parse_results(&files, context))
}


#[cfg(test)]
mod tests {
    use super::testing::BdoWriter;
    use super::*;
    use crate::results::tags::{DATA, DIMENSIONS};
    use approx::assert_relative_eq;

    fn context() -> SimulationContext {
        SimulationContext {
            detector_files: [("alpha0", 10), ("beta1", 20), ("gamma2", 30)]
                .into_iter()
                .map(|(name, id)| (name.to_string(), id))
                .collect(),
            ..SimulationContext::default()
        }
    }

    fn file(value: f64) -> Vec<u8> {
        let mut file = BdoWriter::little();
        file.i64s(DIMENSIONS, &[1, 1, 1]).f64s(DATA, &[value]);
        file.finish()
    }

    fn batch() -> BTreeMap<String, Vec<u8>> {
        let mut truncated = file(2.0);
        truncated.truncate(truncated.len() - 4);
        [
            ("alpha0.bdo", file(1.0)),
            ("beta1.bdo", truncated),
            ("gamma2.bdo", file(3.0)),
            ("notes.txt", b"not a result".to_vec()),
        ]
        .into_iter()
        .map(|(name, data)| (name.to_string(), data))
        .collect()
    }

    #[test]
    fn test_batch_skips_broken_file() {
        for parallel in [false, true] {
            let result = parse_results_with(&batch(), &context(), DecodeOptions { parallel });
            let ids: Vec<i64> = result.detectors.iter().map(|d| d.detector_id).collect();
            assert_eq!(ids, vec![10, 30]);
            assert_relative_eq!(result.detectors[0].data[0][0][0], 1.0);
            assert_relative_eq!(result.detectors[1].data[0][0][0], 3.0);
            assert_eq!(result.detectors[1].metadata["filename"], "gamma2.bdo");
        }
    }

    #[test]
    fn test_batch_skips_overflowing_dimensions() {
        let mut huge = BdoWriter::little();
        huge.i64s(DIMENSIONS, &[1 << 32, 1 << 32, 1]).f64s(DATA, &[2.0]);
        let mut files = batch();
        files.insert("beta1.bdo".to_string(), huge.finish());

        let err = decode_for_detector("beta1.bdo", &files["beta1.bdo"], &context()).unwrap_err();
        assert!(matches!(err, DecodeError::DimensionsOverflow { .. }));

        for parallel in [false, true] {
            let result = parse_results_with(&files, &context(), DecodeOptions { parallel });
            let ids: Vec<i64> = result.detectors.iter().map(|d| d.detector_id).collect();
            assert_eq!(ids, vec![10, 30]);
            assert_relative_eq!(result.detectors[1].data[0][0][0], 3.0);
        }
    }

    #[test]
    fn test_unknown_file_is_skipped() {
        let mut files = batch();
        files.insert("delta3.bdo".to_string(), file(4.0));
        let result = parse_results(&files, &context());
        assert_eq!(result.detectors.len(), 2);
        assert!(result.detector(10).is_some());
        assert!(result.detector(30).is_some());

        let err = decode_for_detector("delta3.bdo", &file(4.0), &context()).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownDetectorFile(name) if name == "delta3.bdo"));
    }

    #[test]
    fn test_empty_batch() {
        let result = parse_results(&BTreeMap::new(), &context());
        assert!(result.detectors.is_empty());
    }

    #[test]
    fn test_read_results_dir() {
        let dir = std::env::temp_dir().join(format!("shield-results-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        for (name, data) in batch() {
            std::fs::write(dir.join(name), data).unwrap();
        }

        let files = read_result_files(&dir).unwrap();
        assert_eq!(files.len(), 3);
        let result = read_results_dir(&dir, &context()).unwrap();
        assert_eq!(result.detectors.len(), 2);

        let single = read_bdo(dir.join("alpha0.bdo")).unwrap();
        assert_eq!(single.metadata["filename"], "alpha0.bdo");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
