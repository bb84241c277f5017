//! Decoded simulation output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::DetectorId;

/// Results of one simulation run, one entry per successfully decoded detector.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Per-detector results.
    pub detectors: Vec<DetectorResult>,
}

impl SimulationResult {
    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Result for the given detector, if it was decoded.
    pub fn detector(&self, id: DetectorId) -> Option<&DetectorResult> {
        self.detectors.iter().find(|d| d.detector_id == id)
    }
}

/// Scored values of one detector.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectorResult {
    /// Detector the values belong to.
    pub detector_id: DetectorId,
    /// Run information reported by the engine.
    pub metadata: BTreeMap<String, String>,
    /// Non-fatal problems found while decoding.
    pub errors: BTreeMap<String, String>,
    /// Grid shape.
    pub dimensions: Dimensions,
    /// Values indexed `[z][y][x]`.
    pub data: Vec<Vec<Vec<f64>>>,
}

/// Shape of a detector result grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    /// Number of axes with more than one bin.
    pub number_of_dimensions: usize,
    /// Bins along the first axis.
    pub segment_x: usize,
    /// Bins along the second axis.
    pub segment_y: usize,
    /// Bins along the third axis.
    pub segment_z: usize,
}

impl Dimensions {
    /// Build from the three segment counts.
    pub fn from_segments(x: usize, y: usize, z: usize) -> Self {
        let number_of_dimensions = [x, y, z].iter().filter(|&&s| s > 1).count();
        Self {
            number_of_dimensions,
            segment_x: x,
            segment_y: y,
            segment_z: z,
        }
    }

    /// Total number of cells, or `None` when the product overflows `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        self.segment_x
            .checked_mul(self.segment_y)?
            .checked_mul(self.segment_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_count() {
        assert_eq!(Dimensions::from_segments(10, 20, 1).number_of_dimensions, 2);
        assert_eq!(Dimensions::from_segments(1, 1, 1).number_of_dimensions, 0);
        assert_eq!(Dimensions::from_segments(2, 3, 4).cell_count(), Some(24));
        assert_eq!(Dimensions::from_segments(1 << 40, 1 << 40, 1).cell_count(), None);
    }

    #[test]
    fn test_result_json_field_names() {
        let result = SimulationResult {
            detectors: vec![DetectorResult {
                detector_id: 7,
                ..Default::default()
            }],
        };
        let json = result.to_json().unwrap();
        assert!(json.contains("\"detectorId\": 7"));
        assert!(result.detector(7).is_some());
        assert!(result.detector(8).is_none());
    }
}
