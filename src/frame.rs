//! Packed per-frame detection data, as produced by the inference side.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::DetectionError;
use crate::types::{Detection, NormalizationRatio};

/// Three parallel arrays plus the frame's ratio.
/// `boxes` holds four coordinates per detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackedFrame {
    pub boxes: Vec<f32>,
    pub scores: Vec<f32>,
    pub classes: Vec<i64>,
    #[serde(default)]
    pub ratio: NormalizationRatio,
}

impl PackedFrame {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read frame {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("failed to parse frame {}", path.display()))
    }

    pub fn pack(detections: &[Detection], ratio: NormalizationRatio) -> Self {
        Self {
            boxes: detections.iter().flat_map(|d| d.bbox).collect(),
            scores: detections.iter().map(|d| d.score).collect(),
            classes: detections.iter().map(|d| d.class).collect(),
            ratio,
        }
    }

    pub fn detections(&self) -> Result<Vec<Detection>, DetectionError> {
        unpack_detections(&self.boxes, &self.scores, &self.classes)
    }
}

/// Validates and zips packed arrays into records. Nothing is truncated:
/// any length disagreement is an error.
pub fn unpack_detections(
    boxes: &[f32],
    scores: &[f32],
    classes: &[i64],
) -> Result<Vec<Detection>, DetectionError> {
    if boxes.len() % 4 != 0 {
        return Err(DetectionError::RaggedBoxes(boxes.len()));
    }
    if scores.len() != classes.len() {
        return Err(DetectionError::ScoreClassMismatch {
            scores: scores.len(),
            classes: classes.len(),
        });
    }
    if boxes.len() / 4 != scores.len() {
        return Err(DetectionError::BoxScoreMismatch {
            boxes: boxes.len() / 4,
            scores: scores.len(),
        });
    }

    Ok(boxes
        .chunks_exact(4)
        .zip(scores.iter().zip(classes))
        .map(|(b, (&score, &class))| Detection::new([b[0], b[1], b[2], b[3]], score, class))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_in_order() {
        let boxes = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];
        let dets = unpack_detections(&boxes, &[0.9, 0.4], &[1, 0]).unwrap();
        assert_eq!(dets.len(), 2);
        assert_eq!(dets[0], Detection::new([0.1, 0.2, 0.3, 0.4], 0.9, 1));
        assert_eq!(dets[1].class, 0);
    }

    #[test]
    fn rejects_contract_violations() {
        assert_eq!(
            unpack_detections(&[0.0; 6], &[0.5], &[0]),
            Err(DetectionError::RaggedBoxes(6))
        );
        assert_eq!(
            unpack_detections(&[0.0; 4], &[0.5], &[0, 1]),
            Err(DetectionError::ScoreClassMismatch { scores: 1, classes: 2 })
        );
        assert_eq!(
            unpack_detections(&[0.0; 8], &[0.5], &[0]),
            Err(DetectionError::BoxScoreMismatch { boxes: 2, scores: 1 })
        );
        assert_eq!(unpack_detections(&[], &[], &[]), Ok(Vec::new()));
    }

    #[test]
    fn parses_frame_json() {
        let json = r#"{
            "boxes": [0.1, 0.1, 0.2, 0.2],
            "scores": [0.75],
            "classes": [1],
            "ratio": [1.0, 0.75]
        }"#;
        let frame: PackedFrame = serde_json::from_str(json).unwrap();
        assert_eq!(frame.ratio, NormalizationRatio::new(1.0, 0.75));
        let dets = frame.detections().unwrap();
        assert_eq!(PackedFrame::pack(&dets, frame.ratio), frame);
    }

    #[test]
    fn ratio_defaults_to_identity() {
        let frame: PackedFrame = serde_json::from_str(r#"{"boxes": [], "scores": [], "classes": []}"#).unwrap();
        assert_eq!(frame.ratio, NormalizationRatio::default());
    }
}
