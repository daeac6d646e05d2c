//! Model loading, validation, and inference

use crate::labels::{CLASS_LABELS, NUM_CLASSES};
use crate::{preprocess, ClassifierError};
use image::DynamicImage;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tract_onnx::prelude::*;

/// Conventional artifact location
pub const DEFAULT_MODEL_PATH: &str = "model/solar_model.onnx";

/// Minimum plausible artifact size. The exported backbone weighs tens of
/// megabytes; anything under this is a truncated or empty export. A size
/// floor is a heuristic, not an integrity check.
pub const MIN_ARTIFACT_BYTES: u64 = 1024 * 1024;

/// Classification result for one image
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    /// Label of the maximum-probability class
    pub fault_type: &'static str,
    /// Probability mass of the winning class, in [0, 1]
    pub confidence: f32,
    /// Softmax distribution over all classes, network head order
    pub probabilities: [f32; NUM_CLASSES],
}

impl Classification {
    /// Distribution as (label, probability) pairs, head order
    pub fn probability_map(&self) -> Vec<(&'static str, f32)> {
        CLASS_LABELS.iter().copied().zip(self.probabilities).collect()
    }

    /// Probability assigned to one class label
    pub fn probability_for(&self, label: &str) -> Option<f32> {
        CLASS_LABELS
            .iter()
            .position(|l| *l == label)
            .map(|i| self.probabilities[i])
    }
}

/// Loaded, validated classification network
///
/// Load once per process; `classify` takes `&self` and the underlying tract
/// plan supports concurrent forward passes. Inference is deterministic and
/// never mutates parameters.
#[derive(Debug)]
pub struct FaultModel {
    plan: TypedRunnableModel<TypedModel>,
    path: PathBuf,
}

impl FaultModel {
    /// Load and validate the ONNX artifact
    ///
    /// Fails with `ArtifactMissing` when no file exists at the path, and
    /// with `ArtifactCorrupt` when the file is undersized, fails to parse,
    /// or does not end in an 8-wide classification head.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(ClassifierError::ArtifactMissing {
                path: path.to_path_buf(),
            });
        }

        let corrupt = |reason: String| ClassifierError::ArtifactCorrupt {
            path: path.to_path_buf(),
            reason,
        };

        let size = fs::metadata(path).map_err(|e| corrupt(e.to_string()))?.len();
        if size < MIN_ARTIFACT_BYTES {
            return Err(corrupt(format!(
                "file is {} bytes, below the {} byte minimum",
                size, MIN_ARTIFACT_BYTES
            )));
        }

        let model = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|m| {
                m.with_input_fact(
                    0,
                    InferenceFact::dt_shape(
                        f32::datum_type(),
                        tvec!(1, 3, 224, 224),
                    ),
                )
            })
            .and_then(|m| m.into_optimized())
            .map_err(|e| corrupt(e.to_string()))?;

        let output = model.output_fact(0).map_err(|e| corrupt(e.to_string()))?;
        match output.shape.as_concrete() {
            Some(dims) if dims.last() == Some(&NUM_CLASSES) => {}
            Some(dims) => {
                return Err(corrupt(format!(
                    "output head has shape {:?}, expected {} classes",
                    dims, NUM_CLASSES
                )))
            }
            None => return Err(corrupt("output head has a symbolic shape".to_string())),
        }

        let plan = model
            .into_runnable()
            .map_err(|e| corrupt(e.to_string()))?;

        info!("Loaded fault model from {} ({} bytes)", path.display(), size);
        Ok(Self {
            plan,
            path: path.to_path_buf(),
        })
    }

    /// Classify a preprocessed input tensor
    ///
    /// Runs one forward pass, softmaxes the raw class scores, and returns
    /// the winning label with the full distribution. Forward-pass failures
    /// propagate; there are no retries.
    pub fn classify(&self, input: Tensor) -> Result<Classification, ClassifierError> {
        let outputs = self
            .plan
            .run(tvec!(input.into()))
            .map_err(|e| ClassifierError::InferenceFailed(e.to_string()))?;

        let view = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::InferenceFailed(e.to_string()))?;
        let scores: Vec<f32> = view.iter().copied().collect();
        let scores: [f32; NUM_CLASSES] = scores.try_into().map_err(|v: Vec<f32>| {
            ClassifierError::InferenceFailed(format!(
                "expected {} class scores, got {}",
                NUM_CLASSES,
                v.len()
            ))
        })?;

        let probabilities = softmax(&scores);
        let (winner, confidence) = probabilities
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap_or((0, 0.0));

        debug!(
            "Classified as {} ({:.3} confidence)",
            CLASS_LABELS[winner], confidence
        );
        Ok(Classification {
            fault_type: CLASS_LABELS[winner],
            confidence,
            probabilities,
        })
    }

    /// Preprocess and classify a decoded image
    pub fn classify_image(&self, image: &DynamicImage) -> Result<Classification, ClassifierError> {
        self.classify(preprocess::image_to_tensor(image))
    }

    /// Path the artifact was loaded from
    pub fn artifact_path(&self) -> &Path {
        &self.path
    }
}

/// Numerically stable softmax over the raw class scores
fn softmax(scores: &[f32; NUM_CLASSES]) -> [f32; NUM_CLASSES] {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let mut out = [0.0f32; NUM_CLASSES];
    let mut sum = 0.0f32;
    for (o, s) in out.iter_mut().zip(scores) {
        *o = (s - max).exp();
        sum += *o;
    }
    for o in &mut out {
        *o /= sum;
    }
    out
}
