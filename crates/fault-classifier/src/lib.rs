//! Solar Panel Fault Classifier
//!
//! Loads the exported ONNX classification network, validates the artifact,
//! and runs single-image inference producing a fault label, a confidence
//! score, and the full class probability distribution.

mod labels;
mod model;
pub mod preprocess;

pub use labels::{CLASS_LABELS, NUM_CLASSES};
pub use model::{Classification, FaultModel, DEFAULT_MODEL_PATH, MIN_ARTIFACT_BYTES};

use std::path::PathBuf;
use thiserror::Error;

/// Errors during artifact loading and inference
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Weights file absent at the expected path
    #[error("model artifact not found at {path}; re-export the network to regenerate it")]
    ArtifactMissing { path: PathBuf },

    /// Weights file present but undersized or structurally invalid
    #[error("model artifact at {path} is corrupt: {reason}; re-export the network to regenerate it")]
    ArtifactCorrupt { path: PathBuf, reason: String },

    /// Input image could not be decoded
    #[error("could not decode input image: {0}")]
    InvalidImage(String),

    /// Forward pass failed; propagated, never masked
    #[error("inference failed: {0}")]
    InferenceFailed(String),
}
