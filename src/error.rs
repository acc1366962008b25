//! Error taxonomy for the classifier tool.
//!
//! Only [`StartupError`] is fatal. Everything else is scoped to a single
//! upload and is shown in the result region.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop the process before any upload is accepted.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Error loading model from {}: {source}", .path.display())]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Could not read class names file {}: {source}", .path.display())]
    ClassNamesRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Class names file {} is not a JSON array of strings: {source}", .path.display())]
    ClassNamesParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Class names file {} lists no classes", .path.display())]
    NoClassNames { path: PathBuf },

    #[error("Model failed its startup probe: {source}")]
    ClassifierProbe {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Model outputs {outputs} classes but {labels} class names are configured")]
    ClassCountMismatch { labels: usize, outputs: usize },
}

/// Non-fatal configuration problems surfaced to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    #[error("{} not found, using fallback {:?}", .path.display(), .fallback)]
    ClassNamesMissing { path: PathBuf, fallback: Vec<String> },
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Could not read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file type for {name}; upload a JPG or PNG image")]
    UnsupportedFormat { name: String },

    #[error("Could not decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },
}

impl UploadError {
    pub fn name(&self) -> &str {
        match self {
            UploadError::Read { name, .. }
            | UploadError::UnsupportedFormat { name }
            | UploadError::Decode { name, .. } => name,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("classifier returned an empty probability vector")]
    Empty,

    #[error("classifier returned {outputs} probabilities for {labels} class labels")]
    LabelCountMismatch { labels: usize, outputs: usize },
}

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Prediction failed: {0}")]
    Inference(Box<dyn std::error::Error + Send + Sync>),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
