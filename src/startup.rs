use crate::class_labels;
use crate::config::{ClassifierBackend, Config};
use crate::error::{ConfigWarning, StartupError};
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::preprocess::blank_tensor;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Everything a session needs that is built once per process.
#[derive(Clone)]
pub struct Services {
    pub classifier: Arc<dyn ImageClassifier + Send + Sync>,
    pub labels: Arc<[String]>,
    pub warnings: Vec<ConfigWarning>,
}

pub fn boot(config: &Config, logger: Arc<dyn Logger + Send + Sync>) -> Result<Services, StartupError> {
    let logger = logger.with_namespace("startup");

    let loaded = class_labels::load(&config.class_names_path)?;
    let warnings: Vec<ConfigWarning> = loaded.warning.into_iter().collect();
    for warning in &warnings {
        let _ = logger.warn(&warning.to_string());
    }
    let _ = logger.info(&format!("Using {} class labels", loaded.labels.len()));

    let classifier = load_classifier(config, &loaded.labels, logger.clone())?;

    validate_output_width(classifier.as_ref(), &loaded.labels, config.input_size)?;

    Ok(Services {
        classifier,
        labels: loaded.labels,
        warnings,
    })
}

fn load_classifier(
    config: &Config,
    labels: &[String],
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<dyn ImageClassifier + Send + Sync>, StartupError> {
    match &config.classifier {
        ClassifierBackend::TractOnnx { model_path } => {
            let classifier = ImageClassifierTractOnnx::new(model_path, config.input_size, logger)
                .map_err(|source| StartupError::ModelLoad {
                    path: model_path.clone(),
                    source,
                })?;
            Ok(Arc::new(classifier))
        }
        ClassifierBackend::Fake {
            probabilities: Some(probabilities),
        } => Ok(Arc::new(ImageClassifierFake::with_probabilities(
            logger,
            probabilities.clone(),
        ))),
        ClassifierBackend::Fake {
            probabilities: None,
        } => Ok(Arc::new(ImageClassifierFake::new(logger, labels.len()))),
    }
}

/// Runs one blank image through the model so a label file that does not
/// match the model's output width fails here rather than mid-session.
fn validate_output_width(
    classifier: &(dyn ImageClassifier + Send + Sync),
    labels: &[String],
    input_size: u32,
) -> Result<(), StartupError> {
    let probe = classifier
        .predict(&blank_tensor(input_size))
        .map_err(|source| StartupError::ClassifierProbe { source })?;

    if probe.len() != labels.len() {
        return Err(StartupError::ClassCountMismatch {
            labels: labels.len(),
            outputs: probe.len(),
        });
    }

    Ok(())
}
