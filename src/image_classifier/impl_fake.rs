use crate::image_classifier::interface::{ImageClassifier, ImageTensor};
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

enum FakeOutput {
    Fixed(Vec<f32>),
    Random { num_classes: usize },
}

pub struct ImageClassifierFake {
    output: FakeOutput,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, num_classes: usize) -> Self {
        Self {
            output: FakeOutput::Random { num_classes },
            logger: logger.with_namespace("classifier").with_namespace("fake"),
        }
    }

    pub fn with_probabilities(logger: Arc<dyn Logger + Send + Sync>, probabilities: Vec<f32>) -> Self {
        Self {
            output: FakeOutput::Fixed(probabilities),
            logger: logger.with_namespace("classifier").with_namespace("fake"),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn predict(&self, _tensor: &ImageTensor) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Classifying image with fake classifier...")?;

        match &self.output {
            FakeOutput::Fixed(probabilities) => Ok(probabilities.clone()),
            FakeOutput::Random { num_classes } => {
                let mut rng = rand::rng();
                let weight_dist = Uniform::new(0.0f32, 1.0)?;

                let weights: Vec<f32> = (0..*num_classes)
                    .map(|_| weight_dist.sample(&mut rng))
                    .collect();
                let total: f32 = weights.iter().sum();

                if total <= 0.0 {
                    return Ok(vec![1.0 / *num_classes as f32; *num_classes]);
                }

                Ok(weights.iter().map(|w| w / total).collect())
            }
        }
    }
}
