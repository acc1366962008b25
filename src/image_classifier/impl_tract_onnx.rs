use crate::image_classifier::interface::{ImageClassifier, ImageTensor};
use crate::library::logger::interface::Logger;
use std::path::Path;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    /// Loads, types and optimizes the model once. The input is pinned to a
    /// single NHWC image so exported models with a dynamic batch axis
    /// still optimize.
    pub fn new(
        model_path: &Path,
        input_size: u32,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger.with_namespace("classifier").with_namespace("tract");
        logger.info(&format!("Loading model from {}", model_path.display()))?;

        let size = input_size as usize;
        let model = tract_onnx::onnx()
            .model_for_path(model_path)?
            .with_input_fact(0, f32::fact([1, size, size, 3]).into())?
            .into_optimized()?
            .into_runnable()?;

        logger.info("Model loaded")?;

        Ok(Self { model, logger })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn predict(&self, tensor: &ImageTensor) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let input: Tensor = tensor.clone().into_tensor();
        let outputs = self.model.run(tvec!(input.into_tvalue()))?;

        let output = outputs
            .first()
            .ok_or("model produced no outputs")?
            .to_array_view::<f32>()?;

        let probabilities: Vec<f32> = output.iter().copied().collect();

        self.logger
            .info(&format!("Forward pass produced {} scores", probabilities.len()))?;

        Ok(probabilities)
    }
}
