use tract_onnx::prelude::tract_ndarray;

/// NHWC input batch: `(1, height, width, 3)` with channel values in `[0, 1]`.
pub type ImageTensor = tract_ndarray::Array4<f32>;

pub trait ImageClassifier {
    /// Returns one probability per known class, in model output order.
    fn predict(&self, tensor: &ImageTensor) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>>;
}
