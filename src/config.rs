use chrono::Offset;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierBackend {
    TractOnnx {
        model_path: PathBuf,
    },
    /// Fixed output when `probabilities` is set, otherwise a random
    /// distribution over the loaded class labels.
    #[allow(dead_code)]
    Fake {
        probabilities: Option<Vec<f32>>,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub window_title: String,
    pub classifier: ClassifierBackend,
    pub class_names_path: PathBuf,
    pub input_size: u32,
    pub top_k: usize,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Smart Waste Classifier".to_string(),
            classifier: ClassifierBackend::TractOnnx {
                model_path: PathBuf::from("waste_mobilenetv2.onnx"),
            },
            class_names_path: PathBuf::from("class_names.json"),
            input_size: 224,
            top_k: 3,
            logger_timezone: chrono::Utc.fix(),
        }
    }
}
