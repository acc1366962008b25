use super::main::WasteClassifier;
use crate::error::ClassifyError;
use crate::image_classifier::preprocess::preprocess;
use crate::prediction::{resolve, Resolution};
use crate::upload;
use crate::waste_classifier::core::{Effect, Msg, UploadedImage};

impl WasteClassifier {
    pub fn execute_effect(&self, effect: Effect) -> Msg {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::DecodeUpload(upload) => Msg::UploadDecoded {
                name: upload.name.clone(),
                result: upload::decode(&upload),
            },
            Effect::ClassifyImage(upload) => {
                let result = self.classify(&upload);
                if let Err(e) = &result {
                    let _ = self.logger.error(&format!("{}: {}", upload.name, e));
                }
                Msg::ClassifyDone { upload, result }
            }
        }
    }

    fn classify(&self, upload: &UploadedImage) -> Result<Resolution, ClassifyError> {
        let tensor = preprocess(&upload.image, self.config.input_size);

        let probabilities = self
            .image_classifier
            .predict(&tensor)
            .map_err(ClassifyError::Inference)?;

        let resolution = resolve(&probabilities, &self.labels, self.config.top_k)?;

        let _ = self.logger.info(&format!(
            "{} -> {} ({:.2}%), {}",
            upload.name, resolution.top.waste_type, resolution.top.confidence, resolution.top.bin_name
        ));

        Ok(resolution)
    }
}
