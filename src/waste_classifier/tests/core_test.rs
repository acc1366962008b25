#[cfg(test)]
mod core_test {
    use crate::error::{ClassifyError, ConfigWarning, ResolveError, UploadError};
    use crate::prediction::{PredictionResult, RankedClass, Resolution};
    use crate::upload::Upload;
    use crate::waste_classifier::core::{init, transition, Effect, Model, Msg, Stage, UploadedImage};
    use crate::bin_registry;
    use image::{ImageBuffer, Rgb, RgbImage};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn image() -> RgbImage {
        ImageBuffer::from_pixel(4, 4, Rgb([1u8, 2, 3]))
    }

    fn uploaded(seq: u64) -> UploadedImage {
        UploadedImage {
            seq,
            name: "jar.png".to_string(),
            image: Arc::new(image()),
        }
    }

    fn glass_resolution() -> Resolution {
        Resolution {
            top: PredictionResult {
                waste_type: "Glass".to_string(),
                category: "Recyclable".to_string(),
                bin_name: "Blue Bin".to_string(),
                confidence: 93.0,
            },
            bin: bin_registry::lookup("glass"),
            ranked: vec![RankedClass {
                label: "Glass".to_string(),
                confidence: 93.0,
            }],
        }
    }

    #[test]
    fn test_init() {
        let warning = ConfigWarning::ClassNamesMissing {
            path: PathBuf::from("class_names.json"),
            fallback: vec!["recyclable".to_string()],
        };

        let (model, effects) = init(vec![warning.clone()]);

        assert_eq!(model.stage, Stage::AwaitingUpload);
        assert!(model.history.is_empty());
        assert_eq!(model.warnings, vec![warning]);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_upload_flow() {
        let (model, _) = init(vec![]);
        let upload = Upload::new("jar.png", vec![1, 2, 3]);

        // Upload arrives
        let (model, effects) = transition(model, Msg::UploadReceived(upload.clone()));

        assert_eq!(
            model.stage,
            Stage::Decoding {
                name: "jar.png".to_string()
            }
        );
        assert_eq!(effects, vec![Effect::DecodeUpload(upload)]);

        // Decoding succeeds
        let (model, effects) = transition(
            model,
            Msg::UploadDecoded {
                name: "jar.png".to_string(),
                result: Ok(image()),
            },
        );

        assert_eq!(model.uploads, 1);
        assert_eq!(model.stage, Stage::Classifying { upload: uploaded(1) });
        assert_eq!(effects, vec![Effect::ClassifyImage(uploaded(1))]);

        // Classification completes
        let (model, effects) = transition(
            model,
            Msg::ClassifyDone {
                upload: uploaded(1),
                result: Ok(glass_resolution()),
            },
        );

        match &model.stage {
            Stage::Showing { upload, resolution } => {
                assert_eq!(upload.seq, 1);
                assert_eq!(resolution.top.waste_type, "Glass");
            }
            _ => panic!("Unexpected stage"),
        }
        assert_eq!(model.history.len(), 1);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_decode_failure_leaves_history_untouched() {
        let (model, _) = init(vec![]);
        let model = Model {
            history: {
                let mut history = model.history;
                history.append(glass_resolution().top);
                history
            },
            ..model
        };

        let (model, effects) = transition(
            model,
            Msg::UploadDecoded {
                name: "notes.txt".to_string(),
                result: Err(UploadError::UnsupportedFormat {
                    name: "notes.txt".to_string(),
                }),
            },
        );

        match &model.stage {
            Stage::Failed { name, message } => {
                assert_eq!(name, "notes.txt");
                assert!(message.contains("JPG or PNG"));
            }
            _ => panic!("Unexpected stage"),
        }
        assert_eq!(model.history.len(), 1);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_classify_failure() {
        let (model, _) = init(vec![]);

        let (model, effects) = transition(
            model,
            Msg::ClassifyDone {
                upload: uploaded(3),
                result: Err(ClassifyError::Resolve(ResolveError::Empty)),
            },
        );

        assert!(matches!(model.stage, Stage::Failed { .. }));
        assert!(model.history.is_empty());
        assert!(effects.is_empty());
    }

    #[test]
    fn test_clear_history_keeps_current_result() {
        let (model, _) = init(vec![]);
        let (model, _) = transition(
            model,
            Msg::ClassifyDone {
                upload: uploaded(1),
                result: Ok(glass_resolution()),
            },
        );
        let (model, _) = transition(
            model,
            Msg::ClassifyDone {
                upload: uploaded(2),
                result: Ok(glass_resolution()),
            },
        );
        assert_eq!(model.history.len(), 2);

        let (model, effects) = transition(model, Msg::ClearHistoryClicked);

        assert!(model.history.is_empty());
        assert!(matches!(model.stage, Stage::Showing { .. }));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_upload_sequence_increases() {
        let (mut model, _) = init(vec![]);

        for expected in 1..=3 {
            let (next, effects) = transition(
                model,
                Msg::UploadDecoded {
                    name: "jar.png".to_string(),
                    result: Ok(image()),
                },
            );
            assert_eq!(next.uploads, expected);
            assert_eq!(effects, vec![Effect::ClassifyImage(uploaded(expected))]);
            model = next;
        }
    }
}
