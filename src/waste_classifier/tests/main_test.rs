#[cfg(test)]
mod main_test {
    use crate::prediction::{format_confidence, PredictionResult};
    use crate::upload::Upload;
    use crate::waste_classifier::core::{Msg, Stage};
    use crate::waste_classifier::tests::fixture::{png_upload, Fixture, GLASS_PROBABILITIES};

    #[test]
    fn test_upload_classifies_glass_end_to_end() {
        let mut f = Fixture::new(&GLASS_PROBABILITIES);

        f.waste_classifier
            .send(Msg::UploadReceived(png_upload("jar.png")));

        let model = f.waste_classifier.model();
        match &model.stage {
            Stage::Showing { upload, resolution } => {
                assert_eq!(upload.name, "jar.png");
                assert_eq!(upload.image.dimensions(), (64, 48));
                assert_eq!(resolution.ranked.len(), 3);
                assert_eq!(resolution.ranked[0].label, "Glass");
            }
            _ => panic!("Unexpected stage"),
        }

        let recorded: Vec<&PredictionResult> = model.history.list().collect();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].waste_type, "Glass");
        assert_eq!(recorded[0].category, "Recyclable");
        assert_eq!(recorded[0].bin_name, "Blue Bin");
        assert_eq!(format_confidence(recorded[0].confidence), "93.00%");
    }

    #[test]
    fn test_history_grows_then_clears() {
        let mut f = Fixture::new(&GLASS_PROBABILITIES);

        for i in 0..4 {
            f.waste_classifier
                .send(Msg::UploadReceived(png_upload(&format!("item-{}.png", i))));
        }
        assert_eq!(f.waste_classifier.model().history.len(), 4);
        assert_eq!(f.waste_classifier.model().uploads, 4);

        f.waste_classifier.send(Msg::ClearHistoryClicked);

        assert!(f.waste_classifier.model().history.is_empty());
    }

    #[test]
    fn test_bad_upload_is_reported_not_recorded() {
        let mut f = Fixture::new(&GLASS_PROBABILITIES);

        f.waste_classifier
            .send(Msg::UploadReceived(Upload::new("broken.jpg", vec![0xff, 0xd8, 0x00])));

        assert!(matches!(
            f.waste_classifier.model().stage,
            Stage::Failed { .. }
        ));
        assert!(f.waste_classifier.model().history.is_empty());
    }

    #[test]
    fn test_unreadable_upload_reports_io_cause() {
        let mut f = Fixture::new(&GLASS_PROBABILITIES);
        let dir = tempfile::tempdir().unwrap();

        for name in ["bottle.gif", "bottle.jpg"] {
            let path = dir.path().join(name);
            let cause = std::fs::read(&path).unwrap_err().to_string();

            f.waste_classifier
                .send(Msg::from_read(Upload::from_path(&path)));

            match &f.waste_classifier.model().stage {
                Stage::Failed { name: failed, message } => {
                    assert_eq!(failed, &path.display().to_string());
                    assert!(message.starts_with("Could not read"), "{}", message);
                    assert!(message.contains(&cause), "{}", message);
                }
                stage => panic!("Unexpected stage: {:?}", stage),
            }
        }
        assert!(f.waste_classifier.model().history.is_empty());
        assert_eq!(f.waste_classifier.model().uploads, 0);
    }

    #[test]
    fn test_sessions_do_not_share_history() {
        let mut first = Fixture::new(&GLASS_PROBABILITIES);
        let second = Fixture::new(&GLASS_PROBABILITIES);

        first
            .waste_classifier
            .send(Msg::UploadReceived(png_upload("jar.png")));

        assert_eq!(first.waste_classifier.model().history.len(), 1);
        assert!(second.waste_classifier.model().history.is_empty());
    }
}
