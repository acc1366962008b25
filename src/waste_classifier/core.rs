use crate::error::{ClassifyError, ConfigWarning, UploadError};
use crate::prediction::Resolution;
use crate::session_history::SessionHistory;
use crate::upload::Upload;
use image::RgbImage;
use std::sync::Arc;

/// A decoded upload. `seq` increases with every upload in the session so
/// the presentation layer can tell images apart.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub seq: u64,
    pub name: String,
    pub image: Arc<RgbImage>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Stage {
    #[default]
    AwaitingUpload,
    Decoding {
        name: String,
    },
    Classifying {
        upload: UploadedImage,
    },
    Showing {
        upload: UploadedImage,
        resolution: Resolution,
    },
    Failed {
        name: String,
        message: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub stage: Stage,
    pub history: SessionHistory,
    pub warnings: Vec<ConfigWarning>,
    pub uploads: u64,
}

#[derive(Debug)]
pub enum Msg {
    UploadReceived(Upload),
    UploadDecoded {
        name: String,
        result: Result<RgbImage, UploadError>,
    },
    ClassifyDone {
        upload: UploadedImage,
        result: Result<Resolution, ClassifyError>,
    },
    ClearHistoryClicked,
}

impl Msg {
    /// Reading the file is the first step of an upload, so a read failure
    /// fails the upload the same way a decode failure does.
    pub fn from_read(read: Result<Upload, UploadError>) -> Msg {
        match read {
            Ok(upload) => Msg::UploadReceived(upload),
            Err(e) => Msg::UploadDecoded {
                name: e.name().to_string(),
                result: Err(e),
            },
        }
    }

    pub fn to_display_string(&self) -> String {
        match self {
            Msg::UploadDecoded {
                name,
                result: Ok(image),
            } => format!(
                "UploadDecoded {{ name: {:?}, result: Ok({}x{}) }}",
                name,
                image.width(),
                image.height()
            ),
            Msg::ClassifyDone {
                upload,
                result: Ok(resolution),
            } => format!(
                "ClassifyDone {{ upload: {:?}, result: Ok({:?}) }}",
                upload.name, resolution.top
            ),
            Msg::ClassifyDone {
                upload,
                result: Err(e),
            } => format!(
                "ClassifyDone {{ upload: {:?}, result: Err({}) }}",
                upload.name, e
            ),
            msg => format!("{:?}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    DecodeUpload(Upload),
    ClassifyImage(UploadedImage),
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::DecodeUpload(upload) => format!("DecodeUpload({:?})", upload),
            Effect::ClassifyImage(upload) => format!("ClassifyImage({:?})", upload.name),
        }
    }
}

pub fn init(warnings: Vec<ConfigWarning>) -> (Model, Vec<Effect>) {
    (
        Model {
            warnings,
            ..Model::default()
        },
        vec![],
    )
}

pub fn transition(model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match msg {
        Msg::UploadReceived(upload) => (
            Model {
                stage: Stage::Decoding {
                    name: upload.name.clone(),
                },
                ..model
            },
            vec![Effect::DecodeUpload(upload)],
        ),

        Msg::UploadDecoded {
            name,
            result: Ok(image),
        } => {
            let seq = model.uploads + 1;
            let upload = UploadedImage {
                seq,
                name,
                image: Arc::new(image),
            };
            (
                Model {
                    stage: Stage::Classifying {
                        upload: upload.clone(),
                    },
                    uploads: seq,
                    ..model
                },
                vec![Effect::ClassifyImage(upload)],
            )
        }

        Msg::UploadDecoded {
            name,
            result: Err(e),
        } => (
            Model {
                stage: Stage::Failed {
                    name,
                    message: e.to_string(),
                },
                ..model
            },
            vec![],
        ),

        Msg::ClassifyDone {
            upload,
            result: Ok(resolution),
        } => {
            let mut history = model.history;
            history.append(resolution.top.clone());
            (
                Model {
                    stage: Stage::Showing { upload, resolution },
                    history,
                    ..model
                },
                vec![],
            )
        }

        Msg::ClassifyDone {
            upload,
            result: Err(e),
        } => (
            Model {
                stage: Stage::Failed {
                    name: upload.name,
                    message: e.to_string(),
                },
                ..model
            },
            vec![],
        ),

        Msg::ClearHistoryClicked => {
            let mut history = model.history;
            history.clear();
            (Model { history, ..model }, vec![])
        }
    }
}
