//! Turns the session model into plain display data. Nothing here knows
//! about the GUI toolkit.

use crate::prediction::format_confidence;
use crate::waste_classifier::core::{Model, Stage, UploadedImage};

pub const TITLE: &str = "♻️ Smart Waste Classification System";
pub const SUBTITLE: &str = "Detect waste type and get the right bin recommendation instantly";
pub const UPLOAD_PROMPT: &str = "📤 Upload an image of waste (JPG or PNG)";
pub const EMPTY_HISTORY: &str = "No predictions yet.";

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub warnings: Vec<String>,
    pub main: MainView,
    pub history: HistoryView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MainView {
    Prompt,
    Working { name: String },
    Error { name: String, message: String },
    Result(ResultCard),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub upload: UploadedImage,
    pub bin_banner: String,
    pub bin_color: [u8; 3],
    pub bin_color_hex: String,
    pub details: Vec<(&'static str, String)>,
    pub top_classes: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub heading: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryView {
    Empty(&'static str),
    Rows(Vec<HistoryRow>),
}

pub fn view(model: &Model) -> View {
    View {
        title: TITLE,
        subtitle: SUBTITLE,
        warnings: model.warnings.iter().map(|w| w.to_string()).collect(),
        main: main_view(&model.stage),
        history: history_view(model),
    }
}

fn main_view(stage: &Stage) -> MainView {
    match stage {
        Stage::AwaitingUpload => MainView::Prompt,
        Stage::Decoding { name } => MainView::Working { name: name.clone() },
        Stage::Classifying { upload } => MainView::Working {
            name: upload.name.clone(),
        },
        Stage::Failed { name, message } => MainView::Error {
            name: name.clone(),
            message: message.clone(),
        },
        Stage::Showing { upload, resolution } => {
            let top = &resolution.top;
            let bin = &resolution.bin;
            let recommendation = format!("{} {}", bin.marker, bin.bin_name);

            MainView::Result(ResultCard {
                upload: upload.clone(),
                bin_banner: recommendation.clone(),
                bin_color: bin.color,
                bin_color_hex: bin.color_hex(),
                details: vec![
                    ("Waste Type", top.waste_type.clone()),
                    ("Category", top.category.clone()),
                    ("Bin Recommendation", recommendation),
                    ("Description", bin.description.to_string()),
                    ("Confidence", format_confidence(top.confidence)),
                ],
                top_classes: resolution
                    .ranked
                    .iter()
                    .map(|r| (r.label.clone(), format_confidence(r.confidence)))
                    .collect(),
            })
        }
    }
}

fn history_view(model: &Model) -> HistoryView {
    if model.history.is_empty() {
        return HistoryView::Empty(EMPTY_HISTORY);
    }

    HistoryView::Rows(
        model
            .history
            .list()
            .enumerate()
            .map(|(i, entry)| HistoryRow {
                heading: format!("{}. {} ({})", i + 1, entry.waste_type, entry.category),
                detail: format!(
                    "Bin: {} | Confidence: {}",
                    entry.bin_name,
                    format_confidence(entry.confidence)
                ),
            })
            .collect(),
    )
}
