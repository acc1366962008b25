use crate::error::{ConfigWarning, StartupError};
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

pub const FALLBACK_LABELS: [&str; 3] = ["biodegradable", "hazardous", "recyclable"];

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedLabels {
    pub labels: Arc<[String]>,
    pub warning: Option<ConfigWarning>,
}

/// Reads the ordered class names the model was trained with.
///
/// A missing file is tolerated and yields [`FALLBACK_LABELS`] with a
/// warning. Any other read failure, or a file that does not parse, is fatal.
pub fn load(path: &Path) -> Result<LoadedLabels, StartupError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let fallback: Vec<String> = FALLBACK_LABELS.iter().map(|l| l.to_string()).collect();
            return Ok(LoadedLabels {
                labels: fallback.clone().into(),
                warning: Some(ConfigWarning::ClassNamesMissing {
                    path: path.to_path_buf(),
                    fallback,
                }),
            });
        }
        Err(source) => {
            return Err(StartupError::ClassNamesRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let labels: Vec<String> =
        serde_json::from_str(&text).map_err(|source| StartupError::ClassNamesParse {
            path: path.to_path_buf(),
            source,
        })?;

    if labels.is_empty() {
        return Err(StartupError::NoClassNames {
            path: path.to_path_buf(),
        });
    }

    Ok(LoadedLabels {
        labels: labels.into(),
        warning: None,
    })
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
