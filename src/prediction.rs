use crate::bin_registry::{self, BinInfo};
use crate::class_labels::capitalize;
use crate::error::ResolveError;
use std::cmp::Ordering;

/// One classification as recorded in the session history.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub waste_type: String,
    pub category: String,
    pub bin_name: String,
    /// Percentage in `[0, 100]`.
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedClass {
    pub label: String,
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub top: PredictionResult,
    pub bin: BinInfo,
    pub ranked: Vec<RankedClass>,
}

/// First index holding the maximum; later equal values never win.
pub fn argmax(probabilities: &[f32]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, p) in probabilities.iter().enumerate() {
        match best {
            Some(b) if p.total_cmp(&probabilities[b]) != Ordering::Greater => {}
            _ => best = Some(idx),
        }
    }
    best
}

/// Indices ordered by descending probability. Stable, so ties keep
/// their original order.
pub fn top_k(probabilities: &[f32], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..probabilities.len()).collect();
    indices.sort_by(|&a, &b| probabilities[b].total_cmp(&probabilities[a]));
    indices.truncate(k);
    indices
}

fn to_percent(probability: f32) -> f32 {
    (probability * 100.0).clamp(0.0, 100.0)
}

pub fn format_confidence(confidence: f32) -> String {
    format!("{:.2}%", confidence)
}

pub fn resolve(probabilities: &[f32], labels: &[String], k: usize) -> Result<Resolution, ResolveError> {
    if probabilities.len() != labels.len() {
        return Err(ResolveError::LabelCountMismatch {
            labels: labels.len(),
            outputs: probabilities.len(),
        });
    }

    let top_idx = argmax(probabilities).ok_or(ResolveError::Empty)?;
    let top_label = &labels[top_idx];
    let bin = bin_registry::lookup(top_label);

    let top = PredictionResult {
        waste_type: capitalize(top_label),
        category: bin.category.to_string(),
        bin_name: bin.bin_name.to_string(),
        confidence: to_percent(probabilities[top_idx]),
    };

    let ranked = top_k(probabilities, k)
        .into_iter()
        .map(|idx| RankedClass {
            label: capitalize(&labels[idx]),
            confidence: to_percent(probabilities[idx]),
        })
        .collect();

    Ok(Resolution { top, bin, ranked })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bin_registry::UNKNOWN;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn waste_labels() -> Vec<String> {
        labels(&[
            "biological",
            "cardboard",
            "glass",
            "metal",
            "paper",
            "plastic",
            "trash",
            "clothes",
            "shoes",
            "battery",
        ])
    }

    #[test]
    fn test_argmax_prefers_lower_index_on_tie() {
        assert_eq!(argmax(&[0.1, 0.45, 0.45]), Some(1));
        assert_eq!(argmax(&[0.5, 0.5]), Some(0));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_top_three_ranking() {
        let resolution = resolve(&[0.1, 0.6, 0.05, 0.25], &labels(&["a", "b", "c", "d"]), 3).unwrap();

        let ranked: Vec<(String, String)> = resolution
            .ranked
            .iter()
            .map(|r| (r.label.clone(), format_confidence(r.confidence)))
            .collect();

        assert_eq!(
            ranked,
            vec![
                ("B".to_string(), "60.00%".to_string()),
                ("D".to_string(), "25.00%".to_string()),
                ("A".to_string(), "10.00%".to_string()),
            ]
        );
    }

    #[test]
    fn test_top_k_ties_keep_index_order() {
        assert_eq!(top_k(&[0.2, 0.4, 0.2, 0.2], 3), vec![1, 0, 2]);
    }

    #[test]
    fn test_ranking_with_fewer_classes_than_k() {
        let resolution = resolve(&[0.3, 0.7], &labels(&["paper", "metal"]), 3).unwrap();

        assert_eq!(resolution.ranked.len(), 2);
        assert_eq!(resolution.ranked[0].label, "Metal");
    }

    #[test]
    fn test_resolve_glass() {
        let probabilities = [0.02, 0.01, 0.93, 0.02, 0.01, 0.005, 0.005, 0.0, 0.0, 0.0];

        let resolution = resolve(&probabilities, &waste_labels(), 3).unwrap();

        assert_eq!(resolution.top.waste_type, "Glass");
        assert_eq!(resolution.top.category, "Recyclable");
        assert_eq!(resolution.top.bin_name, "Blue Bin");
        assert_eq!(format_confidence(resolution.top.confidence), "93.00%");
        assert_eq!(resolution.bin.description, "Recyclable: glass bottles, jars, etc.");
    }

    #[test]
    fn test_resolve_unmapped_label_is_unknown() {
        let resolution = resolve(
            &[0.2, 0.7, 0.1],
            &labels(&["biodegradable", "hazardous", "recyclable"]),
            3,
        )
        .unwrap();

        assert_eq!(resolution.top.waste_type, "Hazardous");
        assert_eq!(resolution.top.category, "Unknown");
        assert_eq!(resolution.top.bin_name, "Unknown");
        assert_eq!(resolution.bin, UNKNOWN);
    }

    #[test]
    fn test_resolve_rejects_mismatched_lengths() {
        let result = resolve(&[0.5, 0.3, 0.2], &labels(&["glass", "metal"]), 3);

        assert_eq!(
            result,
            Err(ResolveError::LabelCountMismatch {
                labels: 2,
                outputs: 3
            })
        );
    }

    #[test]
    fn test_resolve_rejects_empty_output() {
        assert_eq!(resolve(&[], &[], 3), Err(ResolveError::Empty));
    }

    #[test]
    fn test_confidence_is_bounded_and_two_decimals() {
        let resolution = resolve(&[1.0000001, 0.0], &labels(&["glass", "metal"]), 3).unwrap();

        assert!(resolution.top.confidence <= 100.0);
        assert_eq!(format_confidence(resolution.top.confidence), "100.00%");
        assert_eq!(format_confidence(resolution.ranked[1].confidence), "0.00%");
        assert_eq!(format_confidence(7.0), "7.00%");
    }
}
