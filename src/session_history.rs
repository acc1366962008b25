use crate::prediction::PredictionResult;

/// Predictions made during one session, oldest first in storage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionHistory {
    entries: Vec<PredictionResult>,
}

impl SessionHistory {
    pub fn append(&mut self, result: PredictionResult) {
        self.entries.push(result);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Most recent first.
    pub fn list(&self) -> impl Iterator<Item = &PredictionResult> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
