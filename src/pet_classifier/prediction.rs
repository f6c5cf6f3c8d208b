use crate::species::Species;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredLabel {
    pub species: Species,
    pub probability: f32,
}

impl ScoredLabel {
    pub fn label(&self) -> &'static str {
        self.species.display_label()
    }
}

/// One entry per model class, in the model's output order.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub entries: Vec<ScoredLabel>,
    pub predicted_index: usize,
}

impl Prediction {
    pub fn predicted(&self) -> ScoredLabel {
        self.entries[self.predicted_index]
    }

    /// Highest `n` entries, most probable first. Equal probabilities keep model order.
    pub fn top(&self, n: usize) -> Vec<ScoredLabel> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        sorted.truncate(n);
        sorted
    }

    pub fn to_label_map(&self) -> Vec<(&'static str, f32)> {
        self.entries
            .iter()
            .map(|entry| (entry.label(), entry.probability))
            .collect()
    }
}
