use super::{LabelError, Species};
use std::collections::HashSet;

/// Model vocabulary resolved to species, in the model's output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    species: Vec<Species>,
}

impl LabelTable {
    pub fn from_vocab<S: AsRef<str>>(vocab: &[S]) -> Result<Self, LabelError> {
        if vocab.len() != Species::ALL.len() {
            return Err(LabelError::VocabSize {
                expected: Species::ALL.len(),
                actual: vocab.len(),
            });
        }

        let mut seen = HashSet::new();
        let mut species = Vec::with_capacity(vocab.len());

        for label in vocab {
            let resolved = Species::from_canonical(label.as_ref())?;
            if !seen.insert(resolved) {
                return Err(LabelError::Duplicate(resolved.canonical_name().to_string()));
            }
            species.push(resolved);
        }

        Ok(Self { species })
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<Species> {
        self.species.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Species> + '_ {
        self.species.iter().copied()
    }
}
