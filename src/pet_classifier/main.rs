use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::probability::argmax;
use crate::library::logger::interface::Logger;
use crate::pet_classifier::error::PredictError;
use crate::pet_classifier::prediction::{Prediction, ScoredLabel};
use crate::species::label_table::LabelTable;
use crate::species::LabelError;
use image::DynamicImage;
use std::sync::Arc;

const DISTRIBUTION_TOLERANCE: f32 = 1e-4;

/// Turns raw classifier output into display-labelled probabilities.
///
/// Holds only read-only state, so one instance can be shared across threads.
#[derive(Clone)]
pub struct PetClassifier {
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    labels: LabelTable,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl PetClassifier {
    /// Fails if any class in the model's vocabulary has no display label.
    pub fn new(
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, LabelError> {
        let labels = LabelTable::from_vocab(image_classifier.vocab())?;

        Ok(Self {
            image_classifier,
            labels,
            logger: logger.with_namespace("pet_classifier"),
        })
    }

    #[cfg(test)]
    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    pub fn predict(&self, image: &DynamicImage) -> Result<Prediction, PredictError> {
        let probabilities = self
            .image_classifier
            .classify(image)
            .map_err(PredictError::Classifier)?;

        if probabilities.len() != self.labels.len() {
            return Err(PredictError::InvalidOutputSize {
                expected: self.labels.len(),
                actual: probabilities.len(),
            });
        }

        if let Some((index, &value)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || !(0.0..=1.0).contains(*p))
        {
            return Err(PredictError::InvalidProbability { index, value });
        }

        let sum: f32 = probabilities.iter().sum();
        if (sum - 1.0).abs() > DISTRIBUTION_TOLERANCE {
            return Err(PredictError::NotADistribution { sum });
        }

        let entries: Vec<ScoredLabel> = self
            .labels
            .iter()
            .zip(probabilities.iter())
            .map(|(species, &probability)| ScoredLabel {
                species,
                probability,
            })
            .collect();

        let predicted_index = argmax(&probabilities).unwrap_or_default();

        let prediction = Prediction {
            entries,
            predicted_index,
        };

        let predicted = prediction.predicted();
        let _ = self.logger.info(&format!(
            "Predicted {} ({:.4}) for {}x{} image: {:?}",
            predicted.species.canonical_name(),
            predicted.probability,
            image.width(),
            image.height(),
            prediction.to_label_map()
        ));

        Ok(prediction)
    }

    /// Decodes an encoded raster image, then predicts.
    pub fn predict_bytes(&self, bytes: &[u8]) -> Result<Prediction, PredictError> {
        let image = image::load_from_memory(bytes)?;
        self.predict(&image)
    }
}
