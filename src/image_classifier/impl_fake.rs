use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::species::Species;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

enum Scores {
    Fixed(Vec<f32>),
    Random,
}

pub struct ImageClassifierFake {
    vocab: Vec<String>,
    scores: Scores,
    logger: Option<Arc<dyn Logger + Send + Sync>>,
}

impl ImageClassifierFake {
    /// Always answers with `probabilities`, whatever the image.
    pub fn new(vocab: Vec<String>, probabilities: Vec<f32>) -> Self {
        Self {
            vocab,
            scores: Scores::Fixed(probabilities),
            logger: None,
        }
    }

    /// Random distribution over the canonical vocabulary, for running without a model.
    pub fn random(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            vocab: Species::ALL
                .iter()
                .map(|s| s.canonical_name().to_string())
                .collect(),
            scores: Scores::Random,
            logger: Some(logger.with_namespace("fake")),
        }
    }

    fn random_distribution(&self) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = rand::rng();
        let weight_dist = Uniform::new(0.0f32, 1.0)?;

        // a fourth power skews the draw so one class usually stands out
        let weights: Vec<f32> = (0..self.vocab.len())
            .map(|_| weight_dist.sample(&mut rng).powi(4) + f32::EPSILON)
            .collect();
        let sum: f32 = weights.iter().sum();

        Ok(weights.into_iter().map(|w| w / sum).collect())
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn vocab(&self) -> &[String] {
        &self.vocab
    }

    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(logger) = &self.logger {
            logger.info(&format!(
                "Classifying {}x{} image with fake classifier...",
                image.width(),
                image.height()
            ))?;
        }

        match &self.scores {
            Scores::Fixed(probabilities) => Ok(probabilities.clone()),
            Scores::Random => self.random_distribution(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;

    #[test]
    fn test_random_fake_returns_a_distribution() {
        let logger = Arc::new(LoggerConsole::new(chrono::FixedOffset::east_opt(0).unwrap()));
        let classifier = ImageClassifierFake::random(logger);
        let image = DynamicImage::new_rgb8(8, 8);

        for _ in 0..20 {
            let probabilities = classifier.classify(&image).unwrap();
            assert_eq!(probabilities.len(), 7);
            assert!(probabilities.iter().all(|p| (0.0..=1.0).contains(p)));
            let sum: f32 = probabilities.iter().sum();
            assert!((sum - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_fixed_fake_ignores_the_image() {
        let classifier = ImageClassifierFake::new(vec!["cat".into()], vec![1.0]);

        let a = classifier.classify(&DynamicImage::new_rgb8(1, 1)).unwrap();
        let b = classifier.classify(&DynamicImage::new_rgb8(300, 20)).unwrap();
        assert_eq!(a, b);
        assert_eq!(classifier.vocab(), ["cat".to_string()]);
    }
}
