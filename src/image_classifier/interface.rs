use image::DynamicImage;

pub trait ImageClassifier: Send + Sync {
    /// Canonical class names in the order `classify` reports them.
    fn vocab(&self) -> &[String];

    /// Runs one forward pass, returning a probability per vocabulary entry.
    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>>;
}
