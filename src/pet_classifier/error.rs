use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("classifier failed: {0}")]
    Classifier(Box<dyn std::error::Error + Send + Sync>),
    #[error("classifier returned {actual} scores for {expected} classes")]
    InvalidOutputSize { expected: usize, actual: usize },
    #[error("classifier returned invalid probability {value} for class index {index}")]
    InvalidProbability { index: usize, value: f32 },
    #[error("classifier probabilities sum to {sum}, not 1")]
    NotADistribution { sum: f32 },
    #[error("failed to read image: {0}")]
    Read(#[from] std::io::Error),
}

