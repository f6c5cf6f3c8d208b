use clap::ValueEnum;
use std::path::PathBuf;

/// How an arbitrary image is fitted into the model's square input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResizeMethod {
    /// Scale to cover the input, then centre crop the overflow.
    #[default]
    Crop,
    /// Scale to fit inside the input and letterbox with black.
    Pad,
    /// Stretch to the input size, ignoring aspect ratio.
    Squish,
}

/// What the graph's single output row holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputKind {
    #[default]
    Logits,
    Probabilities,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    pub vocab_path: PathBuf,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub resize: ResizeMethod,
    pub mean: [f32; 3],
    pub std: [f32; 3],
    pub output: OutputKind,
}

pub const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
pub const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: PathBuf::from("pet_classifier_v1.onnx"),
            vocab_path: PathBuf::from("pet_classifier_v1.labels.txt"),
            input_shape: (224, 224),
            resize: ResizeMethod::default(),
            mean: IMAGENET_MEAN,
            std: IMAGENET_STD,
            output: OutputKind::default(),
        }
    }
}
