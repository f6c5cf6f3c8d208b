use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::models::vocab::read_vocab;
use crate::image_classifier::probability::to_probabilities;
use crate::image_classifier::tract::image::preprocess;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tract_onnx::prelude::*;

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model artifact not found: {0}")]
    Missing(PathBuf),
    #[error("failed to read vocabulary {path}: {source}")]
    Vocab {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("vocabulary {0} is empty")]
    EmptyVocab(PathBuf),
    #[error("failed to load model graph {path}: {message}")]
    Graph { path: PathBuf, message: String },
    #[error("model outputs {outputs} scores but the vocabulary has {vocab} classes")]
    OutputSize { outputs: usize, vocab: usize },
}

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
    vocab: Vec<String>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ModelLoadError> {
        let logger = logger.with_namespace("tract_onnx");

        for path in [&config.onnx_model_path, &config.vocab_path] {
            if !path.is_file() {
                return Err(ModelLoadError::Missing(path.clone()));
            }
        }

        let vocab = read_vocab(&config.vocab_path).map_err(|source| ModelLoadError::Vocab {
            path: config.vocab_path.clone(),
            source,
        })?;
        if vocab.is_empty() {
            return Err(ModelLoadError::EmptyVocab(config.vocab_path.clone()));
        }

        let _ = logger.info(&format!(
            "Loading {} with vocabulary {:?}",
            config.onnx_model_path.display(),
            vocab
        ));

        let model = load_plan(&config).map_err(|e| ModelLoadError::Graph {
            path: config.onnx_model_path.clone(),
            message: format!("{e:#}"),
        })?;

        let output_shape = model
            .model()
            .output_fact(0)
            .ok()
            .and_then(|fact| fact.shape.as_concrete().map(|dims| dims.to_vec()));
        check_output_size(output_shape.as_deref(), vocab.len())?;

        let _ = logger.info("Model loaded");

        Ok(Self {
            model,
            config,
            vocab,
        })
    }
}

/// Unknown (symbolic) output shapes are left to the per-call length check.
fn check_output_size(output_shape: Option<&[usize]>, vocab: usize) -> Result<(), ModelLoadError> {
    match output_shape.map(|dims| dims.iter().product::<usize>()) {
        Some(outputs) if outputs != vocab => Err(ModelLoadError::OutputSize { outputs, vocab }),
        _ => Ok(()),
    }
}

fn load_plan(config: &ModelConfig) -> TractResult<SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>> {
    let (height, width) = config.input_shape;
    tract_onnx::onnx()
        .model_for_path(&config.onnx_model_path)?
        .with_input_fact(0, f32::fact([1, 3, height as usize, width as usize]).into())?
        .into_optimized()?
        .into_runnable()
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn vocab(&self) -> &[String] {
        &self.vocab
    }

    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let input = preprocess(image, &self.config)?;

        let outputs = self.model.run(tvec!(input.into_tvalue()))?;
        let scores: Vec<f32> = outputs[0].to_array_view::<f32>()?.iter().copied().collect();

        Ok(to_probabilities(scores, self.config.output))
    }
}
