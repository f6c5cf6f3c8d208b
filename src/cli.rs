use crate::config::Config;
use crate::image_classifier::models::model_config::{OutputKind, ResizeMethod};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pet-classifier", version, about = "Classify pet photos into seven species")]
pub struct Cli {
    /// ONNX graph of the trained classifier
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    /// Class names, one per line, in the model's output order
    #[arg(long, global = true)]
    pub labels: Option<PathBuf>,

    /// How photos are fitted to the model input
    #[arg(long, global = true, value_enum)]
    pub resize: Option<ResizeMethod>,

    /// Whether the model emits logits or probabilities
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputKind>,

    /// Use a random classifier instead of loading a model
    #[arg(long, global = true)]
    pub fake: bool,

    /// Font with CJK glyphs for the window
    #[arg(long, global = true)]
    pub font: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the classifier window (default)
    Gui {
        /// Image to preload
        image: Option<PathBuf>,
    },
    /// Print the most likely species for each image
    Classify {
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// Number of species to print per image
        #[arg(long, default_value_t = 3)]
        top: usize,
    },
}

impl Cli {
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(model) = &self.model {
            config.model.onnx_model_path = model.clone();
        }
        if let Some(labels) = &self.labels {
            config.model.vocab_path = labels.clone();
        }
        if let Some(resize) = self.resize {
            config.model.resize = resize;
        }
        if let Some(output) = self.output {
            config.model.output = output;
        }
        if let Some(font) = &self.font {
            config.cjk_font_path = Some(font.clone());
        }
        if let Some(Command::Classify { top, .. }) = &self.command {
            config.num_top_classes = *top;
        }
        config
    }
}
