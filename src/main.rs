use app::run_gui;
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use image_classifier::interface::ImageClassifier;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use pet_classifier::error::PredictError;
use pet_classifier::main::PetClassifier;
use render::render_text;
use std::sync::Arc;

mod app;
mod cli;
mod config;
mod image_classifier;
mod library;
mod pet_classifier;
mod render;
mod species;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let config = cli.apply(Config::default());

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> = if cli.fake {
        let _ = logger.info("Running with a random classifier");
        Arc::new(ImageClassifierFake::random(logger.clone()))
    } else {
        match ImageClassifierTractOnnx::new(config.model.clone(), logger.clone()) {
            Ok(classifier) => Arc::new(classifier),
            Err(e) => {
                let _ = logger.error(&format!("Cannot start without a model: {}", e));
                return Err(e.into());
            }
        }
    };

    let pet_classifier = PetClassifier::new(image_classifier, logger.clone())?;

    match cli.command {
        Some(Command::Classify { images, .. }) => {
            let mut failures = 0;
            for path in &images {
                let result = std::fs::read(path)
                    .map_err(PredictError::from)
                    .and_then(|bytes| pet_classifier.predict_bytes(&bytes));
                match result {
                    Ok(prediction) => println!(
                        "{}",
                        render_text(&path.display().to_string(), &prediction, config.num_top_classes)
                    ),
                    Err(e) => {
                        failures += 1;
                        let _ = logger.error(&format!("{}: {}", path.display(), e));
                    }
                }
            }
            if failures > 0 {
                return Err(format!("{} of {} images could not be classified", failures, images.len()).into());
            }
        }
        Some(Command::Gui { image }) => run_gui(config, pet_classifier, logger, image)?,
        None => run_gui(config, pet_classifier, logger, None)?,
    }

    Ok(())
}
