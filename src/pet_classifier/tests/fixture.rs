use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::library::logger::{impl_console::LoggerConsole, interface::Logger};
use crate::pet_classifier::main::PetClassifier;
use image::{DynamicImage, ImageBuffer, Rgb};
use std::sync::Arc;

pub const FASTAI_VOCAB: [&str; 7] = [
    "cat", "dog", "goldfish", "hamster", "parrot", "snake", "turtle",
];

pub struct Fixture {
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub pet_classifier: PetClassifier,
}

impl Fixture {
    pub fn new(probabilities: Vec<f32>) -> Self {
        Self::with_vocab(&FASTAI_VOCAB, probabilities)
    }

    pub fn with_vocab(vocab: &[&str], probabilities: Vec<f32>) -> Self {
        let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(
            chrono::FixedOffset::east_opt(8 * 3600).unwrap(),
        ));
        let image_classifier = Arc::new(ImageClassifierFake::new(
            vocab.iter().map(|s| s.to_string()).collect(),
            probabilities,
        ));
        let pet_classifier = PetClassifier::new(image_classifier, logger.clone()).unwrap();

        Self {
            logger,
            pet_classifier,
        }
    }

    pub fn image(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, Rgb(color)))
    }

    pub fn png_bytes(image: &DynamicImage) -> Vec<u8> {
        let mut bytes = std::io::Cursor::new(Vec::new());
        image.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
        bytes.into_inner()
    }
}
