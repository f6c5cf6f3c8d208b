use crate::image_classifier::models::model_config::ModelConfig;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub num_top_classes: usize,
    pub logger_timezone: chrono::FixedOffset,
    /// Font with CJK glyphs; egui's bundled fonts cannot draw the Chinese half of the labels.
    pub cjk_font_path: Option<PathBuf>,
    pub window_size: [f32; 2],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            num_top_classes: 3,
            logger_timezone: taiwan_standard_time(),
            cjk_font_path: None,
            window_size: [880.0, 560.0],
        }
    }
}

fn taiwan_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(8 * 3600).unwrap()
}
