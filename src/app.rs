use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::pet_classifier::error::PredictError;
use crate::pet_classifier::main::PetClassifier;
use crate::pet_classifier::prediction::Prediction;
use crate::render::format_percent;
use eframe::egui;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const CJK_FONT: &str = "cjk";

struct Upload {
    source: String,
    image: DynamicImage,
    texture: egui::TextureHandle,
}

pub struct App {
    config: Config,
    pet_classifier: PetClassifier,
    logger: Arc<dyn Logger + Send + Sync>,
    path_input: String,
    upload: Option<Upload>,
    result: Option<Result<Prediction, String>>,
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        pet_classifier: PetClassifier,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        let logger = logger.with_namespace("gui");

        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        if let Some(path) = &config.cjk_font_path {
            if let Err(e) = install_cjk_font(&cc.egui_ctx, path) {
                let _ = logger.error(&format!("Could not load font {}: {}", path.display(), e));
            }
        }

        Self {
            config,
            pet_classifier,
            logger,
            path_input: String::new(),
            upload: None,
            result: None,
        }
    }

    fn load_upload(&mut self, ctx: &egui::Context, source: String, bytes: Option<&[u8]>) {
        let decoded = match bytes {
            Some(bytes) => image::load_from_memory(bytes),
            None => image::open(&source),
        };

        self.result = None;
        match decoded {
            Ok(image) => {
                let rgba = image.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let preview = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                let texture = ctx.load_texture("upload", preview, egui::TextureOptions::LINEAR);

                let _ = self.logger.info(&format!("Loaded {}", source));
                self.upload = Some(Upload {
                    source,
                    image,
                    texture,
                });
            }
            Err(e) => {
                let _ = self.logger.error(&format!("Could not open {}: {}", source, e));
                self.upload = None;
                self.result = Some(Err(PredictError::Decode(e).to_string()));
            }
        }
    }

    fn analyze(&mut self) {
        let Some(upload) = &self.upload else {
            return;
        };

        let result = self.pet_classifier.predict(&upload.image);
        if let Err(e) = &result {
            let _ = self
                .logger
                .error(&format!("Prediction failed for {}: {}", upload.source, e));
        }
        self.result = Some(result.map_err(|e| e.to_string()));
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.first().cloned());
        let Some(file) = dropped else {
            return;
        };

        match (file.path, file.bytes) {
            (Some(path), _) => {
                self.path_input = path.display().to_string();
                self.load_upload(ctx, self.path_input.clone(), None);
            }
            (None, Some(bytes)) => self.load_upload(ctx, file.name, Some(bytes.as_ref())),
            (None, None) => {}
        }
    }

    fn input_column(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Upload Pet Image / 上傳寵物照片").strong());
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let field = ui.add(
                egui::TextEdit::singleline(&mut self.path_input)
                    .hint_text("Path to a photo, or drop one on the window"),
            );
            let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if (ui.button("Open").clicked() || submitted) && !self.path_input.trim().is_empty() {
                let source = self.path_input.trim().to_string();
                self.load_upload(ui.ctx(), source, None);
            }
        });

        ui.add_space(8.0);
        match &self.upload {
            Some(upload) => {
                let texture = egui::load::SizedTexture::from_handle(&upload.texture);
                ui.add(egui::Image::new(texture).max_width(360.0).max_height(300.0));
                ui.label(egui::RichText::new(&upload.source).weak().monospace());
            }
            None => {
                ui.label(egui::RichText::new("No image selected").weak());
            }
        }

        ui.add_space(8.0);
        let analyze = ui.add_enabled(
            self.upload.is_some(),
            egui::Button::new("Analyze / 開始辨識").min_size(egui::vec2(180.0, 32.0)),
        );
        if analyze.clicked() {
            self.analyze();
        }
    }

    fn output_column(&self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Classification Results / 辨識結果").strong());
        ui.add_space(6.0);

        match &self.result {
            None => {
                ui.label(egui::RichText::new("Results appear here after analysis").weak());
            }
            Some(Err(message)) => {
                ui.colored_label(egui::Color32::from_rgb(239, 68, 68), message.as_str());
            }
            Some(Ok(prediction)) => {
                let top = prediction.top(self.config.num_top_classes);
                if let Some(best) = top.first() {
                    ui.label(egui::RichText::new(best.label()).size(26.0).strong());
                    ui.add_space(8.0);
                }
                for entry in top {
                    ui.label(entry.label());
                    ui.add(
                        egui::ProgressBar::new(entry.probability)
                            .text(format_percent(entry.probability)),
                    );
                    ui.add_space(4.0);
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(egui::RichText::new("🐾 AI Pet Species Classifier").size(28.0));
                ui.add_space(8.0);
                ui.separator();
            });

            ui.columns(2, |columns| {
                self.input_column(&mut columns[0]);
                self.output_column(&mut columns[1]);
            });
        });
    }
}

fn install_cjk_font(ctx: &egui::Context, path: &Path) -> std::io::Result<()> {
    let bytes = std::fs::read(path)?;

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(CJK_FONT.to_owned(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT.to_owned());
    }
    ctx.set_fonts(fonts);

    Ok(())
}

/// Blocks until the window is closed.
pub fn run_gui(
    config: Config,
    pet_classifier: PetClassifier,
    logger: Arc<dyn Logger + Send + Sync>,
    initial_image: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "AI Pet Species Classifier",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, config, pet_classifier, logger);
            if let Some(path) = initial_image {
                app.path_input = path.display().to_string();
                app.load_upload(&cc.egui_ctx, app.path_input.clone(), None);
            }
            Box::new(app)
        }),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
