use crate::image_classifier::models::model_config::{ModelConfig, ResizeMethod};
use image::{imageops, DynamicImage, RgbImage};
use tract_onnx::prelude::*;

pub fn resize_image(image: &DynamicImage, width: u32, height: u32, method: ResizeMethod) -> RgbImage {
    match method {
        ResizeMethod::Crop => image
            .resize_to_fill(width, height, imageops::FilterType::Triangle)
            .to_rgb8(),
        ResizeMethod::Squish => image
            .resize_exact(width, height, imageops::FilterType::Triangle)
            .to_rgb8(),
        ResizeMethod::Pad => letterbox(image, width, height),
    }
}

fn letterbox(image: &DynamicImage, width: u32, height: u32) -> RgbImage {
    let (w, h) = (image.width() as f32, image.height() as f32);
    let scale = (width as f32 / w).min(height as f32 / h);
    let new_w = ((w * scale) as u32).clamp(1, width);
    let new_h = ((h * scale) as u32).clamp(1, height);

    let scaled = image
        .resize_exact(new_w, new_h, imageops::FilterType::Triangle)
        .to_rgb8();

    let mut padded = RgbImage::new(width, height);
    let x_offset = (width - new_w) / 2;
    let y_offset = (height - new_h) / 2;
    imageops::replace(&mut padded, &scaled, x_offset as i64, y_offset as i64);

    padded
}

fn image_to_tensor(
    rgb: &RgbImage,
    mean: [f32; 3],
    std: [f32; 3],
) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    let mut tensor = Tensor::zero::<f32>(&[1, 3, height, width])?;
    let slice = tensor.as_slice_mut::<f32>()?;

    for (x, y, pixel) in rgb.enumerate_pixels() {
        for c in 0..3 {
            let index = c * height * width + y as usize * width + x as usize;
            slice[index] = (pixel[c] as f32 / 255.0 - mean[c]) / std[c];
        }
    }

    Ok(tensor)
}

pub fn preprocess(
    image: &DynamicImage,
    config: &ModelConfig,
) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    let (height, width) = config.input_shape;
    let resized = resize_image(image, width, height, config.resize);
    image_to_tensor(&resized, config.mean, config.std)
}
