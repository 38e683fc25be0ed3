use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::config::OcrConfig;
use crate::error::{IngestError, Result};

/// Prepare raw image bytes for recognition: validate dimensions, downscale
/// oversized images, convert to grayscale, and stretch contrast. Returns
/// PNG-encoded bytes ready for the OCR engine.
pub fn prepare_for_ocr(bytes: &[u8], config: &OcrConfig) -> Result<Vec<u8>> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| IngestError::CorruptFile(format!("Failed to decode image: {e}")))?;

    let (width, height) = img.dimensions();
    if width < config.min_image_dimension || height < config.min_image_dimension {
        return Err(IngestError::CorruptFile(format!(
            "Image too small for OCR: {}x{}, minimum {}x{}",
            width, height, config.min_image_dimension, config.min_image_dimension
        )));
    }

    let img = downscale_if_needed(img, config.max_image_dimension);
    let gray = stretch_contrast(img.to_luma8());

    let mut output = Vec::new();
    DynamicImage::ImageLuma8(gray)
        .write_to(&mut std::io::Cursor::new(&mut output), ImageFormat::Png)
        .map_err(|e| IngestError::Ocr(format!("Failed to encode image: {e}")))?;

    Ok(output)
}

fn downscale_if_needed(img: DynamicImage, max_dim: u32) -> DynamicImage {
    let (width, height) = img.dimensions();
    if width <= max_dim && height <= max_dim {
        return img;
    }

    let ratio = if width > height {
        max_dim as f32 / width as f32
    } else {
        max_dim as f32 / height as f32
    };
    let new_width = (width as f32 * ratio) as u32;
    let new_height = (height as f32 * ratio) as u32;

    img.resize(new_width, new_height, image::imageops::FilterType::Lanczos3)
}

/// Histogram stretching: map the darkest pixel to 0 and the lightest to 255.
/// Flat images pass through unchanged.
fn stretch_contrast(gray: image::GrayImage) -> image::GrayImage {
    let mut min_val = 255u8;
    let mut max_val = 0u8;
    for pixel in gray.pixels() {
        min_val = min_val.min(pixel[0]);
        max_val = max_val.max(pixel[0]);
    }

    if max_val <= min_val {
        return gray;
    }

    let range = (max_val - min_val) as f32;
    image::GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let normalized = (gray.get_pixel(x, y)[0] - min_val) as f32 / range;
        image::Luma([(normalized * 255.0) as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> OcrConfig {
        OcrConfig {
            languages: "eng".to_string(),
            max_image_dimension: 4096,
            min_image_dimension: 50,
        }
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::new_rgb8(width, height);
        let mut output = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut output), ImageFormat::Png)
            .unwrap();
        output
    }

    #[test]
    fn test_valid_image_roundtrips() {
        let result = prepare_for_ocr(&png_bytes(100, 100), &test_config());
        assert!(result.is_ok(), "valid image should pass: {:?}", result.err());
        assert!(!result.unwrap().is_empty());
    }

    #[test]
    fn test_tiny_image_rejected() {
        let result = prepare_for_ocr(&png_bytes(10, 10), &test_config());
        assert!(matches!(result, Err(IngestError::CorruptFile(_))));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("too small"), "unexpected error: {err}");
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let result = prepare_for_ocr(&[0u8, 1, 2, 3, 4, 5], &test_config());
        assert!(matches!(result, Err(IngestError::CorruptFile(_))));
    }

    #[test]
    fn test_oversized_image_downscaled() {
        let config = OcrConfig {
            max_image_dimension: 500,
            ..test_config()
        };
        let result = prepare_for_ocr(&png_bytes(1000, 200), &config);
        assert!(result.is_ok());

        let decoded = image::load_from_memory(&result.unwrap()).unwrap();
        let (w, h) = decoded.dimensions();
        assert_eq!(w, 500, "width should shrink to max dimension");
        assert_eq!(h, 100, "height should keep aspect ratio");
    }

    #[test]
    fn test_downscale_noop_under_limit() {
        let img = DynamicImage::new_rgb8(300, 300);
        let resized = downscale_if_needed(img, 1000);
        assert_eq!(resized.dimensions(), (300, 300));
    }

    #[test]
    fn test_stretch_contrast_flat_image_unchanged() {
        let gray = image::GrayImage::from_pixel(10, 10, image::Luma([128]));
        let stretched = stretch_contrast(gray);
        for pixel in stretched.pixels() {
            assert_eq!(pixel[0], 128);
        }
    }

    #[test]
    fn test_stretch_contrast_expands_range() {
        let mut gray = image::GrayImage::new(16, 1);
        for (x, _, pixel) in gray.enumerate_pixels_mut() {
            pixel[0] = (100 + x) as u8; // 100..=115, narrow band
        }
        let stretched = stretch_contrast(gray);

        let values: Vec<u8> = stretched.pixels().map(|p| p[0]).collect();
        assert_eq!(*values.iter().min().unwrap(), 0);
        assert_eq!(*values.iter().max().unwrap(), 255);
    }
}
