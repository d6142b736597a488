//! Pixel sampling: image → pool of dark-pixel positions.
//!
//! A source image is scanned once at startup; every pixel whose greyscale
//! average is strictly below [`GREYSCALE_THRESHOLD`] contributes one sample.
//! Samples are pixel centers normalized to [-0.5, 0.5] on both axes, with Y
//! flipped (image Y grows downward, world Y grows upward), so a silhouette
//! drawn near the top of the image ends up near the top of the field.
//!
//! The pool's order carries no meaning; the seed encoder draws from it at
//! random. An image with no dark pixels cannot seed a silhouette and is
//! rejected before any GPU work starts.

use std::path::Path;

use glam::Vec2;
use image::RgbaImage;

use crate::error::SampleError;

/// Greyscale cutoff (out of 255). Pixels with average strictly below this
/// count as part of the silhouette.
pub const GREYSCALE_THRESHOLD: f32 = 5.0;

/// Load an image from disk and sample its dark pixels.
///
/// `resolution` scales the image before scanning: reading pixel data is the
/// expensive part of startup, so a factor below 1.0 trades sample density
/// for speed. A factor of 1.0 scans the image as-is.
pub fn load_samples<P: AsRef<Path>>(path: P, resolution: f32) -> Result<Vec<Vec2>, SampleError> {
    let img = image::open(path.as_ref())?;

    let img = if resolution != 1.0 {
        let width = ((img.width() as f32 * resolution).round() as u32).max(1);
        let height = ((img.height() as f32 * resolution).round() as u32).max(1);
        img.resize_exact(width, height, image::imageops::FilterType::Triangle)
    } else {
        img
    };

    sample_dark_pixels(&img.into_rgba8())
}

/// Scan a decoded RGBA image for pixels below the darkness threshold.
///
/// Returns one normalized position per dark pixel, or
/// [`SampleError::NoDarkPixels`] if the image contains none.
pub fn sample_dark_pixels(image: &RgbaImage) -> Result<Vec<Vec2>, SampleError> {
    let (width, height) = image.dimensions();
    let mut samples = Vec::new();

    for (x, y, pixel) in image.enumerate_pixels() {
        let [r, g, b, _] = pixel.0;
        let grey = (r as f32 + g as f32 + b as f32) / 3.0;
        if grey < GREYSCALE_THRESHOLD {
            samples.push(normalize_position(x, y, width, height));
        }
    }

    if samples.is_empty() {
        return Err(SampleError::NoDarkPixels {
            threshold: GREYSCALE_THRESHOLD,
        });
    }

    log::debug!(
        "sampled {} dark pixels from {}x{} image",
        samples.len(),
        width,
        height
    );

    Ok(samples)
}

/// Map a pixel coordinate to its center in normalized [-0.5, 0.5] space,
/// flipping Y.
fn normalize_position(x: u32, y: u32, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        (x as f32 + 0.5) / width as f32 - 0.5,
        0.5 - (y as f32 + 0.5) / height as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid_image(width: u32, height: u32, value: u8) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([value, value, value, 255]))
    }

    #[test]
    fn test_all_black_2x2_yields_quadrant_centers() {
        let samples = sample_dark_pixels(&solid_image(2, 2, 0)).unwrap();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0], Vec2::new(-0.25, 0.25));
        assert_eq!(samples[1], Vec2::new(0.25, 0.25));
        assert_eq!(samples[2], Vec2::new(-0.25, -0.25));
        assert_eq!(samples[3], Vec2::new(0.25, -0.25));
    }

    #[test]
    fn test_threshold_is_strict() {
        // Average exactly at the threshold is excluded...
        let at = solid_image(2, 2, 5);
        assert!(matches!(
            sample_dark_pixels(&at),
            Err(SampleError::NoDarkPixels { .. })
        ));

        // ...one below is included.
        let below = solid_image(2, 2, 4);
        assert_eq!(sample_dark_pixels(&below).unwrap().len(), 4);
    }

    #[test]
    fn test_threshold_uses_rgb_average() {
        // (5 + 5 + 4) / 3 < 5, so the pixel counts as dark.
        let mut img = solid_image(1, 1, 255);
        img.put_pixel(0, 0, Rgba([5, 5, 4, 255]));
        assert_eq!(sample_dark_pixels(&img).unwrap().len(), 1);
    }

    #[test]
    fn test_alpha_is_ignored() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0]));
        assert_eq!(sample_dark_pixels(&img).unwrap().len(), 1);
    }

    #[test]
    fn test_y_axis_is_flipped() {
        // One dark pixel in the top row must land in the upper half (y > 0).
        let mut img = solid_image(3, 3, 255);
        img.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
        let samples = sample_dark_pixels(&img).unwrap();
        assert_eq!(samples.len(), 1);
        assert!(samples[0].y > 0.0);
        assert_eq!(samples[0].x, 0.0);
    }

    #[test]
    fn test_no_dark_pixels_is_an_error() {
        let img = solid_image(4, 4, 200);
        assert!(matches!(
            sample_dark_pixels(&img),
            Err(SampleError::NoDarkPixels { threshold }) if threshold == GREYSCALE_THRESHOLD
        ));
    }

    #[test]
    fn test_samples_stay_in_half_open_unit_box() {
        let samples = sample_dark_pixels(&solid_image(7, 5, 0)).unwrap();
        assert_eq!(samples.len(), 35);
        for s in samples {
            assert!(s.x > -0.5 && s.x < 0.5);
            assert!(s.y > -0.5 && s.y < 0.5);
        }
    }
}
