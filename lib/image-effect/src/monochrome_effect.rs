use crate::{Effect, ImageEffectResult, base_effect::luminance};
use derivative::Derivative;
use derive_setters::Setters;
use image::{GrayImage, Luma, Rgb, RgbImage};

pub const DEFAULT_THRESHOLD: u8 = 128;

/// Black and white threshold configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct ThresholdConfig {
    #[derivative(Default(value = "DEFAULT_THRESHOLD"))]
    pub threshold: u8,
}

impl ThresholdConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses user input, any value outside `0..=255` falls back to 128.
    pub fn from_input(input: &str) -> Self {
        match input.trim().parse::<u8>() {
            Ok(threshold) => Self::new().with_threshold(threshold),
            Err(_) => Self::new(),
        }
    }
}

impl Effect for ThresholdConfig {
    fn apply(&self, image: &mut RgbImage) -> ImageEffectResult<()> {
        for pixel in image.pixels_mut() {
            let value = if luminance(pixel) < self.threshold {
                0
            } else {
                255
            };
            *pixel = Rgb([value, value, value]);
        }

        Ok(())
    }
}

/// Mean adaptive threshold with OpenCV `ADAPTIVE_THRESH_MEAN_C` semantics.
///
/// A pixel becomes white when it is strictly brighter than the mean of its
/// `(2 * block_radius + 1)` square neighbourhood minus `offset`, black
/// otherwise. Borders are replicated and the mean is rounded to nearest.
///
/// `imageproc::contrast::adaptive_threshold` shrinks the window at the
/// border instead, which marks different pixels along the image edges.
pub fn adaptive_threshold_mean(image: &GrayImage, block_radius: u32, offset: i32) -> GrayImage {
    let (width, height) = image.dimensions();
    let mut output = GrayImage::new(width, height);
    if width == 0 || height == 0 {
        return output;
    }

    let r = block_radius as i64;
    let count = ((2 * r + 1) * (2 * r + 1)) as u32;
    let clamp_x = |x: i64| x.clamp(0, width as i64 - 1) as u32;
    let clamp_y = |y: i64| y.clamp(0, height as i64 - 1) as u32;

    // Horizontal window sums
    let mut rows = vec![0u32; (width * height) as usize];
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0u32;
            for dx in -r..=r {
                sum += image.get_pixel(clamp_x(x as i64 + dx), y)[0] as u32;
            }
            rows[(y * width + x) as usize] = sum;
        }
    }

    for y in 0..height {
        for x in 0..width {
            let mut sum = 0u32;
            for dy in -r..=r {
                sum += rows[(clamp_y(y as i64 + dy) * width + x) as usize];
            }

            let mean = ((sum + count / 2) / count) as i32;
            let value = image.get_pixel(x, y)[0] as i32;
            let edge = if value > mean - offset { 255 } else { 0 };
            output.put_pixel(x, y, Luma([edge]));
        }
    }

    output
}
