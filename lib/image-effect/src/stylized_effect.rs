use crate::{
    Effect, ImageEffectResult,
    base_effect::{from_luma, luminance_q14, to_luma},
    blur_effect::median_blur,
    monochrome_effect::adaptive_threshold_mean,
};
use derivative::Derivative;
use derive_setters::Setters;
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::filter::{bilateral::ColorDistance, bilateral_filter};
use log::debug;

/// Gaussian weight of the summed absolute channel differences, as OpenCV's
/// bilateral filter computes it for 8-bit color images.
#[derive(Debug, Clone, Copy)]
pub struct GaussianManhattanColorDistance {
    sigma_squared: f32,
}

impl GaussianManhattanColorDistance {
    pub fn new(sigma: f32) -> Self {
        Self {
            sigma_squared: sigma.powi(2),
        }
    }
}

impl ColorDistance<Rgb<u8>> for GaussianManhattanColorDistance {
    fn color_distance(&self, pixel1: &Rgb<u8>, pixel2: &Rgb<u8>) -> f32 {
        let distance = pixel1
            .0
            .iter()
            .zip(pixel2.0.iter())
            .map(|(a, b)| (*a as f32 - *b as f32).abs())
            .sum::<f32>();

        (-0.5 * distance.powi(2) / self.sigma_squared).exp()
    }
}

/// Cartoon effect configuration
///
/// Colors are flattened with a bilateral filter, edges come from a median
/// blurred luminance passed through a mean adaptive threshold, and the two
/// are combined with a bitwise AND.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct CartoonConfig {
    #[derivative(Default(value = "4"))]
    pub bilateral_radius: u8,

    #[derivative(Default(value = "75.0"))]
    pub color_sigma: f32,

    #[derivative(Default(value = "75.0"))]
    pub spatial_sigma: f32,

    #[derivative(Default(value = "3"))]
    pub median_radius: u32,

    #[derivative(Default(value = "4"))]
    pub block_radius: u32,

    #[derivative(Default(value = "2"))]
    pub offset: i32,
}

impl CartoonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binary edge mask, 255 on flat regions and 0 on edges.
    pub fn edge_mask(&self, image: &RgbImage) -> GrayImage {
        let mut gray = GrayImage::new(image.width(), image.height());
        for (dst, src) in gray.pixels_mut().zip(image.pixels()) {
            *dst = Luma([luminance_q14(src)]);
        }

        let smoothed = median_blur(&gray, self.median_radius);
        adaptive_threshold_mean(&smoothed, self.block_radius, self.offset)
    }

    /// Edge-preserving color smoothing.
    pub fn smooth_colors(&self, image: &RgbImage) -> RgbImage {
        if image.width() == 0 || image.height() == 0 {
            return image.clone();
        }

        bilateral_filter(
            image,
            self.bilateral_radius,
            self.spatial_sigma,
            GaussianManhattanColorDistance::new(self.color_sigma),
        )
    }
}

impl Effect for CartoonConfig {
    fn apply(&self, image: &mut RgbImage) -> ImageEffectResult<()> {
        debug!("cartoon effect: {self:?}");

        let edges = self.edge_mask(image);
        let mut color = self.smooth_colors(image);

        for (pixel, edge) in color.pixels_mut().zip(edges.pixels()) {
            let mask = edge[0];
            pixel[0] &= mask;
            pixel[1] &= mask;
            pixel[2] &= mask;
        }

        *image = color;
        Ok(())
    }
}

/// Find-edges kernel, the border keeps its luminance.
pub fn contour(image: &mut RgbImage) -> ImageEffectResult<()> {
    let gray = to_luma(image);
    let (width, height) = gray.dimensions();
    let mut result = gray.clone();

    let kernel: [i32; 9] = [-1, -1, -1, -1, 8, -1, -1, -1, -1];

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let mut sum = 0i32;

            for ky in -1i32..=1 {
                for kx in -1i32..=1 {
                    let px = (x as i32 + kx) as u32;
                    let py = (y as i32 + ky) as u32;
                    let ki = ((ky + 1) * 3 + (kx + 1)) as usize;
                    sum += gray.get_pixel(px, py)[0] as i32 * kernel[ki];
                }
            }

            result.put_pixel(x, y, Luma([sum.clamp(0, 255) as u8]));
        }
    }

    *image = from_luma(&result);
    Ok(())
}
