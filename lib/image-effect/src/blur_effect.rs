use crate::{Effect, ImageEffectError, ImageEffectResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::{GrayImage, RgbImage};

pub const DEFAULT_BLUR_RADIUS: u32 = 5;
pub const MIN_BLUR_RADIUS: u32 = 1;
pub const MAX_BLUR_RADIUS: u32 = 10;

/// Gaussian blur configuration.
///
/// `radius` is the standard deviation of the kernel, in pixels.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GaussianBlurConfig {
    #[derivative(Default(value = "DEFAULT_BLUR_RADIUS"))]
    pub radius: u32,
}

impl GaussianBlurConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts radii in `1..=10`, anything else is an error.
    pub fn try_with_radius(radius: u32) -> ImageEffectResult<Self> {
        if (MIN_BLUR_RADIUS..=MAX_BLUR_RADIUS).contains(&radius) {
            Ok(Self::new().with_radius(radius))
        } else {
            Err(ImageEffectError::InvalidParameter(format!(
                "blur radius {radius} is outside {MIN_BLUR_RADIUS}..={MAX_BLUR_RADIUS}"
            )))
        }
    }

    /// Parses user input, falling back to the default radius on empty,
    /// non-numeric or out-of-range values.
    pub fn from_input(input: &str) -> Self {
        input
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(|radius| Self::try_with_radius(radius).ok())
            .unwrap_or_default()
    }
}

impl Effect for GaussianBlurConfig {
    fn apply(&self, image: &mut RgbImage) -> ImageEffectResult<()> {
        if image.width() == 0 || image.height() == 0 {
            return Ok(());
        }

        // keeps flat regions exact
        let sigma = self.radius.max(MIN_BLUR_RADIUS) as f32;
        *image = image::imageops::blur(&*image, sigma);
        Ok(())
    }
}

/// Median filter over a `(2 * radius + 1)` square window.
pub fn median_blur(image: &GrayImage, radius: u32) -> GrayImage {
    if image.width() == 0 || image.height() == 0 {
        return image.clone();
    }

    imageproc::filter::median_filter(image, radius, radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::sample_image;
    use image::Luma;

    #[test]
    fn test_blur_config_defaults() {
        assert_eq!(GaussianBlurConfig::new().radius, 5);
        assert_eq!(GaussianBlurConfig::from_input("").radius, 5);
        assert_eq!(GaussianBlurConfig::from_input("0").radius, 5);
        assert_eq!(GaussianBlurConfig::from_input("abc").radius, 5);
        assert_eq!(GaussianBlurConfig::from_input("-3").radius, 5);
        assert_eq!(GaussianBlurConfig::from_input("11").radius, 5);
        assert_eq!(GaussianBlurConfig::from_input(" 7 ").radius, 7);
        assert_eq!(GaussianBlurConfig::from_input("1").radius, 1);
        assert_eq!(GaussianBlurConfig::from_input("10").radius, 10);
    }

    #[test]
    fn test_try_with_radius() {
        assert!(GaussianBlurConfig::try_with_radius(0).is_err());
        assert!(GaussianBlurConfig::try_with_radius(3).is_ok());
    }

    #[test]
    fn test_blur_keeps_flat_image() {
        for (size, radius) in [(12, 5), (64, 5), (200, 10)] {
            let mut image = RgbImage::from_pixel(size, size, image::Rgb([90, 120, 150]));
            GaussianBlurConfig::new().with_radius(radius).apply(&mut image).unwrap();

            assert!(
                image.pixels().all(|p| p.0 == [90, 120, 150]),
                "{size}x{size} radius {radius}"
            );
        }
    }

    #[test]
    fn test_blur_softens_edge() {
        let original = sample_image(32, 8);
        let mut image = original.clone();
        GaussianBlurConfig::new().with_radius(3).apply(&mut image).unwrap();

        let jump = |img: &RgbImage| {
            (img.get_pixel(16, 4)[0] as i32 - img.get_pixel(15, 4)[0] as i32).abs()
        };
        assert!(jump(&image) < jump(&original));
    }

    #[test]
    fn test_median_removes_salt() {
        let mut gray = GrayImage::from_pixel(9, 9, Luma([10]));
        gray.put_pixel(4, 4, Luma([255]));

        let filtered = median_blur(&gray, 1);
        assert_eq!(filtered.get_pixel(4, 4)[0], 10);
    }
}
