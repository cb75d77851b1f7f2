pub mod base_effect;
pub mod blur_effect;
pub mod filter_kind;
pub mod image_file;
pub mod monochrome_effect;
pub mod stylized_effect;

pub use filter_kind::FilterKind;
pub use image_file::ImageFile;

use image::RgbImage;

pub type ImageEffectResult<T> = Result<T, ImageEffectError>;

#[derive(thiserror::Error, Debug)]
pub enum ImageEffectError {
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// An in-place transformation of a 3-channel image.
pub trait Effect {
    fn apply(&self, image: &mut RgbImage) -> ImageEffectResult<()>;
}

#[derive(Debug, Clone)]
pub enum ImageEffect {
    Grayscale,
    Negative,
    Threshold(monochrome_effect::ThresholdConfig),
    GaussianBlur(blur_effect::GaussianBlurConfig),
    Cartoon(stylized_effect::CartoonConfig),
    Contour,
}

impl ImageEffect {
    /// Runs the effect on a copy of `image`, leaving the input untouched.
    pub fn process(&self, image: &RgbImage) -> ImageEffectResult<RgbImage> {
        let mut output = image.clone();
        self.apply(&mut output)?;
        Ok(output)
    }
}

impl Effect for ImageEffect {
    fn apply(&self, image: &mut RgbImage) -> ImageEffectResult<()> {
        match self {
            ImageEffect::Grayscale => base_effect::grayscale(image),
            ImageEffect::Negative => base_effect::invert(image),
            ImageEffect::Threshold(config) => config.apply(image),
            ImageEffect::GaussianBlur(config) => config.apply(image),
            ImageEffect::Cartoon(config) => config.apply(image),
            ImageEffect::Contour => stylized_effect::contour(image),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::sample_image;

    #[test]
    fn test_process_keeps_input() {
        let image = sample_image(16, 16);
        let output = ImageEffect::Negative.process(&image).unwrap();

        assert_ne!(output, image);
        assert_eq!(output.dimensions(), image.dimensions());
    }

    #[test]
    fn test_all_effects_handle_tiny_images() {
        let effects = [
            ImageEffect::Grayscale,
            ImageEffect::Negative,
            ImageEffect::Threshold(monochrome_effect::ThresholdConfig::new()),
            ImageEffect::GaussianBlur(blur_effect::GaussianBlurConfig::new()),
            ImageEffect::Cartoon(stylized_effect::CartoonConfig::new()),
            ImageEffect::Contour,
        ];

        for (width, height) in [(0, 0), (1, 1), (2, 2), (3, 1)] {
            let image = sample_image(width, height);
            for effect in &effects {
                let output = effect.process(&image).unwrap();
                assert_eq!(output.dimensions(), (width, height), "{effect:?}");
            }
        }
    }
}
