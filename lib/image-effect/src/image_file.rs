use crate::{Effect, ImageEffect, ImageEffectError, ImageEffectResult};
use image::{ImageFormat, ImageReader, RgbImage};
use log::debug;
use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

/// A decoded RGB bitmap together with the file it came from, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    path: Option<PathBuf>,
    image: RgbImage,
}

impl ImageFile {
    pub fn new(image: RgbImage) -> Self {
        Self { path: None, image }
    }

    /// Decodes the file at `path`, guessing the format from its content.
    pub fn load(path: impl AsRef<Path>) -> ImageEffectResult<Self> {
        let path = path.as_ref();
        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?
            .to_rgb8();

        debug!(
            "loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        Ok(Self {
            path: Some(path.to_path_buf()),
            image,
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> ImageEffectResult<Self> {
        let image = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .decode()?
            .to_rgb8();

        Ok(Self::new(image))
    }

    /// Encodes according to the extension of `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> ImageEffectResult<()> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)
            .map_err(|_| ImageEffectError::UnsupportedFormat(path.display().to_string()))?;

        if !format.writing_enabled() {
            return Err(ImageEffectError::UnsupportedFormat(format!(
                "{} ({format:?} encoding is not available)",
                path.display()
            )));
        }

        self.image.save_with_format(path, format)?;
        debug!("saved {}", path.display());
        Ok(())
    }

    /// Returns a new, path-less image with `effect` applied.
    pub fn apply(&self, effect: &ImageEffect) -> ImageEffectResult<Self> {
        let mut image = self.image.clone();
        effect.apply(&mut image)?;
        Ok(Self::new(image))
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
