use super::App;
use anyhow::{Context, Result};
use downloader::Downloader;
use image_effect::ImageFile;
use log::{debug, info, warn};
use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

/// Sources with an HTTP(S) scheme are downloaded, anything else is a path.
pub(super) fn is_url(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

impl<R: BufRead, W: Write> App<R, W> {
    pub(super) fn load_image(&mut self) -> io::Result<()> {
        let source = self.ask("Enter the image path or URL: ")?;

        if is_url(&source) {
            return self.load_from_url(&source);
        }

        if source.is_empty() || !cutil::fs::file_exist(&source) {
            return self.failure("Invalid path.");
        }

        match ImageFile::load(&source) {
            Ok(image) => {
                info!("loaded {source}");
                self.current = Some(image);
                self.success(format!("Image loaded: {source}"))
            }
            Err(e) => {
                warn!("load {source} failed: {e}");
                self.failure(format!("Failed to load image: {e}"))
            }
        }
    }

    /// Downloads, asks for a base name, stores the image as JPEG in the
    /// downloads folder and makes the stored file the current image.
    fn load_from_url(&mut self, url: &str) -> io::Result<()> {
        let image = match self.download(url) {
            Ok(image) => image,
            Err(e) => {
                warn!("{e:#}");
                return self.failure(format!("Failed to download image: {e:#}"));
            }
        };

        let name = self.ask("Enter a name for the downloaded image (without extension): ")?;
        let name = match cutil::fs::file_name(&name) {
            n if n.is_empty() => self.config.default_download_name.clone(),
            n => n,
        };

        match self.store_download(&image, &name) {
            Ok(stored) => {
                let path = stored.path().map(PathBuf::from).unwrap_or_default();
                self.current = Some(stored);
                self.success(format!(
                    "Image downloaded and saved as '{}'",
                    path.display()
                ))
            }
            Err(e) => {
                warn!("{e:#}");
                self.failure(format!("Failed to save downloaded image: {e:#}"))
            }
        }
    }

    fn download(&self, url: &str) -> Result<ImageFile> {
        let bytes = Downloader::new(url)
            .with_timeout(self.config.http_timeout())
            .fetch(|downloaded, total, progress| {
                debug!("downloaded {downloaded}/{total} bytes ({:.0}%)", progress * 100.0);
            })?;

        ImageFile::from_bytes(&bytes).context("the response is not a supported image")
    }

    fn store_download(&self, image: &ImageFile, name: &str) -> Result<ImageFile> {
        let dir = &self.config.downloaded_dir;
        fs::create_dir_all(dir).with_context(|| format!("create {} failed", dir.display()))?;

        let path = dir.join(format!("{name}.jpg"));
        image
            .save(&path)
            .with_context(|| format!("save {} failed", path.display()))?;
        info!("saved download to {}", path.display());

        ImageFile::load(&path).with_context(|| format!("reload {} failed", path.display()))
    }
}
