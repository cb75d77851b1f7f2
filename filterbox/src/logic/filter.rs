use super::{App, IMAGE_EXTENSIONS};
use anyhow::{Context, Result};
use image_effect::{FilterKind, ImageFile};
use log::{debug, info, warn};
use std::{
    fs,
    io::{self, BufRead, Write},
};

/// Output file name from the user's answer: empty picks `suggested`,
/// directories are stripped and `.png` is appended when the name has no
/// image extension.
pub(super) fn output_file_name(answer: &str, suggested: &str) -> String {
    let name = cutil::fs::file_name(answer.trim());
    if name.is_empty() {
        return suggested.to_string();
    }

    if cutil::fs::has_extension(&name, IMAGE_EXTENSIONS) {
        name
    } else {
        format!("{name}.png")
    }
}

impl<R: BufRead, W: Write> App<R, W> {
    pub(super) fn apply_filter(&mut self) -> io::Result<()> {
        self.say("\n--- Choose an image to apply the filter to ---")?;

        if let Some(image) = &self.current {
            let label = image
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "unsaved".to_string());
            self.say(format!("  0. Current image ({label})"))?;
        }

        let candidates = self.numbered_catalog()?;
        if candidates.is_empty() && self.current.is_none() {
            return self.failure("No images found.");
        }

        let choice = self.ask("Enter the image number: ")?;
        let source = match choice.parse::<usize>() {
            Ok(0) if self.current.is_some() => self.current.clone(),
            Ok(n) if (1..=candidates.len()).contains(&n) => {
                match ImageFile::load(&candidates[n - 1]) {
                    Ok(image) => Some(image),
                    Err(e) => {
                        warn!("load {} failed: {e}", candidates[n - 1].display());
                        return self.failure(format!("Failed to load image: {e}"));
                    }
                }
            }
            _ => None,
        };

        let Some(source) = source else {
            return self.failure("Invalid choice.");
        };

        self.say("\n--- Available filters ---")?;
        for kind in FilterKind::all() {
            self.say(format!("{}. {}", u8::from(*kind), kind.name()))?;
        }

        let choice = self.ask("Choose the filter: ")?;
        let Some(kind) = FilterKind::from_choice(&choice) else {
            return self.failure("Invalid filter.");
        };

        let param = match kind.param_prompt() {
            Some(prompt) => Some(self.ask(&format!(
                "{} [default {}]: ",
                prompt.label, prompt.default
            ))?),
            None => None,
        };

        let effect = kind.effect(param.as_deref());
        debug!("applying {effect:?}");

        let filtered = match source.apply(&effect) {
            Ok(image) => image,
            Err(e) => {
                warn!("{} failed: {e}", kind.name());
                return self.failure(format!("Failed to apply filter: {e}"));
            }
        };

        let suggested = format!("{}_{}.png", kind.slug(), cutil::time::file_stamp());
        let answer = self.ask(&format!(
            "Enter the file name to save (or press Enter to use '{suggested}'): "
        ))?;
        let name = output_file_name(&answer, &suggested);

        match self.store_filtered(filtered, &name) {
            Ok(image) => {
                let path = image.path().map(|p| p.display().to_string());
                self.current = Some(image);
                self.success(format!("Image saved as: {}", path.unwrap_or_default()))
            }
            Err(e) => {
                warn!("{e:#}");
                self.failure(format!("Failed to save image: {e:#}"))
            }
        }
    }

    fn store_filtered(&self, image: ImageFile, name: &str) -> Result<ImageFile> {
        let dir = &self.config.filtered_dir;
        fs::create_dir_all(dir).with_context(|| format!("create {} failed", dir.display()))?;

        let path = dir.join(name);
        image
            .save(&path)
            .with_context(|| format!("save {} failed", path.display()))?;
        info!("saved filtered image to {}", path.display());

        Ok(image.with_path(path))
    }
}
