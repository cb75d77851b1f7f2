use super::App;
use log::warn;
use std::{
    io::{self, BufRead, ErrorKind, Write},
    path::{Path, PathBuf},
};

/// Extensions recognized when listing image folders.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

impl<R: BufRead, W: Write> App<R, W> {
    pub(super) fn list_images(&mut self) -> io::Result<()> {
        let dirs = [
            self.config.filtered_dir.clone(),
            self.config.downloaded_dir.clone(),
        ];

        self.say(format!(
            "\n--- Image files in '{}' and '{}' ---",
            dirs[0].display(),
            dirs[1].display()
        ))?;

        let mut found = false;
        for dir in &dirs {
            let names = self.scan_dir(dir)?;
            if names.is_empty() {
                continue;
            }

            found = true;
            self.say(format!("\n📁 Folder: {}", dir.display()))?;
            for name in names {
                self.say(format!("   🖼  {name}"))?;
            }
        }

        if !found {
            self.notice("No images found.")?;
        }

        Ok(())
    }

    /// Prints a numbered listing of the downloaded then filtered folders and
    /// returns the listed paths in the same order, numbering starts at 1.
    pub(super) fn numbered_catalog(&mut self) -> io::Result<Vec<PathBuf>> {
        let dirs = [
            self.config.downloaded_dir.clone(),
            self.config.filtered_dir.clone(),
        ];

        let mut paths = vec![];
        for dir in &dirs {
            let names = self.scan_dir(dir)?;
            if names.is_empty() {
                continue;
            }

            self.say(format!("\n📁 Folder: {}", dir.display()))?;
            for name in names {
                paths.push(dir.join(&name));
                self.say(format!("  {}. 🖼 {name}", paths.len()))?;
            }
        }

        Ok(paths)
    }

    /// Image file names in `dir`, an absent or unreadable folder is reported
    /// and reads as empty.
    fn scan_dir(&mut self, dir: &Path) -> io::Result<Vec<String>> {
        match cutil::fs::list_files_with_extensions(dir, IMAGE_EXTENSIONS) {
            Ok(names) => Ok(names),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.notice(format!("Folder not found: {}", dir.display()))?;
                Ok(vec![])
            }
            Err(e) => {
                warn!("read {} failed: {e}", dir.display());
                self.failure(format!("Cannot read folder {}: {e}", dir.display()))?;
                Ok(vec![])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::logic::test_util::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_list_missing_folders() {
        let dir = tempdir().unwrap();
        let mut app = test_app(test_config(dir.path()), "3\n4\n");
        app.run().unwrap();

        let output = output_text(app);
        assert_eq!(output.matches("[!] Folder not found:").count(), 2);
        assert!(output.contains("[!] No images found."));
        assert!(output.contains("Exiting the program."));
    }

    #[test]
    fn test_list_existing_images() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());
        write_sample(&config.filtered_dir.join("b.png"));
        write_sample(&config.filtered_dir.join("a.JPG"));
        fs::create_dir_all(&config.downloaded_dir).unwrap();
        fs::write(config.downloaded_dir.join("readme.txt"), "x").unwrap();

        let mut app = test_app(config, "3\n4\n");
        app.run().unwrap();

        let output = output_text(app);
        assert!(output.contains("🖼  a.JPG"));
        assert!(output.contains("🖼  b.png"));
        assert!(!output.contains("readme.txt"));
        assert!(!output.contains("Folder not found"));
        assert!(!output.contains("No images found"));
        assert!(output.find("a.JPG").unwrap() < output.find("b.png").unwrap());
    }

    #[test]
    fn test_numbered_catalog_order() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());
        write_sample(&config.downloaded_dir.join("z.png"));
        write_sample(&config.filtered_dir.join("a.png"));

        let mut app = test_app(config.clone(), "");
        let paths = app.numbered_catalog().unwrap();

        assert_eq!(
            paths,
            vec![config.downloaded_dir.join("z.png"), config.filtered_dir.join("a.png")]
        );

        let output = output_text(app);
        assert!(output.contains("  1. 🖼 z.png"));
        assert!(output.contains("  2. 🖼 a.png"));
    }
}
