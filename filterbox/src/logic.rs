//! Interactive menu
//!
//! `App` owns the configuration, the currently loaded image and the
//! terminal streams. Every action reads its answers from the input, prints
//! one or more status lines and hands control back to the menu loop.
//! Failures of an action are reported and never end the loop; only I/O
//! errors on the terminal itself are returned.

use crate::config::Config;
use image_effect::ImageFile;
use log::debug;
use num_enum::TryFromPrimitive;
use std::{
    fmt::Display,
    io::{self, BufRead, Write},
};

mod catalog;
mod filter;
mod load;

pub use catalog::IMAGE_EXTENSIONS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
enum MenuOption {
    LoadImage = 1,
    ApplyFilter,
    ListImages,
    Exit,
}

pub struct App<R, W> {
    config: Config,
    current: Option<ImageFile>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Self {
        Self {
            config,
            current: None,
            input,
            output,
        }
    }

    pub fn current_image(&self) -> Option<&ImageFile> {
        self.current.as_ref()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until the user exits or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.say("\n--- MENU ---")?;
            self.say("1. Load an image (local path or URL)")?;
            self.say("2. Choose a filter to apply")?;
            self.say("3. List image files")?;
            self.say("4. Exit")?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                debug!("input closed");
                self.say("")?;
                self.say("Exiting the program.")?;
                return Ok(());
            };

            let option = choice
                .parse::<u8>()
                .ok()
                .and_then(|n| MenuOption::try_from(n).ok());

            match option {
                Some(MenuOption::LoadImage) => self.load_image()?,
                Some(MenuOption::ApplyFilter) => self.apply_filter()?,
                Some(MenuOption::ListImages) => self.list_images()?,
                Some(MenuOption::Exit) => {
                    self.say("Exiting the program.")?;
                    return Ok(());
                }
                None => self.failure("Invalid option.")?,
            }
        }
    }

    /// Prints `label` and reads one trimmed line, `None` once the input is closed.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Like `prompt`, a closed input reads as an empty answer.
    fn ask(&mut self, label: &str) -> io::Result<String> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn success(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "[✔] {text}")
    }

    fn failure(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "[✘] {text}")
    }

    fn notice(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "[!] {text}")
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::{io::Cursor, path::Path};

    pub type TestApp = App<Cursor<Vec<u8>>, Vec<u8>>;

    pub fn test_config(root: &Path) -> Config {
        Config {
            downloaded_dir: root.join("downloaded"),
            filtered_dir: root.join("filtered"),
            http_timeout_secs: 5,
            ..Config::default()
        }
    }

    pub fn test_app(config: Config, input: &str) -> TestApp {
        App::new(config, Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    pub fn output_text(app: TestApp) -> String {
        String::from_utf8(app.into_output()).unwrap()
    }

    pub fn sample_image() -> RgbImage {
        RgbImage::from_fn(24, 16, |x, y| {
            Rgb([(x * 10) as u8, (y * 15) as u8, ((x + y) * 5) as u8])
        })
    }

    pub fn write_sample(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        sample_image().save(path).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::test_util::*;
    use tempfile::tempdir;

    #[test]
    fn test_exit_option() {
        let dir = tempdir().unwrap();
        let mut app = test_app(test_config(dir.path()), "4\n1\n");
        app.run().unwrap();

        let output = output_text(app);
        assert!(output.contains("--- MENU ---"));
        assert!(output.ends_with("Exiting the program.\n"));
        assert!(!output.contains("Enter the image path"));
    }

    #[test]
    fn test_invalid_option_keeps_looping() {
        let dir = tempdir().unwrap();
        let mut app = test_app(test_config(dir.path()), "9\nabc\n\n4\n");
        app.run().unwrap();

        let output = output_text(app);
        assert_eq!(output.matches("[✘] Invalid option.").count(), 3);
        assert_eq!(output.matches("--- MENU ---").count(), 4);
    }

    #[test]
    fn test_closed_input_exits() {
        let dir = tempdir().unwrap();
        let mut app = test_app(test_config(dir.path()), "");
        app.run().unwrap();

        assert!(app.current_image().is_none());
        assert!(output_text(app).contains("Exiting the program."));
    }
}
