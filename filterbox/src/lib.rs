//! Filterbox
//!
//! A menu-driven terminal tool that loads an image from disk or a URL,
//! applies one of six fixed filters and writes the result to a file.
//!
//! # Architecture
//! - `config`: read-only TOML configuration (folders, HTTP timeout)
//! - `logic`: the interactive menu and the state it carries between actions
//! - Filters and the image container live in the `image-effect` crate,
//!   HTTP fetching in the `downloader` crate

#[macro_use]
extern crate derivative;

pub mod config;
pub mod logic;

use anyhow::{Context, Result};
use std::io;

/// Initializes the logger.
///
/// Sets up a custom logger format with timestamp, log level, file name, line number,
/// and log message. The level comes from `RUST_LOG`, records go to stderr so
/// they never interleave with the menu on stdout.
pub fn init_logger() {
    use std::io::Write;

    env_logger::builder()
        .filter_module("reqwest", log::LevelFilter::Warn)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = cutil::time::local_now("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

/// Entry point of the `filterbox` binary.
///
/// # Tasks
/// - Initializes logger
/// - Loads configuration
/// - Runs the menu on stdin/stdout until the user exits
pub fn cli_main() -> Result<()> {
    init_logger();
    log::debug!("start...");

    let config = config::load();
    let stdin = io::stdin();
    let mut app = logic::App::new(config, stdin.lock(), io::stdout());
    app.run().context("terminal I/O failed")?;

    log::debug!("exit...");
    Ok(())
}
