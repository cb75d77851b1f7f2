use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

/// Looked up in the working directory unless `CONFIG_ENV` points elsewhere.
pub const CONFIG_FILE: &str = "filterbox.toml";
pub const CONFIG_ENV: &str = "FILTERBOX_CONFIG";

#[derive(Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[derivative(Default(value = "PathBuf::from(\"images/downloaded\")"))]
    pub downloaded_dir: PathBuf,

    #[derivative(Default(value = "PathBuf::from(\"images/filtered\")"))]
    pub filtered_dir: PathBuf,

    // seconds
    #[derivative(Default(value = "30"))]
    pub http_timeout_secs: u64,

    #[derivative(Default(value = "\"downloaded_image\".to_string()"))]
    pub default_download_name: String,
}

impl Config {
    /// Parses the TOML file at `path`. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config file {} failed", path.display()))?;

        let mut config = toml::from_str::<Config>(&text)
            .with_context(|| format!("parse config file {} failed", path.display()))?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs.max(1))
    }
}

/// Loads `path` if it exists, otherwise returns the defaults.
///
/// A file that cannot be parsed is reported and ignored.
pub fn load_from(path: impl AsRef<Path>) -> Config {
    let path = path.as_ref();
    if !cutil::fs::file_exist(path) {
        debug!("no config file at {}, using defaults", path.display());
        return Config::default();
    }

    match Config::from_file(path) {
        Ok(config) => {
            debug!("{:?}", config);
            config
        }
        Err(e) => {
            warn!("{e:#}, using defaults");
            Config::default()
        }
    }
}

/// Loads the configuration from `$FILTERBOX_CONFIG` or `./filterbox.toml`.
pub fn load() -> Config {
    let path = env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    load_from(path)
}
