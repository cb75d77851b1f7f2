pub mod downloader;

pub use downloader::{DEFAULT_TIMEOUT, Downloader};

pub type Result<T> = std::result::Result<T, DownloadError>;

#[derive(thiserror::Error, Debug)]
pub enum DownloadError {
    #[error("HTTP request {url} failed. Error: {error}")]
    RequestError { error: reqwest::Error, url: String },

    #[error("HTTP request {url} returned status {status}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Download incomplete: {downloaded}/{total} bytes. Error: {error}")]
    IncompleteDownload {
        error: String,
        downloaded: u64,
        total: u64,
    },
}
