use crate::{DownloadError, Result};
use log::debug;
use reqwest::blocking::Client;
use std::{io::Read, time::Duration};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const CHUNK_SIZE: usize = 16 * 1024;
const MAX_PREALLOC: u64 = 64 * 1024 * 1024;

/// Blocking single-request downloader that keeps the body in memory.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Downloader {
    url: String,
    timeout: Duration,
}

impl Downloader {
    pub fn new(url: impl Into<String>) -> Downloader {
        Downloader {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Performs the GET and returns the response body.
    ///
    /// `progress_cb` receives `(downloaded, total, progress)` after every
    /// chunk. `total` and `progress` are 0 when the server sends no
    /// content length.
    pub fn fetch(&self, mut progress_cb: impl FnMut(u64, u64, f32)) -> Result<Vec<u8>> {
        let request_error = |error| DownloadError::RequestError {
            error,
            url: self.url.clone(),
        };

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(request_error)?;

        let mut response = client.get(&self.url).send().map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::HttpStatus {
                status,
                url: self.url.clone(),
            });
        }

        let total_size = response.content_length().unwrap_or(0);
        debug!("GET {} -> {status}, {total_size} bytes", self.url);

        let mut body = Vec::with_capacity(total_size.min(MAX_PREALLOC) as usize);
        let mut chunk = vec![0u8; CHUNK_SIZE];
        let mut downloaded: u64 = 0;

        loop {
            let n = response
                .read(&mut chunk)
                .map_err(|e| DownloadError::IncompleteDownload {
                    error: e.to_string(),
                    downloaded,
                    total: total_size,
                })?;

            if n == 0 {
                break;
            }

            body.extend_from_slice(&chunk[..n]);
            downloaded += n as u64;

            let progress = if total_size > 0 {
                downloaded as f32 / total_size as f32
            } else {
                0.0
            };
            progress_cb(downloaded, total_size, progress);
        }

        if total_size > 0 && downloaded != total_size {
            return Err(DownloadError::IncompleteDownload {
                error: "connection closed early".to_string(),
                downloaded,
                total: total_size,
            });
        }

        Ok(body)
    }
}
