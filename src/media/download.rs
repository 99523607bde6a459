// SPDX-License-Identifier: MPL-2.0
//! Save-a-copy support: fetching a source's bytes and writing them to a
//! user-chosen destination.
//!
//! Unlike size measurement, failures here are surfaced to the user, with
//! distinct messages for "nothing to save" and "the fetch itself failed".

use crate::media::source::ImageSource;
use std::fmt;
use std::path::Path;

const USER_AGENT: &str = concat!("IcedCompare/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub enum DownloadError {
    /// The side has no current image source.
    NoSource,
    /// Fetching the bytes failed (network error, non-success status,
    /// unreadable file).
    Fetch(String),
    /// Writing to the chosen destination failed.
    Io(String),
}

impl DownloadError {
    /// Returns the i18n message key for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DownloadError::NoSource => "notify-save-no-image",
            DownloadError::Fetch(_) => "notify-save-fetch-failed",
            DownloadError::Io(_) => "notify-save-io-failed",
        }
    }
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::NoSource => write!(f, "No image to save"),
            DownloadError::Fetch(msg) => write!(f, "Fetch failed: {}", msg),
            DownloadError::Io(msg) => write!(f, "Write failed: {}", msg),
        }
    }
}

pub type DownloadResult<T> = std::result::Result<T, DownloadError>;

/// Fetches the full byte content of a source.
///
/// # Errors
///
/// Returns [`DownloadError::Fetch`] on any network or read failure.
pub async fn fetch_bytes(source: &ImageSource) -> DownloadResult<Vec<u8>> {
    match source {
        ImageSource::Path(path) => {
            std::fs::read(path).map_err(|e| DownloadError::Fetch(e.to_string()))
        }
        ImageSource::Url(url) => {
            let client = reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::limited(10))
                .user_agent(USER_AGENT)
                .build()
                .map_err(|e| DownloadError::Fetch(e.to_string()))?;

            let response = client
                .get(url)
                .send()
                .await
                .map_err(|e| DownloadError::Fetch(e.to_string()))?;

            if !response.status().is_success() {
                return Err(DownloadError::Fetch(format!(
                    "HTTP status: {}",
                    response.status()
                )));
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| DownloadError::Fetch(e.to_string()))?;
            Ok(body.to_vec())
        }
    }
}

/// Fetches a source and writes the bytes to `destination`.
///
/// Returns the number of bytes written. The buffer is dropped as soon as the
/// write completes; nothing outlives the operation.
///
/// # Errors
///
/// Returns [`DownloadError::Fetch`] if the bytes cannot be obtained and
/// [`DownloadError::Io`] if the destination cannot be written.
pub async fn save_copy(source: &ImageSource, destination: &Path) -> DownloadResult<u64> {
    let bytes = fetch_bytes(source).await?;
    let len = bytes.len() as u64;

    std::fs::write(destination, bytes).map_err(|e| DownloadError::Io(e.to_string()))?;
    Ok(len)
}
