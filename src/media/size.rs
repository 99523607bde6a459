// SPDX-License-Identifier: MPL-2.0
//! Byte-size measurement and human-readable formatting.
//!
//! Measurement never fails: any fetch or filesystem problem degrades to
//! `None`, which formats as `"unknown"`. The paired measurement joins both
//! futures before the combined line is produced, so completion order cannot
//! affect the rendered result.

use crate::media::source::ImageSource;

const USER_AGENT: &str = concat!("IcedCompare/", env!("CARGO_PKG_VERSION"));

/// Measures the byte size of a source.
///
/// URL sources are fetched with a GET and the full body length is counted;
/// local files report their filesystem metadata length. Absent sources,
/// network errors, non-success statuses, and missing files all yield `None`.
pub async fn measure(source: Option<ImageSource>) -> Option<u64> {
    match source? {
        ImageSource::Path(path) => std::fs::metadata(&path).ok().map(|meta| meta.len()),
        ImageSource::Url(url) => fetch_len(&url).await,
    }
}

async fn fetch_len(url: &str) -> Option<u64> {
    if url.is_empty() {
        return None;
    }

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .ok()?;

    let response = client.get(url).send().await.ok()?;
    if !response.status().is_success() {
        return None;
    }

    let body = response.bytes().await.ok()?;
    Some(body.len() as u64)
}

/// Measures both sides concurrently, bounded by the slower of the two.
pub async fn measure_pair(
    left: Option<ImageSource>,
    right: Option<ImageSource>,
) -> (Option<u64>, Option<u64>) {
    futures_util::future::join(measure(left), measure(right)).await
}

/// Format a byte count in human-readable form, scaling through the binary
/// unit ladder with one decimal place. `None` renders as `"unknown"`.
pub fn human_file_size(bytes: Option<u64>) -> String {
    const THRESHOLD: f64 = 1024.0;
    const UNITS: [&str; 8] = ["KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

    let Some(bytes) = bytes else {
        return "unknown".to_string();
    };

    if bytes < THRESHOLD as u64 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    loop {
        value /= THRESHOLD;
        if value < THRESHOLD || unit == UNITS.len() - 1 {
            break;
        }
        unit += 1;
    }

    format!("{:.1} {}", value, UNITS[unit])
}

/// The combined status line for a measured pair. Exact shape is part of the
/// UI contract and is not localized.
pub fn format_size_pair(left: Option<u64>, right: Option<u64>) -> String {
    format!(
        "Left: {} | Right: {}",
        human_file_size(left),
        human_file_size(right)
    )
}
