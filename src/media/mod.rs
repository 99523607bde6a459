// SPDX-License-Identifier: MPL-2.0
//! Media handling: image decoding, source descriptions, size measurement,
//! and byte downloads for the compared renditions.

pub mod download;
pub mod image;
pub mod size;
pub mod source;

// Re-export commonly used types
pub use download::{DownloadError, DownloadResult};
pub use image::{load_image, ImageData};
pub use size::{format_size_pair, human_file_size};
pub use source::{FormatVariant, ImageSource};

/// Supported media extensions
pub mod extensions {
    /// Image file extensions eligible for comparison and variant discovery.
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg"];

    /// Image format filters for the open dialog.
    pub const IMAGE_OPEN_FILTER: (&str, &[&str]) =
        ("Image Files", &["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg"]);
}

/// Returns whether the given extension (lower-cased) is a supported image format.
pub fn is_supported_extension(ext: &str) -> bool {
    extensions::IMAGE_EXTENSIONS.contains(&ext)
}

/// Loads and decodes the image behind a source, fetching URL sources first.
///
/// # Errors
///
/// Returns [`crate::error::Error::Fetch`] when a URL cannot be retrieved and
/// the decode errors of [`image::decode_bytes`] otherwise.
pub async fn load_source(source: &ImageSource) -> crate::error::Result<ImageData> {
    match source {
        ImageSource::Path(path) => image::load_image(path),
        ImageSource::Url(_) => {
            let bytes = download::fetch_bytes(source)
                .await
                .map_err(|e| crate::error::Error::Fetch(e.to_string()))?;
            image::decode_bytes(&bytes, source.is_svg())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_extensions_cover_common_formats() {
        assert!(is_supported_extension("png"));
        assert!(is_supported_extension("webp"));
        assert!(is_supported_extension("svg"));
        assert!(!is_supported_extension("txt"));
        assert!(!is_supported_extension("PNG")); // caller lower-cases first
    }
}
