// SPDX-License-Identifier: MPL-2.0
//! Image source descriptions and format-variant discovery.
//!
//! A source is either a local file or an `http(s)` URL. Variant discovery
//! scans a local source's directory for files sharing its stem with a
//! different supported image extension, which is what the per-side format
//! pickers offer.

use crate::media;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where one side's image bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Path(PathBuf),
    Url(String),
}

impl ImageSource {
    /// Interprets a CLI or picker input: `http(s)://` becomes a URL source,
    /// anything else a local path.
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            ImageSource::Url(input.to_string())
        } else {
            ImageSource::Path(PathBuf::from(input))
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, ImageSource::Url(_))
    }

    /// Whether the source points at vector data that needs rasterizing.
    pub fn is_svg(&self) -> bool {
        trailing_segment(&self.as_str())
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("svg"))
    }

    /// The source as a displayable string (path or URL).
    pub fn as_str(&self) -> String {
        match self {
            ImageSource::Path(path) => path.display().to_string(),
            ImageSource::Url(url) => url.clone(),
        }
    }

    /// Short format label: the substring after the final `.` of the file
    /// name, upper-cased. A name without an extension degrades to the whole
    /// upper-cased trailing segment rather than failing.
    pub fn extension_label(&self) -> String {
        let segment = trailing_segment(&self.as_str());
        let label = match segment.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => ext,
            _ => segment.as_str(),
        };
        label.to_uppercase()
    }

    /// Suggested filename for saving a copy: the trailing path segment with
    /// any query string stripped. Falls back to `"image"` for pathological
    /// sources (e.g. a URL ending in `/`).
    pub fn suggested_file_name(&self) -> String {
        let segment = trailing_segment(&self.as_str());
        if segment.is_empty() {
            "image".to_string()
        } else {
            segment
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Last `/`-separated segment with query string and fragment stripped.
fn trailing_segment(source: &str) -> String {
    let without_query = source
        .split_once('?')
        .map_or(source, |(before, _)| before);
    let without_fragment = without_query
        .split_once('#')
        .map_or(without_query, |(before, _)| before);

    without_fragment
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(without_fragment)
        .to_string()
}

/// One selectable entry of a side's format picker.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatVariant {
    pub source: ImageSource,
    pub label: String,
}

impl FormatVariant {
    pub fn new(source: ImageSource) -> Self {
        let label = source.extension_label();
        Self { source, label }
    }
}

impl fmt::Display for FormatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Discovers the format variants of a source: files in the same directory
/// sharing its stem, with a supported image extension, sorted by extension.
///
/// The source itself is always part of the result. URL sources and scan
/// failures yield a single-variant list, so the picker still renders.
pub fn discover_variants(source: &ImageSource) -> Vec<FormatVariant> {
    let ImageSource::Path(path) = source else {
        return vec![FormatVariant::new(source.clone())];
    };

    let mut variants = scan_sibling_variants(path).unwrap_or_default();

    if !variants
        .iter()
        .any(|v| v.source == ImageSource::Path(path.clone()))
    {
        variants.push(FormatVariant::new(source.clone()));
    }

    variants.sort_by(|a, b| a.label.cmp(&b.label));
    variants
}

fn scan_sibling_variants(path: &Path) -> Option<Vec<FormatVariant>> {
    let parent = path.parent()?;
    let stem = path.file_stem()?;

    let mut variants = Vec::new();
    for entry in std::fs::read_dir(parent).ok()? {
        let Ok(entry) = entry else { continue };
        let candidate = entry.path();

        if !candidate.is_file() || candidate.file_stem() != Some(stem) {
            continue;
        }

        let supported = candidate
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| media::is_supported_extension(&ext.to_lowercase()));
        if supported {
            variants.push(FormatVariant::new(ImageSource::Path(candidate)));
        }
    }

    Some(variants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parse_detects_urls() {
        assert!(ImageSource::parse("https://example.org/a.png").is_url());
        assert!(ImageSource::parse("http://example.org/a.png").is_url());
        assert!(!ImageSource::parse("photos/a.png").is_url());
    }

    #[test]
    fn extension_label_uppercases_extension() {
        let source = ImageSource::parse("photos/photo.webp");
        assert_eq!(source.extension_label(), "WEBP");
    }

    #[test]
    fn extension_label_ignores_query_string() {
        let source = ImageSource::parse("https://example.org/img/photo.jpg?v=2");
        assert_eq!(source.extension_label(), "JPG");
    }

    #[test]
    fn extension_label_degrades_without_extension() {
        let source = ImageSource::parse("photos/snapshot");
        assert_eq!(source.extension_label(), "SNAPSHOT");
    }

    #[test]
    fn suggested_file_name_strips_directories_and_query() {
        let source = ImageSource::parse("https://example.org/a/b/photo.webp?v=2");
        assert_eq!(source.suggested_file_name(), "photo.webp");

        let local = ImageSource::parse("/srv/images/graphic.svg");
        assert_eq!(local.suggested_file_name(), "graphic.svg");
    }

    #[test]
    fn suggested_file_name_falls_back_for_bare_urls() {
        let source = ImageSource::parse("https://example.org/images/");
        assert_eq!(source.suggested_file_name(), "image");
    }

    #[test]
    fn is_svg_matches_extension_case_insensitively() {
        assert!(ImageSource::parse("a/graphic.SVG").is_svg());
        assert!(!ImageSource::parse("a/photo.png").is_svg());
    }

    #[test]
    fn discover_variants_finds_same_stem_siblings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path();
        for name in ["photo.png", "photo.webp", "photo.txt", "other.png"] {
            fs::write(dir.join(name), b"x").expect("write fixture");
        }

        let source = ImageSource::Path(dir.join("photo.png"));
        let variants = discover_variants(&source);

        let labels: Vec<&str> = variants.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, vec!["PNG", "WEBP"]);
    }

    #[test]
    fn discover_variants_always_includes_the_source_itself() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let source = ImageSource::Path(temp_dir.path().join("missing.png"));

        let variants = discover_variants(&source);
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].source, source);
    }

    #[test]
    fn discover_variants_for_url_is_single_entry() {
        let source = ImageSource::parse("https://example.org/photo.avif");
        let variants = discover_variants(&source);
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].label, "AVIF");
    }
}
