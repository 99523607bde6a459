// SPDX-License-Identifier: MPL-2.0
use iced_compare::config::{self, Config, ControlMode};
use iced_compare::i18n::fluent::I18n;
use iced_compare::media::source::{discover_variants, ImageSource};
use iced_compare::media::{download, size};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_control_mode_round_trips_through_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        control_mode: Some(ControlMode::Slider),
        divider_percent: Some(33.0),
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to save config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.control_mode, Some(ControlMode::Slider));
    assert_eq!(loaded.divider_percent, Some(33.0));
}

#[tokio::test]
async fn test_variant_discovery_and_paired_measurement() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("photo.png"), vec![0u8; 2048]).expect("write png fixture");
    fs::write(dir.path().join("photo.webp"), vec![0u8; 512]).expect("write webp fixture");
    fs::write(dir.path().join("notes.txt"), b"ignored").expect("write txt fixture");

    let left = ImageSource::Path(dir.path().join("photo.png"));
    let variants = discover_variants(&left);
    let labels: Vec<&str> = variants.iter().map(|v| v.label.as_str()).collect();
    assert_eq!(labels, vec!["PNG", "WEBP"]);

    let right = variants
        .iter()
        .map(|v| v.source.clone())
        .find(|s| *s != left)
        .expect("sibling variant should exist");

    // Both sides measured jointly; the combined line has the exact contract
    // shape regardless of which side resolved first.
    let (l, r) = size::measure_pair(Some(left), Some(right)).await;
    assert_eq!(
        size::format_size_pair(l, r),
        "Left: 2.0 KB | Right: 512 B"
    );
}

#[tokio::test]
async fn test_save_copy_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let original = dir.path().join("graphic.svg");
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"></svg>"#;
    fs::write(&original, svg).expect("write svg fixture");

    let source = ImageSource::Path(original.clone());
    assert_eq!(source.suggested_file_name(), "graphic.svg");

    let destination = dir.path().join("copy.svg");
    let written = download::save_copy(&source, &destination)
        .await
        .expect("saving a local copy should succeed");

    assert_eq!(written, svg.len() as u64);
    assert_eq!(
        fs::read(&destination).expect("read copy"),
        fs::read(&original).expect("read original")
    );
}
